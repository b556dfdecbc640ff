pub mod aim;
pub mod bullet;
pub mod driver;
pub mod onfoot;
pub mod passenger;
pub mod spectating;
pub mod trailer;
pub mod unoccupied;
mod error;
mod registry;

pub use aim::AimSync;
pub use bullet::BulletSync;
pub use driver::DriverSync;
pub use error::{DecodeError, EncodeError, RegistryError};
pub use onfoot::OnFootSync;
pub use passenger::PassengerSync;
pub use registry::{PacketRegistry, PacketSchema};
pub use spectating::SpectatingSync;
pub use trailer::TrailerSync;
pub use unoccupied::UnoccupiedSync;

use crate::protocol::bits::BitBuffer;
use crate::protocol::value::FieldSpec;

/// Trait implemented by all concrete sync packet body types.
///
/// Implementations are responsible for encoding/decoding only the
/// packet body – the leading code byte is handled by the dispatcher.
pub trait SyncPacket: Sized {
    /// The fixed code used to identify this packet on the wire.
    const CODE: u8;

    /// Short human-readable name, used in logs and schema listings.
    const NAME: &'static str;

    /// Declared field sequence. Order here is the wire contract: encode
    /// and decode walk this sequence exactly, and it must never change
    /// once the code is deployed.
    const FIELDS: &'static [FieldSpec];

    /// Encode the body of this packet into the destination buffer.
    fn encode_body(&self, dst: &mut BitBuffer);

    /// Decode the body of this packet from the source buffer.
    ///
    /// Any field read failing aborts the whole decode; a partial
    /// message is never surfaced.
    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError>;
}

/// INTERNAL
/// Generates the SyncMessage enum covering every packet kind, plus the
/// accessors and conversions the registry and dispatcher rely on.
macro_rules! define_sync_packets {
    (
        $(
            $variant:ident => $ty:ty,
        )+
    ) => {
        /// A decoded sync message, one variant per packet kind.
        ///
        /// Produced by decode, handed to the game-state consumer and
        /// not retained by the codec layer.
        #[derive(Debug, Clone, PartialEq)]
        pub enum SyncMessage {
            $(
                $variant($ty),
            )+
        }

        impl SyncMessage {
            /// The wire code of the packet kind this message belongs to.
            pub fn code(&self) -> u8 {
                match self {
                    $(
                        SyncMessage::$variant(_) => <$ty as SyncPacket>::CODE,
                    )+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        SyncMessage::$variant(_) => <$ty as SyncPacket>::NAME,
                    )+
                }
            }

            pub(crate) fn encode_body(&self, dst: &mut BitBuffer) {
                match self {
                    $(
                        SyncMessage::$variant(inner) => inner.encode_body(dst),
                    )+
                }
            }
        }

        $(
            impl From<$ty> for SyncMessage {
                fn from(value: $ty) -> Self {
                    SyncMessage::$variant(value)
                }
            }
        )+
    }
}

define_sync_packets! {
    OnFoot => OnFootSync,
    Driver => DriverSync,
    Passenger => PassengerSync,
    Aim => AimSync,
    Bullet => BulletSync,
    Spectating => SpectatingSync,
    Unoccupied => UnoccupiedSync,
    Trailer => TrailerSync,
}
