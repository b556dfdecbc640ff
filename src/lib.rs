//! Bit-packed synchronization packet codec and dispatch layer for
//! RakNet-style game servers.
//!
//! The wire format is a fixed bilateral contract with the remote client
//! implementation: a one-byte packet code followed by that packet's
//! fields in declared order, each a fixed-width value from a closed
//! type set, packed at bit granularity with no padding.
//!
//! Layering, leaf first:
//!
//! - [`protocol::bits::BitBuffer`] – cursor-addressed bit-level buffer.
//! - [`protocol::value`] – the closed wire value-type set and the
//!   [`SyncEncodable`](protocol::value::SyncEncodable) codec pairs.
//! - [`protocol::packet`] – one body type per packet kind, all
//!   implementing [`SyncPacket`](protocol::packet::SyncPacket).
//! - [`protocol::packet::PacketRegistry`] – code → schema table, built
//!   once at startup, read-only afterwards.
//! - [`dispatch::Dispatcher`] – inbound routing and outbound
//!   serialization above the transport.
//!
//! Transport concerns (reliability, ordering, connection management)
//! live below this crate and are not reimplemented here.

pub mod dispatch;
pub mod protocol;

pub use dispatch::{DispatchOutcome, Dispatcher, PeerHandle, SyncConsumer};
pub use protocol::bits::BitBuffer;
pub use protocol::constants::Keys;
pub use protocol::packet::{
    DecodeError, EncodeError, PacketRegistry, PacketSchema, RegistryError, SyncMessage, SyncPacket,
};
pub use protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};
