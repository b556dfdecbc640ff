//! Runtime entry point routing raw buffers to schemas and decoded
//! messages to game-state consumers.
//!
//! All per-message failures are absorbed here: a malformed or unknown
//! inbound buffer is dropped and logged, never surfaced as a
//! process-level failure. The whole path is synchronous and runs to
//! completion within the server's tick loop.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::SYNC_PACKET_ID_BITS;
use crate::protocol::packet::{DecodeError, EncodeError, PacketRegistry, SyncMessage};

/// Opaque handle naming the remote peer a buffer came from or goes to.
/// Addressing, reliability, and ordering belong to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerHandle(pub u16);

/// External game-state boundary: receives every successfully decoded
/// message, keyed by source peer. Ownership of the message passes to
/// the consumer.
pub trait SyncConsumer {
    fn on_sync(&mut self, peer: PeerHandle, message: SyncMessage);
}

/// What became of one inbound buffer. Dropped outcomes are expected
/// under packet loss and peer version skew; none of them are errors to
/// the server loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Decoded and forwarded to the consumer.
    Delivered { code: u8 },
    /// No schema registered for the leading code; buffer dropped.
    UnknownCode { code: u8 },
    /// The schema's decode ran out of buffer; buffer dropped.
    Malformed { code: u8 },
    /// The buffer did not even contain a leading code byte.
    Empty,
}

/// Routes inbound buffers through the registry and serializes outbound
/// messages. Holds the registry built at startup; stateless otherwise.
pub struct Dispatcher {
    registry: PacketRegistry,
}

impl Dispatcher {
    pub fn new(registry: PacketRegistry) -> Self {
        Dispatcher { registry }
    }

    pub fn registry(&self) -> &PacketRegistry {
        &self.registry
    }

    /// Decodes a raw inbound buffer into a typed message without
    /// forwarding it anywhere.
    pub fn decode_raw(&self, raw: &[u8]) -> Result<SyncMessage, DecodeError> {
        let mut src = BitBuffer::from_bytes(raw);
        let code = src.read_uint(SYNC_PACKET_ID_BITS)? as u8;
        let schema = self
            .registry
            .lookup(code)
            .ok_or(DecodeError::UnknownCode(code))?;
        schema.decode(&mut src)
    }

    /// Inbound flow: read the leading code, resolve the schema, decode
    /// the remainder, forward the typed message. Failures drop the
    /// buffer; the sender's next tick carries fresh state anyway.
    pub fn dispatch_inbound(
        &self,
        peer: PeerHandle,
        raw: &[u8],
        consumer: &mut impl SyncConsumer,
    ) -> DispatchOutcome {
        if raw.is_empty() {
            debug!(peer = peer.0, "dropped empty inbound buffer");
            return DispatchOutcome::Empty;
        }
        let code = raw[0];
        match self.decode_raw(raw) {
            Ok(message) => {
                consumer.on_sync(peer, message);
                DispatchOutcome::Delivered { code }
            }
            Err(DecodeError::UnknownCode(code)) => {
                debug!(peer = peer.0, code, "dropped inbound packet with unregistered code");
                DispatchOutcome::UnknownCode { code }
            }
            Err(DecodeError::UnexpectedEof) => {
                debug!(peer = peer.0, code, "dropped malformed inbound packet");
                DispatchOutcome::Malformed { code }
            }
        }
    }

    /// Outbound flow: resolve the schema for the message's code and
    /// serialize code byte plus body into a fresh, exactly-sized
    /// buffer. A message the registry cannot vouch for is refused
    /// rather than emitted as on-wire garbage.
    pub fn encode_outbound(&self, message: &SyncMessage) -> Result<Bytes, EncodeError> {
        let code = message.code();
        let Some(schema) = self.registry.lookup(code) else {
            warn!(code, name = message.name(), "refused outbound message with unregistered code");
            return Err(EncodeError::UnregisteredCode(code));
        };

        let mut dst = BitBuffer::with_capacity(1 + schema.payload_bytes());
        dst.write_uint(code as u32, SYNC_PACKET_ID_BITS);
        // The schema was looked up by the message's own code, so this
        // branch cannot be reached from here; it gates callers that
        // hold a `PacketSchema` directly.
        if let Err(err) = schema.encode(message, &mut dst) {
            warn!(code, name = schema.name(), %err, "refused outbound message that does not match its schema");
            return Err(err);
        }
        Ok(dst.into_bytes())
    }
}
