use thiserror::Error;

/// Errors that may occur while decoding sync values or packet bodies.
///
/// This type is kept small so it can be shared by every `SyncEncodable`
/// implementation and packet body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer did not contain enough bits to decode the requested value.
    ///
    /// Expected under normal packet loss/corruption; the dispatcher drops
    /// the buffer and the remote peer resends fresh state on its next tick.
    #[error("Unexpected EoF, not enough bits to read requested value.")]
    UnexpectedEof,

    /// The leading packet code matched no registered schema.
    ///
    /// Non-fatal: the remote peer may speak a superset of the packet kinds
    /// known to this registry.
    #[error("Unknown packet code: {0}")]
    UnknownCode(u8),
}

/// Errors raised when serializing an outbound message.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The message belongs to a different schema than the one asked to
    /// encode it. Emitting anyway would put garbage on the wire, so the
    /// message is refused instead.
    #[error("Message carries code {got}, schema expects {expected}.")]
    SchemaMismatch { expected: u8, got: u8 },

    /// No schema is registered for the message's packet code.
    #[error("No schema registered for outbound packet code {0}.")]
    UnregisteredCode(u8),
}

/// Errors raised while building the packet registry at startup.
///
/// These are fatal: a silently overridden schema would misroute live
/// traffic with no way to detect it.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Packet code {0} is already registered.")]
    DuplicateCode(u8),
}
