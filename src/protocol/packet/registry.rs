use std::collections::HashMap;

use crate::protocol::bits::BitBuffer;
use crate::protocol::packet::{
    AimSync, BulletSync, DecodeError, DriverSync, EncodeError, OnFootSync, PassengerSync,
    RegistryError, SpectatingSync, SyncMessage, SyncPacket, TrailerSync, UnoccupiedSync,
};
use crate::protocol::value::FieldSpec;

/// Runtime descriptor binding one packet code to its field sequence and
/// codec pair.
pub struct PacketSchema {
    code: u8,
    name: &'static str,
    fields: &'static [FieldSpec],
    decode_body: fn(&mut BitBuffer) -> Result<SyncMessage, DecodeError>,
}

impl PacketSchema {
    /// Builds the schema for a concrete packet type.
    pub fn of<P>() -> Self
    where
        P: SyncPacket,
        SyncMessage: From<P>,
    {
        PacketSchema {
            code: P::CODE,
            name: P::NAME,
            fields: P::FIELDS,
            decode_body: |src| P::decode_body(src).map(SyncMessage::from),
        }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Total payload width in bits, excluding the leading code byte.
    /// Fixed per schema; outbound buffers are sized from it.
    pub fn payload_bits(&self) -> u32 {
        self.fields.iter().map(|f| f.value_type.bit_width()).sum()
    }

    pub fn payload_bytes(&self) -> usize {
        (self.payload_bits() as usize).div_ceil(8)
    }

    /// Decodes the body in declared field order. Yields an error, never
    /// a partial message, if the buffer runs out.
    pub fn decode(&self, src: &mut BitBuffer) -> Result<SyncMessage, DecodeError> {
        (self.decode_body)(src)
    }

    /// Encodes the body in declared field order. A message that belongs
    /// to a different schema is refused rather than emitted truncated.
    pub fn encode(&self, message: &SyncMessage, dst: &mut BitBuffer) -> Result<(), EncodeError> {
        if message.code() != self.code {
            return Err(EncodeError::SchemaMismatch {
                expected: self.code,
                got: message.code(),
            });
        }
        message.encode_body(dst);
        Ok(())
    }
}

/// Mapping from packet code to schema.
///
/// Built once before the server accepts traffic and read-only after
/// that, so lookups need no locking. If shared across threads, treat it
/// as immutable, shared-by-all, owned-by-none.
#[derive(Default)]
pub struct PacketRegistry {
    schemas: HashMap<u8, PacketSchema>,
}

impl PacketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its code. Fails if the code is already
    /// taken; the earlier registration is retained. Callers treat this
    /// as a fatal configuration error at startup.
    pub fn register(&mut self, schema: PacketSchema) -> Result<(), RegistryError> {
        if self.schemas.contains_key(&schema.code()) {
            return Err(RegistryError::DuplicateCode(schema.code()));
        }
        self.schemas.insert(schema.code(), schema);
        Ok(())
    }

    pub fn lookup(&self, code: u8) -> Option<&PacketSchema> {
        self.schemas.get(&code)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Builds the registry covering the full sync packet family. Each
    /// registration is explicit and ordered; there is no implicit or
    /// reflective registration anywhere.
    pub fn with_default_syncs() -> Result<Self, RegistryError> {
        let mut registry = PacketRegistry::new();
        registry.register(PacketSchema::of::<DriverSync>())?;
        registry.register(PacketSchema::of::<AimSync>())?;
        registry.register(PacketSchema::of::<BulletSync>())?;
        registry.register(PacketSchema::of::<OnFootSync>())?;
        registry.register(PacketSchema::of::<UnoccupiedSync>())?;
        registry.register(PacketSchema::of::<TrailerSync>())?;
        registry.register(PacketSchema::of::<PassengerSync>())?;
        registry.register(PacketSchema::of::<SpectatingSync>())?;
        Ok(registry)
    }
}
