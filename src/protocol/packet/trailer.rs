//! Towed trailer synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::ID_TRAILER_SYNC;
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Physics state of a trailer attached to the sending client's vehicle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrailerSync {
    pub trailer_id: u16,
    pub position: Vec3,
    pub velocity: Vec3,
    pub turn_velocity: Vec3,
}

impl SyncPacket for TrailerSync {
    const CODE: u8 = ID_TRAILER_SYNC;
    const NAME: &'static str = "trailer";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("trailer_id", ValueType::UInt16),
        FieldSpec::new("position", ValueType::Float32x3),
        FieldSpec::new("velocity", ValueType::Float32x3),
        FieldSpec::new("turn_velocity", ValueType::Float32x3),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.trailer_id.encode_sync(dst);
        self.position.encode_sync(dst);
        self.velocity.encode_sync(dst);
        self.turn_velocity.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            trailer_id: u16::decode_sync(src)?,
            position: Vec3::decode_sync(src)?,
            velocity: Vec3::decode_sync(src)?,
            turn_velocity: Vec3::decode_sync(src)?,
        })
    }
}
