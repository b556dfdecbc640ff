//! Bullet/shot synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::ID_BULLET_SYNC;
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// A single fired shot: what it hit and where. `hit_type` selects the
/// namespace that `hit_id` indexes (none/player/vehicle/object).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletSync {
    pub hit_type: u8,
    pub hit_id: u16,
    pub origin: Vec3,
    pub hit_pos: Vec3,
    pub center_offset: Vec3,
    pub weapon_id: u8,
}

impl SyncPacket for BulletSync {
    const CODE: u8 = ID_BULLET_SYNC;
    const NAME: &'static str = "bullet";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("hit_type", ValueType::UInt8),
        FieldSpec::new("hit_id", ValueType::UInt16),
        FieldSpec::new("origin", ValueType::Float32x3),
        FieldSpec::new("hit_pos", ValueType::Float32x3),
        FieldSpec::new("center_offset", ValueType::Float32x3),
        FieldSpec::new("weapon_id", ValueType::UInt8),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.hit_type.encode_sync(dst);
        self.hit_id.encode_sync(dst);
        self.origin.encode_sync(dst);
        self.hit_pos.encode_sync(dst);
        self.center_offset.encode_sync(dst);
        self.weapon_id.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            hit_type: u8::decode_sync(src)?,
            hit_id: u16::decode_sync(src)?,
            origin: Vec3::decode_sync(src)?,
            hit_pos: Vec3::decode_sync(src)?,
            center_offset: Vec3::decode_sync(src)?,
            weapon_id: u8::decode_sync(src)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_roundtrip() {
        let pkt = BulletSync {
            hit_type: 1,
            hit_id: 42,
            origin: Vec3::new(0.0, 0.0, 3.5),
            hit_pos: Vec3::new(12.6, -3.1, 4.0),
            center_offset: Vec3::new(0.1, 0.0, -0.4),
            weapon_id: 31,
        };
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        let decoded = BulletSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }
}
