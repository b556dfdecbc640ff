//! On-foot player movement synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::{ID_ONFOOT_SYNC, Keys};
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Per-tick state of a player on foot. Sent by the controlling client
/// every simulation tick; the densest packet kind on a busy server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OnFootSync {
    pub lr_key: u16,
    pub ud_key: u16,
    pub keys: Keys,
    pub position: Vec3,
    pub health: u8,
    pub armour: u8,
    pub weapon_id: u8,
    pub special_action: u8,
    pub velocity: Vec3,
}

impl SyncPacket for OnFootSync {
    const CODE: u8 = ID_ONFOOT_SYNC;
    const NAME: &'static str = "onfoot";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("lr_key", ValueType::UInt16),
        FieldSpec::new("ud_key", ValueType::UInt16),
        FieldSpec::new("keys", ValueType::BitFlags16),
        FieldSpec::new("position", ValueType::Float32x3),
        FieldSpec::new("health", ValueType::UInt8),
        FieldSpec::new("armour", ValueType::UInt8),
        FieldSpec::new("weapon_id", ValueType::UInt8),
        FieldSpec::new("special_action", ValueType::UInt8),
        FieldSpec::new("velocity", ValueType::Float32x3),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.lr_key.encode_sync(dst);
        self.ud_key.encode_sync(dst);
        self.keys.encode_sync(dst);
        self.position.encode_sync(dst);
        self.health.encode_sync(dst);
        self.armour.encode_sync(dst);
        self.weapon_id.encode_sync(dst);
        self.special_action.encode_sync(dst);
        self.velocity.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            lr_key: u16::decode_sync(src)?,
            ud_key: u16::decode_sync(src)?,
            keys: Keys::decode_sync(src)?,
            position: Vec3::decode_sync(src)?,
            health: u8::decode_sync(src)?,
            armour: u8::decode_sync(src)?,
            weapon_id: u8::decode_sync(src)?,
            special_action: u8::decode_sync(src)?,
            velocity: Vec3::decode_sync(src)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onfoot_roundtrip() {
        let pkt = OnFootSync {
            lr_key: 0,
            ud_key: 0xFF80,
            keys: Keys::SPRINT | Keys::JUMP,
            position: Vec3::new(1958.33, 1343.12, 15.36),
            health: 100,
            armour: 45,
            weapon_id: 24,
            special_action: 0,
            velocity: Vec3::new(0.05, -0.02, 0.0),
        };
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        assert_eq!(buf.len_bytes(), 34);
        let decoded = OnFootSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }
}
