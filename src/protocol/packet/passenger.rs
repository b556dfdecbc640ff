//! Vehicle passenger synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::{ID_PASSENGER_SYNC, Keys};
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Per-tick state of a player seated in a vehicle they do not drive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassengerSync {
    pub vehicle_id: u16,
    pub seat_id: u8,
    pub drive_by: u8,
    pub weapon_id: u8,
    pub health: u8,
    pub armour: u8,
    pub lr_key: u16,
    pub ud_key: u16,
    pub keys: Keys,
    pub position: Vec3,
}

impl SyncPacket for PassengerSync {
    const CODE: u8 = ID_PASSENGER_SYNC;
    const NAME: &'static str = "passenger";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("vehicle_id", ValueType::UInt16),
        FieldSpec::new("seat_id", ValueType::UInt8),
        FieldSpec::new("drive_by", ValueType::UInt8),
        FieldSpec::new("weapon_id", ValueType::UInt8),
        FieldSpec::new("health", ValueType::UInt8),
        FieldSpec::new("armour", ValueType::UInt8),
        FieldSpec::new("lr_key", ValueType::UInt16),
        FieldSpec::new("ud_key", ValueType::UInt16),
        FieldSpec::new("keys", ValueType::BitFlags16),
        FieldSpec::new("position", ValueType::Float32x3),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.vehicle_id.encode_sync(dst);
        self.seat_id.encode_sync(dst);
        self.drive_by.encode_sync(dst);
        self.weapon_id.encode_sync(dst);
        self.health.encode_sync(dst);
        self.armour.encode_sync(dst);
        self.lr_key.encode_sync(dst);
        self.ud_key.encode_sync(dst);
        self.keys.encode_sync(dst);
        self.position.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            vehicle_id: u16::decode_sync(src)?,
            seat_id: u8::decode_sync(src)?,
            drive_by: u8::decode_sync(src)?,
            weapon_id: u8::decode_sync(src)?,
            health: u8::decode_sync(src)?,
            armour: u8::decode_sync(src)?,
            lr_key: u16::decode_sync(src)?,
            ud_key: u16::decode_sync(src)?,
            keys: Keys::decode_sync(src)?,
            position: Vec3::decode_sync(src)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passenger_roundtrip() {
        let pkt = PassengerSync {
            vehicle_id: 400,
            seat_id: 1,
            drive_by: 1,
            weapon_id: 28,
            health: 64,
            armour: 12,
            lr_key: 0,
            ud_key: 0x0080,
            keys: Keys::FIRE,
            position: Vec3::new(2495.36, -1688.23, 13.51),
        };
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        let decoded = PassengerSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }
}
