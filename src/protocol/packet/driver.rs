//! Vehicle driver synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::{ID_DRIVER_SYNC, Keys};
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Per-tick state of the player driving a vehicle. Carries vehicle
/// physics state alongside the driver's own vitals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriverSync {
    pub vehicle_id: u16,
    pub lr_key: u16,
    pub ud_key: u16,
    pub keys: Keys,
    pub position: Vec3,
    pub velocity: Vec3,
    pub vehicle_health: f32,
    pub health: u8,
    pub armour: u8,
    pub weapon_id: u8,
    pub siren: u8,
}

impl SyncPacket for DriverSync {
    const CODE: u8 = ID_DRIVER_SYNC;
    const NAME: &'static str = "driver";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("vehicle_id", ValueType::UInt16),
        FieldSpec::new("lr_key", ValueType::UInt16),
        FieldSpec::new("ud_key", ValueType::UInt16),
        FieldSpec::new("keys", ValueType::BitFlags16),
        FieldSpec::new("position", ValueType::Float32x3),
        FieldSpec::new("velocity", ValueType::Float32x3),
        FieldSpec::new("vehicle_health", ValueType::Float32),
        FieldSpec::new("health", ValueType::UInt8),
        FieldSpec::new("armour", ValueType::UInt8),
        FieldSpec::new("weapon_id", ValueType::UInt8),
        FieldSpec::new("siren", ValueType::UInt8),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.vehicle_id.encode_sync(dst);
        self.lr_key.encode_sync(dst);
        self.ud_key.encode_sync(dst);
        self.keys.encode_sync(dst);
        self.position.encode_sync(dst);
        self.velocity.encode_sync(dst);
        self.vehicle_health.encode_sync(dst);
        self.health.encode_sync(dst);
        self.armour.encode_sync(dst);
        self.weapon_id.encode_sync(dst);
        self.siren.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            vehicle_id: u16::decode_sync(src)?,
            lr_key: u16::decode_sync(src)?,
            ud_key: u16::decode_sync(src)?,
            keys: Keys::decode_sync(src)?,
            position: Vec3::decode_sync(src)?,
            velocity: Vec3::decode_sync(src)?,
            vehicle_health: f32::decode_sync(src)?,
            health: u8::decode_sync(src)?,
            armour: u8::decode_sync(src)?,
            weapon_id: u8::decode_sync(src)?,
            siren: u8::decode_sync(src)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_roundtrip() {
        let pkt = DriverSync {
            vehicle_id: 1834,
            lr_key: 0x0080,
            ud_key: 0,
            keys: Keys::SPRINT | Keys::HANDBRAKE,
            position: Vec3::new(-2025.75, 156.25, 28.84),
            velocity: Vec3::new(0.93, 0.01, -0.002),
            vehicle_health: 987.5,
            health: 88,
            armour: 0,
            weapon_id: 0,
            siren: 1,
        };
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        let decoded = DriverSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }

    #[test]
    fn truncated_body_is_malformed() {
        let mut buf = BitBuffer::new();
        DriverSync::default().encode_body(&mut buf);
        let bytes = buf.into_bytes();
        let mut short = BitBuffer::from_bytes(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            DriverSync::decode_body(&mut short),
            Err(DecodeError::UnexpectedEof)
        ));
    }
}
