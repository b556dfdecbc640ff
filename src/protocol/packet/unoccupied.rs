//! Unoccupied vehicle synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::ID_UNOCCUPIED_SYNC;
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Physics state of a driverless vehicle, reported by whichever nearby
/// client the server elected to simulate it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnoccupiedSync {
    pub vehicle_id: u16,
    pub seat_id: u8,
    pub roll: Vec3,
    pub direction: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    pub turn_velocity: Vec3,
    pub health: f32,
}

impl SyncPacket for UnoccupiedSync {
    const CODE: u8 = ID_UNOCCUPIED_SYNC;
    const NAME: &'static str = "unoccupied";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("vehicle_id", ValueType::UInt16),
        FieldSpec::new("seat_id", ValueType::UInt8),
        FieldSpec::new("roll", ValueType::Float32x3),
        FieldSpec::new("direction", ValueType::Float32x3),
        FieldSpec::new("position", ValueType::Float32x3),
        FieldSpec::new("velocity", ValueType::Float32x3),
        FieldSpec::new("turn_velocity", ValueType::Float32x3),
        FieldSpec::new("health", ValueType::Float32),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.vehicle_id.encode_sync(dst);
        self.seat_id.encode_sync(dst);
        self.roll.encode_sync(dst);
        self.direction.encode_sync(dst);
        self.position.encode_sync(dst);
        self.velocity.encode_sync(dst);
        self.turn_velocity.encode_sync(dst);
        self.health.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            vehicle_id: u16::decode_sync(src)?,
            seat_id: u8::decode_sync(src)?,
            roll: Vec3::decode_sync(src)?,
            direction: Vec3::decode_sync(src)?,
            position: Vec3::decode_sync(src)?,
            velocity: Vec3::decode_sync(src)?,
            turn_velocity: Vec3::decode_sync(src)?,
            health: f32::decode_sync(src)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unoccupied_roundtrip() {
        let pkt = UnoccupiedSync {
            vehicle_id: 611,
            seat_id: 0,
            roll: Vec3::new(1.0, 0.0, 0.0),
            direction: Vec3::new(0.0, 1.0, 0.0),
            position: Vec3::new(-1989.2, 273.4, 35.1),
            velocity: Vec3::new(0.0, 0.0, -0.01),
            turn_velocity: Vec3::default(),
            health: 1000.0,
        };
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        let decoded = UnoccupiedSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }
}
