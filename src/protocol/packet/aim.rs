//! Camera/aim direction synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::ID_AIM_SYNC;
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Where a player's camera sits and points while they aim a weapon.
/// Sent alongside on-foot sync whenever the client is in aim mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AimSync {
    pub cam_mode: u8,
    pub cam_front: Vec3,
    pub cam_pos: Vec3,
    pub aim_z: f32,
    pub cam_zoom: u8,
    pub weapon_state: u8,
    pub aspect_ratio: u8,
}

impl SyncPacket for AimSync {
    const CODE: u8 = ID_AIM_SYNC;
    const NAME: &'static str = "aim";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("cam_mode", ValueType::UInt8),
        FieldSpec::new("cam_front", ValueType::Float32x3),
        FieldSpec::new("cam_pos", ValueType::Float32x3),
        FieldSpec::new("aim_z", ValueType::Float32),
        FieldSpec::new("cam_zoom", ValueType::UInt8),
        FieldSpec::new("weapon_state", ValueType::UInt8),
        FieldSpec::new("aspect_ratio", ValueType::UInt8),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.cam_mode.encode_sync(dst);
        self.cam_front.encode_sync(dst);
        self.cam_pos.encode_sync(dst);
        self.aim_z.encode_sync(dst);
        self.cam_zoom.encode_sync(dst);
        self.weapon_state.encode_sync(dst);
        self.aspect_ratio.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            cam_mode: u8::decode_sync(src)?,
            cam_front: Vec3::decode_sync(src)?,
            cam_pos: Vec3::decode_sync(src)?,
            aim_z: f32::decode_sync(src)?,
            cam_zoom: u8::decode_sync(src)?,
            weapon_state: u8::decode_sync(src)?,
            aspect_ratio: u8::decode_sync(src)?,
        })
    }
}
