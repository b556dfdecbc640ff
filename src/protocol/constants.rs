use bitflags::bitflags;

/// Bit width of the leading packet identifier. One byte on the wire,
/// read before any schema field; part of the bilateral wire contract.
pub const SYNC_PACKET_ID_BITS: u32 = 8;

// Sync packet codes as the remote client implementation sends them.
// Changing any of these is a protocol version bump.
pub const ID_DRIVER_SYNC: u8 = 200;
pub const ID_AIM_SYNC: u8 = 203;
pub const ID_BULLET_SYNC: u8 = 206;
pub const ID_ONFOOT_SYNC: u8 = 207;
pub const ID_UNOCCUPIED_SYNC: u8 = 209;
pub const ID_TRAILER_SYNC: u8 = 210;
pub const ID_PASSENGER_SYNC: u8 = 211;
pub const ID_SPECTATING_SYNC: u8 = 212;

bitflags! {
    /// Combined key state carried by the 16-bit `keys` field of the
    /// movement sync packets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(transparent)]
    pub struct Keys: u16 {
        const ACTION           = 0x0001;
        const CROUCH           = 0x0002;
        const FIRE             = 0x0004;
        const SPRINT           = 0x0008;
        const SECONDARY_ATTACK = 0x0010;
        const JUMP             = 0x0020;
        const LOOK_RIGHT       = 0x0040;
        const HANDBRAKE        = 0x0080;
        const LOOK_LEFT        = 0x0100;

        // SUBMISSION and LOOK_BEHIND are the same bit; which one a
        // client means depends on whether the player is in a vehicle.
        const SUBMISSION       = 0x0200;
        const LOOK_BEHIND      = 0x0200;

        const WALK             = 0x0400;
        const ANALOG_UP        = 0x0800;
        const ANALOG_DOWN      = 0x1000;
        const ANALOG_LEFT      = 0x2000;
        const ANALOG_RIGHT     = 0x4000;
    }
}
