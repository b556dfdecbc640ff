//! The closed set of wire value types and their codec pairs.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::Keys;
use crate::protocol::packet::DecodeError;

/// Descriptor for a single wire value type. The set is closed and every
/// variant fixes its bit width; adding a new wire type means adding a
/// variant plus its `SyncEncodable` pair, never inferring width at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    UInt8,
    UInt16,
    UInt32,
    Int8,
    Int16,
    Int32,
    Float32,
    /// Three consecutive f32s interpreted as x/y/z.
    Float32x3,
    /// 16 bits of key-state flags; unknown bits survive a round trip.
    BitFlags16,
}

impl ValueType {
    pub const fn bit_width(self) -> u32 {
        match self {
            ValueType::UInt8 | ValueType::Int8 => 8,
            ValueType::UInt16 | ValueType::Int16 | ValueType::BitFlags16 => 16,
            ValueType::UInt32 | ValueType::Int32 | ValueType::Float32 => 32,
            ValueType::Float32x3 => 96,
        }
    }
}

/// A named, typed slot in a packet's field sequence.
///
/// Names are for documentation and testing only; the wire carries no
/// field names or lengths. Order and type alone define the layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub value_type: ValueType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        FieldSpec { name, value_type }
    }
}

/// Carrier for the `Float32x3` wire type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

/// Trait for values that know how to encode/decode themselves using the
/// sync wire format. Encode and decode are mutual inverses over the
/// whole domain of each implementing type.
pub trait SyncEncodable: Sized {
    /// Encode this value into the destination buffer.
    fn encode_sync(&self, dst: &mut BitBuffer);

    /// Decode a value of this type from the source buffer.
    fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError>;
}

macro_rules! impl_sync_uint {
    ($ty:ty, $width:expr) => {
        impl SyncEncodable for $ty {
            fn encode_sync(&self, dst: &mut BitBuffer) {
                dst.write_uint(*self as u32, $width);
            }

            fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError> {
                Ok(src.read_uint($width)? as $ty)
            }
        }
    };
}

macro_rules! impl_sync_int {
    ($ty:ty, $width:expr) => {
        impl SyncEncodable for $ty {
            fn encode_sync(&self, dst: &mut BitBuffer) {
                dst.write_int(*self as i32, $width);
            }

            fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError> {
                Ok(src.read_int($width)? as $ty)
            }
        }
    };
}

impl_sync_uint!(u8, 8);
impl_sync_uint!(u16, 16);
impl_sync_uint!(u32, 32);

impl_sync_int!(i8, 8);
impl_sync_int!(i16, 16);
impl_sync_int!(i32, 32);

impl SyncEncodable for f32 {
    fn encode_sync(&self, dst: &mut BitBuffer) {
        dst.write_f32(*self);
    }

    fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        src.read_f32()
    }
}

impl SyncEncodable for Vec3 {
    fn encode_sync(&self, dst: &mut BitBuffer) {
        dst.write_f32x3(self.x, self.y, self.z);
    }

    fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        let (x, y, z) = src.read_f32x3()?;
        Ok(Vec3 { x, y, z })
    }
}

impl SyncEncodable for Keys {
    fn encode_sync(&self, dst: &mut BitBuffer) {
        dst.write_uint(self.bits() as u32, 16);
    }

    fn decode_sync(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        // Retain unknown bits: the round-trip contract is bit-for-bit,
        // and newer clients may set flags this build does not name.
        Ok(Keys::from_bits_retain(src.read_uint(16)? as u16))
    }
}
