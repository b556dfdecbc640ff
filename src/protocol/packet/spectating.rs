//! Spectator camera synchronization.

use crate::protocol::bits::BitBuffer;
use crate::protocol::constants::{ID_SPECTATING_SYNC, Keys};
use crate::protocol::packet::{DecodeError, SyncPacket};
use crate::protocol::value::{FieldSpec, SyncEncodable, ValueType, Vec3};

/// Per-tick state of a player who is spectating rather than playing:
/// key state plus the free camera position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectatingSync {
    pub lr_key: u16,
    pub ud_key: u16,
    pub keys: Keys,
    pub position: Vec3,
}

impl SyncPacket for SpectatingSync {
    const CODE: u8 = ID_SPECTATING_SYNC;
    const NAME: &'static str = "spectating";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("lr_key", ValueType::UInt16),
        FieldSpec::new("ud_key", ValueType::UInt16),
        FieldSpec::new("keys", ValueType::BitFlags16),
        FieldSpec::new("position", ValueType::Float32x3),
    ];

    fn encode_body(&self, dst: &mut BitBuffer) {
        self.lr_key.encode_sync(dst);
        self.ud_key.encode_sync(dst);
        self.keys.encode_sync(dst);
        self.position.encode_sync(dst);
    }

    fn decode_body(src: &mut BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
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

    fn sample() -> SpectatingSync {
        SpectatingSync {
            lr_key: 0x0001,
            ud_key: 0x0002,
            keys: Keys::from_bits_retain(0xFFFF),
            position: Vec3::new(10.0, -5.5, 0.0),
        }
    }

    #[test]
    fn spectating_roundtrip() {
        let pkt = sample();
        let mut buf = BitBuffer::new();
        pkt.encode_body(&mut buf);
        let decoded = SpectatingSync::decode_body(&mut buf).unwrap();
        assert_eq!(decoded, pkt);
    }

    #[test]
    fn body_layout_is_exact() {
        let mut buf = BitBuffer::new();
        sample().encode_body(&mut buf);
        let bytes = buf.into_bytes();
        assert_eq!(bytes.len(), 18);
        #[rustfmt::skip]
        let expected: [u8; 18] = [
            0x01, 0x00,             // lr_key
            0x02, 0x00,             // ud_key
            0xFF, 0xFF,             // keys
            0x00, 0x00, 0x20, 0x41, // x = 10.0
            0x00, 0x00, 0xB0, 0xC0, // y = -5.5
            0x00, 0x00, 0x00, 0x00, // z = 0.0
        ];
        assert_eq!(&bytes[..], &expected);
    }

    #[test]
    fn one_byte_short_is_malformed() {
        let mut buf = BitBuffer::new();
        sample().encode_body(&mut buf);
        let bytes = buf.into_bytes();
        let mut short = BitBuffer::from_bytes(&bytes[..17]);
        assert!(matches!(
            SpectatingSync::decode_body(&mut short),
            Err(DecodeError::UnexpectedEof)
        ));
    }

    #[test]
    fn every_prefix_is_malformed() {
        let mut buf = BitBuffer::new();
        sample().encode_body(&mut buf);
        let bytes = buf.into_bytes();
        for cut in 0..bytes.len() {
            let mut short = BitBuffer::from_bytes(&bytes[..cut]);
            assert!(
                SpectatingSync::decode_body(&mut short).is_err(),
                "prefix of {cut} bytes decoded"
            );
        }
    }
}
