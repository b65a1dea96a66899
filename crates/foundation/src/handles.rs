/// Identifier for one entry in the offscreen pick buffer.
///
/// Ids are allocated monotonically from 1 and never reused within a run, so
/// a pixel sampled from a stale buffer can only resolve to its original
/// owner or to nothing. 0 is reserved for the empty background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickId(pub u32);

impl PickId {
    pub const BACKGROUND: PickId = PickId(0);

    pub fn is_background(self) -> bool {
        self.0 == 0
    }

    /// Pack the id into 8-bit RGB channels, high byte in red.
    ///
    /// Only the low 24 bits survive a pack/unpack round trip.
    pub fn encode_rgb8(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Exact inverse of `encode_rgb8` for 24-bit ids.
    pub fn decode_rgb8(pixel: [u8; 3]) -> PickId {
        PickId(((pixel[0] as u32) << 16) | ((pixel[1] as u32) << 8) | pixel[2] as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::PickId;

    #[test]
    fn rgb8_round_trip() {
        for id in [1u32, 2, 255, 256, 65_535, 65_536, 0x00ab_cdef, 0x00ff_ffff] {
            let packed = PickId(id).encode_rgb8();
            assert_eq!(PickId::decode_rgb8(packed), PickId(id), "id {id}");
        }
    }

    #[test]
    fn background_is_zero() {
        assert!(PickId::BACKGROUND.is_background());
        assert_eq!(PickId::decode_rgb8([0, 0, 0]), PickId::BACKGROUND);
        assert!(!PickId(1).is_background());
    }

    #[test]
    fn channel_layout_is_big_endian() {
        assert_eq!(PickId(0x0001_0203).encode_rgb8(), [1, 2, 3]);
        assert_eq!(PickId(255).encode_rgb8(), [0, 0, 255]);
        assert_eq!(PickId(256).encode_rgb8(), [0, 1, 0]);
    }
}
