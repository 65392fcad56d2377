/// Channel order used by the accumulator arrays: alpha, red, green, blue.
pub const CHANNELS: usize = 4;

/// Split a packed ARGB word into `[a, r, g, b]`.
#[inline]
pub fn unpack(pixel: u32) -> [u32; CHANNELS] {
    [
        (pixel >> 24) & 0xFF,
        (pixel >> 16) & 0xFF,
        (pixel >> 8) & 0xFF,
        pixel & 0xFF,
    ]
}

/// Pack `[a, r, g, b]` into an ARGB word. Each channel is clamped to 255.
#[inline]
pub fn pack(channels: [u32; CHANNELS]) -> u32 {
    let [a, r, g, b] = channels.map(|c| c.min(255));
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Pack signed channel values, clamping each into `[0, 255]`.
#[inline]
pub fn pack_clamped(channels: [i32; CHANNELS]) -> u32 {
    pack(channels.map(clamp_channel))
}

#[inline]
pub fn clamp_channel(value: i32) -> u32 {
    value.clamp(0, 255) as u32
}

/// Build an ARGB word from individual channels.
#[inline]
pub fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

/// Clamp a possibly out-of-range sample position into `[0, len - 1]`.
///
/// `len` must be non-zero.
#[inline]
pub fn clamp_index(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_orders_alpha_first() {
        assert_eq!(unpack(0x80FF4010), [0x80, 0xFF, 0x40, 0x10]);
    }

    #[test]
    fn test_pack_inverts_unpack() {
        let p = 0x12345678;
        assert_eq!(pack(unpack(p)), p);
    }

    #[test]
    fn test_pack_saturates_channels() {
        assert_eq!(pack([300, 256, 0, 1000]), 0xFFFF00FF);
    }

    #[test]
    fn test_pack_clamped_handles_negative() {
        assert_eq!(pack_clamped([255, -5, 128, 400]), argb(255, 0, 128, 255));
    }

    #[test]
    fn test_argb_and_alpha() {
        let p = argb(10, 20, 30, 40);
        assert_eq!(p, 0x0A141E28);
        assert_eq!(alpha(p), 10);
    }

    #[test]
    fn test_clamp_index_replicates_edges() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(2, 5), 2);
        assert_eq!(clamp_index(9, 5), 4);
        assert_eq!(clamp_index(7, 1), 0);
    }
}
