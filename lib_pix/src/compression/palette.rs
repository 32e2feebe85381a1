/// Fixed device palette as stored in firmware: red in the low byte, blue in
/// the high byte (0xBBGGRR).
pub const PALETTE: [u32; 96] = [
    0xffffff, 0xa8bfe9, 0xacc7ec, 0xb0cfef, 0xb7ddf4, 0xbbe4f7, 0xbbe4f7, 0xbeebfa, //
    0xc1f2fd, 0xc4f9ff, 0xc3f2f2, 0xc5ebe3, 0xc0e3d4, 0xbedbc5, 0xccddc5, 0xdadec4, //
    0xe8e0c4, 0xf5e1c4, 0xeed9c8, 0xe6d0cb, 0xdec5ce, 0xd5bad0, 0xcbbbd6, 0xc0bddd, //
    0xb4bee3, 0xd2d1d1, 0x5978d3, 0x5f8ad8, 0x649bde, 0x69abe3, 0x6ebae9, 0x72c9ef, //
    0x77d7f4, 0x7ae5fa, 0x87f3ff, 0x7ee4e4, 0x7dd5c6, 0x7cc5a5, 0x7bb482, 0x98b781, //
    0xb5ba7f, 0xd0bd7d, 0xe9bf7b, 0xddb48a, 0xcea396, 0xbb8e9f, 0xa672a5, 0x9574b1, //
    0x8376bd, 0x6f77c8, 0x7f7e7d, 0x1f00c1, 0x1f3fc6, 0x1e5ecc, 0x1d79d4, 0x1a93dc, //
    0x14abe5, 0x00c2ee, 0x00d8f6, 0x00ecff, 0x1dd5d4, 0x30bda2, 0x3aa56b, 0x408f11, //
    0x669200, 0x8e9500, 0xb79900, 0xdd9c00, 0xcb8e34, 0xb2765a, 0x96546f, 0x7a177e, //
    0x661390, 0x500ea2, 0x3900b2, 0x211e1f, 0x151455, 0x17255f, 0x183669, 0x194875, //
    0x1a5b82, 0x1a708f, 0x19859e, 0x169bad, 0x12acba, 0x1f9898, 0x27816f, 0x2b6c45, //
    0x2c5a00, 0x456100, 0x646800, 0x867000, 0xa47700, 0x926926, 0x7a533f, 0x62374a, //
];

/// Substituted for any index past the end of [`PALETTE`].
pub const FALLBACK_COLOR: u32 = 0xffffff;

/// Palette entries that survive stencil composition.
pub const STENCIL_BLACK: u32 = 0x211e1f;
pub const STENCIL_WHITE: u32 = 0xffffff;

/// Resolves a decoded index to its 0xBBGGRR color.
///
/// Every byte value maps to a color: indices past the palette fall back to
/// white instead of failing.
pub fn palette_lookup(index: u8) -> u32 {
    PALETTE
        .get(index as usize)
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

pub fn is_in_palette(index: u8) -> bool {
    (index as usize) < PALETTE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_first_and_last() {
        assert_eq!(palette_lookup(0), 0xffffff);
        assert_eq!(palette_lookup(1), 0xa8bfe9);
        assert_eq!(palette_lookup(95), 0x62374a);
    }

    #[test]
    fn test_palette_stencil_entries() {
        assert_eq!(palette_lookup(75), STENCIL_BLACK);
        assert_eq!(palette_lookup(0), STENCIL_WHITE);
        // White only appears once in the table.
        assert_eq!(PALETTE.iter().filter(|&&c| c == STENCIL_WHITE).count(), 1);
        assert_eq!(PALETTE.iter().filter(|&&c| c == STENCIL_BLACK).count(), 1);
    }

    #[test]
    fn test_palette_out_of_range() {
        assert_eq!(palette_lookup(96), FALLBACK_COLOR);
        assert_eq!(palette_lookup(127), FALLBACK_COLOR);
        assert_eq!(palette_lookup(255), FALLBACK_COLOR);
        assert!(!is_in_palette(96));
        assert!(is_in_palette(95));
    }

    #[test]
    fn test_palette_stops_at_96_entries() {
        assert_eq!(PALETTE.len(), 96);
        assert_eq!(PALETTE[95], 0x62374a);
        for index in 96..=99 {
            assert_eq!(palette_lookup(index), FALLBACK_COLOR);
        }
    }

    #[test]
    fn test_palette_lookup_is_total() {
        for index in 0..=u8::MAX {
            let color = palette_lookup(index);
            assert!(color <= 0xffffff);
            if is_in_palette(index) {
                assert_eq!(color, PALETTE[index as usize]);
            } else {
                assert_eq!(color, FALLBACK_COLOR);
            }
        }
    }
}
