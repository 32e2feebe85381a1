#![allow(dead_code)]

pub const HEADER_SIZE: usize = 0x20;
pub const BODY_SIZE: usize = 896;
pub const GRID: usize = 32;

/// Builds a PIX file from a dimension code and a raw body.
pub fn pix_file(code: i16, body: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE];
    data[..4].copy_from_slice(b"PIXB");
    data[6..8].copy_from_slice(&code.to_le_bytes());
    data.extend_from_slice(body);
    data
}

/// Packs 1024 seven-bit indices the way the device stores them.
pub fn pack_indices(indices: &[u8]) -> Vec<u8> {
    assert_eq!(indices.len(), GRID * GRID);
    let mut body = Vec::with_capacity(BODY_SIZE);
    for window in indices.chunks(8) {
        let mut bits = 0u64;
        for (j, &index) in window.iter().enumerate() {
            assert!(index < 0x80, "index {} does not fit in 7 bits", index);
            bits |= (index as u64) << (7 * j);
        }
        body.extend_from_slice(&bits.to_le_bytes()[..7]);
    }
    body
}

/// A full 32x32 grid whose index at (col, row) is produced by `f`.
pub fn grid(f: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    (0..GRID * GRID).map(|i| f(i % GRID, i / GRID)).collect()
}

/// Cheap deterministic byte stream for fuzz-style inputs.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
