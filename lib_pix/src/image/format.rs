use crate::compression::palette::is_in_palette;

pub const MAGIC_HEADER: [u8; 4] = *b"PIXB";

/// Side length of the square grid every body unpacks into.
pub const GRID_SIZE: usize = 32;
pub const DECODED_LEN: usize = GRID_SIZE * GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionProfile {
    pub code: i16,
    pub visible_size: usize,
    pub skip: usize,
}

/// One entry per valid dimension code, indexed by the code itself.
pub static DIMENSION_PROFILES: [DimensionProfile; 3] = [
    DimensionProfile {
        code: 0,
        visible_size: 16,
        skip: 8,
    },
    DimensionProfile {
        code: 1,
        visible_size: 24,
        skip: 4,
    },
    DimensionProfile {
        code: 2,
        visible_size: 32,
        skip: 0,
    },
];

impl DimensionProfile {
    pub fn from_code(code: i16) -> Option<&'static DimensionProfile> {
        usize::try_from(code)
            .ok()
            .and_then(|index| DIMENSION_PROFILES.get(index))
    }

    /// Maps a visible coordinate onto the 32-wide decoded grid.
    ///
    /// The window is inset by `skip` rows and `skip` columns, so
    /// `skip + (skip + y) * 32 + x` stays below 1024 whenever
    /// `skip * 2 + visible_size <= 32`, which holds for every profile above.
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.visible_size && y < self.visible_size);
        self.skip + (self.skip + y) * GRID_SIZE + x
    }
}

/// Palette indices produced by the body unpacker, row-major over a 32x32 grid.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedIndexBuffer([u8; DECODED_LEN]);

impl DecodedIndexBuffer {
    pub fn new(indices: [u8; DECODED_LEN]) -> Self {
        Self(indices)
    }

    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }
}

impl std::fmt::Debug for DecodedIndexBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedIndexBuffer")
            .field("len", &DECODED_LEN)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixImage {
    pub profile: DimensionProfile,
    pub indices: DecodedIndexBuffer,
}

impl PixImage {
    pub const MAGIC_SIZE: usize = 4;
    pub const DIMENSION_OFFSET: usize = 6;
    pub const DIMENSION_SIZE: usize = std::mem::size_of::<i16>();
    /// The body always starts here, whatever the reserved bytes before it hold.
    pub const HEADER_SIZE: usize = 0x20;

    pub fn new(profile: DimensionProfile, indices: DecodedIndexBuffer) -> Self {
        Self {
            profile,
            indices,
        }
    }

    pub fn size(&self) -> usize {
        self.profile.visible_size
    }

    /// Palette index of the visible pixel at `(x, y)`.
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.indices.get(self.profile.index_of(x, y))
    }
    /// Visible pixels whose index has no palette entry.
    pub fn out_of_palette_count(&self) -> usize {
        let size = self.size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| !is_in_palette(self.index_at(x, y)))
            .count()
    }
}
