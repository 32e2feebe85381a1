use log::debug;

use super::format::PixImage;
use crate::compression::palette::{palette_lookup, STENCIL_BLACK, STENCIL_WHITE};

pub const OPAQUE: u32 = 0xff00_0000;
pub const OPAQUE_BLACK: u32 = 0xff00_0000;
pub const OPAQUE_WHITE: u32 = 0xffff_ffff;
pub const TRANSPARENT: u32 = 0x0000_0000;

/// How palette colors become final pixels. Chosen once per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every palette color, fully opaque.
    #[default]
    Opaque,
    /// Two-tone output for monochrome displays: the black and white palette
    /// entries stay opaque, everything else becomes transparent.
    Stencil,
}

impl RenderMode {
    fn shader(self) -> fn(u32) -> u32 {
        match self {
            RenderMode::Opaque => opaque,
            RenderMode::Stencil => stencil,
        }
    }
}

fn opaque(rgb: u32) -> u32 {
    OPAQUE | rgb
}

fn stencil(rgb: u32) -> u32 {
    match rgb {
        STENCIL_BLACK => OPAQUE_BLACK,
        STENCIL_WHITE => OPAQUE_WHITE,
        _ => TRANSPARENT,
    }
}

/// Square grid of pixel words, row-major. Alpha is the top byte, the rest
/// is the palette color unchanged, red in the low byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub size: usize,
    pub pixels: Vec<u32>,
}

impl RasterImage {
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.size + x]
    }

    /// Pixels as R, G, B, A bytes, the layout image encoders expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &word in &self.pixels {
            let [a, b, g, r] = word.to_be_bytes();
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }
}

pub fn compose(image: &PixImage, mode: RenderMode) -> RasterImage {
    let size = image.size();
    let shade = mode.shader();

    let mut pixels = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            pixels.push(shade(palette_lookup(image.index_at(x, y))));
        }
    }
    debug!("Composed {}x{} raster in {:?} mode", size, size, mode);

    RasterImage { size, pixels }
}
