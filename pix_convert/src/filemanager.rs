use image::{ImageError, ImageFormat, RgbaImage};
use lib_pix::{LoadError, RasterImage};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read PIX file")]
    Load(#[from] LoadError),

    #[error("Image encoding failed")]
    Image(#[from] ImageError),

    #[error("Raster does not match its {0}x{0} size")]
    InvalidRaster(usize),

    #[error("Input path has no file name: {0}")]
    InvalidPath(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Input file stem plus the format's extension, in the current directory.
pub fn default_output_path(input: &Path, format: OutputFormat) -> Result<PathBuf, ConvertError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ConvertError::InvalidPath(input.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(format.extension());
    Ok(PathBuf::from(name))
}

pub fn save_raster(
    raster: &RasterImage,
    path: &Path,
    format: OutputFormat,
) -> Result<(), ConvertError> {
    let size = u32::try_from(raster.size).map_err(|_| ConvertError::InvalidRaster(raster.size))?;
    let image = RgbaImage::from_raw(size, size, raster.to_rgba8())
        .ok_or(ConvertError::InvalidRaster(raster.size))?;

    image.save_with_format(path, format.image_format())?;
    info!("Wrote {}x{} image to {}", size, size, path.display());

    Ok(())
}
