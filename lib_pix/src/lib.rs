pub mod compression;
pub mod image;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

pub use crate::compression::unpack::BodyPolicy;
pub use crate::image::decoder::{DecodeError, DecodeOptions};
pub use crate::image::format::PixImage;
pub use crate::image::raster::{RasterImage, RenderMode};
pub use crate::image::{compose, decode, decode_with};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error")]
    Io(#[from] io::Error),
    #[error("PIX decode error")]
    Decode(#[from] DecodeError),
}

/// Reads a PIX file from disk and decodes it.
pub fn load(path: impl AsRef<Path>, options: DecodeOptions) -> Result<PixImage, LoadError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(decode_with(&data, options)?)
}

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init_logging(level: LevelFilter, target: LogTarget<'_>) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();

    if let LogTarget::File(path) = target {
        let file = Box::new(File::create(path)?);
        builder.target(env_logger::Target::Pipe(file));
    }

    builder
        .filter(None, level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    Ok(())
}
