use super::format::{DimensionProfile, PixImage, MAGIC_HEADER};
use crate::compression::unpack::{BodyPolicy, UnpackError};
use crate::compression::{decompress, DecompressionError};
use log::{debug, error, info, warn};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Header truncated: need at least 8 bytes, got {0}")]
    TruncatedHeader(usize),
    #[error("Invalid magic number {0:02x?}, expected \"PIXB\"")]
    BadMagic([u8; 4]),
    #[error("Invalid dimension code: {0}")]
    BadDimension(i16),
    #[error("Body truncated: expected at least {expected} bytes, got {actual}")]
    TruncatedBody { expected: usize, actual: usize },
}

impl From<DecompressionError> for DecodeError {
    fn from(err: DecompressionError) -> Self {
        match err {
            DecompressionError::UnpackFailed(UnpackError::TruncatedBody { expected, actual }) => {
                DecodeError::TruncatedBody { expected, actual }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub body_policy: BodyPolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            body_policy: BodyPolicy::Strict,
        }
    }
}

/// Validates the fixed header fields and selects the dimension profile.
///
/// Bytes 8..0x20 are never looked at.
pub fn parse_header(encoded_data: &[u8]) -> Result<&'static DimensionProfile, DecodeError> {
    let magic: [u8; 4] = match encoded_data.get(..PixImage::MAGIC_SIZE) {
        Some(bytes) => [bytes[0], bytes[1], bytes[2], bytes[3]],
        None => {
            error!("Header truncated at {} bytes", encoded_data.len());
            return Err(DecodeError::TruncatedHeader(encoded_data.len()));
        }
    };
    if magic != MAGIC_HEADER {
        error!("Invalid magic number {:02x?}", magic);
        return Err(DecodeError::BadMagic(magic));
    }
    debug!("Magic number validated successfully");

    let start = PixImage::DIMENSION_OFFSET;
    let code = match encoded_data.get(start..start + PixImage::DIMENSION_SIZE) {
        Some(bytes) => i16::from_le_bytes([bytes[0], bytes[1]]),
        None => {
            error!("Header truncated at {} bytes", encoded_data.len());
            return Err(DecodeError::TruncatedHeader(encoded_data.len()));
        }
    };

    let profile = DimensionProfile::from_code(code).ok_or_else(|| {
        error!("Invalid dimension code {}", code);
        DecodeError::BadDimension(code)
    })?;
    debug!(
        "Dimension code {}: {}x{} visible, skip {}",
        code, profile.visible_size, profile.visible_size, profile.skip
    );

    Ok(profile)
}

pub fn decode(encoded_data: &[u8]) -> Result<PixImage, DecodeError> {
    decode_with(encoded_data, DecodeOptions::default())
}

pub fn decode_with(encoded_data: &[u8], options: DecodeOptions) -> Result<PixImage, DecodeError> {
    info!("Starting decoding of {} bytes", encoded_data.len());

    let profile = parse_header(encoded_data)?;

    // The body starts at 0x20 no matter what the reserved bytes contain
    let body = encoded_data.get(PixImage::HEADER_SIZE..).unwrap_or(&[]);
    debug!("Body length: {}", body.len());

    let indices = decompress(body, options.body_policy)?;
    let image = PixImage::new(*profile, indices);

    let out_of_range = image.out_of_palette_count();
    if out_of_range > 0 {
        warn!(
            "{} visible pixels have no palette entry and will render white",
            out_of_range
        );
    }

    info!("Decoding completed successfully");
    Ok(image)
}
