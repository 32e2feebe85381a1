pub mod palette;
pub mod unpack;

use log::{debug, info};
use thiserror::Error;
use unpack::{BodyPolicy, UnpackError};

use crate::image::format::DecodedIndexBuffer;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Body unpacking failed")]
    UnpackFailed(#[from] UnpackError),
}

pub fn decompress(body: &[u8], policy: BodyPolicy) -> Result<DecodedIndexBuffer, DecompressionError> {
    info!("Starting decompression");
    debug!("Body length: {}, policy: {:?}", body.len(), policy);

    // 7-to-8 bit expansion
    let indices = unpack::unpack_body(body, policy)?;

    info!("Decompression completed successfully");
    Ok(DecodedIndexBuffer::new(indices))
}
