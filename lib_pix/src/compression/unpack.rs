use log::{debug, warn};
use thiserror::Error;

use crate::image::format::DECODED_LEN;

/// Source bytes consumed per window.
pub const WINDOW_SIZE: usize = 7;
/// Indices produced per window.
pub const INDICES_PER_WINDOW: usize = 8;
pub const WINDOW_COUNT: usize = DECODED_LEN / INDICES_PER_WINDOW;
/// Body length needed to fill every window without padding.
pub const FULL_BODY_LEN: usize = WINDOW_COUNT * WINDOW_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Missing trailing source bytes read as zero.
    #[default]
    ZeroFill,
    /// Bodies shorter than [`FULL_BODY_LEN`] are rejected.
    Strict,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnpackError {
    #[error("Body too short: expected at least {expected} bytes, got {actual}")]
    TruncatedBody { expected: usize, actual: usize },
}

/// Expands seven packed bytes into eight 7-bit palette indices.
///
/// Source bit `n` (counting from the low bit of `b[0]`) becomes bit `n % 7`
/// of output `n / 7`.
pub fn unpack_window(b: &[u8; WINDOW_SIZE]) -> [u8; INDICES_PER_WINDOW] {
    [
        b[0] & 0x7f,
        ((b[1] & 0x3f) << 1) | (b[0] >> 7),
        ((b[2] & 0x1f) << 2) | (b[1] >> 6),
        ((b[3] & 0x0f) << 3) | (b[2] >> 5),
        ((b[4] & 0x07) << 4) | (b[3] >> 4),
        ((b[5] & 0x03) << 5) | (b[4] >> 3),
        ((b[6] & 0x01) << 6) | (b[5] >> 2),
        b[6] >> 1,
    ]
}

/// Unpacks the body into the full 32x32 index grid.
///
/// Only the first [`FULL_BODY_LEN`] bytes are read. Under
/// [`BodyPolicy::ZeroFill`] a shorter body is padded with zeros, one window
/// at a time.
pub fn unpack_body(body: &[u8], policy: BodyPolicy) -> Result<[u8; DECODED_LEN], UnpackError> {
    if body.len() < FULL_BODY_LEN {
        match policy {
            BodyPolicy::Strict => {
                return Err(UnpackError::TruncatedBody {
                    expected: FULL_BODY_LEN,
                    actual: body.len(),
                })
            }
            BodyPolicy::ZeroFill => warn!(
                "Body is {} bytes short, padding with zeros",
                FULL_BODY_LEN - body.len()
            ),
        }
    }

    let mut decoded = [0u8; DECODED_LEN];
    for (i, out) in decoded.chunks_exact_mut(INDICES_PER_WINDOW).enumerate() {
        let start = (i * WINDOW_SIZE).min(body.len());
        let end = (start + WINDOW_SIZE).min(body.len());

        let mut window = [0u8; WINDOW_SIZE];
        window[..end - start].copy_from_slice(&body[start..end]);

        out.copy_from_slice(&unpack_window(&window));
    }
    debug!(
        "Unpacked {} windows into {} indices",
        WINDOW_COUNT,
        decoded.len()
    );

    Ok(decoded)
}
