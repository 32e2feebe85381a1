pub mod decoder;
pub mod format;
pub mod raster;

pub use decoder::{decode, decode_with};
pub use raster::compose;
