mod image_kind;

pub use image_kind::*;

/// Last chunk type of every PNG image, the CRC of the `IEND` chunk is not part of the image data
pub const PNG_END_OF_DATA: &[u8] = b"IEND";

/// The JPEG `EOI` (End of Image) marker
pub const JPEG_END_OF_DATA: &[u8] = &[0xFF, 0xD9];
