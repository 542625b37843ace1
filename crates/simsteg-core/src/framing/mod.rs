//! # Framing format
//!
//! Hidden content is appended behind the end-of-data marker of the carrier
//! image, each piece framed by plain ASCII markers:
//!
//! ```text
//! <image bytes>|text_start|<utf-8 text>|text_end|
//! <image bytes>|file_start:<name>|<file bytes>|file_end:<name>|
//! ```
//!
//! There is no length prefix and no checksum, a segment ends at the first
//! occurrence of its end marker. File segments repeat their name in the end
//! marker, so the payload may contain other markers as long as it does not
//! contain its own literal end marker.

mod read_until;
mod scanner;
mod writer;

pub use read_until::read_until;
pub use scanner::{FrameScanner, ScanReport};
pub use writer::{embed, EncodedImage};

pub const TEXT_START: &[u8] = b"|text_start|";
pub const TEXT_END: &[u8] = b"|text_end|";
/// Prefix of a file start marker, followed by the name and [`NAME_TERMINATOR`]
pub const FILE_START: &[u8] = b"|file_start:";
/// Prefix of a file end marker, followed by the name and [`NAME_TERMINATOR`]
pub const FILE_END: &[u8] = b"|file_end:";
pub const NAME_TERMINATOR: &[u8] = b"|";

pub fn file_start_marker(name: &[u8]) -> Vec<u8> {
    named_marker(FILE_START, name)
}

pub fn file_end_marker(name: &[u8]) -> Vec<u8> {
    named_marker(FILE_END, name)
}

fn named_marker(prefix: &[u8], name: &[u8]) -> Vec<u8> {
    let mut marker = Vec::with_capacity(prefix.len() + name.len() + NAME_TERMINATOR.len());
    marker.extend_from_slice(prefix);
    marker.extend_from_slice(name);
    marker.extend_from_slice(NAME_TERMINATOR);

    marker
}
