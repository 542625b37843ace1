use log::{debug, warn};

use crate::segment::{Framed, Segment};

/// A carrier image with exactly one segment appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    /// Length of the carrier image in front of the segment
    pub image_len: usize,
    /// Bytes taken by the segment, markers included
    pub framed_len: usize,
}

/// Appends `segment` behind a copy of `image`.
///
/// The image itself is not inspected, it may already carry other segments.
/// File names containing `|` are written as is, such a segment can not be
/// read back unambiguously.
pub fn embed(image: &[u8], segment: &Segment) -> EncodedImage {
    if let Segment::File(file) = segment {
        if file.name.contains('|') {
            warn!(
                "File name {:?} contains `|`, the hidden file can not be unveiled correctly",
                file.name
            );
        }
    }

    let framed_len = segment.framed_len();
    let mut bytes = Vec::with_capacity(image.len() + framed_len);
    bytes.extend_from_slice(image);
    segment.write_framed(&mut bytes);
    debug!(
        "Appended {framed_len} bytes behind {} bytes of carrier image",
        image.len()
    );

    EncodedImage {
        bytes,
        image_len: image.len(),
        framed_len,
    }
}
