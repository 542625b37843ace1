use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::{JPEG_END_OF_DATA, PNG_END_OF_DATA};
use crate::error::SimstegError;
use crate::result::Result;

/// The carrier image formats, decides which end-of-data marker is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Derives the kind from the extension of `path`, case-insensitive.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else {
            return Err(SimstegError::UnsupportedImageKind(
                path.display().to_string(),
            ));
        };
        let ext = ext
            .to_str()
            .ok_or_else(|| SimstegError::UnsupportedImageKind(ext.to_string_lossy().into()))?;

        ext.parse()
    }

    pub fn end_of_data_marker(self) -> &'static [u8] {
        match self {
            ImageKind::Png => PNG_END_OF_DATA,
            ImageKind::Jpeg => JPEG_END_OF_DATA,
        }
    }

    /// Returns the offset right behind the first end-of-data marker in `buf`.
    ///
    /// Everything from this offset on is not part of the image itself and is
    /// where hidden segments live.
    pub fn end_of_data(self, buf: &[u8]) -> Result<usize> {
        let marker = self.end_of_data_marker();
        let index = buf
            .windows(marker.len())
            .position(|window| window == marker)
            .ok_or(SimstegError::MissingEndOfData { kind: self })?;
        debug!("Found {self} end-of-data marker at offset {index:#x}");

        Ok(index + marker.len())
    }
}

impl FromStr for ImageKind {
    type Err = SimstegError;

    fn from_str(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Ok(ImageKind::Png),
            "jpg" | "jpeg" => Ok(ImageKind::Jpeg),
            _ => Err(SimstegError::UnsupportedImageKind(ext.to_string())),
        }
    }
}

impl Display for ImageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Png => write!(f, "PNG"),
            ImageKind::Jpeg => write!(f, "JPEG"),
        }
    }
}
