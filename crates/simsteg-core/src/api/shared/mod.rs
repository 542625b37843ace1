mod overwrite;

pub use overwrite::*;

use std::fs;
use std::path::Path;

use log::error;

use crate::error::SimstegError;
use crate::media::ImageKind;
use crate::result::Result;

/// Reads a whole carrier image and derives its kind from the extension.
pub(crate) fn read_image(path: &Path) -> Result<(ImageKind, Vec<u8>)> {
    let kind = ImageKind::from_path(path)?;
    let buf = fs::read(path).map_err(|source| {
        error!("Error reading image {path:?}: {source}");
        SimstegError::ReadError { source }
    })?;

    Ok((kind, buf))
}

/// Writes `data` to `target`, asking `policy` first if `target` exists.
///
/// Returns `false` if the existing file was kept.
pub(crate) fn write_file(
    target: &Path,
    data: &[u8],
    policy: &mut dyn OverwritePolicy,
) -> Result<bool> {
    if target.exists() && !policy.allow_overwrite(target) {
        return Ok(false);
    }

    fs::write(target, data).map_err(|source| {
        error!("Error writing file {target:?}: {source}");
        SimstegError::WriteError { source }
    })?;

    Ok(true)
}
