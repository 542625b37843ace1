use std::path::Path;

use crate::{OverwritePolicy, SimstegError};

/// unveil all raw data, no marker interpretation is happening.
/// Just a binary dump of everything behind the end-of-data marker.
pub fn unveil_raw(
    secret_image: &Path,
    destination_file: &Path,
    overwrite: impl OverwritePolicy + 'static,
) -> Result<usize, SimstegError> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_image)
        .into_raw_file(destination_file)
        .with_overwrite_policy(overwrite)
        .execute()
}
