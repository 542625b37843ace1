use std::path::Path;

use crate::api::unveil::UnveilReport;
use crate::{OverwritePolicy, SimstegError};

pub fn unveil(
    secret_image: &Path,
    output_folder: &Path,
    overwrite: impl OverwritePolicy + 'static,
) -> Result<UnveilReport, SimstegError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_image)
        .into_output_folder(output_folder)
        .with_overwrite_policy(overwrite)
        .execute()
}
