use std::path::{Path, PathBuf};

use crate::api::hide::HideReport;
use crate::{OverwritePolicy, SimstegError};

pub fn hide(
    image: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    overwrite: impl OverwritePolicy + 'static,
) -> Result<HideReport, SimstegError> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_output(write_to_file)
        .use_file(data_file)
        .use_message(message)
        .with_overwrite_policy(overwrite)
        .execute()
}
