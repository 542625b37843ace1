use std::path::{Path, PathBuf};

use log::info;

use super::shared::{read_image, write_file, BoxedPolicy};
use crate::framing::FrameScanner;
use crate::{OverwritePolicy, SimstegError};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps everything behind the end-of-data marker, no marker interpretation is happening.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_image: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    overwrite: BoxedPolicy,
}

impl UnveilRawApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    pub fn with_overwrite_policy<P: OverwritePolicy + 'static>(mut self, policy: P) -> Self {
        self.overwrite = BoxedPolicy(Box::new(policy));
        self
    }

    /// Returns the number of raw bytes written
    pub fn execute(mut self) -> Result<usize, SimstegError> {
        let Some(secret_image) = self.secret_image else {
            return Err(SimstegError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SimstegError::TargetNotSet);
        };

        let (kind, buf) = read_image(&secret_image)?;
        let trailer = FrameScanner::new(&buf, kind)?.trailer();

        if !write_file(&destination_file, trailer, self.overwrite.0.as_mut())? {
            return Err(SimstegError::TargetExists(destination_file));
        }
        info!(
            "Dumped {} raw bytes behind the {kind} end-of-data marker to {destination_file:?}",
            trailer.len()
        );

        Ok(trailer.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret = temp_dir.path().join("secret.png");
        fs::write(&secret, b"\x89PNG IEND\xAE\x42\x60\x82|text_start|x|text_end|").unwrap();
        let raw = temp_dir.path().join("raw.bin");

        let len = crate::api::unveil_raw::prepare()
            .from_secret_file(&secret)
            .into_raw_file(&raw)
            .execute()
            .expect("Failed to unveil raw data from image");

        assert_eq!(len, 4 + 23);
        assert_eq!(
            fs::read(&raw).unwrap(),
            b"\xAE\x42\x60\x82|text_start|x|text_end|"
        );
    }
}
