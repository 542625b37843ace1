use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::shared::{read_image, write_file, BoxedPolicy};
use crate::framing::embed;
use crate::segment::{FileSegment, Segment, TextSegment};
use crate::{OverwritePolicy, SimstegError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    overwrite: BoxedPolicy,
}

/// What [`HideApi::execute`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideReport {
    pub output: PathBuf,
    /// Bytes copied over from the carrier image
    pub image_len: usize,
    /// Bytes of the hidden segment, markers included
    pub framed_len: usize,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    /// The carrier image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Asked when the output file exists already, defaults to never overwrite
    pub fn with_overwrite_policy<P: OverwritePolicy + 'static>(mut self, policy: P) -> Self {
        self.overwrite = BoxedPolicy(Box::new(policy));
        self
    }

    pub fn execute(mut self) -> Result<HideReport, SimstegError> {
        self.validate()?;
        let Some(image) = self.image.take() else {
            return Err(SimstegError::CarrierNotSet);
        };
        let Some(output) = self.output.take() else {
            return Err(SimstegError::TargetNotSet);
        };

        let (kind, carrier) = read_image(&image)?;
        // an image without end-of-data would hide the segment for good
        kind.end_of_data(&carrier)?;

        let segment = self.segment()?;
        let encoded = embed(&carrier, &segment);

        if !write_file(&output, &encoded.bytes, self.overwrite.0.as_mut())? {
            return Err(SimstegError::TargetExists(output));
        }
        info!(
            "Hid {} bytes in {kind} image {image:?}, saved as {output:?}",
            encoded.framed_len
        );

        Ok(HideReport {
            output,
            image_len: encoded.image_len,
            framed_len: encoded.framed_len,
        })
    }

    fn segment(&mut self) -> Result<Segment, SimstegError> {
        if let Some(message) = self.message.take() {
            return Ok(TextSegment::new(message).into());
        }
        let Some(file) = self.file.take() else {
            return Err(SimstegError::MissingPayload);
        };

        let name = file
            .file_name()
            .ok_or(SimstegError::InvalidFileName)?
            .to_str()
            .ok_or(SimstegError::InvalidFileName)?
            .to_owned();
        let data = fs::read(&file).map_err(|source| SimstegError::ReadError { source })?;
        debug!("Read {} bytes of data file {file:?}", data.len());

        Ok(FileSegment::new(name, data).into())
    }

    fn validate(&self) -> Result<(), SimstegError> {
        match (&self.message, &self.file) {
            (None, None) => Err(SimstegError::MissingPayload),
            (Some(_), Some(_)) => Err(SimstegError::AmbiguousPayload),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::{Overwrite, SimstegError};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        fs::write(&carrier, b"\x89PNG....IEND\xAE\x42\x60\x82").unwrap();

        let report = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert_eq!(report.image_len, 16);
        assert_eq!(report.framed_len, 13 + 22);
        let written = fs::read(report.output).unwrap();
        assert!(written.ends_with(b"|text_start|Hello, World!|text_end|"));
    }

    #[test]
    fn should_require_exactly_one_payload() {
        let result = crate::api::hide::prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(SimstegError::MissingPayload)));

        let result = crate::api::hide::prepare()
            .with_message("a")
            .with_file("Cargo.toml")
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(SimstegError::AmbiguousPayload)));
    }

    #[test]
    fn should_require_image_and_output() {
        let result = crate::api::hide::prepare().with_message("a").execute();
        assert!(matches!(result, Err(SimstegError::CarrierNotSet)));

        let result = crate::api::hide::prepare()
            .with_message("a")
            .with_image("carrier.png")
            .execute();
        assert!(matches!(result, Err(SimstegError::TargetNotSet)));
    }

    #[test]
    fn should_refuse_images_without_end_of_data() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("broken.jpg");
        fs::write(&carrier, b"\xFF\xD8 no end").unwrap();
        let output = temp_dir.path().join("out.jpg");

        let result = crate::api::hide::prepare()
            .with_message("a")
            .with_image(&carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(result, Err(SimstegError::MissingEndOfData { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn should_keep_an_existing_output_unless_allowed() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("carrier.png");
        fs::write(&carrier, b"IEND").unwrap();
        let output = temp_dir.path().join("out.png");
        fs::write(&output, b"keep me").unwrap();

        let result = crate::api::hide::prepare()
            .with_message("a")
            .with_image(&carrier)
            .with_output(&output)
            .execute();
        assert!(matches!(result, Err(SimstegError::TargetExists(_))));
        assert_eq!(fs::read(&output).unwrap(), b"keep me");

        crate::api::hide::prepare()
            .with_message("a")
            .with_image(&carrier)
            .with_output(&output)
            .with_overwrite_policy(Overwrite::Always)
            .execute()
            .unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"IEND|text_start|a|text_end|");
    }
}
