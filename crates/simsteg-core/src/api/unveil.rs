use std::path::{Path, PathBuf};

use log::{debug, info};

use super::shared::{read_image, write_file, BoxedPolicy};
use crate::framing::{FrameScanner, ScanReport};
use crate::{OverwritePolicy, SimstegError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    overwrite: BoxedPolicy,
}

/// Everything found in the image and where the files went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnveilReport {
    pub scan: ScanReport,
    pub written: Vec<PathBuf>,
    /// Files that existed already and were kept
    pub skipped: Vec<PathBuf>,
}

impl UnveilReport {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.scan.texts().map(|t| t.text.as_str())
    }

    pub fn found_texts(&self) -> usize {
        self.scan.found_texts()
    }

    pub fn found_files(&self) -> usize {
        self.scan.found_files()
    }
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where hidden files will be saved to, the current directory if not set
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Asked for every hidden file that exists already, defaults to never overwrite
    pub fn with_overwrite_policy<P: OverwritePolicy + 'static>(mut self, policy: P) -> Self {
        self.overwrite = BoxedPolicy(Box::new(policy));
        self
    }

    /// Execute the unveil process and blocks until it is finished
    ///
    /// Nothing is written unless the whole image was scanned without error.
    pub fn execute(mut self) -> Result<UnveilReport, SimstegError> {
        let Some(secret_image) = self.secret_image else {
            return Err(SimstegError::CarrierNotSet);
        };
        let output_folder = self.output_folder.unwrap_or_else(|| PathBuf::from("."));

        let (kind, buf) = read_image(&secret_image)?;
        let scan = FrameScanner::new(&buf, kind)?.scan()?;

        let targets = scan
            .files()
            .map(|file| base_name(&file.name).map(|name| (output_folder.join(name), file)))
            .collect::<Result<Vec<_>, SimstegError>>()?;

        let mut written = Vec::new();
        let mut skipped = Vec::new();
        for (target, file) in targets {
            if write_file(&target, &file.data, self.overwrite.0.as_mut())? {
                debug!("Wrote {} bytes to {target:?}", file.data.len());
                written.push(target);
            } else {
                info!("Kept existing file {target:?}");
                skipped.push(target);
            }
        }

        Ok(UnveilReport {
            scan,
            written,
            skipped,
        })
    }
}

/// Hidden names come from untrusted images, only the last path component is used
fn base_name(name: &str) -> Result<&str, SimstegError> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(SimstegError::InvalidFileName)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::base_name;
    use crate::{Overwrite, SimstegError};

    const SECRET_IMAGE: &[u8] =
        b"\xFF\xD8\xFF\xE0 jpeg \xFF\xD9|text_start|Hello World|text_end||file_start:a.txt|AAA|file_end:a.txt|";

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret = temp_dir.path().join("secret.JPG");
        fs::write(&secret, SECRET_IMAGE).unwrap();
        let out = temp_dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let report = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_folder(&out)
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(report.texts().collect::<Vec<_>>(), vec!["Hello World"]);
        assert_eq!(report.found_files(), 1);
        assert_eq!(report.written, vec![out.join("a.txt")]);
        assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"AAA");
    }

    #[test]
    fn should_skip_existing_files_unless_allowed() {
        let temp_dir = tempdir().unwrap();
        let secret = temp_dir.path().join("secret.jpeg");
        fs::write(&secret, SECRET_IMAGE).unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"old").unwrap();

        let report = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_folder(temp_dir.path())
            .execute()
            .unwrap();
        assert_eq!(report.skipped, vec![temp_dir.path().join("a.txt")]);
        assert_eq!(report.found_files(), 1);
        assert_eq!(fs::read(temp_dir.path().join("a.txt")).unwrap(), b"old");

        let report = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_folder(temp_dir.path())
            .with_overwrite_policy(Overwrite::Always)
            .execute()
            .unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(fs::read(temp_dir.path().join("a.txt")).unwrap(), b"AAA");
    }

    #[test]
    fn should_write_nothing_if_a_later_segment_is_broken() {
        let temp_dir = tempdir().unwrap();
        let secret = temp_dir.path().join("secret.png");
        fs::write(
            &secret,
            b"IEND|file_start:first.bin|1|file_end:first.bin||text_start|cut",
        )
        .unwrap();

        let result = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_folder(temp_dir.path())
            .execute();

        assert!(matches!(
            result,
            Err(SimstegError::UnterminatedSegment { .. })
        ));
        assert!(!temp_dir.path().join("first.bin").exists());
    }

    #[test]
    fn should_reduce_hidden_names_to_their_base_name() {
        assert_eq!(base_name("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(base_name("dir/a.txt").unwrap(), "a.txt");
        assert!(base_name("..").is_err());
        assert!(base_name("").is_err());
    }
}
