use std::path::PathBuf;

use clap::Args;

use crate::prompt::ConfirmOverwrite;

/// Dumps all raw bytes behind the end of a PNG or JPEG image
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, overwrite: ConfirmOverwrite) -> crate::CliResult<()> {
        let len = simsteg_core::commands::unveil_raw(&self.image, &self.output_file, overwrite)?;
        println!(
            "Dumped {len} raw bytes to {}",
            self.output_file.display()
        );

        Ok(())
    }
}
