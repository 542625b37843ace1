use std::path::PathBuf;

use clap::Args;

use crate::prompt::ConfirmOverwrite;
use crate::CliResult;

/// Unveils all hidden texts and files of a PNG or JPEG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Hidden files will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        default_value = "."
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, overwrite: ConfirmOverwrite) -> CliResult<()> {
        let report =
            simsteg_core::commands::unveil(&self.image, &self.output_folder, overwrite)?;

        for (i, text) in report.texts().enumerate() {
            println!("--- Text {} Start ---", i + 1);
            println!("{text}");
            println!("---- Text {} End ----", i + 1);
        }
        for file in &report.written {
            println!("Successfully extracted file '{}'!", file.display());
        }
        for file in &report.skipped {
            println!("Kept existing file '{}'.", file.display());
        }

        println!();
        println!(
            "Done decoding, {} hidden text message(s) and {} hidden file(s) were found.",
            report.found_texts(),
            report.found_files()
        );

        Ok(())
    }
}
