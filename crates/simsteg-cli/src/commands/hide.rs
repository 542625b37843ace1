use std::path::PathBuf;

use clap::Args;

use crate::prompt::ConfirmOverwrite;
use crate::CliResult;

/// Hides a text or a file behind the end of a PNG or JPEG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Image file such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'f',
        long = "file",
        value_name = "data file",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short = 't',
        long = "text",
        value_name = "text message",
        required_unless_present = "file"
    )]
    pub text: Option<String>,
}

impl HideArgs {
    pub fn run(self, overwrite: ConfirmOverwrite) -> CliResult<()> {
        let what = if self.file.is_some() { "File" } else { "Text" };
        let report = simsteg_core::commands::hide(
            &self.image,
            &self.write_to_file,
            self.file,
            self.text,
            overwrite,
        )?;

        log::info!(
            "Source image was copied to the output file. ({} bytes)",
            report.image_len
        );
        println!(
            "{what} was hidden in the image file. ({} bytes)",
            report.framed_len
        );
        println!(
            "The modified image was successfully saved to {}",
            report.output.display()
        );

        Ok(())
    }
}
