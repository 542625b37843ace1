use std::path::Path;

use dialoguer::Confirm;
use log::warn;
use simsteg_core::OverwritePolicy;

/// Asks on the terminal before replacing a file, unless `--force` was given
#[derive(Debug)]
pub struct ConfirmOverwrite {
    force: bool,
}

impl ConfirmOverwrite {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl OverwritePolicy for ConfirmOverwrite {
    fn allow_overwrite(&mut self, existing: &Path) -> bool {
        if self.force {
            return true;
        }

        Confirm::new()
            .with_prompt(format!(
                "The file '{}' already exists. Do you want to overwrite it?",
                existing.display()
            ))
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!("Could not ask for confirmation: {e}");
                false
            })
    }
}
