use clap::Parser;
use env_logger::Env;

use simsteg_core::SimstegError;

use crate::cli::{CliArgs, Commands};
use crate::prompt::ConfirmOverwrite;

mod cli;
mod commands;
mod prompt;

pub type CliResult<T> = Result<T, SimstegError>;

fn main() -> CliResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let overwrite = ConfirmOverwrite::new(args.force);
    match args.command {
        Commands::Hide(args) => args.run(overwrite),
        Commands::Unveil(args) => args.run(overwrite),
        Commands::UnveilRaw(args) => args.run(overwrite),
    }
}
