//! Command-line interface layer.

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;
pub use run::{ResolvedOptions, resolve_options};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
