//! CLI argument definitions using clap.
//!
//! Without a subcommand, `langjs` generates the messages script. The only
//! subcommand is `init`, which writes a default `.langjsrc.json`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Options for generating the messages script.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Output file path (overrides config file)
    pub target: Option<PathBuf>,

    /// Translations directory to scan (overrides config file)
    #[arg(short, long, value_name = "DIR", env = "LANGJS_SOURCE")]
    pub source: Option<PathBuf>,

    /// Only bundle these groups, e.g. `messages`, `forum/thread`, `acme::messages`
    /// Can be specified multiple times: -m messages -m validation
    #[arg(short, long = "messages", value_name = "GROUP")]
    pub messages: Vec<String>,

    /// Do not embed the runtime library, export messages only
    #[arg(long)]
    pub no_lib: bool,

    /// Keep keys in file order instead of sorting them
    #[arg(long)]
    pub no_sort: bool,

    /// Write the messages as a plain JSON document
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langjsrc.json configuration file
    Init,
}
