//! Dispatches parsed arguments.
//!
//! Option precedence: command-line argument, then `.langjsrc.json`, then defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::{Arguments, Command, GenerateArgs},
    exit_status::ExitStatus,
    report,
};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json, load_config, validate_group};
use crate::core::{GenerateOptions, Generator, GroupFilter, OutputFormat};
use crate::writer::write_output;

pub fn run(Arguments { command, generate }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        None => generate_command(generate),
    }
}

/// Everything one generation run needs, after merging CLI and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub source_root: PathBuf,
    pub target: PathBuf,
    pub filter: Option<GroupFilter>,
    pub sort: bool,
    pub generate: GenerateOptions,
}

/// Merge CLI arguments over the config.
///
/// CLI paths stay relative to the working directory. Relative config paths are
/// joined onto `config_dir`, the directory holding `.langjsrc.json`.
pub fn resolve_options(
    args: &GenerateArgs,
    config: &Config,
    config_dir: Option<&Path>,
) -> Result<ResolvedOptions> {
    for group in &args.messages {
        validate_group(group).context("Invalid --messages value")?;
    }

    let groups = if args.messages.is_empty() {
        &config.messages
    } else {
        &args.messages
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.format
    };

    Ok(ResolvedOptions {
        source_root: args
            .source
            .clone()
            .unwrap_or_else(|| config_path(&config.source_root, config_dir)),
        target: args
            .target
            .clone()
            .unwrap_or_else(|| config_path(&config.target, config_dir)),
        filter: GroupFilter::from_entries(groups),
        sort: config.sort && !args.no_sort,
        generate: GenerateOptions {
            include_library: !(args.no_lib || config.no_lib),
            format,
        },
    })
}

fn config_path(value: &str, config_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(value);
    match config_dir {
        Some(dir) if !dir.as_os_str().is_empty() => {
            dir.join(path.strip_prefix(".").unwrap_or(path))
        }
        _ => path.to_path_buf(),
    }
}

fn generate_command(args: GenerateArgs) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    // Empty when the config sits in the working directory.
    let config_dir = loaded
        .config_dir
        .as_deref()
        .map(|dir| dir.strip_prefix(&cwd).unwrap_or(dir));
    let options = resolve_options(&args, &loaded.config, config_dir)?;

    if args.verbose {
        let origin = if loaded.config_dir.is_some() {
            CONFIG_FILE_NAME
        } else {
            "defaults"
        };
        eprintln!(
            "{} scanning {} (config: {})",
            "info:".bold().cyan(),
            options.source_root.display(),
            origin
        );
    }

    let generator = Generator::new(&options.source_root)
        .with_filter(options.filter.clone())
        .with_sort(options.sort);
    let generated = generator.generate(&options.generate)?;

    if args.verbose {
        report::print_details(generator.source_root(), &generated.report);
    }
    report::print_empty_warning(&generated.report);

    write_output(&options.target, &generated.output)?;
    report::print_success(&options.target, &generated.report);

    Ok(ExitStatus::Success)
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        report::SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
