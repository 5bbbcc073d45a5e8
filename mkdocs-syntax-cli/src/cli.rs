use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mkdocs_syntax::output::{write_human, write_json};
use mkdocs_syntax::{CheckConfig, DEFAULT_MAX_FILE_SIZE, FsSourceConfig, check_fs};

use crate::logging;

/// Output format for the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per issue plus a summary
    Human,
    /// The full report as pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "mkdocs-syntax",
    version,
    about = "Check MkDocs Material markdown syntax for common issues",
    long_about = "Check MkDocs Material markdown syntax for common issues.\n\n\
        Catches tabs that will not render, admonition content falling outside its \
        container and code escaping indented fences. Exits with status 1 when \
        issues remain."
)]
pub struct Cli {
    /// Files or directories to check
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Auto-fix issues where possible (curly quotes, missing blank lines)
    #[arg(long)]
    pub fix: bool,

    /// Exclude files matching this glob (full path or file name); repeatable
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    pub follow_links: bool,

    /// Skip files larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn fs_config(&self) -> FsSourceConfig {
        let mut config = FsSourceConfig::default();
        config.paths.clone_from(&self.paths);
        config.exclude.clone_from(&self.exclude);
        config.follow_links = self.follow_links;
        config.max_file_size = self.max_file_size;
        config
    }

    fn check_config(&self) -> CheckConfig {
        let mut config = CheckConfig::default();
        config.fix = self.fix;
        config
    }
}

/// Parse arguments, run the check and print the report.
///
/// Returns the process exit status: 0 when nothing is left to do, 1 when
/// issues remain.
///
/// # Errors
///
/// Returns an error if the check cannot run (invalid exclude pattern, failed
/// write-back) or the report cannot be printed.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let report = check_fs(&cli.fs_config(), &cli.check_config())
        .context("markdown syntax check failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => write_human(&report, &mut out)?,
        OutputFormat::Json => write_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(i32::from(!report.ok))
}
