//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

use crate::config::AppConfig;

/// Usage text printed for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: postboard [OPTIONS]

Options:
  --data-dir <PATH>  Directory for favorites and logs (default: ~/.postboard)
  --url <URL>        Posts endpoint (default: https://jsonplaceholder.typicode.com/posts)
  -V, --version      Print version
  -h, --help         Print help

Keys:
  ↑/k ↓/j PgUp PgDn Home End  move selection
  f / Space / Enter           toggle favorite
  Tab / v                     switch between all posts and favorites
  r / Enter                   retry after an error
  q / Esc / Ctrl+C            quit";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(AppConfig),
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("option '{0}' requires a value")]
    MissingValue(String),
}

/// Parse command-line arguments and return the command to execute.
///
/// Unknown arguments are ignored. `--version` and `--help` win over
/// everything else.
///
/// # Examples
///
/// ```
/// use postboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut config = AppConfig::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                config = config.with_data_dir(value);
            }
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                config = config.with_posts_url(value);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--data-dir=") {
                    config = config.with_data_dir(value);
                } else if let Some(value) = arg.strip_prefix("--url=") {
                    config = config.with_posts_url(value);
                }
            }
        }
    }

    Ok(CliCommand::Run(config))
}
