//! Command-line interface.

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};

/// Version string printed by `--version`.
pub fn version_string() -> String {
    format!("postboard {}", env!("CARGO_PKG_VERSION"))
}
