//! Command-line interface: argument parsing, `--version`, and one-shot `--ask`.
//!
//! `main` parses arguments before any terminal setup so that `--help`,
//! `--version` and `--ask` never touch the alternate screen.

pub mod args;
pub mod ask;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOverrides, USAGE};
pub use ask::run_ask_command;
pub use version::{version_line, VERSION};
