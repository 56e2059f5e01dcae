//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: ask-tui [OPTIONS]

Options:
  --ask <QUESTION>     Ask one question, print the answer and exit
  --endpoint <URL>     Answering service endpoint (env: ASK_ENDPOINT)
  --title <TEXT>       Header text (env: ASK_TITLE)
  --supersede          Let a new question replace one still in flight
                       (env: ASK_SUBMIT_POLICY=supersede)
  --log-file <PATH>    Log file location (env: ASK_LOG_FILE)
  -V, --version        Print version
  -h, --help           Print this help";

/// Settings given as flags; `None`/`false` means not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub title: Option<String>,
    pub supersede: bool,
    pub log_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask a single question without the TUI
    Ask {
        question: String,
        overrides: CliOverrides,
    },
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown argument '{0}'")]
    Unknown(String),

    #[error("'{0}' requires a value")]
    MissingValue(String),
}

/// Parse command-line arguments (program name first, as in `std::env::args()`).
///
/// `--version` and `--help` end parsing as soon as they are seen.
///
/// ```
/// use ask_tui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ask-tui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut question: Option<String> = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
        };

        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--ask" => question = Some(value_for("--ask")?),
            "--endpoint" => overrides.endpoint = Some(value_for("--endpoint")?),
            "--title" => overrides.title = Some(value_for("--title")?),
            "--log-file" => overrides.log_file = Some(PathBuf::from(value_for("--log-file")?)),
            "--supersede" => overrides.supersede = true,
            _ => return Err(ArgsError::Unknown(arg.clone())),
        }
    }

    Ok(match question {
        Some(question) => CliCommand::Ask {
            question,
            overrides,
        },
        None => CliCommand::RunTui(overrides),
    })
}
