//! Command-line configuration for the `lexme` binary.
//!
//! Arguments are parsed by hand: one positional input path plus a few
//! `--flag` / `--flag=value` options.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// How tokens are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON array of token objects.
    #[default]
    Json,
    /// One human-readable line per token.
    Text,
}

impl FromStr for OutputFormat {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(OptionsError::UnknownFormat(other.to_string())),
        }
    }
}

/// Options for a single `lexme` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Source file to scan.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    /// Write the report here instead of stdout.
    pub output: Option<PathBuf>,
    /// Reject inputs whose extension is not `.c`.
    pub check_extension: bool,
    /// `-h` / `--help` was given.
    pub help: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::default(),
            output: None,
            check_extension: true,
            help: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown output format '{0}' (expected 'json' or 'text')")]
    UnknownFormat(String),

    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}' (only one input file is accepted)")]
    UnexpectedArgument(String),
}

/// Parse `lexme` arguments (program name excluded).
///
/// A missing input path is not an error here; the caller decides whether to
/// print usage.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, OptionsError> {
    let mut options = LexOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = format.parse()?;
        } else if let Some(path) = arg.strip_prefix("--output=") {
            if path.is_empty() {
                return Err(OptionsError::MissingValue("--output"));
            }
            options.output = Some(PathBuf::from(path));
        } else if arg == "-o" {
            // -o takes the next argument
            let Some(path) = args.get(i + 1) else {
                return Err(OptionsError::MissingValue("-o"));
            };
            options.output = Some(PathBuf::from(path));
            i += 1;
        } else if arg == "--any-extension" {
            options.check_extension = false;
        } else if arg == "-h" || arg == "--help" {
            options.help = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(OptionsError::UnknownFlag(arg.to_string()));
        } else if options.input.is_none() {
            options.input = Some(PathBuf::from(arg));
        } else {
            return Err(OptionsError::UnexpectedArgument(arg.to_string()));
        }
        i += 1;
    }
    Ok(options)
}
