//! Command-line dispatch for the `lexme` binary.
//!
//! `main` only collects arguments, prints errors and sets the exit status;
//! everything else lives here so it can be tested without a process.

use std::io::{self, Write};

use thiserror::Error;

use crate::driver::{lex_file, DriverError};
use crate::options::{parse_lex_options, OptionsError};

/// Failure of one `lexme` invocation. The binary exits with status 1 on any.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("no input file given")]
    MissingInput,

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("cannot write usage: {0}")]
    Usage(#[source] io::Error),
}

/// Run `lexme` with `args` (program name excluded).
///
/// The usage text goes to `usage_out` for `--help`, a missing input file or
/// bad options; the token report goes where the options say.
pub fn run<W: Write>(args: &[String], mut usage_out: W) -> Result<(), CliError> {
    let options = match parse_lex_options(args) {
        Ok(options) => options,
        Err(e) => {
            write_usage(&mut usage_out).map_err(CliError::Usage)?;
            return Err(e.into());
        }
    };

    if options.help {
        return write_usage(&mut usage_out).map_err(CliError::Usage);
    }

    let Some(path) = options.input.as_deref() else {
        write_usage(&mut usage_out).map_err(CliError::Usage)?;
        return Err(CliError::MissingInput);
    };

    let summary = lex_file(path, &options)?;
    tracing::debug!(tokens = summary.tokens, "lexme finished");
    Ok(())
}

/// Write the usage banner and option list.
pub fn write_usage<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(
        w,
        "\t\t'LexMe' is minimized lexical analysis tokenizer for compiler development's first stage ..."
    )?;
    writeln!(w)?;
    writeln!(w, "[>] lexme <file.c> [options]")?;
    writeln!(w)?;
    writeln!(w, "Options:")?;
    writeln!(w, "  --format=<fmt>     Output format: json (default), text")?;
    writeln!(w, "  -o <path>          Write the report to <path> instead of stdout")?;
    writeln!(w, "  --output=<path>    Same as -o")?;
    writeln!(w, "  --any-extension    Accept inputs that do not end in .c")?;
    writeln!(w, "  -h, --help         Show this message")?;
    writeln!(w)?;
    writeln!(w, "Set RUST_LOG=lexmec=debug for diagnostic logging on stderr.")?;
    w.flush()
}
