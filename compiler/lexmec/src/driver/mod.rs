//! Source provider → scanner → reporter.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use lexme_core::{Scanner, SourceBuffer, Token, TokenKind};
use thiserror::Error;

use crate::options::LexOptions;
use crate::report;
use crate::source::{self, SourceError};

/// Failure of a `lexme` run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Counts from a completed run, also logged at debug level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens reported (end-of-input excluded).
    pub tokens: usize,
    /// How many of them are `Unknown`.
    pub unknown: usize,
    /// Offset where an interior NUL cut the source short.
    pub truncated_at: Option<u32>,
}

/// Scan one file and write its report to `options.output` or stdout.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn lex_file(path: &Path, options: &LexOptions) -> Result<LexSummary, DriverError> {
    let bytes = source::read_c_file(path, options.check_extension)?;
    tracing::debug!(bytes = bytes.len(), "read source");

    let buffer = SourceBuffer::new(&bytes);
    if let Some(offset) = buffer.truncated_at() {
        tracing::warn!(offset, "source contains a NUL byte; scanning stops there");
    }

    let tokens: Vec<Token> = Scanner::new(buffer.cursor()).collect();
    let summary = LexSummary {
        tokens: tokens.len(),
        unknown: tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .count(),
        truncated_at: buffer.truncated_at(),
    };
    tracing::debug!(
        tokens = summary.tokens,
        unknown = summary.unknown,
        "scanned source"
    );

    match &options.output {
        Some(out_path) => {
            let mut writer = BufWriter::new(File::create(out_path)?);
            report::render(&mut writer, options.format, path, &tokens)?;
            writer.flush()?;
            tracing::debug!(output = %out_path.display(), "wrote report");
        }
        None => {
            let mut writer = io::stdout().lock();
            report::render(&mut writer, options.format, path, &tokens)?;
            writer.flush()?;
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test setup uses unwrap for clarity")]
mod tests;
