//! Reporters: render a token sequence for humans or tools.
//!
//! Both reporters stop at the first `EndOfInput` token; it is never rendered.

use std::io::{self, Write};
use std::path::Path;

use lexme_core::Token;

use crate::options::OutputFormat;

/// Render `tokens` in the requested format.
pub fn render<W: Write>(
    writer: W,
    format: OutputFormat,
    path: &Path,
    tokens: &[Token],
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, tokens),
        OutputFormat::Text => write_text(writer, path, tokens),
    }
}

/// Write the tokens as a pretty-printed JSON array.
///
/// Each element is `{"type", "value", "start", "length", "line"}` with
/// two-space indentation, followed by a trailing newline.
pub fn write_json<W: Write>(mut writer: W, tokens: &[Token]) -> io::Result<()> {
    let tokens = reportable(tokens);
    serde_json::to_writer_pretty(&mut writer, tokens)?;
    writeln!(writer)
}

/// Write a header line and one indented line per token.
pub fn write_text<W: Write>(mut writer: W, path: &Path, tokens: &[Token]) -> io::Result<()> {
    let tokens = reportable(tokens);
    writeln!(
        writer,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        tokens.len()
    )?;
    for tok in tokens {
        writeln!(writer, "  {tok}")?;
    }
    Ok(())
}

/// Tokens before the first `EndOfInput`.
fn reportable(tokens: &[Token]) -> &[Token] {
    let end = tokens
        .iter()
        .position(Token::is_eof)
        .unwrap_or(tokens.len());
    &tokens[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
