//! Token kinds and the positioned token produced by the scanner.

use std::fmt;

/// Classification of a scanned token.
///
/// Closed set: the scanner never produces anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenKind {
    /// Letter or `_` followed by letters, digits, `_`; not a keyword.
    Identifier,
    /// Digit run with at most one decimal point.
    Number,
    /// Double-quoted literal. The token text excludes the quotes.
    String,
    /// One of `( ) { } ; , *`.
    Punctuation,
    /// Identifier that exactly matches the keyword table.
    Keyword,
    /// One of `+ - = / %`.
    Operator,
    /// `...`
    Ellipsis,
    /// Any other single byte.
    Unknown,
    /// Input exhausted. Zero length, empty text.
    #[cfg_attr(feature = "serde", serde(rename = "eof"))]
    EndOfInput,
}

impl TokenKind {
    /// Lowercase name used by reporters (`identifier`, `number`, ..., `eof`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Ellipsis => "ellipsis",
            TokenKind::Unknown => "unknown",
            TokenKind::EndOfInput => "eof",
        }
    }

    /// Classify a byte that did not start any longer token.
    pub(crate) fn of_single_byte(byte: u8) -> Self {
        match byte {
            b'(' | b')' | b'{' | b'}' | b';' | b',' | b'*' => TokenKind::Punctuation,
            b'+' | b'-' | b'=' | b'/' | b'%' => TokenKind::Operator,
            _ => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned span of source text.
///
/// With the `serde` feature, serializes to the reporter's object layout:
/// `{"type", "value", "start", "length", "line"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TokenKind,
    /// Lexeme text. String tokens hold their content without the quotes.
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    pub text: String,
    /// Byte offset of the token's first byte (the opening quote for strings).
    pub start: u32,
    /// Source bytes covered, delimiters included.
    ///
    /// String tokens always count two quote bytes, even when the input ended
    /// before the closing quote.
    pub length: u32,
    /// 1-based line of the token's first byte.
    pub line: u32,
}

impl Token {
    /// The zero-length end-of-input token at `pos`.
    pub fn eof(pos: u32, line: u32) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            start: pos,
            length: 0,
            line,
        }
    }

    /// Exclusive end offset (`start + length`).
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// Returns `true` for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}..{} line {}",
            self.kind,
            self.text,
            self.start,
            self.end(),
            self.line
        )
    }
}

#[cfg(test)]
mod tests;
