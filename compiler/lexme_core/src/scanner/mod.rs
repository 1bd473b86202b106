//! Hand-written scanner producing positioned, classified [`Token`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and makes a
//! single forward pass. Each call to [`Scanner::next_token`] first skips
//! trivia, then dispatches on the byte under the cursor.
//!
//! # Trivia
//!
//! Trivia skipping is one fixed pass per token: whitespace, at most one
//! comment, whitespace again. It is not repeated until no trivia remains, so
//! a comment opener that directly follows a skipped comment is scanned as
//! ordinary tokens (`/` is an operator, `*` is punctuation).
//!
//! # Errors
//!
//! There are none. Unknown bytes become [`TokenKind::Unknown`], unterminated
//! strings and block comments run to end of input.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::keywords;
use crate::token::{Token, TokenKind};

/// Forward-only scanner over one source buffer.
///
/// Produces one token per [`next_token`](Self::next_token) call and
/// [`TokenKind::EndOfInput`] forever once the input is exhausted.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `EndOfInput` token when the source is exhausted.
    /// Subsequent calls after that continue to return `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.cursor.pos();
        let line = self.cursor.line();
        match self.cursor.current() {
            0 => self.eof(start, line),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, line),
            b'0'..=b'9' => self.number(start, line),
            b'"' => self.string(start, line),
            b'.' if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' => {
                self.ellipsis(start, line)
            }
            _ => self.single(start, line),
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        self.skip_whitespace();
        self.skip_comment();
        self.skip_whitespace();
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_space);
    }

    fn skip_comment(&mut self) {
        if self.cursor.current() != b'/' {
            return;
        }
        match self.cursor.peek() {
            b'/' => {
                // The newline is left for the next whitespace skip.
                self.cursor.eat_until_newline_or_eof();
            }
            b'*' => {
                self.cursor.advance_n(2); // consume "/*"
                self.cursor.eat_past(b"*/");
            }
            _ => {}
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32, line: u32) -> Token {
        debug_assert!(self.cursor.is_eof(), "zero byte before end of source");
        Token::eof(start, line)
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);
        let text = self.lexeme(start);
        let kind = if keywords::is_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.token(kind, text, start, line)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Digits with at most one `.`; a second `.` ends the number.
    fn number(&mut self, start: u32, line: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let text = self.lexeme(start);
        self.token(TokenKind::Number, text, start, line)
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// Verbatim content up to the next `"`; backslashes are not escapes.
    ///
    /// The length always counts both quotes, so an unterminated string
    /// reports one byte more than it actually covers.
    fn string(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume opening '"'
        let content_start = self.cursor.pos();
        let content_len = self.cursor.eat_until(b'"');
        let text = String::from_utf8_lossy(self.cursor.slice_from(content_start)).into_owned();
        self.cursor.advance(); // consume closing '"' (no-op at EOF)
        Token {
            kind: TokenKind::String,
            text,
            start,
            length: content_len.saturating_add(2),
            line,
        }
    }

    // ─── Symbols ───────────────────────────────────────────────────

    fn ellipsis(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance_n(3);
        self.token(TokenKind::Ellipsis, "...".to_owned(), start, line)
    }

    /// Single-byte token: punctuation, operator, or unknown.
    fn single(&mut self, start: u32, line: u32) -> Token {
        let kind = TokenKind::of_single_byte(self.cursor.current());
        self.cursor.advance();
        let text = self.lexeme(start);
        self.token(kind, text, start, line)
    }

    // ─── Helpers ───────────────────────────────────────────────────

    /// Source text from `start` to the cursor. Invalid UTF-8 becomes U+FFFD.
    fn lexeme(&self, start: u32) -> String {
        String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned()
    }

    /// Token covering `start` to the cursor.
    fn token(&self, kind: TokenKind, text: String, start: u32, line: u32) -> Token {
        Token {
            kind,
            text,
            start,
            length: self.cursor.pos() - start,
            line,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: scan a source buffer and collect all tokens.
///
/// Returns every token except the final `EndOfInput`. For streaming access,
/// construct a [`SourceBuffer`](crate::SourceBuffer) and a [`Scanner`]
/// directly.
pub fn tokenize(source: &[u8]) -> Vec<Token> {
    let buf = crate::SourceBuffer::new(source);
    Scanner::new(buf.cursor()).collect()
}
