//! Low-level scanner for C-like source text.
//!
//! Turns a complete source buffer into a flat sequence of classified
//! [`Token`]s: identifiers, keywords, numbers, strings, punctuation,
//! operators, the `...` ellipsis, and a catch-all `Unknown` kind.
//!
//! The crate performs no I/O. A source provider hands it a byte buffer and a
//! reporter consumes the tokens it produces.
//!
//! # Usage
//!
//! ```
//! use lexme_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::from("int x = 42;");
//! let mut scanner = Scanner::new(buf.cursor());
//!
//! let tok = scanner.next_token();
//! assert_eq!(tok.kind, TokenKind::Keyword);
//! assert_eq!(tok.text, "int");
//! ```
//!
//! # Totality
//!
//! Scanning never fails. Unrecognized bytes become [`TokenKind::Unknown`]
//! tokens, unterminated strings and comments run to end of input, and once
//! the input is exhausted every call returns [`TokenKind::EndOfInput`].

mod cursor;
pub mod keywords;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
