use super::*;

// === Names ===

#[test]
fn kind_names_are_lowercase() {
    let expected = [
        (TokenKind::Identifier, "identifier"),
        (TokenKind::Number, "number"),
        (TokenKind::String, "string"),
        (TokenKind::Punctuation, "punctuation"),
        (TokenKind::Keyword, "keyword"),
        (TokenKind::Operator, "operator"),
        (TokenKind::Ellipsis, "ellipsis"),
        (TokenKind::Unknown, "unknown"),
        (TokenKind::EndOfInput, "eof"),
    ];
    for (kind, name) in expected {
        assert_eq!(kind.name(), name);
        assert_eq!(kind.to_string(), name);
    }
}

// === Single-byte classification ===

#[test]
fn punctuation_bytes() {
    for b in *b"(){};,*" {
        assert_eq!(TokenKind::of_single_byte(b), TokenKind::Punctuation, "{b}");
    }
}

#[test]
fn operator_bytes() {
    for b in *b"+-=/%" {
        assert_eq!(TokenKind::of_single_byte(b), TokenKind::Operator, "{b}");
    }
}

#[test]
fn everything_else_is_unknown() {
    for b in *b".[]<>!&|^~?:#@$'\\`" {
        assert_eq!(TokenKind::of_single_byte(b), TokenKind::Unknown, "{b}");
    }
    assert_eq!(TokenKind::of_single_byte(0xFF), TokenKind::Unknown);
}

// === Token ===

#[test]
fn eof_token_is_empty() {
    let tok = Token::eof(7, 3);
    assert!(tok.is_eof());
    assert_eq!(tok.text, "");
    assert_eq!(tok.start, 7);
    assert_eq!(tok.length, 0);
    assert_eq!(tok.end(), 7);
    assert_eq!(tok.line, 3);
}

#[test]
fn end_is_start_plus_length() {
    let tok = Token {
        kind: TokenKind::String,
        text: "abc".to_string(),
        start: 4,
        length: 5,
        line: 1,
    };
    assert_eq!(tok.end(), 9);
    assert!(!tok.is_eof());
}

#[test]
fn display_shows_kind_text_span_line() {
    let tok = Token {
        kind: TokenKind::Keyword,
        text: "int".to_string(),
        start: 0,
        length: 3,
        line: 1,
    };
    assert_eq!(tok.to_string(), "keyword \"int\" @ 0..3 line 1");
}
