use pretty_assertions::assert_eq;

use lexme_core::{tokenize, Token, TokenKind};

use super::*;

fn json(source: &str) -> String {
    let mut out = Vec::new();
    write_json(&mut out, &tokenize(source.as_bytes())).unwrap();
    String::from_utf8(out).unwrap()
}

fn text(source: &str) -> String {
    let mut out = Vec::new();
    write_text(&mut out, Path::new("demo.c"), &tokenize(source.as_bytes())).unwrap();
    String::from_utf8(out).unwrap()
}

// === JSON ===

#[test]
fn json_layout_matches_reference() {
    let expected = r#"[
  {
    "type": "keyword",
    "value": "int",
    "start": 0,
    "length": 3,
    "line": 1
  },
  {
    "type": "identifier",
    "value": "x",
    "start": 4,
    "length": 1,
    "line": 1
  },
  {
    "type": "punctuation",
    "value": ";",
    "start": 5,
    "length": 1,
    "line": 1
  }
]
"#;
    assert_eq!(json("int x;"), expected);
}

#[test]
fn json_kind_names() {
    let out = json("a 1 \"s\" ( if + ... #");
    for name in [
        "identifier",
        "number",
        "string",
        "punctuation",
        "keyword",
        "operator",
        "ellipsis",
        "unknown",
    ] {
        assert!(out.contains(&format!("\"type\": \"{name}\"")), "{name}");
    }
    assert!(!out.contains("eof"));
}

#[test]
fn json_string_value_is_escaped() {
    let out = json("\"say \\\"");
    // Content is `say \`; the backslash must be escaped in JSON.
    assert!(out.contains(r#""value": "say \\""#), "{out}");
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["value"], "say \\");
    assert_eq!(parsed[0]["length"], 7);
}

#[test]
fn json_empty_source() {
    assert_eq!(json("// only a comment"), "[]\n");
}

#[test]
fn json_stops_at_eof_token() {
    let tokens = vec![
        Token {
            kind: TokenKind::Identifier,
            text: "a".into(),
            start: 0,
            length: 1,
            line: 1,
        },
        Token::eof(1, 1),
        Token {
            kind: TokenKind::Identifier,
            text: "ghost".into(),
            start: 2,
            length: 5,
            line: 1,
        },
    ];
    let mut out = Vec::new();
    write_json(&mut out, &tokens).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
}

// === Text ===

#[test]
fn text_layout() {
    let expected = "\
Tokens for 'demo.c' (3 tokens):
  keyword \"return\" @ 0..6 line 1
  string \"ok\" @ 7..11 line 1
  punctuation \";\" @ 12..13 line 2
";
    assert_eq!(text("return \"ok\"\n;"), expected);
}

#[test]
fn text_empty_source() {
    assert_eq!(text(""), "Tokens for 'demo.c' (0 tokens):\n");
}

// === Dispatch ===

#[test]
fn render_dispatches_on_format() {
    let tokens = tokenize(b"x");
    let mut as_json = Vec::new();
    render(&mut as_json, OutputFormat::Json, Path::new("a.c"), &tokens).unwrap();
    let mut as_text = Vec::new();
    render(&mut as_text, OutputFormat::Text, Path::new("a.c"), &tokens).unwrap();

    assert!(String::from_utf8(as_json).unwrap().starts_with('['));
    assert!(String::from_utf8(as_text).unwrap().starts_with("Tokens for 'a.c'"));
}
