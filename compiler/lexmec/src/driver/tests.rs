use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;
use crate::options::OutputFormat;

/// Write `source` to `<dir>/<name>` and return options that report to
/// `<dir>/out` in `format`.
fn setup(
    dir: &tempfile::TempDir,
    name: &str,
    source: &[u8],
    format: OutputFormat,
) -> (PathBuf, LexOptions) {
    let input = dir.path().join(name);
    fs::write(&input, source).unwrap();
    let options = LexOptions {
        input: Some(input.clone()),
        format,
        output: Some(dir.path().join("out")),
        ..LexOptions::default()
    };
    (input, options)
}

#[test]
fn json_report_written_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let (input, options) = setup(&dir, "main.c", b"int main;", OutputFormat::Json);

    let summary = lex_file(&input, &options).unwrap();
    assert_eq!(
        summary,
        LexSummary {
            tokens: 3,
            unknown: 0,
            truncated_at: None,
        }
    );

    let out = fs::read_to_string(dir.path().join("out")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[1]["type"], "identifier");
    assert_eq!(parsed[1]["value"], "main");
    assert_eq!(parsed[1]["start"], 4);
}

#[test]
fn text_report_written_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let (input, options) = setup(&dir, "t.c", b"x\n#", OutputFormat::Text);

    let summary = lex_file(&input, &options).unwrap();
    assert_eq!(summary.unknown, 1);

    let out = fs::read_to_string(dir.path().join("out")).unwrap();
    let expected = format!(
        "Tokens for '{}' (2 tokens):\n  identifier \"x\" @ 0..1 line 1\n  unknown \"#\" @ 2..3 line 2\n",
        input.display()
    );
    assert_eq!(out, expected);
}

#[test]
fn nul_truncation_is_reported_in_summary() {
    let dir = tempfile::tempdir().unwrap();
    let (input, options) = setup(&dir, "nul.c", b"a\0b c", OutputFormat::Json);

    let summary = lex_file(&input, &options).unwrap();
    assert_eq!(summary.tokens, 1);
    assert_eq!(summary.truncated_at, Some(1));
}

#[test]
fn wrong_extension_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let (input, options) = setup(&dir, "notes.txt", b"x", OutputFormat::Json);

    let err = lex_file(&input, &options).unwrap_err();
    assert!(
        matches!(err, DriverError::Source(SourceError::NotCFile { .. })),
        "{err:?}"
    );
    assert!(!dir.path().join("out").exists());
}

#[test]
fn extension_check_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let (input, mut options) = setup(&dir, "notes.txt", b"x", OutputFormat::Json);
    options.check_extension = false;

    assert_eq!(lex_file(&input, &options).unwrap().tokens, 1);
}

#[test]
fn unwritable_output_is_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let (input, mut options) = setup(&dir, "main.c", b"x", OutputFormat::Json);
    options.output = Some(dir.path().join("missing-dir").join("out"));

    let err = lex_file(&input, &options).unwrap_err();
    assert!(matches!(err, DriverError::Output(_)), "{err:?}");
    assert!(err.to_string().starts_with("cannot write output"));
}
