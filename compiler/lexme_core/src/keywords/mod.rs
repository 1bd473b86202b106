//! Reserved keyword table.
//!
//! Matching is exact and case-sensitive: `int` is a keyword, `Int` and
//! `intx` are identifiers. The lookup uses the identifier's length as a
//! first-pass filter (keywords are 2-8 bytes), then compares against the
//! keywords of that length only.

/// Every reserved keyword, in table order.
pub const KEYWORDS: [&str; 25] = [
    "int", "return", "const", "char", "if", "else", "while", "for", "void", "float", "double",
    "struct", "typedef", "enum", "break", "continue", "switch", "case", "default", "do", "goto",
    "sizeof", "static", "extern", "inline",
];

/// Returns `true` if `text` is a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "if" | "do"),
        3 => matches!(text, "int" | "for"),
        4 => matches!(text, "char" | "else" | "void" | "enum" | "case" | "goto"),
        5 => matches!(text, "const" | "while" | "float" | "break"),
        6 => matches!(
            text,
            "return" | "double" | "struct" | "switch" | "sizeof" | "static" | "extern" | "inline"
        ),
        7 => matches!(text, "typedef" | "default"),
        8 => text == "continue",
        _ => false,
    }
}
