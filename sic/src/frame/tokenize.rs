use crate::config::{MAX_OPERANDS, MAX_OPERAND_LEN};

/// A source line split into its first two words and whatever follows them.
#[derive(Debug, Clone, PartialEq)]
pub struct Words<'a> {
    pub first: &'a str,
    pub second: Option<&'a str>,
    pub rest: &'a str,
}

/// Source text holds one `char` per byte, `U+0000` to `U+00FF`, so that
/// byte counts and verbatim output survive text that is not UTF-8.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Inverse of [`decode`].
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u8).collect()
}

fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace()
}

pub fn is_comment(line: &str) -> bool {
    line.trim_start_matches(is_blank).starts_with('.')
}

/// Takes up to two whitespace-delimited words off the front of `line`.
pub fn split_words(line: &str) -> Words<'_> {
    let (first, rest) = next_word(line);
    let (second, rest) = next_word(rest);

    Words {
        first,
        second: (!second.is_empty()).then_some(second),
        rest: rest.trim_matches(is_blank),
    }
}

fn next_word(text: &str) -> (&str, &str) {
    let text = text.trim_start_matches(is_blank);
    match text.find(is_blank) {
        Some(end) => (&text[..end], &text[end..]),
        None => (text, ""),
    }
}

/// Splits operand text on commas and whitespace.
/// Keeps at most [`MAX_OPERANDS`], each cut to [`MAX_OPERAND_LEN`] bytes.
pub fn split_operands<'a>(parts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    parts
        .into_iter()
        .flat_map(|part| part.split(|c: char| c == ',' || is_blank(c)))
        .filter(|operand| !operand.is_empty())
        .take(MAX_OPERANDS)
        .map(|operand| operand.chars().take(MAX_OPERAND_LEN).collect())
        .collect()
}
