//! Purpose: Check a token sequence against the JSON object grammar.
//! Exports: `validate`, `is_valid_object`, `is_valid_value`.
//! Role: Second pipeline stage; recursive descent over opaque spans.
//! Invariants: Verdicts are boolean; this module never panics or errors.
//! Invariants: Recursion depth equals object-nesting depth.

use tracing::debug;

use crate::core::token::{Structural, Token};
use crate::core::tokenize::tokenize;

/// Grammatical role expected at the current interior position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Expect {
    Key,
    Colon,
    Value,
    CommaOrEnd,
}

impl Expect {
    fn next(self) -> Self {
        match self {
            Self::Key => Self::Colon,
            Self::Colon => Self::Value,
            Self::Value => Self::CommaOrEnd,
            Self::CommaOrEnd => Self::Key,
        }
    }
}

/// Verdict for one fully materialized input string.
pub fn validate(content: &str) -> bool {
    let tokens = tokenize(content);
    let verdict = is_valid_object(&tokens);
    debug!(tokens = tokens.len(), verdict, "validated input");
    verdict
}

/// The sequence must open with `{`, close with `}`, and cycle through
/// key, colon, value, comma in between. Exactly two tokens form the empty
/// object. The scan accepts when interior tokens run out, whatever role is
/// pending next; an unfinished trailing pair is therefore tolerated, while
/// a trailing comma is not.
pub fn is_valid_object(tokens: &[Token]) -> bool {
    if tokens.len() < 2 {
        return false;
    }
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    if first.structural() != Some(Structural::ObjectOpen)
        || last.structural() != Some(Structural::ObjectClose)
    {
        return false;
    }
    if tokens.len() == 2 {
        return true;
    }

    let interior = &tokens[1..tokens.len() - 1];
    let mut expect = Expect::Key;
    for (idx, token) in interior.iter().enumerate() {
        let ok = match expect {
            Expect::Key => !token.is_structural() && token.is_string(),
            Expect::Colon => token.structural() == Some(Structural::Colon),
            Expect::Value => {
                if token.is_object_span() {
                    is_valid_object(&tokenize(token.as_str()))
                } else {
                    is_valid_value(token)
                }
            }
            Expect::CommaOrEnd => {
                token.structural() == Some(Structural::Comma) && idx != interior.len() - 1
            }
        };
        if !ok {
            return false;
        }
        expect = expect.next();
    }
    true
}

/// Value validity for a single token: quoted string, integer without a
/// leading zero, array span of valid elements, `true`, `false`, or `null`.
pub fn is_valid_value(token: &Token) -> bool {
    if token.is_structural() {
        return false;
    }
    is_valid_value_text(token.as_str())
}

fn is_valid_value_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if bytes.len() == 1 && Structural::from_char(first as char).is_some() {
        return false;
    }
    let last = bytes[bytes.len() - 1];

    if first == b'"' && last == b'"' {
        return true;
    }
    if first.is_ascii_digit() {
        // The leading-zero rule also rejects the literal `0` by itself.
        return first != b'0' && text.parse::<i64>().is_ok();
    }
    if first == b'[' && last == b']' {
        let interior = &text[1..text.len() - 1];
        return split_top_level(interior)
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .all(is_valid_value_text);
    }
    matches!(text, "true" | "false" | "null")
}

/// Split an array interior on commas that sit outside quoted fragments.
/// Bracket depth is not tracked, matching the tokenizer's single-level
/// span capture.
fn split_top_level(interior: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (idx, ch) in interior.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fragments.push(&interior[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    fragments.push(&interior[start..]);
    fragments
}
