//! Purpose: Turn raw text into the flat token sequence the validator consumes.
//! Exports: `tokenize`.
//! Role: First pipeline stage; a total function over arbitrary input.
//! Invariants: Never fails; malformed input yields tokens the validator rejects.
//! Invariants: Only space and newline are skipped, and only outside captures.
//! Notes: Span capture closes on the first matching close character, so nested
//! structure is reliable for a single level only.

use tracing::debug;

use crate::core::token::{Structural, Token};

/// Capture mode of the scanner.
enum Mode {
    Normal,
    InString,
    ObjectSpan,
    ArraySpan,
}

/// Scan `content` into an ordered token sequence.
///
/// The first `{` of the whole input is emitted as a standalone structural
/// token. Every later `{` seen outside a capture starts an opaque object
/// span ending at the next `}`; `[` starts an opaque array span ending at
/// the next `]`. Quoted strings keep every interior character, delimiters
/// included. A partially accumulated token at end of input is discarded.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut mode = Mode::Normal;
    let mut seen_top_open = false;

    for ch in content.chars() {
        match mode {
            Mode::ObjectSpan => {
                buf.push(ch);
                if ch == '}' {
                    tokens.push(Token::new(std::mem::take(&mut buf)));
                    mode = Mode::Normal;
                }
            }
            Mode::ArraySpan => {
                buf.push(ch);
                if ch == ']' {
                    tokens.push(Token::new(std::mem::take(&mut buf)));
                    mode = Mode::Normal;
                }
            }
            Mode::InString => {
                buf.push(ch);
                if ch == '"' {
                    tokens.push(Token::new(std::mem::take(&mut buf)));
                    mode = Mode::Normal;
                }
            }
            Mode::Normal => {
                if ch == '"' {
                    buf.push(ch);
                    mode = Mode::InString;
                } else if ch == ' ' || ch == '\n' {
                    if !buf.is_empty() {
                        tokens.push(Token::new(std::mem::take(&mut buf)));
                    }
                } else if let Some(mark) = Structural::from_char(ch) {
                    match mark {
                        Structural::ObjectOpen if !seen_top_open => {
                            seen_top_open = true;
                            tokens.push(Token::new(ch.to_string()));
                        }
                        Structural::ObjectOpen => {
                            buf.push(ch);
                            mode = Mode::ObjectSpan;
                        }
                        Structural::ArrayOpen => {
                            buf.push(ch);
                            mode = Mode::ArraySpan;
                        }
                        Structural::ObjectClose
                        | Structural::ArrayClose
                        | Structural::Colon
                        | Structural::Comma => {
                            if !buf.is_empty() {
                                tokens.push(Token::new(std::mem::take(&mut buf)));
                            }
                            tokens.push(Token::new(ch.to_string()));
                        }
                    }
                } else {
                    buf.push(ch);
                }
            }
        }
    }

    debug!(count = tokens.len(), "tokenized input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input)
            .into_iter()
            .map(|token| token.as_str().to_string())
            .collect()
    }

    #[test]
    fn empty_object_yields_two_tokens() {
        assert_eq!(texts("{}"), ["{", "}"]);
    }

    #[test]
    fn simple_pair_splits_into_five_tokens() {
        assert_eq!(texts(r#"{"a":"b"}"#), ["{", "\"a\"", ":", "\"b\"", "}"]);
    }

    #[test]
    fn whitespace_outside_captures_is_dropped() {
        assert_eq!(
            texts("{ \"a\" : 42 ,\n\"b\" : true }"),
            ["{", "\"a\"", ":", "42", ",", "\"b\"", ":", "true", "}"]
        );
    }

    #[test]
    fn whitespace_ends_a_bare_literal() {
        assert_eq!(texts(r#"{"a":tr ue}"#), ["{", "\"a\"", ":", "tr", "ue", "}"]);
    }

    #[test]
    fn strings_keep_structural_characters_verbatim() {
        assert_eq!(
            texts(r#"{"a":"x{,}: y"}"#),
            ["{", "\"a\"", ":", "\"x{,}: y\"", "}"]
        );
    }

    #[test]
    fn first_brace_is_standalone_later_braces_open_spans() {
        assert_eq!(
            texts(r#"{"a":{"b":"c"}}"#),
            ["{", "\"a\"", ":", "{\"b\":\"c\"}", "}"]
        );
    }

    #[test]
    fn object_span_closes_on_first_close_brace() {
        // Two nesting levels: the span ends at the innermost close, leaving
        // the remainder to the outer scan.
        assert_eq!(
            texts(r#"{"a":{"b":{"c":"d"}}}"#),
            ["{", "\"a\"", ":", "{\"b\":{\"c\":\"d\"}", "}", "}"]
        );
    }

    #[test]
    fn array_span_is_captured_whole_with_whitespace() {
        assert_eq!(
            texts(r#"{"a":[1, 2]}"#),
            ["{", "\"a\"", ":", "[1, 2]", "}"]
        );
    }

    #[test]
    fn partial_token_at_end_of_input_is_discarded() {
        assert_eq!(texts(r#"{"a":tru"#), ["{", "\"a\"", ":"]);
        assert_eq!(texts(r#"{"a":"unterminated"#), ["{", "\"a\"", ":"]);
        assert_eq!(texts(r#"{"a":[1,2"#), ["{", "\"a\"", ":"]);
    }

    #[test]
    fn trailing_garbage_after_balanced_object_never_flushes() {
        assert_eq!(texts("{}garbage"), ["{", "}"]);
    }
}
