//! Purpose: Define the lexical units the tokenizer produces.
//! Exports: `Token`, `Structural`.
//! Role: Shape-classified text spans; no kind tag is stored on the token.
//! Invariants: Token text is immutable once built.
//! Invariants: Classification inspects only the token's boundary characters.

/// The fixed JSON punctuation marks, as a closed set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Structural {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Colon,
    Comma,
}

impl Structural {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(Self::ObjectOpen),
            '}' => Some(Self::ObjectClose),
            '[' => Some(Self::ArrayOpen),
            ']' => Some(Self::ArrayClose),
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::ObjectOpen => '{',
            Self::ObjectClose => '}',
            Self::ArrayOpen => '[',
            Self::ArrayClose => ']',
            Self::Colon => ':',
            Self::Comma => ',',
        }
    }
}

/// One contiguous span of input text.
///
/// A token's grammatical kind is not recorded; the validator infers it from
/// shape on demand. Quoted strings keep both delimiting quotes and their
/// contents verbatim. Object and array spans keep the full bracketed text as
/// one opaque token for later re-tokenization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    text: String,
}

impl Token {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Some when the token is exactly one structural character.
    pub fn structural(&self) -> Option<Structural> {
        let mut chars = self.text.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Structural::from_char(first)
    }

    pub fn is_structural(&self) -> bool {
        self.structural().is_some()
    }

    /// Both boundary bytes are double quotes. Contents are not inspected.
    pub fn is_string(&self) -> bool {
        let bytes = self.text.as_bytes();
        matches!((bytes.first(), bytes.last()), (Some(b'"'), Some(b'"')))
    }

    /// Begins with `{`: either an opaque nested-object span or a lone brace.
    /// Both are resolved the same way, by re-tokenizing the text.
    pub fn is_object_span(&self) -> bool {
        self.text.as_bytes().first() == Some(&b'{')
    }

    pub fn is_array_span(&self) -> bool {
        let bytes = self.text.as_bytes();
        matches!((bytes.first(), bytes.last()), (Some(b'['), Some(b']')))
    }
}

#[cfg(test)]
mod tests {
    use super::{Structural, Token};

    fn token(text: &str) -> Token {
        Token::new(text.to_string())
    }

    #[test]
    fn structural_chars_round_trip() {
        for ch in ['{', '}', '[', ']', ':', ','] {
            let mark = Structural::from_char(ch).expect("structural");
            assert_eq!(mark.as_char(), ch);
        }
        assert_eq!(Structural::from_char('x'), None);
        assert_eq!(Structural::from_char('"'), None);
    }

    #[test]
    fn single_char_tokens_classify_as_structural() {
        assert_eq!(token(":").structural(), Some(Structural::Colon));
        assert_eq!(token(",").structural(), Some(Structural::Comma));
        assert_eq!(token("{").structural(), Some(Structural::ObjectOpen));
        assert_eq!(token("::").structural(), None);
        assert_eq!(token("a").structural(), None);
    }

    #[test]
    fn shape_queries_follow_boundary_characters() {
        assert!(token("\"abc\"").is_string());
        assert!(!token("abc").is_string());
        assert!(token("{\"a\":1}").is_object_span());
        assert!(token("[1,2]").is_array_span());
        assert!(!token("[1,2").is_array_span());
    }
}
