// this_file: src/lexeme.rs

//! The smallest syntactic unit the [`crate::lexer::Lexer`] recognizes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The payload of a [`Lexeme`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexemeKind {
    /// A single structural character: `{`, `}`, `[`, `]`, `,`, or `:`.
    Op(char),
    /// A maximal run of bare-word characters: `true`, `false`, `null`, or a
    /// number literal. Classification into one of these is the value
    /// parser's job, not the lexer's.
    Bare(String),
    /// A quoted string literal, including its surrounding double quotes,
    /// with escape sequences still unresolved.
    Str(String),
    /// The distinguished end-of-input sentinel, sent exactly once after the
    /// input source is exhausted.
    Eof,
}

/// A lexeme paired with the absolute byte offset of its first character.
///
/// The offset is counted from the first byte ever fed to the lexer, not
/// from the start of whatever chunk currently happens to be buffered, so it
/// remains a stable location for error reporting even after the lexer has
/// discarded a consumed prefix of its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexeme {
    /// Absolute byte offset of the lexeme's first character.
    pub offset: usize,
    /// The lexeme's payload.
    pub kind: LexemeKind,
}

impl Lexeme {
    /// Returns the lexeme's raw text, as it appeared in the input, for use
    /// in error messages. The `Eof` lexeme renders as `"<eof>"`.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        match &self.kind {
            LexemeKind::Op(c) => std::borrow::Cow::Owned(c.to_string()),
            LexemeKind::Bare(s) | LexemeKind::Str(s) => std::borrow::Cow::Borrowed(s.as_str()),
            LexemeKind::Eof => std::borrow::Cow::Borrowed("<eof>"),
        }
    }
}
