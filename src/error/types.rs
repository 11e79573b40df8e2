// this_file: src/error/types.rs

use crate::error::Span;
use thiserror::Error;

/// Structured error codes for programmatic error handling.
///
/// Each error code has a unique identifier so callers can match on error
/// class without pattern-matching the full [`Error`] enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E2001: A lexeme appeared where the grammar did not expect it.
    UnexpectedSymbol,
    /// E2002: Input ended before a complete value (or string, or
    /// structural context) was seen.
    IncompleteJson,
    /// E2003: A semantic error unrelated to grammar shape: number
    /// overflow, or additional top-level data in single-value mode.
    Semantic,
    /// E2004: An invalid combination of parser options.
    Configuration,
}

impl ErrorCode {
    /// Returns the error code as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedSymbol => "E2001",
            ErrorCode::IncompleteJson => "E2002",
            ErrorCode::Semantic => "E2003",
            ErrorCode::Configuration => "E2004",
        }
    }

    /// Returns a brief description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedSymbol => "Unexpected symbol",
            ErrorCode::IncompleteJson => "Incomplete JSON content",
            ErrorCode::Semantic => "Semantic error",
            ErrorCode::Configuration => "Invalid parser configuration",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type produced while lexing or parsing a streamed JSON document.
///
/// Every non-configuration variant carries enough positional information to
/// pin the failure to an absolute offset in the original byte stream, since
/// the lexer's internal buffer may have rotated away the offending bytes by
/// the time the caller inspects the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A lexeme appeared in a position the grammar does not allow there.
    #[error("unexpected symbol '{symbol}' at offset {offset}")]
    UnexpectedSymbol {
        /// The offending lexeme's text.
        symbol: String,
        /// Absolute byte offset of the lexeme.
        offset: usize,
    },

    /// Input ended before a complete value was parsed: inside a string,
    /// inside an open array/object, or (for strict mode) before any value
    /// was seen at all.
    #[error("incomplete JSON content: {reason}")]
    IncompleteJson {
        /// What was left unfinished.
        reason: String,
    },

    /// A semantic error that is not a grammar violation: numeric overflow
    /// to infinity, or trailing data after a complete value when
    /// `multiple_values` is disabled.
    #[error("{reason}")]
    Semantic {
        /// Description of the semantic failure.
        reason: String,
        /// Absolute byte offset associated with the failure, if any.
        offset: Option<usize>,
    },

    /// The requested combination of parser options is not supported.
    #[error("invalid parser configuration: {message}")]
    Configuration {
        /// Description of the invalid configuration.
        message: String,
    },
}

impl Error {
    /// Convenience constructor for [`Error::UnexpectedSymbol`].
    pub fn unexpected_symbol(symbol: impl Into<String>, offset: usize) -> Self {
        Error::UnexpectedSymbol {
            symbol: symbol.into(),
            offset,
        }
    }

    /// Convenience constructor for [`Error::IncompleteJson`].
    pub fn incomplete(reason: impl Into<String>) -> Self {
        Error::IncompleteJson {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for [`Error::Semantic`] with a known offset.
    pub fn semantic_at(reason: impl Into<String>, offset: usize) -> Self {
        Error::Semantic {
            reason: reason.into(),
            offset: Some(offset),
        }
    }

    /// Convenience constructor for [`Error::Semantic`] with no offset.
    pub fn semantic(reason: impl Into<String>) -> Self {
        Error::Semantic {
            reason: reason.into(),
            offset: None,
        }
    }

    /// Convenience constructor for [`Error::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    #[inline(always)]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::UnexpectedSymbol { .. } => ErrorCode::UnexpectedSymbol,
            Error::IncompleteJson { .. } => ErrorCode::IncompleteJson,
            Error::Semantic { .. } => ErrorCode::Semantic,
            Error::Configuration { .. } => ErrorCode::Configuration,
        }
    }

    /// Returns the absolute byte offset associated with this error, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnexpectedSymbol { offset, .. } => Some(*offset),
            Error::Semantic { offset, .. } => *offset,
            Error::IncompleteJson { .. } | Error::Configuration { .. } => None,
        }
    }

    /// Returns a span covering the error location, if available.
    pub fn span(&self) -> Option<Span> {
        self.offset().map(Span::single)
    }

    /// Returns a short diagnostic string combining the error code and
    /// message, e.g. `[E2001] unexpected symbol ',' at offset 12`.
    pub fn diagnostic(&self) -> String {
        format!("[{}] {}", self.code().as_str(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::UnexpectedSymbol.as_str(), "E2001");
        assert_eq!(ErrorCode::IncompleteJson.as_str(), "E2002");
        assert_eq!(ErrorCode::Semantic.as_str(), "E2003");
        assert_eq!(ErrorCode::Configuration.as_str(), "E2004");
    }

    #[test]
    fn error_code_of_variant() {
        let error = Error::unexpected_symbol(",", 5);
        assert_eq!(error.code(), ErrorCode::UnexpectedSymbol);
        assert_eq!(error.offset(), Some(5));

        let error = Error::incomplete("Incomplete JSON content");
        assert_eq!(error.code(), ErrorCode::IncompleteJson);
        assert_eq!(error.offset(), None);

        let error = Error::semantic_at("float overflow: 1e500", 0);
        assert_eq!(error.code(), ErrorCode::Semantic);
        assert_eq!(error.offset(), Some(0));

        let error = Error::configuration("allow_comments is not supported");
        assert_eq!(error.code(), ErrorCode::Configuration);
        assert_eq!(error.offset(), None);
    }

    #[test]
    fn error_span() {
        let error = Error::unexpected_symbol("x", 5);
        assert_eq!(error.span(), Some(Span::single(5)));

        let error = Error::incomplete("eof");
        assert_eq!(error.span(), None);
    }

    #[test]
    fn error_diagnostic() {
        let error = Error::unexpected_symbol(",", 12);
        let diagnostic = error.diagnostic();
        assert!(diagnostic.contains("[E2001]"));
        assert!(diagnostic.contains("unexpected symbol"));
    }

    #[test]
    fn error_display_formatting() {
        let error = Error::unexpected_symbol(",", 5);
        assert_eq!(error.to_string(), "unexpected symbol ',' at offset 5");

        let error = Error::incomplete("Incomplete string lexeme");
        assert_eq!(
            error.to_string(),
            "incomplete JSON content: Incomplete string lexeme"
        );

        let error = Error::semantic("Additional data found");
        assert_eq!(error.to_string(), "Additional data found");

        let error = Error::configuration("allow_comments is not supported");
        assert_eq!(
            error.to_string(),
            "invalid parser configuration: allow_comments is not supported"
        );
    }
}
