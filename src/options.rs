// this_file: src/options.rs

//! Parser configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration accepted by [`crate::stream::Parser`] and
/// [`crate::stream::AsyncParser`].
///
/// Validated once, at construction time (`ParserOptions::build`), rather
/// than on every byte: an invalid combination becomes an
/// [`Error::Configuration`] before a single lexeme is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserOptions {
    /// Accept a whitespace-separated concatenation of top-level JSON
    /// values rather than exactly one. Default: `false`.
    pub multiple_values: bool,
    /// Decode non-integer numbers to `f64` instead of an arbitrary-precision
    /// decimal. Default: `false`.
    pub use_float: bool,
    /// Reserved. The core lexer does not implement comment skipping;
    /// setting this to `true` is rejected by [`ParserOptions::build`].
    pub allow_comments: bool,
    /// Byte count requested per upstream read by
    /// [`crate::stream::AsyncParser`]. Default: 64 KiB, matching the
    /// buffered async reader this crate's reference implementation uses.
    pub buf_size: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            multiple_values: false,
            use_float: false,
            allow_comments: false,
            buf_size: 64 * 1024,
        }
    }
}

impl ParserOptions {
    /// Returns a builder-style options value with `multiple_values` set.
    pub fn with_multiple_values(mut self, value: bool) -> Self {
        self.multiple_values = value;
        self
    }

    /// Returns a builder-style options value with `use_float` set.
    pub fn with_use_float(mut self, value: bool) -> Self {
        self.use_float = value;
        self
    }

    /// Returns a builder-style options value with `allow_comments` set.
    pub fn with_allow_comments(mut self, value: bool) -> Self {
        self.allow_comments = value;
        self
    }

    /// Returns a builder-style options value with `buf_size` set.
    pub fn with_buf_size(mut self, value: usize) -> Self {
        self.buf_size = value;
        self
    }

    /// Validates the option combination, returning a
    /// [`Error::Configuration`] if it is unsupported.
    pub fn build(self) -> Result<Self> {
        if self.allow_comments {
            return Err(Error::configuration(
                "allow_comments is not supported by this parser core",
            ));
        }
        Ok(self)
    }
}
