// this_file: src/error/result.rs

use super::types::Error;

/// Convenience type alias for `Result`s using this crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
