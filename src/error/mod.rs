// this_file: src/error/mod.rs

//! Error handling for the streaming JSON parser.
//!
//! This module provides the four error kinds the parser can raise
//! ([`Error`]), a structured [`ErrorCode`] for programmatic matching, and a
//! [`Span`] type for absolute byte-offset error locations that survive
//! buffer rotation inside the lexer.

/// Result type alias for convenience.
pub mod result;
/// Span type for absolute byte-offset error locations.
pub mod span;
/// Error type definitions and implementations with structured error codes.
pub mod types;

pub use result::Result;
pub use span::Span;
pub use types::{Error, ErrorCode};
