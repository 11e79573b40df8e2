// this_file: src/lib.rs
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! An incremental, event-driven JSON parser.
//!
//! Bytes go in through [`Parser::feed`], in whatever chunking the caller
//! has them in — one byte at a time, in arbitrary-size reads off a socket,
//! or all at once — and structural [`Event`]s come out, in document order,
//! without ever materializing a parse tree. The pipeline is two stages: a
//! byte-level [`lexer::Lexer`] turns the buffer into [`Lexeme`]s, and a
//! [`parser::ValueParser`] pushdown automaton turns lexemes into events.
//! Both stages suspend cleanly at any point where the buffered bytes run
//! out mid-token and resume exactly where they left off once more bytes
//! arrive, so neither needs to see a chunk boundary aligned to anything in
//! particular.
//!
//! ```
//! use jsonic_stream::{Event, Parser};
//!
//! let mut parser = Parser::new(Vec::new());
//! parser.feed(br#"{"ok":tr"#).unwrap();
//! parser.feed(br#"ue}"#).unwrap();
//! parser.finish().unwrap();
//! assert_eq!(
//!     parser.into_sink(),
//!     vec![Event::StartMap, Event::MapKey("ok".to_string()), Event::Boolean(true), Event::EndMap]
//! );
//! ```

/// Error types and result type alias.
pub mod error;

/// Parse events and the [`event::EventSink`] trait downstream consumers implement.
pub mod event;

/// The smallest syntactic unit the lexer recognizes.
pub mod lexeme;

/// The byte-level, resumable lexer.
pub mod lexer;

/// Arbitrary-precision number classification.
pub mod number;

/// Parser configuration.
pub mod options;

/// The value-parser pushdown automaton.
pub mod parser;

/// String literal escape decoding.
pub mod string;

/// The top-level `Parser`/`AsyncParser` driver.
pub mod stream;

pub use error::{Error, ErrorCode, Result, Span};
pub use event::{Event, EventSink};
pub use lexeme::{Lexeme, LexemeKind};
pub use lexer::{LexResult, Lexer};
pub use number::Number;
pub use options::ParserOptions;
pub use parser::ValueParser;
pub use stream::{parse, parse_with_options, Parser};

#[cfg(feature = "async")]
pub use stream::AsyncParser;
