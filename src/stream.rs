// this_file: src/stream.rs

//! The top-level streaming parser: wires the [`Lexer`] and [`ValueParser`]
//! together behind a `feed`/`finish` interface, and (with the `async`
//! feature) an `AsyncRead`-driven runner on top of that.

use crate::error::{Error, Result};
use crate::event::EventSink;
use crate::lexer::{LexResult, Lexer};
use crate::options::ParserOptions;
use crate::parser::ValueParser;

/// Incremental JSON parser.
///
/// `Parser` owns a [`Lexer`], a [`ValueParser`], and the sink events are
/// delivered to. Feed it bytes in any chunking you like — one byte at a
/// time or the whole document at once produce the same event sequence —
/// and call [`Parser::finish`] once to signal end of input.
///
/// ```
/// use jsonic_stream::{Event, Parser};
///
/// let mut parser = Parser::new(Vec::new());
/// parser.feed(br#"{"a":"#).unwrap();
/// parser.feed(br#"1}"#).unwrap();
/// parser.finish().unwrap();
/// assert_eq!(
///     parser.sink(),
///     &vec![
///         Event::StartMap,
///         Event::MapKey("a".to_string()),
///         Event::Number(jsonic_stream::Number::Integer(1.into())),
///         Event::EndMap,
///     ]
/// );
/// ```
pub struct Parser<S: EventSink> {
    lexer: Lexer,
    value_parser: ValueParser,
    options: ParserOptions,
    sink: S,
    bytes_fed_any: bool,
    finished: bool,
    /// Set to the first error raised by `feed`/`finish`; every later call
    /// re-returns a clone of it instead of touching the lexer or parser
    /// again (§7: "After an error the parser is poisoned").
    poisoned: Option<Error>,
}

impl<S: EventSink> Parser<S> {
    /// Creates a parser with default options, delivering events to `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, ParserOptions::default())
    }

    /// Creates a parser with the given options, delivering events to
    /// `sink`. Returns [`crate::error::Error::Configuration`] if `options`
    /// is not a supported combination.
    pub fn with_options(sink: S, options: ParserOptions) -> Self {
        // Options are validated lazily, on first use, so construction
        // itself is infallible; see `Parser::feed`/`Parser::finish`.
        Parser {
            lexer: Lexer::new(),
            value_parser: ValueParser::new(),
            options,
            sink,
            bytes_fed_any: false,
            finished: false,
            poisoned: None,
        }
    }

    /// Feeds the next chunk of input bytes, driving the lexer and value
    /// parser as far forward as the currently buffered bytes allow.
    ///
    /// `chunk` may be empty, any size, and split on any byte boundary
    /// (including inside a multi-byte UTF-8 character, an escape sequence,
    /// or a number literal): the parser resumes correctly regardless.
    ///
    /// Once `feed` or `finish` has returned an error, the parser is
    /// poisoned: every later call returns a clone of that same error
    /// without touching the lexer or value parser again.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<()> {
        if let Some(err) = &self.poisoned {
            return Err(err.clone());
        }
        let result = self.feed_inner(chunk);
        self.poison_on_err(result)
    }

    fn feed_inner(&mut self, chunk: &[u8]) -> Result<()> {
        self.options.build()?;
        if !chunk.is_empty() {
            self.bytes_fed_any = true;
        }
        self.lexer.feed(chunk);
        self.drain()
    }

    /// Signals that no further bytes will be fed and drains any lexeme
    /// still resolvable from buffered bytes (in particular, the final
    /// `Eof` sentinel).
    ///
    /// If no bytes were ever fed, this returns `Ok(())` without attempting
    /// to parse a value: an entirely empty input is not an incomplete
    /// document, it is simply nothing to parse. Like `feed`, a poisoned
    /// parser short-circuits to a clone of its stored error.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(err) = &self.poisoned {
            return Err(err.clone());
        }
        let result = self.finish_inner();
        self.poison_on_err(result)
    }

    fn finish_inner(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if !self.bytes_fed_any {
            return Ok(());
        }
        self.lexer.finish();
        self.drain()
    }

    fn poison_on_err(&mut self, result: Result<()>) -> Result<()> {
        if let Err(err) = &result {
            self.poisoned = Some(err.clone());
        }
        result
    }

    fn drain(&mut self) -> Result<()> {
        loop {
            match self.lexer.next_lexeme()? {
                LexResult::Ready(lexeme) => {
                    self.value_parser
                        .feed_lexeme(lexeme, &self.options, &mut self.sink)?;
                }
                LexResult::NeedMore => return Ok(()),
            }
        }
    }

    /// Returns a shared reference to the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the parser, returning its event sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Parses a complete, already-available byte slice into a `Vec<Event>`.
///
/// A convenience wrapper around [`Parser`] for callers who have the whole
/// document in memory and just want its events; streaming callers should
/// use [`Parser`] directly.
pub fn parse(input: &[u8]) -> Result<Vec<crate::event::Event>> {
    parse_with_options(input, ParserOptions::default())
}

/// Like [`parse`], with explicit [`ParserOptions`].
pub fn parse_with_options(input: &[u8], options: ParserOptions) -> Result<Vec<crate::event::Event>> {
    let mut parser = Parser::with_options(Vec::new(), options);
    parser.feed(input)?;
    parser.finish()?;
    Ok(parser.into_sink())
}

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use tokio::io::{AsyncRead, AsyncReadExt};

    /// Drives a [`Parser`] from a `tokio` [`AsyncRead`] source, reading in
    /// [`ParserOptions::buf_size`]-sized chunks.
    pub struct AsyncParser<R, S: EventSink> {
        reader: R,
        parser: Parser<S>,
        buf_size: usize,
    }

    impl<R, S> AsyncParser<R, S>
    where
        R: AsyncRead + Unpin,
        S: EventSink,
    {
        /// Creates an async parser with default options.
        pub fn new(reader: R, sink: S) -> Self {
            Self::with_options(reader, sink, ParserOptions::default())
        }

        /// Creates an async parser with explicit options.
        pub fn with_options(reader: R, sink: S, options: ParserOptions) -> Self {
            let buf_size = options.buf_size;
            AsyncParser {
                reader,
                parser: Parser::with_options(sink, options),
                buf_size,
            }
        }

        /// Reads `reader` to completion, feeding every chunk to the
        /// underlying [`Parser`], and returns the finished event sink.
        pub async fn run(mut self) -> Result<S> {
            let mut buf = vec![0u8; self.buf_size.max(1)];
            loop {
                let n = self
                    .reader
                    .read(&mut buf)
                    .await
                    .map_err(|e| crate::error::Error::incomplete(format!("read error: {e}")))?;
                if n == 0 {
                    break;
                }
                self.parser.feed(&buf[..n])?;
            }
            self.parser.finish()?;
            Ok(self.parser.into_sink())
        }
    }
}

#[cfg(feature = "async")]
pub use asynchronous::AsyncParser;
