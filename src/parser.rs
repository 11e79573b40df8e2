// this_file: src/parser.rs

//! The Value Parser stage: a pushdown automaton driven one [`Lexeme`] at a
//! time, emitting [`Event`]s as it goes.
//!
//! The grammar has four "real" states — `ValueExpected`, `ArrayElementEnd`,
//! `ObjectKey`, `ObjectEnd` — but two of its transitions need a second
//! lexeme before they can commit to an event: deciding whether a just-opened
//! array or object is empty, and confirming the colon after an object key.
//! A generator-based implementation handles this with an inline second
//! `yield`; here, with no generator primitive, each such point gets its own
//! transient stack state (`ArrayOpen`, `ObjectOpen`, `ObjectColon`) so that
//! a lexeme arriving one `feed_lexeme` call later resumes exactly where the
//! grammar left off.

use crate::error::{Error, Result};
use crate::event::{Event, EventSink};
use crate::lexeme::{Lexeme, LexemeKind};
use crate::number::Number;
use crate::options::ParserOptions;
use crate::string::decode_string_literal;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    /// A value is expected here: a scalar, `[`, or `{`.
    ValueExpected,
    /// Just emitted `start_array`; waiting to see whether it is empty.
    ArrayOpen,
    /// At least one array element has been parsed; waiting for `,` or `]`.
    ArrayElementEnd,
    /// Just emitted `start_map`; waiting to see whether it is empty.
    ObjectOpen,
    /// Waiting for a string lexeme naming the next object key.
    ObjectKey,
    /// A key was decoded and its `map_key` event emitted; waiting for `:`.
    ObjectColon,
    /// At least one key/value pair has been parsed; waiting for `,` or `}`.
    ObjectEnd,
}

/// Outcome of processing a single lexeme against the current stack top.
enum StepResult {
    /// The lexeme was consumed.
    Consumed,
    /// The lexeme was lookahead for the *previous* state and must be
    /// re-fed against the new stack top without pulling another lexeme
    /// from the lexer.
    Reprocess(Lexeme),
}

/// The pushdown automaton described in the module documentation.
///
/// `ValueParser` holds no reference to the lexer or the input buffer: it
/// consumes exactly one [`Lexeme`] per [`ValueParser::feed_lexeme`] call and
/// is otherwise just a stack. This makes every suspension point explicit in
/// the type — there is nothing to save or restore beyond this struct.
#[derive(Debug, Clone)]
pub struct ValueParser {
    stack: Vec<ParseState>,
}

impl Default for ValueParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueParser {
    /// Creates a parser expecting exactly one top-level value.
    pub fn new() -> Self {
        ValueParser {
            stack: vec![ParseState::ValueExpected],
        }
    }

    /// Returns `true` once a complete top-level value has been parsed and
    /// no value is currently in progress (invariant P1). In
    /// `multiple_values` mode this is also the point at which a new
    /// top-level value may begin.
    pub fn is_at_top_level(&self) -> bool {
        self.stack.is_empty()
    }

    /// Feeds one lexeme into the automaton, emitting zero or more events to
    /// `sink`.
    ///
    /// An `Eof` lexeme is handled specially: if the stack is empty, parsing
    /// finishes cleanly; otherwise it is incomplete JSON.
    pub fn feed_lexeme(
        &mut self,
        lexeme: Lexeme,
        options: &ParserOptions,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let mut current = lexeme;
        loop {
            if current.kind == LexemeKind::Eof {
                return if self.stack.is_empty() {
                    Ok(())
                } else {
                    Err(Error::incomplete("Incomplete JSON content"))
                };
            }

            if self.stack.is_empty() {
                if options.multiple_values {
                    self.stack.push(ParseState::ValueExpected);
                    continue;
                }
                return Err(Error::semantic_at("Additional data found", current.offset));
            }

            match self.step(current, options, sink)? {
                StepResult::Consumed => return Ok(()),
                StepResult::Reprocess(lex) => current = lex,
            }
        }
    }

    fn step(
        &mut self,
        lexeme: Lexeme,
        options: &ParserOptions,
        sink: &mut dyn EventSink,
    ) -> Result<StepResult> {
        match self.stack.last().expect("stack checked non-empty by caller") {
            ParseState::ValueExpected => self.on_value_expected(lexeme, options, sink),
            ParseState::ArrayOpen => self.on_array_open(lexeme, sink),
            ParseState::ArrayElementEnd => self.on_array_element_end(lexeme, sink),
            ParseState::ObjectOpen => self.on_object_open(lexeme, sink),
            ParseState::ObjectKey => self.on_object_key(lexeme, sink),
            ParseState::ObjectColon => self.on_object_colon(lexeme),
            ParseState::ObjectEnd => self.on_object_end(lexeme, sink),
        }
    }

    fn on_value_expected(
        &mut self,
        lexeme: Lexeme,
        options: &ParserOptions,
        sink: &mut dyn EventSink,
    ) -> Result<StepResult> {
        match &lexeme.kind {
            LexemeKind::Bare(word) if word == "null" => {
                self.stack.pop();
                sink.accept(Event::Null)?;
            }
            LexemeKind::Bare(word) if word == "true" => {
                self.stack.pop();
                sink.accept(Event::Boolean(true))?;
            }
            LexemeKind::Bare(word) if word == "false" => {
                self.stack.pop();
                sink.accept(Event::Boolean(false))?;
            }
            LexemeKind::Bare(literal) => {
                let number = Number::classify(literal, lexeme.offset, options.use_float)?;
                self.stack.pop();
                sink.accept(Event::Number(number))?;
            }
            LexemeKind::Str(raw) => {
                let decoded = decode_string_literal(raw, lexeme.offset)?;
                self.stack.pop();
                sink.accept(Event::String(decoded))?;
            }
            LexemeKind::Op('[') => {
                self.stack.pop();
                self.stack.push(ParseState::ArrayOpen);
                sink.accept(Event::StartArray)?;
            }
            LexemeKind::Op('{') => {
                self.stack.pop();
                self.stack.push(ParseState::ObjectOpen);
                sink.accept(Event::StartMap)?;
            }
            _ => return Err(unexpected(&lexeme)),
        }
        Ok(StepResult::Consumed)
    }

    fn on_array_open(&mut self, lexeme: Lexeme, sink: &mut dyn EventSink) -> Result<StepResult> {
        self.stack.pop();
        if lexeme.kind == LexemeKind::Op(']') {
            sink.accept(Event::EndArray)?;
            Ok(StepResult::Consumed)
        } else {
            self.stack.push(ParseState::ArrayElementEnd);
            self.stack.push(ParseState::ValueExpected);
            Ok(StepResult::Reprocess(lexeme))
        }
    }

    fn on_array_element_end(
        &mut self,
        lexeme: Lexeme,
        sink: &mut dyn EventSink,
    ) -> Result<StepResult> {
        match &lexeme.kind {
            LexemeKind::Op(',') => {
                self.stack.push(ParseState::ValueExpected);
                Ok(StepResult::Consumed)
            }
            LexemeKind::Op(']') => {
                self.stack.pop();
                sink.accept(Event::EndArray)?;
                Ok(StepResult::Consumed)
            }
            _ => Err(unexpected(&lexeme)),
        }
    }

    fn on_object_open(&mut self, lexeme: Lexeme, sink: &mut dyn EventSink) -> Result<StepResult> {
        self.stack.pop();
        if lexeme.kind == LexemeKind::Op('}') {
            sink.accept(Event::EndMap)?;
            Ok(StepResult::Consumed)
        } else {
            self.stack.push(ParseState::ObjectKey);
            Ok(StepResult::Reprocess(lexeme))
        }
    }

    fn on_object_key(&mut self, lexeme: Lexeme, sink: &mut dyn EventSink) -> Result<StepResult> {
        match &lexeme.kind {
            LexemeKind::Str(raw) => {
                let key = decode_string_literal(raw, lexeme.offset)?;
                self.stack.pop();
                sink.accept(Event::MapKey(key))?;
                self.stack.push(ParseState::ObjectColon);
                Ok(StepResult::Consumed)
            }
            _ => Err(unexpected(&lexeme)),
        }
    }

    fn on_object_colon(&mut self, lexeme: Lexeme) -> Result<StepResult> {
        if lexeme.kind == LexemeKind::Op(':') {
            self.stack.pop();
            self.stack.push(ParseState::ObjectEnd);
            self.stack.push(ParseState::ValueExpected);
            Ok(StepResult::Consumed)
        } else {
            Err(unexpected(&lexeme))
        }
    }

    fn on_object_end(&mut self, lexeme: Lexeme, sink: &mut dyn EventSink) -> Result<StepResult> {
        match &lexeme.kind {
            LexemeKind::Op(',') => {
                self.stack.pop();
                self.stack.push(ParseState::ObjectKey);
                Ok(StepResult::Consumed)
            }
            LexemeKind::Op('}') => {
                self.stack.pop();
                sink.accept(Event::EndMap)?;
                Ok(StepResult::Consumed)
            }
            _ => Err(unexpected(&lexeme)),
        }
    }
}

fn unexpected(lexeme: &Lexeme) -> Error {
    Error::unexpected_symbol(lexeme.text().into_owned(), lexeme.offset)
}
