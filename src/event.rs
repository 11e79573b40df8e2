// this_file: src/event.rs

//! Parse events: the sole output of the streaming pipeline.

use crate::error::Result;
use crate::number::Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single structural or value event emitted, in document order, by the
/// value parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// The start of a JSON object.
    StartMap,
    /// The end of a JSON object.
    EndMap,
    /// A decoded object key.
    MapKey(String),
    /// The start of a JSON array.
    StartArray,
    /// The end of a JSON array.
    EndArray,
    /// A decoded string value.
    String(String),
    /// A classified number value.
    Number(Number),
    /// A boolean value.
    Boolean(bool),
    /// The JSON `null` value.
    Null,
}

/// Downstream consumer of the event stream.
///
/// Implementations are expected to be infallible in practice; any error
/// they do raise aborts parsing and propagates back to the caller of
/// [`crate::stream::Parser::feed`] or
/// [`crate::stream::Parser::finish`].
pub trait EventSink {
    /// Accepts the next event in document order.
    fn accept(&mut self, event: Event) -> Result<()>;
}

impl EventSink for Vec<Event> {
    fn accept(&mut self, event: Event) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

impl<F> EventSink for F
where
    F: FnMut(Event) -> Result<()>,
{
    fn accept(&mut self, event: Event) -> Result<()> {
        self(event)
    }
}
