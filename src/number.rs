// this_file: src/number.rs

//! Numeric classification for bare lexemes that are not `true`, `false`,
//! or `null`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A classified JSON number.
///
/// Integer literals are always represented exactly, regardless of
/// magnitude, using an arbitrary-precision integer: the JSON grammar places
/// no bound on how many digits an integer literal may have, and a
/// fixed-width type would silently misparse anything wider than it.
/// Non-integer literals (anything with a `.`, `e`, or `E`) become either an
/// arbitrary-precision decimal (the default) or an IEEE-754 `f64`,
/// depending on [`crate::options::ParserOptions::use_float`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An exact integer of arbitrary magnitude.
    Integer(BigInt),
    /// An exact decimal of arbitrary precision (the default non-integer
    /// representation).
    Decimal(BigDecimal),
    /// An IEEE-754 binary64 float (opt-in via `use_float`).
    Float(f64),
}

impl Number {
    /// Classifies a bare numeric lexeme's literal text.
    ///
    /// `offset` is the lexeme's absolute byte offset, used to locate any
    /// error raised here.
    pub fn classify(literal: &str, offset: usize, use_float: bool) -> Result<Number> {
        if is_integer_literal(literal) {
            let value = BigInt::from_str(literal)
                .map_err(|_| Error::unexpected_symbol(literal, offset))?;
            return Ok(Number::Integer(value));
        }

        if use_float {
            let value: f64 = literal
                .parse()
                .map_err(|_| Error::unexpected_symbol(literal, offset))?;
            if value.is_infinite() {
                return Err(Error::semantic_at(format!("float overflow: {literal}"), offset));
            }
            Ok(Number::Float(value))
        } else {
            let value = BigDecimal::from_str(literal)
                .map_err(|_| Error::unexpected_symbol(literal, offset))?;
            Ok(Number::Decimal(value))
        }
    }
}

fn is_integer_literal(literal: &str) -> bool {
    !literal.contains('.') && !literal.contains('e') && !literal.contains('E')
}
