//! CSS Values and Units Module Level 4 — numeric and keyword values, as reified by CSS Typed OM.
//!
//! Spec: <https://www.w3.org/TR/css-values-4/>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/>

#![forbid(unsafe_code)]

use core::fmt;
use std::error::Error;

// Per-chapter modules mirroring the CSS Values & Units table of contents.
// Each module links the section it implements.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_6_dimensions;
pub mod matching;
pub mod numeric_type;
pub mod numeric_value;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{CssKeywordValue, parse_keyword};
pub use chapter_4_numbers::{parse_numeric, token_number};
pub use chapter_6_dimensions::{Unit, UnitValue};
pub use matching::*;
pub use numeric_type::{NumericBaseType, NumericType};
pub use numeric_value::{CssNumericValue, MathOperator, MathValue, NumericError, Operands};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A dimension token carried a unit this crate does not know.
    UnknownUnit(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => f.write_str("Unexpected token"),
            Self::UnknownUnit(unit) => write!(f, "Unknown unit: {unit}"),
        }
    }
}

impl Error for ParseError {}
