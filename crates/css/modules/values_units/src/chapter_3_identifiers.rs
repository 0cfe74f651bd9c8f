//! CSS Values & Units Level 4 — §3 Identifiers, reified as `CSSKeywordValue`
//!
//! Spec: <https://www.w3.org/TR/css-values-4/#textual-values>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#keywordvalue-objects>

use core::fmt;

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS keyword. The text is stored exactly as given, case included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssKeywordValue {
    pub value: String,
}

impl CssKeywordValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Is this the `none` keyword? Keywords compare ASCII case-insensitively.
    pub fn is_none(&self) -> bool {
        self.value.eq_ignore_ascii_case("none")
    }
}

impl From<&str> for CssKeywordValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CssKeywordValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CssKeywordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Parse a CSS identifier token into a keyword value.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
pub fn parse_keyword(input: &mut Parser) -> Result<CssKeywordValue, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => Ok(CssKeywordValue::new(&**text)),
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}
