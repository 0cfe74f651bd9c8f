//! Inputs accepted by color component slots and the canonical values they are stored as.
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#typedefdef-csscolorrgbcomp>

use core::fmt;

use css_values_units::{CssKeywordValue, CssNumericValue, MathValue, UnitValue};

/// Everything a component constructor or setter accepts
/// (`CSSNumberish` or `CSSKeywordish` in the Typed OM).
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// A bare number; its meaning depends on the slot's family.
    Number(f64),
    /// A string, always taken as a keyword.
    String(String),
    /// A numeric value that already carries a type.
    Numeric(CssNumericValue),
    /// A keyword value; only `none` is accepted by component slots.
    Keyword(CssKeywordValue),
}

impl From<f64> for ColorInput {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<UnitValue> for ColorInput {
    fn from(value: UnitValue) -> Self {
        Self::Numeric(value.into())
    }
}

impl From<MathValue> for ColorInput {
    fn from(value: MathValue) -> Self {
        Self::Numeric(value.into())
    }
}

impl From<CssNumericValue> for ColorInput {
    fn from(value: CssNumericValue) -> Self {
        Self::Numeric(value)
    }
}

impl From<CssKeywordValue> for ColorInput {
    fn from(keyword: CssKeywordValue) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<ColorComponent> for ColorInput {
    fn from(component: ColorComponent) -> Self {
        match component {
            ColorComponent::Numeric(value) => Self::Numeric(value),
            ColorComponent::Keyword(keyword) => Self::Keyword(keyword),
        }
    }
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::String(text) => f.write_str(text),
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
        }
    }
}

/// `CSSKeywordish`: a string or a keyword value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keywordish {
    String(String),
    Keyword(CssKeywordValue),
}

impl From<&str> for Keywordish {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Keywordish {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<CssKeywordValue> for Keywordish {
    fn from(keyword: CssKeywordValue) -> Self {
        Self::Keyword(keyword)
    }
}

/// A rectified component, as stored in a color value.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorComponent {
    /// A unit value built from a bare number, or a typed value passed through unchanged.
    Numeric(CssNumericValue),
    /// A keyword; `none` unless it came from a plain string.
    Keyword(CssKeywordValue),
}

impl ColorComponent {
    pub const fn as_numeric(&self) -> Option<&CssNumericValue> {
        match self {
            Self::Numeric(value) => Some(value),
            Self::Keyword(_) => None,
        }
    }

    pub const fn as_keyword(&self) -> Option<&CssKeywordValue> {
        match self {
            Self::Numeric(_) => None,
            Self::Keyword(keyword) => Some(keyword),
        }
    }

    /// The plain unit value, if the component is neither a keyword nor a math expression.
    pub fn as_unit(&self) -> Option<&UnitValue> {
        self.as_numeric().and_then(CssNumericValue::as_unit)
    }

    /// Is this the `none` keyword (an explicitly missing component)?
    pub fn is_none(&self) -> bool {
        self.as_keyword().is_some_and(CssKeywordValue::is_none)
    }
}

impl fmt::Display for ColorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
        }
    }
}
