//! CSS Values & Units Level 4 — §6-§7 Lengths and other dimensions
//!
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>
//! Spec: <https://www.w3.org/TR/css-values-4/#other-units>

use core::fmt;

use crate::numeric_type::{NumericBaseType, NumericType};

/// Every unit a `CSSUnitValue` may carry.
///
/// `Number` and `Percent` are the two pseudo-units for `<number>` and `<percentage>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Number,
    Percent,
    // Lengths
    Pixels,
    Ems,
    RootEms,
    Exs,
    Chs,
    ViewportWidth,
    ViewportHeight,
    ViewportMin,
    ViewportMax,
    Centimeters,
    Millimeters,
    QuarterMillimeters,
    Inches,
    Points,
    Picas,
    // Angles
    Degrees,
    Gradians,
    Radians,
    Turns,
    // Times
    Seconds,
    Milliseconds,
    // Frequencies
    Hertz,
    Kilohertz,
    // Resolutions
    DotsPerInch,
    DotsPerCentimeter,
    DotsPerPixel,
    // Flex
    Fractions,
}

impl Unit {
    /// Resolve a unit name as it appears after a number (`px`, `deg`, ...).
    ///
    /// Matching is ASCII case-insensitive. `number` and `percent` are accepted
    /// as the pseudo-unit names used by the Typed OM, and `%` for percentages.
    pub fn from_css_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let unit = match lower.as_str() {
            "number" => Self::Number,
            "percent" | "%" => Self::Percent,
            "px" => Self::Pixels,
            "em" => Self::Ems,
            "rem" => Self::RootEms,
            "ex" => Self::Exs,
            "ch" => Self::Chs,
            "vw" => Self::ViewportWidth,
            "vh" => Self::ViewportHeight,
            "vmin" => Self::ViewportMin,
            "vmax" => Self::ViewportMax,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "q" => Self::QuarterMillimeters,
            "in" => Self::Inches,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            "deg" => Self::Degrees,
            "grad" => Self::Gradians,
            "rad" => Self::Radians,
            "turn" => Self::Turns,
            "s" => Self::Seconds,
            "ms" => Self::Milliseconds,
            "hz" => Self::Hertz,
            "khz" => Self::Kilohertz,
            "dpi" => Self::DotsPerInch,
            "dpcm" => Self::DotsPerCentimeter,
            "dppx" | "x" => Self::DotsPerPixel,
            "fr" => Self::Fractions,
            _ => return None,
        };
        Some(unit)
    }

    /// The suffix used when serializing a value in this unit.
    pub const fn as_css_str(self) -> &'static str {
        match self {
            Self::Number => "",
            Self::Percent => "%",
            Self::Pixels => "px",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::Exs => "ex",
            Self::Chs => "ch",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::QuarterMillimeters => "q",
            Self::Inches => "in",
            Self::Points => "pt",
            Self::Picas => "pc",
            Self::Degrees => "deg",
            Self::Gradians => "grad",
            Self::Radians => "rad",
            Self::Turns => "turn",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Hertz => "hz",
            Self::Kilohertz => "khz",
            Self::DotsPerInch => "dpi",
            Self::DotsPerCentimeter => "dpcm",
            Self::DotsPerPixel => "dppx",
            Self::Fractions => "fr",
        }
    }

    /// The base type this unit contributes to a value's type; `None` for `Number`.
    ///
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssnumericvalue-create-a-type>
    pub const fn base_type(self) -> Option<NumericBaseType> {
        match self {
            Self::Number => None,
            Self::Percent => Some(NumericBaseType::Percent),
            Self::Pixels
            | Self::Ems
            | Self::RootEms
            | Self::Exs
            | Self::Chs
            | Self::ViewportWidth
            | Self::ViewportHeight
            | Self::ViewportMin
            | Self::ViewportMax
            | Self::Centimeters
            | Self::Millimeters
            | Self::QuarterMillimeters
            | Self::Inches
            | Self::Points
            | Self::Picas => Some(NumericBaseType::Length),
            Self::Degrees | Self::Gradians | Self::Radians | Self::Turns => {
                Some(NumericBaseType::Angle)
            }
            Self::Seconds | Self::Milliseconds => Some(NumericBaseType::Time),
            Self::Hertz | Self::Kilohertz => Some(NumericBaseType::Frequency),
            Self::DotsPerInch | Self::DotsPerCentimeter | Self::DotsPerPixel => {
                Some(NumericBaseType::Resolution)
            }
            Self::Fractions => Some(NumericBaseType::Flex),
        }
    }
}

/// A single number paired with a unit (`CSSUnitValue`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitValue {
    pub value: f64,
    pub unit: Unit,
}

impl UnitValue {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A dimensionless `<number>`.
    pub const fn number(value: f64) -> Self {
        Self::new(value, Unit::Number)
    }

    /// A `<percentage>` where `50.0` means `50%`.
    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// An `<angle>` in degrees.
    pub const fn degrees(value: f64) -> Self {
        Self::new(value, Unit::Degrees)
    }

    /// The type derived from the unit: all zero for numbers, otherwise a single exponent of 1.
    pub fn numeric_type(&self) -> NumericType {
        self.unit
            .base_type()
            .map_or(NumericType::NUMBER, NumericType::single)
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_css_str())
    }
}
