//! CSS Typed OM Level 1 — rectifying color component inputs
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-csscolorrgbcomp>
//!
//! Every slot of a color value belongs to one [`ComponentFamily`]. The four
//! `rectify_*` functions run the same five steps and differ only in the unit
//! given to a bare number and in which types a typed value must match.

use core::fmt;

use css_values_units::{CssKeywordValue, NumericType, Unit, UnitValue};
use log::debug;

use crate::component::{ColorComponent, ColorInput, Keywordish};
use crate::error::ColorError;

/// The kinds of slot a color component can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    /// `CSSColorRGBComp`: `<number>`, `<percentage>` or `none`.
    NumberOrPercent,
    /// `CSSColorPercent`: `<percentage>` or `none`.
    Percent,
    /// `CSSColorNumber`: `<number>` or `none`.
    Number,
    /// `CSSColorAngle`: `<angle>` or `none`.
    Angle,
}

impl ComponentFamily {
    /// Unit given to a bare number.
    pub const fn default_unit(self) -> Unit {
        match self {
            Self::NumberOrPercent | Self::Percent => Unit::Percent,
            Self::Number => Unit::Number,
            Self::Angle => Unit::Degrees,
        }
    }

    /// Factor applied to a bare number; `0.5` in a percent slot means `50%`.
    pub const fn scale(self) -> f64 {
        match self {
            Self::NumberOrPercent | Self::Percent => 100.0,
            Self::Number | Self::Angle => 1.0,
        }
    }

    /// Does a typed value of this type fit the slot?
    pub fn accepts(self, numeric_type: &NumericType) -> bool {
        match self {
            Self::NumberOrPercent => {
                numeric_type.matches_number() || numeric_type.matches_percentage()
            }
            Self::Percent => numeric_type.matches_percentage(),
            Self::Number => numeric_type.matches_number(),
            Self::Angle => numeric_type.matches_angle(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumberOrPercent => "number-or-percentage",
            Self::Percent => "percentage",
            Self::Number => "number",
            Self::Angle => "angle",
        }
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn an identifier into a keyword value.
///
/// Spec: <https://drafts.css-houdini.org/css-typed-om/#reify-an-identifier>
pub fn reify_ident(ident: &str) -> CssKeywordValue {
    CssKeywordValue::new(ident)
}

/// Keywords pass through; strings become new keywords.
///
/// Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-keywordish-value>
pub fn rectify_keywordish(value: Keywordish) -> CssKeywordValue {
    match value {
        Keywordish::String(text) => CssKeywordValue::new(text),
        Keywordish::Keyword(keyword) => keyword,
    }
}

/// Rectify `input` for a slot of the given family.
///
/// # Errors
/// Returns `ColorError::Syntax` when a typed value fails the family's type
/// test, or a keyword value is anything other than `none`.
pub fn rectify(input: ColorInput, family: ComponentFamily) -> Result<ColorComponent, ColorError> {
    match input {
        ColorInput::Number(number) => Ok(ColorComponent::Numeric(
            UnitValue::new(number * family.scale(), family.default_unit()).into(),
        )),
        ColorInput::String(text) => Ok(ColorComponent::Keyword(rectify_keywordish(
            Keywordish::String(text),
        ))),
        ColorInput::Numeric(value) if family.accepts(&value.numeric_type()) => {
            Ok(ColorComponent::Numeric(value))
        }
        ColorInput::Keyword(keyword) if keyword.is_none() => Ok(ColorComponent::Keyword(keyword)),
        rejected @ (ColorInput::Numeric(_) | ColorInput::Keyword(_)) => {
            debug!(target: "css_color", "rejecting {rejected} for a {family} component");
            Err(ColorError::Syntax {
                family,
                found: rejected.to_string(),
            })
        }
    }
}

/// Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-csscolorrgbcomp>
///
/// # Errors
/// Returns `ColorError::Syntax` when the input is neither `<number>`, `<percentage>` nor `none`.
pub fn rectify_number_or_percent(input: ColorInput) -> Result<ColorComponent, ColorError> {
    rectify(input, ComponentFamily::NumberOrPercent)
}

/// Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-csscolorpercent>
///
/// # Errors
/// Returns `ColorError::Syntax` when the input is neither `<percentage>` nor `none`.
pub fn rectify_percent(input: ColorInput) -> Result<ColorComponent, ColorError> {
    rectify(input, ComponentFamily::Percent)
}

/// Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-csscolornumber>
///
/// # Errors
/// Returns `ColorError::Syntax` when the input is neither `<number>` nor `none`.
pub fn rectify_number(input: ColorInput) -> Result<ColorComponent, ColorError> {
    rectify(input, ComponentFamily::Number)
}

/// Spec: <https://drafts.css-houdini.org/css-typed-om/#rectify-a-csscolorangle>
///
/// # Errors
/// Returns `ColorError::Syntax` when the input is neither `<angle>` nor `none`.
pub fn rectify_angle(input: ColorInput) -> Result<ColorComponent, ColorError> {
    rectify(input, ComponentFamily::Angle)
}
