//! CSS Typed OM Level 1 — §4.3.1 Matching a numeric value against a CSS production
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#cssnumericvalue-match>
//!
//! Every predicate exists twice: as a method on [`NumericType`] that tests a
//! bare dimension vector, and as a free function that reads the vector out of
//! a [`CssNumericValue`] first.

use crate::numeric_type::{NumericBaseType, NumericType};
use crate::numeric_value::CssNumericValue;

impl NumericType {
    /// True when `base` has exponent exactly 1 and every other key is 0.
    pub fn matches(&self, base: NumericBaseType) -> bool {
        *self == Self::single(base)
    }

    /// Matches `<number>` when every entry of the type is non-zero.
    ///
    /// This is the rule as written in the Typed OM draft. A dimensionless
    /// value has all-zero exponents and therefore does not match.
    pub fn matches_number(&self) -> bool {
        !self.exponents().contains(&0)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#length-value>
    pub fn matches_length(&self) -> bool {
        self.matches(NumericBaseType::Length)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#angle-value>
    pub fn matches_angle(&self) -> bool {
        self.matches(NumericBaseType::Angle)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#time-value>
    pub fn matches_time(&self) -> bool {
        self.matches(NumericBaseType::Time)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#frequency-value>
    pub fn matches_frequency(&self) -> bool {
        self.matches(NumericBaseType::Frequency)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#resolution-value>
    pub fn matches_resolution(&self) -> bool {
        self.matches(NumericBaseType::Resolution)
    }

    /// Spec: <https://drafts.csswg.org/css-grid-2/#typedef-flex>
    pub fn matches_flex(&self) -> bool {
        self.matches(NumericBaseType::Flex)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#percentage-value>
    pub fn matches_percentage(&self) -> bool {
        self.matches(NumericBaseType::Percent)
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#typedef-length-percentage>
    pub fn matches_length_percentage(&self) -> bool {
        self.matches_length() || self.matches_percentage()
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#typedef-angle-percentage>
    pub fn matches_angle_percentage(&self) -> bool {
        self.matches_angle() || self.matches_percentage()
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#typedef-time-percentage>
    pub fn matches_time_percentage(&self) -> bool {
        self.matches_time() || self.matches_percentage()
    }

    /// Spec: <https://drafts.csswg.org/css-values-4/#typedef-frequency-percentage>
    pub fn matches_frequency_percentage(&self) -> bool {
        self.matches_frequency() || self.matches_percentage()
    }
}

/// Does `value`'s type consist of `base` to the first power and nothing else?
pub fn matches(value: &CssNumericValue, base: NumericBaseType) -> bool {
    value.numeric_type().matches(base)
}

/// See [`NumericType::matches_number`] for the (literal) rule.
pub fn matches_number(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_number()
}

/// `<length>`: see [`NumericType::matches_length`].
pub fn matches_length(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_length()
}

/// `<angle>`: see [`NumericType::matches_angle`].
pub fn matches_angle(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_angle()
}

/// `<time>`: see [`NumericType::matches_time`].
pub fn matches_time(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_time()
}

/// `<frequency>`: see [`NumericType::matches_frequency`].
pub fn matches_frequency(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_frequency()
}

/// `<resolution>`: see [`NumericType::matches_resolution`].
pub fn matches_resolution(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_resolution()
}

/// `<flex>`, i.e. `fr` units.
pub fn matches_flex(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_flex()
}

/// `<percentage>`. Used by every percent-only color slot.
pub fn matches_percentage(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_percentage()
}

/// `<length-percentage>`: a length or a percentage, never a mix of both.
pub fn matches_length_percentage(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_length_percentage()
}

/// `<angle-percentage>`: see [`NumericType::matches_angle_percentage`].
pub fn matches_angle_percentage(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_angle_percentage()
}

/// `<time-percentage>`: see [`NumericType::matches_time_percentage`].
pub fn matches_time_percentage(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_time_percentage()
}

/// `<frequency-percentage>`: see [`NumericType::matches_frequency_percentage`].
pub fn matches_frequency_percentage(value: &CssNumericValue) -> bool {
    value.numeric_type().matches_frequency_percentage()
}
