//! CSS Typed OM Level 1 — §4.1 Numeric value typing
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#numeric-typing>

use core::fmt;

/// One of the seven base types a numeric value's type is built from.
///
/// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssnumericbasetype>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericBaseType {
    Length,
    Angle,
    Time,
    Frequency,
    Resolution,
    Flex,
    Percent,
}

impl NumericBaseType {
    /// Every base type, in `CSSNumericType` dictionary order.
    pub const ALL: [Self; 7] = [
        Self::Length,
        Self::Angle,
        Self::Time,
        Self::Frequency,
        Self::Resolution,
        Self::Flex,
        Self::Percent,
    ];

    /// The dictionary key used by `CSSNumericType` for this base type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Angle => "angle",
            Self::Time => "time",
            Self::Frequency => "frequency",
            Self::Resolution => "resolution",
            Self::Flex => "flex",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for NumericBaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a numeric value: one integer exponent per base type.
///
/// A plain `<number>` has every exponent at zero, `10deg` has `angle = 1`,
/// and `calc(1px * 1px)` has `length = 2`.
///
/// Spec: <https://drafts.css-houdini.org/css-typed-om/#dictdef-cssnumerictype>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumericType {
    pub length: i32,
    pub angle: i32,
    pub time: i32,
    pub frequency: i32,
    pub resolution: i32,
    pub flex: i32,
    pub percent: i32,
}

impl NumericType {
    /// The type of a dimensionless `<number>`.
    pub const NUMBER: Self = Self {
        length: 0,
        angle: 0,
        time: 0,
        frequency: 0,
        resolution: 0,
        flex: 0,
        percent: 0,
    };

    /// A type with a single base type raised to the first power.
    pub fn single(base: NumericBaseType) -> Self {
        Self::NUMBER.with_exponent(base, 1)
    }

    /// Read the exponent stored for `base`.
    pub const fn exponent(&self, base: NumericBaseType) -> i32 {
        match base {
            NumericBaseType::Length => self.length,
            NumericBaseType::Angle => self.angle,
            NumericBaseType::Time => self.time,
            NumericBaseType::Frequency => self.frequency,
            NumericBaseType::Resolution => self.resolution,
            NumericBaseType::Flex => self.flex,
            NumericBaseType::Percent => self.percent,
        }
    }

    /// Every exponent, in the order of [`NumericBaseType::ALL`].
    pub const fn exponents(&self) -> [i32; 7] {
        [
            self.length,
            self.angle,
            self.time,
            self.frequency,
            self.resolution,
            self.flex,
            self.percent,
        ]
    }

    /// Return a copy of this type with the exponent for `base` replaced.
    #[must_use]
    pub fn with_exponent(mut self, base: NumericBaseType, exponent: i32) -> Self {
        match base {
            NumericBaseType::Length => self.length = exponent,
            NumericBaseType::Angle => self.angle = exponent,
            NumericBaseType::Time => self.time = exponent,
            NumericBaseType::Frequency => self.frequency = exponent,
            NumericBaseType::Resolution => self.resolution = exponent,
            NumericBaseType::Flex => self.flex = exponent,
            NumericBaseType::Percent => self.percent = exponent,
        }
        self
    }

    /// Add two types (used by sums, `min()` and `max()`).
    ///
    /// Only identical types can be added; percent hints are not modelled, so
    /// `calc(10px + 5%)` has no type here.
    ///
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssnumericvalue-add-two-types>
    pub fn add_type(self, other: Self) -> Option<Self> {
        (self == other).then_some(self)
    }

    /// Multiply two types by summing their exponents key by key.
    ///
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssnumericvalue-multiply-two-types>
    #[must_use]
    pub fn multiply_type(self, other: Self) -> Self {
        NumericBaseType::ALL.iter().fold(self, |acc, &base| {
            acc.with_exponent(base, acc.exponent(base) + other.exponent(base))
        })
    }

    /// The type of `1 / value`: every exponent negated.
    #[must_use]
    pub fn inverted(self) -> Self {
        NumericBaseType::ALL
            .iter()
            .fold(self, |acc, &base| acc.with_exponent(base, -acc.exponent(base)))
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, base) in NumericBaseType::ALL.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{base}: {}", self.exponent(*base))?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

    use super::*;

    #[test]
    /// # Panics
    /// Panics if a single-key type carries an exponent outside its own key.
    fn single_sets_only_its_key() {
        for base in NumericBaseType::ALL {
            let single = NumericType::single(base);
            for other in NumericBaseType::ALL {
                let expected = i32::from(other == base);
                assert_eq!(single.exponent(other), expected, "{base} vs {other}");
            }
        }
    }

    #[test]
    /// # Panics
    /// Panics if multiplication or inversion produce the wrong exponents.
    fn multiply_and_invert() {
        let length = NumericType::single(NumericBaseType::Length);
        let area = length.multiply_type(length);
        assert_eq!(area.length, 2);
        assert_eq!(area.multiply_type(length.inverted()), length);
        assert_eq!(length.multiply_type(length.inverted()), NumericType::NUMBER);
    }

    #[test]
    /// # Panics
    /// Panics if the exponent list disagrees with the per-key accessor.
    fn exponents_follow_dictionary_order() {
        let mixed = NumericType::single(NumericBaseType::Time)
            .with_exponent(NumericBaseType::Flex, -1);
        assert_eq!(mixed.exponents(), [0, 0, 1, 0, 0, -1, 0]);
        for (base, exponent) in NumericBaseType::ALL.into_iter().zip(mixed.exponents()) {
            assert_eq!(mixed.exponent(base), exponent, "{base}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if unequal types are allowed to add.
    fn add_requires_equal_types() {
        let angle = NumericType::single(NumericBaseType::Angle);
        let percent = NumericType::single(NumericBaseType::Percent);
        assert_eq!(angle.add_type(angle), Some(angle));
        assert_eq!(angle.add_type(percent), None);
    }

    #[test]
    /// # Panics
    /// Panics if the debug rendering loses a key.
    fn display_lists_every_key() {
        let rendered = NumericType::single(NumericBaseType::Flex).to_string();
        assert_eq!(
            rendered,
            "{length: 0, angle: 0, time: 0, frequency: 0, resolution: 0, flex: 1, percent: 0}"
        );
    }
}
