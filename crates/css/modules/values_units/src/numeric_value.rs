//! CSS Typed OM Level 1 — §4.3 Numeric values (`CSSNumericValue`, `CSSMathValue`)
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#numeric-objects>

use core::fmt;
use std::error::Error;

use log::debug;
use smallvec::SmallVec;

use crate::chapter_6_dimensions::UnitValue;
use crate::numeric_type::NumericType;

/// Errors raised while building a numeric value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericError {
    /// Two operands of a sum, `min()` or `max()` have different types.
    IncompatibleTypes {
        left: NumericType,
        right: NumericType,
    },
    /// A variadic math operator was given no operands.
    EmptyOperands,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleTypes { left, right } => {
                write!(f, "Incompatible numeric types: {left} and {right}")
            }
            Self::EmptyOperands => f.write_str("Math value needs at least one operand"),
        }
    }
}

impl Error for NumericError {}

/// Operators of `CSSMathValue` subclasses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathOperator {
    Sum,
    Product,
    Negate,
    Invert,
    Min,
    Max,
}

impl MathOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Negate => "negate",
            Self::Invert => "invert",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Operand storage; most `calc()` expressions have one or two terms.
pub type Operands = SmallVec<CssNumericValue, 2>;

/// A calculated value that keeps its expression tree (`calc()`, `min()`, `max()`).
///
/// The type is computed once when the value is built and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct MathValue {
    operator: MathOperator,
    operands: Operands,
    numeric_type: NumericType,
}

impl MathValue {
    /// `CSSMathSum`: all operands must share one type.
    ///
    /// # Errors
    /// Returns `NumericError::EmptyOperands` or `NumericError::IncompatibleTypes`.
    pub fn sum<I>(operands: I) -> Result<Self, NumericError>
    where
        I: IntoIterator<Item = CssNumericValue>,
    {
        Self::additive(MathOperator::Sum, operands.into_iter().collect())
    }

    /// `CSSMathMin`.
    ///
    /// # Errors
    /// Returns `NumericError::EmptyOperands` or `NumericError::IncompatibleTypes`.
    pub fn min<I>(operands: I) -> Result<Self, NumericError>
    where
        I: IntoIterator<Item = CssNumericValue>,
    {
        Self::additive(MathOperator::Min, operands.into_iter().collect())
    }

    /// `CSSMathMax`.
    ///
    /// # Errors
    /// Returns `NumericError::EmptyOperands` or `NumericError::IncompatibleTypes`.
    pub fn max<I>(operands: I) -> Result<Self, NumericError>
    where
        I: IntoIterator<Item = CssNumericValue>,
    {
        Self::additive(MathOperator::Max, operands.into_iter().collect())
    }

    /// `CSSMathProduct`: exponents of all operands are summed.
    ///
    /// # Errors
    /// Returns `NumericError::EmptyOperands` when `operands` is empty.
    pub fn product<I>(operands: I) -> Result<Self, NumericError>
    where
        I: IntoIterator<Item = CssNumericValue>,
    {
        let operands: Operands = operands.into_iter().collect();
        let mut types = operands.iter().map(CssNumericValue::numeric_type);
        let first = types.next().ok_or(NumericError::EmptyOperands)?;
        let numeric_type = types.fold(first, NumericType::multiply_type);
        Ok(Self {
            operator: MathOperator::Product,
            operands,
            numeric_type,
        })
    }

    /// `CSSMathNegate`: same type as its operand.
    pub fn negate(operand: CssNumericValue) -> Self {
        let numeric_type = operand.numeric_type();
        let mut operands = Operands::new();
        operands.push(operand);
        Self {
            operator: MathOperator::Negate,
            operands,
            numeric_type,
        }
    }

    /// `CSSMathInvert`: every exponent of the operand's type is negated.
    pub fn invert(operand: CssNumericValue) -> Self {
        let numeric_type = operand.numeric_type().inverted();
        let mut operands = Operands::new();
        operands.push(operand);
        Self {
            operator: MathOperator::Invert,
            operands,
            numeric_type,
        }
    }

    fn additive(operator: MathOperator, operands: Operands) -> Result<Self, NumericError> {
        let mut types = operands.iter().map(CssNumericValue::numeric_type);
        let first = types.next().ok_or(NumericError::EmptyOperands)?;
        let numeric_type = types.try_fold(first, |left, right| {
            left.add_type(right).ok_or_else(|| {
                debug!(
                    target: "css_values_units",
                    "{} of {left} and {right} has no common type",
                    operator.as_str()
                );
                NumericError::IncompatibleTypes { left, right }
            })
        })?;
        Ok(Self {
            operator,
            operands,
            numeric_type,
        })
    }

    pub const fn operator(&self) -> MathOperator {
        self.operator
    }

    pub fn operands(&self) -> &[CssNumericValue] {
        &self.operands
    }

    pub const fn numeric_type(&self) -> NumericType {
        self.numeric_type
    }
}

impl fmt::Display for MathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, separator, close) = match self.operator {
            MathOperator::Sum => ("calc(", " + ", ")"),
            MathOperator::Product => ("calc(", " * ", ")"),
            MathOperator::Negate => ("(-1 * ", "", ")"),
            MathOperator::Invert => ("(1 / ", "", ")"),
            MathOperator::Min => ("min(", ", ", ")"),
            MathOperator::Max => ("max(", ", ", ")"),
        };
        f.write_str(open)?;
        for (position, operand) in self.operands.iter().enumerate() {
            if position > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{operand}")?;
        }
        f.write_str(close)
    }
}

/// `CSSNumericValue`: either a plain unit value or a math expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CssNumericValue {
    Unit(UnitValue),
    Math(Box<MathValue>),
}

impl CssNumericValue {
    /// The value's type, i.e. the dimension vector the matchers inspect.
    pub fn numeric_type(&self) -> NumericType {
        match self {
            Self::Unit(unit_value) => unit_value.numeric_type(),
            Self::Math(math) => math.numeric_type(),
        }
    }

    /// The underlying unit value, if this is not a math expression.
    pub const fn as_unit(&self) -> Option<&UnitValue> {
        match self {
            Self::Unit(unit_value) => Some(unit_value),
            Self::Math(_) => None,
        }
    }
}

impl From<UnitValue> for CssNumericValue {
    fn from(unit_value: UnitValue) -> Self {
        Self::Unit(unit_value)
    }
}

impl From<MathValue> for CssNumericValue {
    fn from(math: MathValue) -> Self {
        Self::Math(Box::new(math))
    }
}

impl fmt::Display for CssNumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(unit_value) => write!(f, "{unit_value}"),
            Self::Math(math) => write!(f, "{math}"),
        }
    }
}
