//! CSS Values & Units Level 4 — §5 Numeric data types, reified as `CSSUnitValue`
//!
//! Spec: <https://www.w3.org/TR/css-values-4/#numeric-types>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#reify-a-numeric-value>

use crate::ParseError;
use crate::chapter_6_dimensions::{Unit, UnitValue};
use cssparser::{Parser, Token};
use log::debug;

/// Widen a token value to `f64` through its shortest decimal form.
///
/// Tokens carry `f32`. `f64::from` keeps the binary rounding of the `f32`, so
/// `0.1` would read back as `0.10000000149011612`.
pub fn token_number(value: f32) -> f64 {
    shift_decimal(value, 0)
}

/// `value * 10^exponent`, computed on the decimal text rather than in binary.
fn shift_decimal(value: f32, exponent: i32) -> f64 {
    format!("{value}e{exponent}")
        .parse()
        .unwrap_or_else(|_| f64::from(value) * f64::powi(10.0, exponent))
}

/// Parse a single `<number>`, `<percentage>` or `<dimension>` token.
///
/// Percentages are stored on the 0–100 scale (`50%` becomes `50` percent).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token and
/// `ParseError::UnknownUnit` for a dimension with an unsupported unit.
pub fn parse_numeric(input: &mut Parser) -> Result<UnitValue, ParseError> {
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    match token {
        Token::Number { value, .. } => Ok(UnitValue::number(token_number(value))),
        // `unit_value` is the fraction, `0.33` for `33%`.
        Token::Percentage { unit_value, .. } => {
            Ok(UnitValue::percent(shift_decimal(unit_value, 2)))
        }
        Token::Dimension { value, unit, .. } => match Unit::from_css_name(&unit) {
            Some(Unit::Number | Unit::Percent) | None => {
                debug!(target: "css_values_units", "unknown dimension unit `{}`", &*unit);
                Err(ParseError::UnknownUnit(String::from(&*unit)))
            }
            Some(known) => Ok(UnitValue::new(token_number(value), known)),
        },
        Token::Ident(_)
        | Token::AtKeyword(_)
        | Token::Hash(_)
        | Token::IDHash(_)
        | Token::QuotedString(_)
        | Token::UnquotedUrl(_)
        | Token::Delim(_)
        | Token::WhiteSpace(_)
        | Token::Comment(_)
        | Token::Colon
        | Token::Semicolon
        | Token::Comma
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::CDO
        | Token::CDC
        | Token::Function(_)
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

    use super::*;
    use cssparser::ParserInput;

    fn parse_one(text: &str) -> Result<UnitValue, ParseError> {
        let mut parser_input = ParserInput::new(text);
        let mut parser = Parser::new(&mut parser_input);
        parse_numeric(&mut parser)
    }

    #[test]
    /// # Panics
    /// Panics if the three numeric token kinds are not reified correctly.
    fn numeric_tokens() {
        assert_eq!(parse_one("255"), Ok(UnitValue::number(255.0)));
        assert_eq!(parse_one("50%"), Ok(UnitValue::percent(50.0)));
        assert_eq!(parse_one("90deg"), Ok(UnitValue::degrees(90.0)));
        assert_eq!(parse_one("2REM"), Ok(UnitValue::new(2.0, Unit::RootEms)));
    }

    #[test]
    /// # Panics
    /// Panics if a decimal picks up `f32` rounding noise on the way to `f64`.
    fn decimals_survive_widening() {
        assert_eq!(parse_one("0.1"), Ok(UnitValue::number(0.1)));
        assert_eq!(parse_one("33%"), Ok(UnitValue::percent(33.0)));
        assert_eq!(parse_one("12.34%"), Ok(UnitValue::percent(12.34)));
        assert_eq!(parse_one("-0.7turn"), Ok(UnitValue::new(-0.7, Unit::Turns)));
        assert_eq!(parse_one("33%").unwrap().to_string(), "33%");
    }

    #[test]
    /// # Panics
    /// Panics if unknown units or non-numeric tokens are accepted.
    fn rejects_non_numeric() {
        assert_eq!(
            parse_one("3parsecs"),
            Err(ParseError::UnknownUnit("parsecs".to_owned()))
        );
        assert_eq!(parse_one("none"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse_one(""), Err(ParseError::UnexpectedToken));
    }
}
