//! CSS Color Module Level 4 — §4.1 The `<color>` syntax, functional notations only
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#color-syntax>
//!
//! Tokens are reified before rectification: a `<number>` is handed over as a
//! bare number (so `rgb(255 0 0)` stores `25500%`), `<percentage>` and
//! `<dimension>` tokens as typed unit values, and identifiers as keywords.
//!
//! `rgb()` and `hsl()` also take the legacy comma-separated form. It keeps the
//! CSS Color 3 grammar: no `none`, and `rgb()` channels are either all numbers
//! or all percentages.

use core::str::FromStr;

use css_values_units::{matches_percentage, parse_keyword, parse_numeric, token_number};
use cssparser::{
    ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token,
    match_ignore_ascii_case,
};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::component::ColorInput;
use crate::error::ColorError;
use crate::spaces::{
    AnyColorValue, CssColor, CssColorValue as _, CssHsl, CssHwb, CssLab, CssLch, CssOklab,
    CssOklch, CssRgb,
};

/// Parse a complete color function such as `rgb(255 0% none / 50%)`.
///
/// # Errors
/// Returns `ColorError::UnexpectedToken` on malformed syntax or trailing input,
/// `ColorError::UnknownFunction` for an unsupported function name, and
/// `ColorError::Syntax` when a component does not fit its slot.
pub fn parse_color_value(text: &str) -> Result<AnyColorValue, ColorError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value = parse_color(&mut parser)?;
    if parser.expect_exhausted().is_err() {
        debug!(target: "css_color", "trailing input after {}()", value.function_name());
        return Err(ColorError::UnexpectedToken);
    }
    Ok(value)
}

/// Parse one color function from an existing token stream.
///
/// # Errors
/// See [`parse_color_value`]; trailing tokens are left for the caller.
pub fn parse_color(input: &mut Parser<'_, '_>) -> Result<AnyColorValue, ColorError> {
    let name = match input.next() {
        Ok(Token::Function(name)) => name.clone(),
        Ok(token) => {
            debug!(target: "css_color", "expected a color function, found {token:?}");
            return Err(ColorError::UnexpectedToken);
        }
        Err(_) => return Err(ColorError::UnexpectedToken),
    };
    trace!(target: "css_color", "parsing {name}()");
    input
        .parse_nested_block(|block| parse_function_block(&name, block))
        .map_err(|err| match err.kind {
            ParseErrorKind::Custom(inner) => inner,
            ParseErrorKind::Basic(kind) => {
                debug!(target: "css_color", "{name}() rejected: {kind:?}");
                ColorError::UnexpectedToken
            }
        })
}

impl FromStr for AnyColorValue {
    type Err = ColorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_color_value(text)
    }
}

fn parse_function_block<'input>(
    name: &str,
    block: &mut Parser<'input, '_>,
) -> Result<AnyColorValue, CssParseError<'input, ColorError>> {
    parse_function_body(name, block).map_err(|err| block.new_custom_error(err))
}

fn parse_function_body(
    name: &str,
    block: &mut Parser<'_, '_>,
) -> Result<AnyColorValue, ColorError> {
    match_ignore_ascii_case! { name,
        "rgb" | "rgba" => {
            let [red, green, blue, alpha] = parse_three_components(block, Some(Legacy::Rgb))?;
            Ok(CssRgb::with_alpha(red, green, blue, alpha)?.into())
        },
        "hsl" | "hsla" => {
            let [hue, saturation, lightness, alpha] =
                parse_three_components(block, Some(Legacy::Hsl))?;
            Ok(CssHsl::with_alpha(hue, saturation, lightness, alpha)?.into())
        },
        "hwb" => {
            let [hue, whiteness, blackness, alpha] = parse_three_components(block, None)?;
            Ok(CssHwb::with_alpha(hue, whiteness, blackness, alpha)?.into())
        },
        "lab" => {
            let [lightness, first_axis, second_axis, alpha] = parse_three_components(block, None)?;
            Ok(CssLab::with_alpha(lightness, first_axis, second_axis, alpha)?.into())
        },
        "lch" => {
            let [lightness, chroma, hue, alpha] = parse_three_components(block, None)?;
            Ok(CssLch::with_alpha(lightness, chroma, hue, alpha)?.into())
        },
        "oklab" => {
            let [lightness, first_axis, second_axis, alpha] = parse_three_components(block, None)?;
            Ok(CssOklab::with_alpha(lightness, first_axis, second_axis, alpha)?.into())
        },
        "oklch" => {
            let [lightness, chroma, hue, alpha] = parse_three_components(block, None)?;
            Ok(CssOklch::with_alpha(lightness, chroma, hue, alpha)?.into())
        },
        "color" => parse_color_function(block),
        _ => Err(ColorError::UnknownFunction(name.to_owned())),
    }
}

/// The comma-separated grammars kept for `rgb()` and `hsl()`.
#[derive(Clone, Copy, Debug)]
enum Legacy {
    /// Three numbers or three percentages.
    Rgb,
    /// A hue, then two percentages.
    Hsl,
}

impl Legacy {
    fn accepts(self, components: &[ColorInput; 4]) -> bool {
        let [first, second, third, alpha] = components;
        let channels_valid = match self {
            Self::Rgb => {
                let channels = [first, second, third];
                channels.into_iter().all(is_number) || channels.into_iter().all(is_percentage)
            }
            Self::Hsl => !is_keyword(first) && is_percentage(second) && is_percentage(third),
        };
        channels_valid && !is_keyword(alpha)
    }
}

fn is_number(input: &ColorInput) -> bool {
    matches!(input, ColorInput::Number(_))
}

fn is_percentage(input: &ColorInput) -> bool {
    matches!(input, ColorInput::Numeric(value) if matches_percentage(value))
}

fn is_keyword(input: &ColorInput) -> bool {
    matches!(input, ColorInput::Keyword(_))
}

/// `c1 c2 c3 [/ alpha]`, or `c1, c2, c3[, alpha]` when `legacy` is set.
fn parse_three_components(
    block: &mut Parser<'_, '_>,
    legacy: Option<Legacy>,
) -> Result<[ColorInput; 4], ColorError> {
    let first = parse_component(block)?;
    if let Some(syntax) = legacy.filter(|_| block.try_parse(Parser::expect_comma).is_ok()) {
        return parse_legacy_tail(block, syntax, first);
    }
    let second = parse_component(block)?;
    let third = parse_component(block)?;
    let alpha = parse_optional_alpha(block)?;
    Ok([first, second, third, alpha])
}

/// The rest of a legacy component list, after the first component and its comma.
fn parse_legacy_tail(
    block: &mut Parser<'_, '_>,
    syntax: Legacy,
    first: ColorInput,
) -> Result<[ColorInput; 4], ColorError> {
    trace!(target: "css_color", "legacy comma-separated components");
    let second = parse_component(block)?;
    block
        .expect_comma()
        .map_err(|_| ColorError::UnexpectedToken)?;
    let third = parse_component(block)?;
    let alpha = if block.try_parse(Parser::expect_comma).is_ok() {
        parse_component(block)?
    } else {
        ColorInput::Number(1.0)
    };
    let components = [first, second, third, alpha];
    if !syntax.accepts(&components) {
        debug!(target: "css_color", "{components:?} does not fit the legacy {syntax:?} syntax");
        return Err(ColorError::UnexpectedToken);
    }
    Ok(components)
}

/// `color(<ident> <channel>* [/ alpha])`
fn parse_color_function(block: &mut Parser<'_, '_>) -> Result<AnyColorValue, ColorError> {
    let color_space = parse_keyword(block)?;
    let mut channels: SmallVec<ColorInput, 3> = SmallVec::new();
    let alpha = loop {
        if block.is_exhausted() {
            break ColorInput::Number(1.0);
        }
        if block.try_parse(|inner| inner.expect_delim('/')).is_ok() {
            break parse_component(block)?;
        }
        channels.push(parse_component(block)?);
    };
    Ok(CssColor::with_alpha(color_space, channels, alpha)?.into())
}

fn parse_optional_alpha(block: &mut Parser<'_, '_>) -> Result<ColorInput, ColorError> {
    if block.try_parse(|inner| inner.expect_delim('/')).is_ok() {
        parse_component(block)
    } else {
        Ok(ColorInput::Number(1.0))
    }
}

fn parse_component(block: &mut Parser<'_, '_>) -> Result<ColorInput, ColorError> {
    if let Ok(number) = block.try_parse(Parser::expect_number) {
        return Ok(ColorInput::Number(token_number(number)));
    }
    if let Ok(keyword) = block.try_parse(parse_keyword) {
        return Ok(keyword.into());
    }
    Ok(parse_numeric(block)?.into())
}
