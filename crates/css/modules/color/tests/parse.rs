#![cfg(feature = "parse")]
#![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

use css_color::{AnyColorValue, ColorError, CssColorValue as _, CssHsl, CssRgb, parse_color_value};
use css_values_units::{ParseError, Unit, UnitValue};

fn init_logging() {
    env_logger::builder()
        .is_test(true)
        .try_init()
        .unwrap_or_default();
}

#[test]
fn parsed_and_constructed_values_agree() {
    init_logging();
    let parsed_rgb = parse_color_value("rgb(255 0% none / 50%)").unwrap();
    let rgb = CssRgb::with_alpha(255.0, UnitValue::percent(0.0), "none", 0.5).unwrap();
    assert_eq!(parsed_rgb, AnyColorValue::from(rgb));
    assert_eq!(parsed_rgb.to_string(), "rgb(25500% 0% none / 50%)");

    let parsed_hsl: AnyColorValue = " hsl(0.25turn 100% 50%) ".parse().unwrap();
    let hsl = CssHsl::new(UnitValue::new(0.25, Unit::Turns), 1.0, 0.5).unwrap();
    assert_eq!(parsed_hsl, AnyColorValue::from(hsl));
}

#[test]
fn every_function_name_parses() {
    init_logging();
    let cases = [
        ("rgb(0 0 0)", "rgb"),
        ("RGBA(0, 0, 0, 0)", "rgb"),
        ("hsl(0 0% 0%)", "hsl"),
        ("hsla(0deg, 0%, 0%, 0.5)", "hsl"),
        ("hwb(0 0% 0%)", "hwb"),
        ("lab(0% 0 0)", "lab"),
        ("lch(0% 0% 0)", "lch"),
        ("oklab(0% 0 0)", "oklab"),
        ("oklch(0% 0% none)", "oklch"),
        ("color(srgb 0 0 0)", "color"),
    ];
    for (text, function) in cases {
        let parsed = parse_color_value(text).unwrap();
        assert_eq!(parsed.function_name(), function, "{text}");
    }
}

#[test]
fn invalid_components_are_rejected() {
    init_logging();
    assert!(matches!(
        parse_color_value("hsl(50% 50% 50%)"),
        Err(ColorError::Syntax { .. })
    ));
    assert!(matches!(
        parse_color_value("rgb(foo 0 0)"),
        Err(ColorError::Syntax { .. })
    ));
    assert!(matches!(
        parse_color_value("lab(0% 10% 0)"),
        Err(ColorError::Syntax { .. })
    ));
    assert_eq!(
        parse_color_value("rgb(0 0)"),
        Err(ColorError::Value(ParseError::UnexpectedToken))
    );
    assert_eq!(parse_color_value(""), Err(ColorError::UnexpectedToken));
}

#[test]
fn authored_decimals_round_trip() {
    init_logging();
    let cases = [
        ("rgb(33% 0% 0% / 0.1)", "rgb(33% 0% 0% / 10%)"),
        (
            "hsl(0.3turn 12.34% 56.7%)",
            "hsl(0.3turn 12.34% 56.7% / 100%)",
        ),
        ("lab(40% 0.1 -0.3)", "lab(40% 0.1 -0.3 / 100%)"),
        (
            "color(srgb 0.5 none 0.25 / 0.75)",
            "color(srgb 50% none 25% / 75%)",
        ),
    ];
    for (text, serialized) in cases {
        let parsed = parse_color_value(text).unwrap();
        assert_eq!(parsed.to_string(), serialized, "{text}");
    }
}

#[test]
fn legacy_commas_reject_mixed_and_missing_components() {
    init_logging();
    assert_eq!(
        parse_color_value("rgb(0%, 0, 0)"),
        Err(ColorError::UnexpectedToken)
    );
    assert_eq!(
        parse_color_value("hsla(none, 10%, 20%, 1)"),
        Err(ColorError::UnexpectedToken)
    );
    let legacy = parse_color_value("rgba(100%, 50%, 0%, 0.5)").unwrap();
    let modern = parse_color_value("rgb(100% 50% 0% / 0.5)").unwrap();
    assert_eq!(legacy, modern);
}
