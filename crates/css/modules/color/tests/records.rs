#![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

use css_color::{
    ColorComponent, ColorError, ColorInput, ComponentFamily, CssColor, CssColorValue as _, CssHwb,
    CssLab, CssLch, CssOklab, CssRgb, rectify_angle, rectify_number_or_percent,
};
use css_values_units::{CssKeywordValue, MathValue, NumericError, Unit, UnitValue};

fn init_logging() {
    // Only the first test to get here installs the logger.
    env_logger::builder()
        .is_test(true)
        .try_init()
        .unwrap_or_default();
}

#[test]
fn rgb_end_to_end() {
    init_logging();
    let red = rectify_number_or_percent(ColorInput::Number(255.0)).unwrap();
    assert_eq!(red.as_unit(), Some(&UnitValue::percent(25_500.0)));

    let none = rectify_number_or_percent("none".into()).unwrap();
    assert_eq!(none, ColorComponent::Keyword(CssKeywordValue::new("none")));

    let half = UnitValue::percent(50.0);
    let passed = rectify_number_or_percent(half.into()).unwrap();
    assert_eq!(passed.as_unit(), Some(&half));

    let err = rectify_angle(half.into()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: 50% is not a valid angle value"
    );
}

#[test]
fn failing_constructor_builds_nothing() {
    init_logging();
    let rgb = CssRgb::with_alpha(1.0, 1.0, 1.0, UnitValue::degrees(1.0));
    assert_eq!(
        rgb,
        Err(ColorError::Syntax {
            family: ComponentFamily::Percent,
            found: "1deg".to_owned(),
        })
    );

    let lch = CssLch::new(0.5, CssKeywordValue::new("auto"), 90.0);
    assert!(matches!(
        lch,
        Err(ColorError::Syntax {
            family: ComponentFamily::Percent,
            ..
        })
    ));
}

#[test]
fn setters_rectify_one_slot_at_a_time() {
    init_logging();
    let mut hwb = CssHwb::new(UnitValue::new(200.0, Unit::Gradians), 0.25, 0.5).unwrap();
    let before = hwb.clone();

    assert!(matches!(
        hwb.set_whiteness(UnitValue::new(2.0, Unit::Pixels)),
        Err(ColorError::Syntax { .. })
    ));
    assert!(matches!(hwb.set_alpha("auto"), Ok(())));
    assert_eq!(hwb.whiteness(), before.whiteness());
    assert_eq!(hwb.blackness(), before.blackness());
    assert_eq!(
        hwb.alpha(),
        &ColorComponent::Keyword(CssKeywordValue::new("auto"))
    );
    assert_eq!(hwb.to_string(), "hwb(200grad 25% 50% / auto)");
}

#[test]
fn lab_family_axes() {
    init_logging();
    let mut lab = CssLab::new(UnitValue::percent(40.0), 12.5, -30.0).unwrap();
    lab.set_b_axis("none").unwrap();
    assert!(lab.b_axis().is_none());

    let mut oklab = CssOklab::new(0.5, 0.125, -0.25).unwrap();
    assert!(matches!(
        oklab.set_a_axis(UnitValue::degrees(10.0)),
        Err(ColorError::Syntax {
            family: ComponentFamily::Number,
            ..
        })
    ));
    assert_eq!(oklab.function_name(), "oklab");
    assert_eq!(oklab.to_string(), "oklab(50% 0.125 -0.25 / 100%)");
}

#[test]
fn math_values_keep_their_type() {
    init_logging();
    let angle_sum = MathValue::sum([
        UnitValue::degrees(90.0).into(),
        UnitValue::degrees(45.0).into(),
    ])
    .unwrap();
    let rectified = rectify_angle(angle_sum.clone().into()).unwrap();
    assert_eq!(rectified, ColorComponent::Numeric(angle_sum.into()));
    assert_eq!(rectified.to_string(), "calc(90deg + 45deg)");

    let area = MathValue::product([
        UnitValue::new(2.0, Unit::Pixels).into(),
        UnitValue::new(3.0, Unit::Pixels).into(),
    ])
    .unwrap();
    assert_eq!(area.numeric_type().length, 2);
    assert!(matches!(
        rectify_number_or_percent(area.into()),
        Err(ColorError::Syntax { .. })
    ));

    let mixed = MathValue::sum([
        UnitValue::new(1.0, Unit::Pixels).into(),
        UnitValue::degrees(1.0).into(),
    ]);
    assert!(matches!(
        mixed,
        Err(NumericError::IncompatibleTypes { .. })
    ));
}

#[test]
fn color_channels_by_index() {
    init_logging();
    let mut color = CssColor::with_alpha("rec2020", [0.5, 0.25], "none").unwrap();
    color.set_channel(2, UnitValue::percent(75.0)).unwrap();
    color.set_channel(0, 1.0).unwrap();
    assert_eq!(color.to_string(), "color(rec2020 100% 25% 75% / none)");

    assert_eq!(
        color.set_channel(4, 0.0),
        Err(ColorError::ChannelIndex { index: 4, len: 3 })
    );
    let removed = color.delete_channel(1).unwrap();
    assert_eq!(removed.as_unit(), Some(&UnitValue::percent(25.0)));
    assert_eq!(color.to_string(), "color(rec2020 100% 75% / none)");
    assert_eq!(
        color.delete_channel(5).unwrap_err().to_string(),
        "Channel 5 out of bounds for 2 channels"
    );
}
