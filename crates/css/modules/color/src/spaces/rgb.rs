//! CSS Color Module Level 4 — §5.1 The RGB functions: `rgb()` and `rgba()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#rgb-functions>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#cssrgb>

color_space_record! {
    /// An sRGB color. Bare numbers are read as fractions of the channel, so
    /// `1.0` stores `100%` and `255.0` stores `25500%`.
    CssRgb => "rgb" {
        red / set_red: NumberOrPercent,
        green / set_green: NumberOrPercent,
        blue / set_blue: NumberOrPercent,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

    use super::*;
    use crate::component::ColorComponent;
    use crate::error::ColorError;
    use crate::reify::ComponentFamily;
    use crate::spaces::CssColorValue as _;
    use css_values_units::{CssKeywordValue, UnitValue};

    #[test]
    /// # Panics
    /// Panics if construction does not rectify each slot for its family.
    fn constructs_with_default_alpha() {
        let rgb = CssRgb::new(255.0, "none", UnitValue::percent(50.0)).unwrap();
        assert_eq!(rgb.red().as_unit(), Some(&UnitValue::percent(25_500.0)));
        assert_eq!(
            rgb.green(),
            &ColorComponent::Keyword(CssKeywordValue::new("none"))
        );
        assert_eq!(rgb.blue().as_unit(), Some(&UnitValue::percent(50.0)));
        assert_eq!(rgb.alpha().as_unit(), Some(&UnitValue::percent(100.0)));
        assert_eq!(rgb.to_string(), "rgb(25500% none 50% / 100%)");
    }

    #[test]
    /// # Panics
    /// Panics if a rejected setter input overwrites the slot.
    fn failed_setter_keeps_value() {
        let mut rgb = CssRgb::new(0.0, 0.0, 0.0).unwrap();
        let before = rgb.clone();
        let err = rgb.set_green(UnitValue::degrees(90.0)).unwrap_err();
        assert_eq!(
            err,
            ColorError::Syntax {
                family: ComponentFamily::NumberOrPercent,
                found: "90deg".to_owned()
            }
        );
        assert_eq!(rgb, before);

        rgb.set_green(0.5).unwrap();
        assert_eq!(rgb.green().as_unit(), Some(&UnitValue::percent(50.0)));
    }
}
