//! CSS Color Module Level 4 — §7 HSL Colors: `hsl()` and `hsla()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#the-hsl-notation>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#csshsl>

color_space_record! {
    /// A hue, saturation and lightness color.
    CssHsl => "hsl" {
        hue / set_hue: Angle,
        saturation / set_saturation: Percent,
        lightness / set_lightness: Percent,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

    use super::*;
    use crate::error::ColorError;
    use css_values_units::{Unit, UnitValue};

    #[test]
    /// # Panics
    /// Panics if a percentage hue is accepted.
    fn hue_must_be_an_angle() {
        assert!(matches!(
            CssHsl::new(UnitValue::percent(50.0), 0.5, 0.5),
            Err(ColorError::Syntax { .. })
        ));
        let quarter_turn = UnitValue::new(0.25, Unit::Turns);
        let hsl = CssHsl::new(quarter_turn, 1.0, 0.5).unwrap();
        assert_eq!(hsl.hue().as_unit(), Some(&quarter_turn));
        assert_eq!(hsl.saturation().as_unit(), Some(&UnitValue::percent(100.0)));
    }
}
