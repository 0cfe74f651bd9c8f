//! CSS Color Module Level 4 — §8 HWB Colors: `hwb()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#the-hwb-notation>

color_space_record! {
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#csshwb>
    CssHwb => "hwb" {
        hue / set_hue: Angle,
        whiteness / set_whiteness: Percent,
        blackness / set_blackness: Percent,
    }
}
