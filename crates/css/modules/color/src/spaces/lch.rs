//! CSS Color Module Level 4 — §9.5 Specifying LCH: `lch()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#specifying-lab-lch>

color_space_record! {
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#csslch>
    CssLch => "lch" {
        lightness / set_lightness: Percent,
        chroma / set_chroma: Percent,
        hue / set_hue: Angle,
    }
}
