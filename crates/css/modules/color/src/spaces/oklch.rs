//! CSS Color Module Level 4 — §9.6 Specifying Oklch: `oklch()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch>

color_space_record! {
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssoklch>
    CssOklch => "oklch" {
        lightness / set_lightness: Percent,
        chroma / set_chroma: Percent,
        hue / set_hue: Angle,
    }
}
