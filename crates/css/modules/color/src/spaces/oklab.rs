//! CSS Color Module Level 4 — §9.6 Specifying Oklab: `oklab()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch>

color_space_record! {
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#cssoklab>
    CssOklab => "oklab" {
        lightness / set_lightness: Percent,
        a_axis / set_a_axis: Number,
        b_axis / set_b_axis: Number,
    }
}
