//! CSS Color Module Level 4 — §9.5 Specifying Lab: `lab()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#specifying-lab-lch>

color_space_record! {
    /// A CIE Lab color. The two opponent axes are plain numbers.
    ///
    /// Spec: <https://drafts.css-houdini.org/css-typed-om/#csslab>
    CssLab => "lab" {
        lightness / set_lightness: Percent,
        a_axis / set_a_axis: Number,
        b_axis / set_b_axis: Number,
    }
}
