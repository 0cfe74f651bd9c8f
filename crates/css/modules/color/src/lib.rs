//! CSS Color Module Level 4 — color values as reified by CSS Typed OM.
//!
//! Spec: <https://www.w3.org/TR/css-color-4/>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#csscolorvalue>
//!
//! Values are stored as authored. Nothing here converts between color spaces
//! or clamps components; each slot only checks that its input has the right
//! dimension (or is `none`).

#![forbid(unsafe_code)]

pub mod component;
pub mod error;
#[cfg(feature = "parse")]
pub mod parse;
pub mod reify;
pub mod spaces;

pub use component::{ColorComponent, ColorInput, Keywordish};
pub use error::ColorError;
#[cfg(feature = "parse")]
pub use parse::{parse_color, parse_color_value};
pub use reify::{
    ComponentFamily, rectify, rectify_angle, rectify_keywordish, rectify_number,
    rectify_number_or_percent, rectify_percent, reify_ident,
};
pub use spaces::{
    AnyColorValue, Channels, CssColor, CssColorValue, CssHsl, CssHwb, CssLab, CssLch, CssOklab,
    CssOklch, CssRgb,
};
