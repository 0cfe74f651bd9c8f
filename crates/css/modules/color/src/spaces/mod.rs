//! CSS Typed OM Level 1 — §5.5 CSSColorValue objects
//!
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#csscolorvalue>
//!
//! One record per color function. Every slot is rectified for its family on
//! construction and again on each `set_*` call; a failed call changes nothing.

use core::fmt;

use crate::component::ColorComponent;

/// Generates a record with fixed component slots plus a percent alpha.
///
/// Each `slot: Family` pair gets a field, a getter, and a `set_<slot>` setter.
macro_rules! color_space_record {
    (
        $(#[$meta:meta])*
        $name:ident => $function:literal {
            $( $slot:ident / $setter:ident : $family:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $( $slot: $crate::component::ColorComponent, )+
            alpha: $crate::component::ColorComponent,
        }

        impl $name {
            #[doc = concat!("Build a `", $function, "()` value with an alpha of `100%`.")]
            ///
            /// # Errors
            /// Returns `ColorError::Syntax` if any component is rejected by its slot.
            pub fn new(
                $( $slot: impl Into<$crate::component::ColorInput> ),+
            ) -> Result<Self, $crate::error::ColorError> {
                Self::with_alpha($( $slot ),+ , 1.0)
            }

            #[doc = concat!("Build a `", $function, "()` value with an explicit alpha.")]
            ///
            /// # Errors
            /// Returns `ColorError::Syntax` if any component is rejected by its slot.
            pub fn with_alpha(
                $( $slot: impl Into<$crate::component::ColorInput>, )+
                alpha: impl Into<$crate::component::ColorInput>,
            ) -> Result<Self, $crate::error::ColorError> {
                Ok(Self {
                    $(
                        $slot: $crate::reify::rectify(
                            $slot.into(),
                            $crate::reify::ComponentFamily::$family,
                        )?,
                    )+
                    alpha: $crate::reify::rectify_percent(alpha.into())?,
                })
            }

            $(
                pub const fn $slot(&self) -> &$crate::component::ColorComponent {
                    &self.$slot
                }

                #[doc = concat!("Replace the `", stringify!($slot), "` component.")]
                ///
                /// # Errors
                /// Returns `ColorError::Syntax` and keeps the old value if the input is rejected.
                pub fn $setter(
                    &mut self,
                    value: impl Into<$crate::component::ColorInput>,
                ) -> Result<(), $crate::error::ColorError> {
                    self.$slot = $crate::reify::rectify(
                        value.into(),
                        $crate::reify::ComponentFamily::$family,
                    )?;
                    Ok(())
                }
            )+

            /// Replace the alpha component.
            ///
            /// # Errors
            /// Returns `ColorError::Syntax` and keeps the old alpha for a non-percentage input.
            pub fn set_alpha(
                &mut self,
                value: impl Into<$crate::component::ColorInput>,
            ) -> Result<(), $crate::error::ColorError> {
                self.alpha = $crate::reify::rectify_percent(value.into())?;
                Ok(())
            }
        }

        impl $crate::spaces::CssColorValue for $name {
            fn function_name(&self) -> &'static str {
                $function
            }

            fn alpha(&self) -> &$crate::component::ColorComponent {
                &self.alpha
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                $crate::spaces::write_color_function(
                    f,
                    $function,
                    &[$( &self.$slot as &dyn core::fmt::Display ),+],
                    &self.alpha,
                )
            }
        }
    };
}

mod color;
mod hsl;
mod hwb;
mod lab;
mod lch;
mod oklab;
mod oklch;
mod rgb;

pub use color::{Channels, CssColor};
pub use hsl::CssHsl;
pub use hwb::CssHwb;
pub use lab::CssLab;
pub use lch::CssLch;
pub use oklab::CssOklab;
pub use oklch::CssOklch;
pub use rgb::CssRgb;

/// Behaviour shared by every color value record.
pub trait CssColorValue: fmt::Display {
    /// Name of the CSS function the value serializes as, e.g. `rgb`.
    fn function_name(&self) -> &'static str;

    /// The alpha component, always in the percent family.
    fn alpha(&self) -> &ColorComponent;
}

/// Writes `<function>(c1 c2 … / alpha)`.
fn write_color_function(
    formatter: &mut fmt::Formatter<'_>,
    function: &str,
    components: &[&dyn fmt::Display],
    alpha: &ColorComponent,
) -> fmt::Result {
    write!(formatter, "{function}(")?;
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            formatter.write_str(" ")?;
        }
        write!(formatter, "{component}")?;
    }
    if !components.is_empty() {
        formatter.write_str(" ")?;
    }
    write!(formatter, "/ {alpha})")
}

/// Any one of the color value records, as produced by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyColorValue {
    Rgb(CssRgb),
    Hsl(CssHsl),
    Hwb(CssHwb),
    Lab(CssLab),
    Lch(CssLch),
    Oklab(CssOklab),
    Oklch(CssOklch),
    Color(CssColor),
}

impl AnyColorValue {
    fn as_dyn(&self) -> &dyn CssColorValue {
        match self {
            Self::Rgb(value) => value,
            Self::Hsl(value) => value,
            Self::Hwb(value) => value,
            Self::Lab(value) => value,
            Self::Lch(value) => value,
            Self::Oklab(value) => value,
            Self::Oklch(value) => value,
            Self::Color(value) => value,
        }
    }
}

impl CssColorValue for AnyColorValue {
    fn function_name(&self) -> &'static str {
        self.as_dyn().function_name()
    }

    fn alpha(&self) -> &ColorComponent {
        self.as_dyn().alpha()
    }
}

impl fmt::Display for AnyColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_dyn(), f)
    }
}

macro_rules! any_color_from {
    ($( $variant:ident($record:ty) ),+ $(,)?) => {
        $(
            impl From<$record> for AnyColorValue {
                fn from(value: $record) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

any_color_from!(
    Rgb(CssRgb),
    Hsl(CssHsl),
    Hwb(CssHwb),
    Lab(CssLab),
    Lch(CssLch),
    Oklab(CssOklab),
    Oklch(CssOklch),
    Color(CssColor),
);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap values built from known-good input")]

    use super::*;
    use css_values_units::UnitValue;

    #[test]
    /// # Panics
    /// Panics if the enum does not delegate to the wrapped record.
    fn any_color_value_delegates() {
        let hsl = CssHsl::with_alpha(120.0, 0.5, 0.25, 0.5).unwrap();
        let any = AnyColorValue::from(hsl.clone());
        assert_eq!(any.function_name(), "hsl");
        assert_eq!(any.alpha().as_unit(), Some(&UnitValue::percent(50.0)));
        assert_eq!(any.to_string(), hsl.to_string());
        assert_eq!(any.to_string(), "hsl(120deg 50% 25% / 50%)");
    }

    #[test]
    /// # Panics
    /// Panics if an empty component list is serialized with a stray space.
    fn empty_component_list() {
        let color = CssColor::new("srgb", Vec::<f64>::new()).unwrap();
        assert_eq!(color.to_string(), "color(srgb / 100%)");
    }
}
