//! CSS Color Module Level 4 — §10.1 Specifying Predefined Colors: `color()`
//!
//! Spec: <https://www.w3.org/TR/css-color-4/#color-function>
//! Spec: <https://drafts.css-houdini.org/css-typed-om/#csscolor>

use core::fmt::{self, Display};

use css_values_units::CssKeywordValue;
use log::debug;
use smallvec::SmallVec;

use super::{CssColorValue, write_color_function};
use crate::component::{ColorComponent, ColorInput, Keywordish};
use crate::error::ColorError;
use crate::reify::{rectify_keywordish, rectify_percent};

/// Channel storage; predefined color spaces all have three channels.
pub type Channels = SmallVec<ColorComponent, 3>;

/// A color in a named color space with a variable number of percent channels.
#[derive(Clone, Debug, PartialEq)]
pub struct CssColor {
    color_space: CssKeywordValue,
    channels: Channels,
    alpha: ColorComponent,
}

impl CssColor {
    /// Build a `color()` value with an alpha of `100%`.
    ///
    /// # Errors
    /// Returns `ColorError::Syntax` if any channel is not a percentage or `none`.
    pub fn new<I>(color_space: impl Into<Keywordish>, channels: I) -> Result<Self, ColorError>
    where
        I: IntoIterator,
        I::Item: Into<ColorInput>,
    {
        Self::with_alpha(color_space, channels, 1.0)
    }

    /// Build a `color()` value with an explicit alpha.
    ///
    /// # Errors
    /// Returns `ColorError::Syntax` if any channel or the alpha is not a percentage or `none`.
    pub fn with_alpha<I>(
        color_space: impl Into<Keywordish>,
        channels: I,
        alpha: impl Into<ColorInput>,
    ) -> Result<Self, ColorError>
    where
        I: IntoIterator,
        I::Item: Into<ColorInput>,
    {
        let channels = channels
            .into_iter()
            .map(|channel| rectify_percent(channel.into()))
            .collect::<Result<Channels, _>>()?;
        Ok(Self {
            color_space: rectify_keywordish(color_space.into()),
            channels,
            alpha: rectify_percent(alpha.into())?,
        })
    }

    pub const fn color_space(&self) -> &CssKeywordValue {
        &self.color_space
    }

    /// The color space is never validated against the predefined names.
    pub fn set_color_space(&mut self, color_space: impl Into<Keywordish>) {
        self.color_space = rectify_keywordish(color_space.into());
    }

    pub fn channels(&self) -> &[ColorComponent] {
        &self.channels
    }

    /// Overwrite the channel at `index`, or append when `index` equals the channel count.
    ///
    /// # Errors
    /// Returns `ColorError::ChannelIndex` when `index` is past the end, and
    /// `ColorError::Syntax` when the input is not a percentage or `none`.
    pub fn set_channel(
        &mut self,
        index: usize,
        value: impl Into<ColorInput>,
    ) -> Result<(), ColorError> {
        let len = self.channels.len();
        if index > len {
            debug!(target: "css_color", "channel {index} is past the end of {len} channels");
            return Err(ColorError::ChannelIndex { index, len });
        }
        let component = rectify_percent(value.into())?;
        match self.channels.get_mut(index) {
            Some(slot) => *slot = component,
            None => self.channels.push(component),
        }
        Ok(())
    }

    /// Remove and return the channel at `index`; later channels shift down.
    ///
    /// # Errors
    /// Returns `ColorError::ChannelIndex` when there is no channel at `index`.
    pub fn delete_channel(&mut self, index: usize) -> Result<ColorComponent, ColorError> {
        let len = self.channels.len();
        if index < len {
            Ok(self.channels.remove(index))
        } else {
            Err(ColorError::ChannelIndex { index, len })
        }
    }

    /// Replace the alpha component.
    ///
    /// # Errors
    /// Returns `ColorError::Syntax` and keeps the old value if the input is not a percentage.
    pub fn set_alpha(&mut self, value: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.alpha = rectify_percent(value.into())?;
        Ok(())
    }
}

impl CssColorValue for CssColor {
    fn function_name(&self) -> &'static str {
        "color"
    }

    fn alpha(&self) -> &ColorComponent {
        &self.alpha
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components: SmallVec<&dyn Display, 4> = SmallVec::new();
        components.push(&self.color_space);
        components.extend(self.channels.iter().map(|channel| channel as &dyn Display));
        write_color_function(f, "color", &components, &self.alpha)
    }
}
