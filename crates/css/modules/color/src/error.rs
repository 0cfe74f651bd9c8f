use core::fmt;
use std::error::Error;

use css_values_units::ParseError;

use crate::reify::ComponentFamily;

/// Errors raised while building, mutating or parsing a color value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// An input could not be rectified for its slot (`SyntaxError` in the Typed OM).
    Syntax {
        family: ComponentFamily,
        found: String,
    },
    /// The color function text did not match the expected grammar.
    UnexpectedToken,
    /// A component token could not be reified as a numeric or keyword value.
    Value(ParseError),
    /// The function name is not one of the supported color functions.
    UnknownFunction(String),
    /// A `color()` channel index is past the end of the channel list.
    ChannelIndex { index: usize, len: usize },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { family, found } => {
                write!(f, "SyntaxError: {found} is not a valid {family} value")
            }
            Self::UnexpectedToken => f.write_str("SyntaxError: unexpected token"),
            Self::Value(err) => write!(f, "SyntaxError: {err}"),
            Self::UnknownFunction(name) => write!(f, "Unknown color function: {name}()"),
            Self::ChannelIndex { index, len } => {
                write!(f, "Channel {index} out of bounds for {len} channels")
            }
        }
    }
}

impl Error for ColorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Value(err) => Some(err),
            Self::Syntax { .. }
            | Self::UnexpectedToken
            | Self::UnknownFunction(_)
            | Self::ChannelIndex { .. } => None,
        }
    }
}

impl From<ParseError> for ColorError {
    fn from(err: ParseError) -> Self {
        Self::Value(err)
    }
}
