use serde::{Deserialize, Serialize};

/// The color of a stone, or of the player to move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No color was given. Only meaningful for the player to move.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

/// The error type for resolving a [`Color`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The property code does not carry a color.
    UnknownProperty(String),
    /// A stone needs to be either black or white.
    Unspecified,
}

impl std::error::Error for ColorError {}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::UnknownProperty(prop) => {
                write!(f, "Property {} does not determine a color", prop)
            }
            ColorError::Unspecified => write!(f, "A stone must be either black or white"),
        }
    }
}

impl Color {
    /// Resolves the color implied by a move or placement property code.
    pub fn from_prop(prop: &str) -> Result<Self, ColorError> {
        match prop {
            "B" | "AB" => Ok(Color::Black),
            "W" | "AW" => Ok(Color::White),
            _ => Err(ColorError::UnknownProperty(String::from(prop))),
        }
    }

    /// The single-letter SGF value, or `None` for [`Color::Unspecified`].
    pub fn sgf_letter(&self) -> Option<&'static str> {
        match self {
            Color::Unspecified => None,
            Color::Black => Some("B"),
            Color::White => Some("W"),
        }
    }

    pub fn is_specified(&self) -> bool {
        *self != Color::Unspecified
    }
}
