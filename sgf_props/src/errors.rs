use std::num::{ParseFloatError, ParseIntError};

use crate::{ColorError, MoveError, PointError};

/// Broad classification of a [`PropertyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of values for a property.
    Arity,
    /// A value does not parse as its expected primitive.
    Syntax,
    /// A well-formed value violates a rule of the game.
    DomainRange,
    /// The node cannot take the value, e.g. it already has a move.
    StructuralConflict,
}

/// The error type for decoding or encoding a single property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyError {
    Arity {
        prop: String,
        expected: &'static str,
        found: usize,
    },
    NotAnInteger {
        prop: String,
        value: String,
        err: ParseIntError,
    },
    NotANumber {
        prop: String,
        value: String,
        err: ParseFloatError,
    },
    Point(PointError),
    Color(ColorError),
    SizeOutOfRange(i64),
    InvalidKomi(f64),
    InvalidPlayer(String),
    PassPlacement,
    DuplicateMove,
}

impl PropertyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PropertyError::Arity { .. } => ErrorKind::Arity,
            PropertyError::NotAnInteger { .. }
            | PropertyError::NotANumber { .. }
            | PropertyError::Point(_) => ErrorKind::Syntax,
            PropertyError::Color(_)
            | PropertyError::SizeOutOfRange(_)
            | PropertyError::InvalidKomi(_)
            | PropertyError::InvalidPlayer(_)
            | PropertyError::PassPlacement => ErrorKind::DomainRange,
            PropertyError::DuplicateMove => ErrorKind::StructuralConflict,
        }
    }
}

impl std::error::Error for PropertyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyError::NotAnInteger { err, .. } => Some(err),
            PropertyError::NotANumber { err, .. } => Some(err),
            PropertyError::Point(err) => Some(err),
            PropertyError::Color(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::Arity {
                prop,
                expected,
                found,
            } => write!(
                f,
                "Property {} takes {} value(s), but had {}",
                prop, expected, found
            ),
            PropertyError::NotAnInteger { prop, value, .. } => {
                write!(f, "Property {} has value '{}', which is not an integer", prop, value)
            }
            PropertyError::NotANumber { prop, value, .. } => {
                write!(f, "Property {} has value '{}', which is not a number", prop, value)
            }
            PropertyError::Point(_) => write!(f, "Invalid point"),
            PropertyError::Color(_) => write!(f, "Invalid stone color"),
            PropertyError::SizeOutOfRange(size) => write!(
                f,
                "Board size was {}, but only values between 1 and 25 are allowed",
                size
            ),
            PropertyError::InvalidKomi(komi) => write!(
                f,
                "Komi was {}, but the only decimal values allowed for komi are .0 and .5",
                komi
            ),
            PropertyError::InvalidPlayer(value) => write!(
                f,
                "Player to move can only be B or W, but was '{}'",
                value
            ),
            PropertyError::PassPlacement => {
                write!(f, "A placed stone needs a point, it cannot be a pass")
            }
            PropertyError::DuplicateMove => write!(f, "Found two moves on one node"),
        }
    }
}

impl From<PointError> for PropertyError {
    fn from(err: PointError) -> Self {
        PropertyError::Point(err)
    }
}

impl From<ColorError> for PropertyError {
    fn from(err: ColorError) -> Self {
        PropertyError::Color(err)
    }
}

impl From<MoveError> for PropertyError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::Color(err) => PropertyError::Color(err),
            MoveError::Point(err) => PropertyError::Point(err),
        }
    }
}

/// The error type for building a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two converters claim the same property code.
    DuplicateProperty(&'static str),
}

impl std::error::Error for RegistryError {}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateProperty(prop) => {
                write!(f, "Property {} is handled by more than one converter", prop)
            }
        }
    }
}

/// Wraps a [`PropertyError`] with the code of the property that caused it.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeError {
    pub prop: String,
    pub err: PropertyError,
}

impl std::error::Error for NodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error converting property {}", self.prop)
    }
}
