use serde::{Deserialize, Serialize};

use crate::{Color, ColorError, Point, PointError};

/// A black or white stone played at a point, or a pass.
///
/// Also used for placements, which are never passes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMove", into = "RawMove")]
pub struct Move {
    color: Color,
    /// `None` means pass.
    point: Option<Point>,
}

/// The error type for constructing a [`Move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    Color(ColorError),
    Point(PointError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Color(err) => Some(err),
            MoveError::Point(err) => Some(err),
        }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::Color(_) => write!(f, "Move has no valid color"),
            MoveError::Point(_) => write!(f, "Move has no valid point"),
        }
    }
}

impl From<ColorError> for MoveError {
    fn from(err: ColorError) -> Self {
        MoveError::Color(err)
    }
}

impl From<PointError> for MoveError {
    fn from(err: PointError) -> Self {
        MoveError::Point(err)
    }
}

impl Move {
    pub fn new(color: Color, point: Point) -> Result<Self, ColorError> {
        Self::with_optional_point(color, Some(point))
    }

    pub fn pass(color: Color) -> Result<Self, ColorError> {
        Self::with_optional_point(color, None)
    }

    fn with_optional_point(color: Color, point: Option<Point>) -> Result<Self, ColorError> {
        if !color.is_specified() {
            return Err(ColorError::Unspecified);
        }
        Ok(Self { color, point })
    }

    /// Builds a move from its raw SGF value. The empty string is a pass.
    pub fn from_sgf_point(color: Color, raw: &str) -> Result<Self, MoveError> {
        if raw.is_empty() {
            return Ok(Self::pass(color)?);
        }
        Ok(Self::new(color, raw.parse()?)?)
    }

    /// Builds one placement per point of a raw SGF value, see [`Point::list_from_sgf`].
    pub fn list_from_sgf_point(color: Color, raw: &str) -> Result<Vec<Self>, MoveError> {
        let points = Point::list_from_sgf(raw)?;
        points
            .into_iter()
            .map(|point| Self::new(color, point).map_err(MoveError::from))
            .collect()
    }

    /// Always [`Color::Black`] or [`Color::White`].
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn point(&self) -> Option<Point> {
        self.point
    }

    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}

/// The unvalidated serde representation of a [`Move`].
#[derive(Serialize, Deserialize)]
struct RawMove {
    color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    point: Option<Point>,
}

impl TryFrom<RawMove> for Move {
    type Error = ColorError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::with_optional_point(raw.color, raw.point)
    }
}

impl From<Move> for RawMove {
    fn from(mv: Move) -> Self {
        RawMove {
            color: mv.color,
            point: mv.point,
        }
    }
}
