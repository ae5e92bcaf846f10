use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of distinct coordinates expressible with SGF letters (`a-z`, then `A-Z`).
pub const MAX_COORDINATE: u8 = 52;

/// An intersection on the board, with zero-based coordinates.
///
/// `x` is the column and `y` the row, both counted from the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

/// The error type for converting a [`Point`] from or to its SGF letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointError {
    /// A point consists of exactly two letters.
    WrongLength(String),
    InvalidLetter(char),
    /// The coordinate has no SGF letter.
    OutOfRange { x: u8, y: u8 },
}

impl std::error::Error for PointError {}

impl std::fmt::Display for PointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointError::WrongLength(raw) => {
                write!(f, "Point '{}' must consist of exactly two letters", raw)
            }
            PointError::InvalidLetter(c) => {
                write!(f, "'{}' is not a valid point coordinate", c)
            }
            PointError::OutOfRange { x, y } => write!(
                f,
                "Point ({}, {}) cannot be written, coordinates must be below {}",
                x, y, MAX_COORDINATE
            ),
        }
    }
}

fn coordinate_from_letter(c: char) -> Result<u8, PointError> {
    match c {
        'a'..='z' => Ok(c as u8 - b'a'),
        'A'..='Z' => Ok(c as u8 - b'A' + 26),
        _ => Err(PointError::InvalidLetter(c)),
    }
}

fn letter_from_coordinate(coord: u8) -> Option<char> {
    match coord {
        0..=25 => Some((b'a' + coord) as char),
        26..=51 => Some((b'A' + coord - 26) as char),
        _ => None,
    }
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Renders the point as two SGF letters, e.g. `dp`.
    pub fn to_sgf(&self) -> Result<String, PointError> {
        let out_of_range = PointError::OutOfRange {
            x: self.x,
            y: self.y,
        };
        let x = letter_from_coordinate(self.x).ok_or(out_of_range.clone())?;
        let y = letter_from_coordinate(self.y).ok_or(out_of_range)?;
        Ok([x, y].iter().collect())
    }

    /// Parses a raw placement value into points.
    ///
    /// Besides a single point, this accepts the compressed form `aa:cc`, which
    /// stands for the rectangle spanned by the two corners. Its points are
    /// returned in row-major order.
    pub fn list_from_sgf(raw: &str) -> Result<Vec<Point>, PointError> {
        let Some((first, second)) = raw.split_once(':') else {
            return Ok(vec![raw.parse()?]);
        };
        let a: Point = first.parse()?;
        let b: Point = second.parse()?;
        let mut points = Vec::new();
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                points.push(Point { x, y });
            }
        }
        Ok(points)
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(x), Some(y), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PointError::WrongLength(String::from(s)));
        };
        Ok(Point {
            x: coordinate_from_letter(x)?,
            y: coordinate_from_letter(y)?,
        })
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
