//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A (column, row) pair as supplied by a caller.
///
/// Components are signed so that out-of-range input such as `-1,0` can be
/// carried to [`Game::place_mark`](crate::Game::place_mark) and rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{col},{row}")]
pub struct Coord {
    /// Column (x), counted from the left.
    pub col: i32,
    /// Row (y), counted from the top.
    pub row: i32,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Error parsing a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    /// Input was not of the form `x,y`.
    #[display("Expected coordinates like x,y, got {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// A component was not an integer.
    #[display("Invalid coordinate {:?}", _0)]
    NotANumber(#[error(not(source))] String),
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| CoordError::Malformed(s.trim().to_string()))?;

        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<i32>()
                .map_err(|_| CoordError::NotANumber(part.to_string()))
        };

        Ok(Self::new(parse(col)?, parse(row)?))
    }
}
