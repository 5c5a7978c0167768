//! Errors raised by board construction and coordinate access.

use thiserror::Error;

use crate::pos::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Either dimension was zero.
    #[error("invalid board dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// A direct accessor was called with a position outside the grid.
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// Random seeding asked for more distinct alive cells than the board holds.
    #[error("cannot place {requested} alive cells on a board of {capacity} cells")]
    TooManyAliveCells { requested: usize, capacity: usize },
}
