//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! ```
//! use liblife::{Board, Position};
//!
//! let mut board = Board::new(5, 5).unwrap();
//! for y in 1..=3 {
//!     board.set_alive((2, y), true).unwrap();
//! }
//!
//! board.step();
//! assert_eq!(
//!     board.alive_positions(),
//!     vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
//! );
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod pos;
pub mod rule;

pub use board::Board;
pub use cell::Cell;
pub use error::BoardError;
pub use pos::Position;
