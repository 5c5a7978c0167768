use crate::pos::Position;

/// One grid position and whether it is alive.
///
/// Cells carry grid coordinates only. Pixel geometry belongs to whoever
/// draws the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

impl Cell {
    pub const fn dead(x: usize, y: usize) -> Self {
        Self { x, y, alive: false }
    }

    pub const fn with_state(pos: Position, alive: bool) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            alive,
        }
    }

    pub const fn pos(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}
