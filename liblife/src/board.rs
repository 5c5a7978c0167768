use itertools::Itertools;
use log::{Level, debug, log_enabled, trace};
use rand::Rng;

use crate::{cell::Cell, error::BoardError, pos::Position, rule};

const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A fixed-size toroidal Game of Life grid.
///
/// Cells are stored row-major. Each [`Board::step`] writes the next
/// generation into a second buffer and swaps the two, so every neighbor
/// count of a step is taken from the previous generation only.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
    next_cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .cartesian_product(0..width)
            .map(|(y, x)| Cell::dead(x, y))
            .collect_vec();

        debug!("created {width}x{height} board");

        Ok(Self {
            width,
            height,
            generation: 0,
            next_cells: Vec::with_capacity(cells.len()),
            cells,
        })
    }

    /// Creates a board with `alive_cells` distinct cells alive, picked with
    /// the thread-local generator.
    pub fn new_random(width: usize, height: usize, alive_cells: usize) -> Result<Self, BoardError> {
        Self::new_random_with(width, height, alive_cells, &mut rand::rng())
    }

    pub fn new_random_with<R>(
        width: usize,
        height: usize,
        alive_cells: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError>
    where
        R: Rng,
    {
        let mut board = Self::new(width, height)?;

        let capacity = board.cells.len();
        if alive_cells > capacity {
            return Err(BoardError::TooManyAliveCells {
                requested: alive_cells,
                capacity,
            });
        }

        let mut available_positions = board.cells.iter().map(Cell::pos).collect_vec();

        for _ in 0..alive_cells {
            let chosen_index = rng.random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);
            board.set_alive(chosen_position, true)?;
        }

        debug!("seeded {width}x{height} board with {alive_cells} random alive cells");

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of steps taken since the board was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell<P>(&self, pos: P) -> Result<&Cell, BoardError>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos.into())?;
        Ok(&self.cells[index])
    }

    pub fn is_alive<P>(&self, pos: P) -> Result<bool, BoardError>
    where
        P: Into<Position>,
    {
        self.cell(pos).map(|cell| cell.alive)
    }

    /// Marks a single cell alive or dead. Positions never wrap here.
    pub fn set_alive<P>(&mut self, pos: P, alive: bool) -> Result<(), BoardError>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos.into())?;
        self.cells[index].alive = alive;
        Ok(())
    }

    /// The current generation as rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub fn alive_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.alive)
            .map(Cell::pos)
            .collect()
    }

    /// Counts the live cells among the eight neighbors of `pos`, wrapping
    /// around the board edges.
    pub fn alive_neighbors<P>(&self, pos: P) -> Result<usize, BoardError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        self.pos_to_index(pos)?;
        Ok(self.wrapped_alive_neighbors(pos))
    }

    /// Advances the board by one generation.
    pub fn step(&mut self) {
        let mut next_cells = std::mem::take(&mut self.next_cells);
        next_cells.clear();
        next_cells.extend(self.cells.iter().map(|cell| {
            let alive_neighbors = self.wrapped_alive_neighbors(cell.pos());
            Cell::with_state(cell.pos(), rule::next_state(cell.alive, alive_neighbors))
        }));

        self.next_cells = std::mem::replace(&mut self.cells, next_cells);
        self.generation += 1;

        if log_enabled!(Level::Trace) {
            trace!(
                "generation {} population {}",
                self.generation,
                self.population()
            );
        }
    }

    // `pos` must be in bounds.
    fn wrapped_alive_neighbors(&self, pos: Position) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|[dx, dy]| Position {
                x: wrap(pos.x, *dx, self.width),
                y: wrap(pos.y, *dy, self.height),
            })
            // On boards one cell wide or tall an offset can land back on the cell itself.
            .filter(|neighbor| *neighbor != pos)
            .filter(|neighbor| self.cells[self.index_unchecked(*neighbor)].alive)
            .count()
    }

    fn pos_to_index(&self, pos: Position) -> Result<usize, BoardError> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(BoardError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.index_unchecked(pos))
    }

    fn index_unchecked(&self, pos: Position) -> usize {
        pos.x + pos.y * self.width
    }
}

/// Boards are equal when they hold the same grid, regardless of generation.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

// coord < len and offset >= -1, so coord + len + offset cannot underflow.
fn wrap(coord: usize, offset: isize, len: usize) -> usize {
    (coord + len).wrapping_add_signed(offset) % len
}
