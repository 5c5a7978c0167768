use std::time::Duration;

use anyhow::{Context, ensure};
use clap::Parser;
use liblife::Board;
use rand::{SeedableRng, rngs::StdRng};

use crate::renderer::RenderConfig;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Conway's Game of Life on a torus", long_about = None)]
pub struct Config {
    /// Board columns
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Board rows
    #[arg(long, default_value_t = 48)]
    pub height: usize,

    /// Side length of one cell in pixels
    #[arg(long, default_value_t = 10)]
    pub cell_size: u32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u64,

    /// Cells alive at start, placed at random
    #[arg(long, default_value_t = 1000)]
    pub alive: usize,

    /// Seed for the starting pattern
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window title
    #[arg(long, default_value = "Conway Game of life")]
    pub title: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.width > 0, "--width must be at least 1");
        ensure!(self.height > 0, "--height must be at least 1");
        ensure!(self.cell_size > 0, "--cell-size must be at least 1");
        ensure!(self.tick_ms > 0, "--tick-ms must be at least 1");
        ensure!(self.fps > 0, "--fps must be at least 1");

        let capacity = self
            .width
            .checked_mul(self.height)
            .context("board has too many cells")?;
        ensure!(
            self.alive <= capacity,
            "--alive {} exceeds the {capacity} cells of a {}x{} board",
            self.alive,
            self.width,
            self.height
        );

        self.window_size()?;

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            cell_pixel_size: self.cell_size,
        }
    }

    /// Window size in logical pixels.
    pub fn window_size(&self) -> anyhow::Result<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(self.cell_size))
        };

        let width = side(self.width).context("board too wide for the window")?;
        let height = side(self.height).context("board too tall for the window")?;

        Ok((width, height))
    }

    pub fn build_board(&self) -> anyhow::Result<Board> {
        let board = match self.seed {
            Some(seed) => Board::new_random_with(
                self.width,
                self.height,
                self.alive,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Board::new_random(self.width, self.height, self.alive),
        };

        board.context("Building starting board")
    }
}
