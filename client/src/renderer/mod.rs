mod renderthing;

use std::{
    sync::{Arc, RwLock},
    time::Instant,
};

use liblife::{Board, Cell};
use log::info;
use renderthing::{
    Renderer,
    frame::{RenderFrame, Rgba},
    window::RendererWindowConfig,
};

use crate::{State, config::Config, read_state, write_state};

const ALIVE_COLOR: Rgba = [255, 255, 255, 255];
const DEAD_COLOR: Rgba = [0, 0, 0, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub cell_pixel_size: u32,
}

/// Pixel rectangle covered by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl RenderConfig {
    pub fn cell_rect(&self, cell: &Cell) -> CellRect {
        CellRect {
            x: cell.x as u32 * self.cell_pixel_size,
            y: cell.y as u32 * self.cell_pixel_size,
            size: self.cell_pixel_size,
        }
    }
}

pub fn run(state_arc: Arc<RwLock<State>>, config: &Config) -> anyhow::Result<()> {
    let render_config = config.render_config();
    let (width, height) = config.window_size()?;

    info!(
        "opening {width}x{height} window, {} px cells, target {} fps",
        render_config.cell_pixel_size, config.fps
    );

    let renderer = Renderer::new(RendererWindowConfig {
        title: config.title.clone(),
        width,
        height,
        target_fps: config.fps,
        draw_callback: Box::new(move |frame| {
            tick(&state_arc, Instant::now())?;

            let state = read_state(&state_arc)?;
            draw(&state.board, render_config, frame);
            Ok(())
        }),
    })?;

    renderer.run()
}

/// Steps the board if the ticker says a generation is due.
fn tick(state_arc: &RwLock<State>, now: Instant) -> anyhow::Result<bool> {
    let mut state = write_state(state_arc)?;
    let state = &mut *state;

    if state.paused || !state.ticker.poll(now) {
        return Ok(false);
    }

    state.board.step();
    Ok(true)
}

fn draw(board: &Board, render_config: RenderConfig, mut frame: RenderFrame) {
    frame.fill(DEAD_COLOR);

    for row in board.rows() {
        for cell in row {
            let CellRect { x, y, size } = render_config.cell_rect(cell);
            let color = if cell.alive { ALIVE_COLOR } else { DEAD_COLOR };

            frame.fill_rect(x, y, size, size, color);
        }
    }
}
