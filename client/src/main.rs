use std::{
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    thread,
    time::Instant,
};

use anyhow::anyhow;
use clap::Parser;
use config::Config;
use liblife::Board;
use log::info;
use ticker::StepTicker;

mod cli;
mod config;
mod renderer;
mod ticker;

pub struct State {
    board: Board,
    paused: bool,
    ticker: StepTicker,
}

pub fn read_state(state_arc: &RwLock<State>) -> anyhow::Result<RwLockReadGuard<'_, State>> {
    state_arc.read().map_err(|_| anyhow!("State lock poisoned"))
}

pub fn write_state(state_arc: &RwLock<State>) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
    state_arc.write().map_err(|_| anyhow!("State lock poisoned"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate()?;

    let board = config.build_board()?;
    let ticker = StepTicker::new(config.tick_interval(), Instant::now());

    info!(
        "{}x{} board, {} alive, stepping every {:?}",
        board.width(),
        board.height(),
        board.population(),
        ticker.interval()
    );
    info!("console commands: step [n], pause, resume, rate <ms>, random <n>, status, exit");

    let state_arc = Arc::new(RwLock::new(State {
        board,
        paused: false,
        ticker,
    }));

    let cli_state_arc = state_arc.clone();
    thread::spawn(move || cli::run_cli(cli_state_arc));

    renderer::run(state_arc, &config)
}
