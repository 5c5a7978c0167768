use std::{
    io,
    process::exit,
    sync::{Arc, RwLock},
    time::Duration,
};

use anyhow::{Context, bail, ensure};
use liblife::Board;
use log::{error, info};

use crate::{State, write_state};

/// Upper bound for `step <n>`; the whole batch runs under the write lock.
pub const MAX_STEPS_PER_COMMAND: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step(usize),
    Pause,
    Resume,
    Rate(Duration),
    Random(usize),
    Status,
    Exit,
}

pub fn run_cli(state_arc: Arc<RwLock<State>>) {
    for line_res in io::stdin().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(e) => {
                error!("reading console input: {e}");
                return;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let reply = parse_command(line.split_whitespace()).and_then(|command| {
            if command == Command::Exit {
                info!("exit requested from console");
                exit(0);
            }

            let mut state = write_state(&state_arc)?;
            apply(&mut state, command)
        });

        match reply {
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("! {e:#}"),
        }
    }
}

pub fn parse_command<'a, I>(mut args: I) -> anyhow::Result<Command>
where
    I: Iterator<Item = &'a str>,
{
    let command = match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            ensure!(
                times <= MAX_STEPS_PER_COMMAND,
                "at most {MAX_STEPS_PER_COMMAND} steps per command"
            );
            Command::Step(times)
        }

        "pause" => Command::Pause,

        "resume" => Command::Resume,

        "rate" => {
            let millis = args
                .next()
                .context("missing interval in milliseconds")?
                .parse::<u64>()?;

            ensure!(millis > 0, "interval must be at least 1ms");
            Command::Rate(Duration::from_millis(millis))
        }

        "random" => {
            let alive_count = args
                .next()
                .context("missing alive count")?
                .parse::<usize>()?;

            Command::Random(alive_count)
        }

        "status" => Command::Status,

        "exit" => Command::Exit,

        other => bail!("Unknown command {other:?}"),
    };

    if let Some(extra) = args.next() {
        bail!("unexpected argument {extra:?}");
    }

    Ok(command)
}

/// Applies a console command and returns the line to echo back.
pub fn apply(state: &mut State, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Step(times) => {
            for _ in 0..times {
                state.board.step();
            }
        }

        Command::Pause => {
            state.paused = true;
            info!("paused at generation {}", state.board.generation());
        }

        Command::Resume => {
            state.paused = false;
            info!("resumed at generation {}", state.board.generation());
        }

        Command::Rate(interval) => {
            state.ticker.set_interval(interval);
            info!("tick interval set to {interval:?}");
        }

        Command::Random(alive_count) => {
            let board = &mut state.board;
            *board = Board::new_random(board.width(), board.height(), alive_count)?;
            info!("board reseeded with {alive_count} alive cells");
        }

        Command::Status => {
            return Ok(format!(
                "generation {} population {} {}",
                state.board.generation(),
                state.board.population(),
                if state.paused { "paused" } else { "running" }
            ));
        }

        Command::Exit => bail!("exit is handled by the console loop"),
    }

    Ok("OK".to_owned())
}
