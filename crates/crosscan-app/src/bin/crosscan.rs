//! Plays a crossword in the terminal.
//!
//! Usage: `crosscan PUZZLE [--direction across|down] [--style plain|boxed]`.
//! Commands are read from standard input; see `crosscan --help`.

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use crosscan_app::{AppError, GridStyle, version::build_version};
use crosscan_core::Direction;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum DirectionArg {
    #[default]
    Across,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Across => Self::Across,
            DirectionArg::Down => Self::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StyleArg {
    #[default]
    Plain,
    Boxed,
}

impl From<StyleArg> for GridStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Plain => Self::plain(),
            StyleArg::Boxed => Self::boxed(),
        }
    }
}

/// Crossword player for the terminal.
///
/// Type letters to fill cells. Other commands, one per line:
/// `-` or `:del` delete, `:next`/`:prev` jump clues, `:swap` switch
/// direction, `:up` `:down` `:left` `:right` move, `:tap ROW COL` tap a
/// cell, `:reset` return to the first cell, `:quit` exit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file: grid rows, a blank line, then clue lines like `1A: text`.
    puzzle: PathBuf,

    /// Initial writing direction.
    #[arg(long, value_enum, default_value_t)]
    direction: DirectionArg,

    /// Grid drawing style.
    #[arg(long, value_enum, default_value_t)]
    style: StyleArg,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!("crosscan {}", build_version());

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("crosscan: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<(), AppError> {
    let puzzle = crosscan_app::load_puzzle(&args.puzzle)?;
    let mut session = crosscan_app::start_session(puzzle)?;
    session.set_direction(args.direction.into());

    let style = GridStyle::from(args.style);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    crosscan_app::run(&mut session, stdin, &mut stdout, &style)
}
