use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use crosscan_core::{Puzzle, PuzzleModel as _};
use crosscan_game::{CrosswordGame, Selection, Session};

use crate::{
    command::{self, Line},
    error::AppError,
    render::{self, GridView},
    style::GridStyle,
};

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid puzzle.
pub fn load_puzzle(path: &Path) -> Result<Puzzle, AppError> {
    let text = fs::read_to_string(path)?;
    let puzzle = text.parse::<Puzzle>()?;
    log::info!(
        "loaded {}x{} puzzle with {} clue numbers from {}",
        puzzle.width(),
        puzzle.height(),
        puzzle.num_entries(),
        path.display()
    );
    Ok(puzzle)
}

/// Builds a session for `puzzle` with a listener that logs every selection
/// change.
///
/// # Errors
///
/// Returns [`AppError::NoWhiteCells`] if there is nothing to select.
pub fn start_session(puzzle: Puzzle) -> Result<Session, AppError> {
    if puzzle.first_white_cell().is_none() {
        return Err(AppError::NoWhiteCells);
    }
    let mut session = Session::new();
    session.set_listener(|selection: Selection| {
        log::debug!("selected {} {}", selection.position, selection.direction);
        true
    });
    session.load(CrosswordGame::new(puzzle));
    Ok(session)
}

/// Runs the command loop until `:quit` or end of input.
///
/// The grid is drawn once up front and again after every line. Lines that
/// fail to parse print an error and leave the session untouched.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R, W>(
    session: &mut Session,
    input: R,
    output: &mut W,
    style: &GridStyle,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    draw(session, output, style)?;
    for line in input.lines() {
        let line = line?;
        match command::parse_line(&line) {
            Ok(Line::Quit) => break,
            Ok(Line::Commands(commands)) => {
                for command in commands {
                    let applied = session.handle(command);
                    log::debug!("{command:?} applied: {applied}");
                }
            }
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        }
        draw(session, output, style)?;
    }
    output.flush()?;
    Ok(())
}

fn draw<W: Write>(session: &mut Session, output: &mut W, style: &GridStyle) -> io::Result<()> {
    let selected = session.selected_cell();
    let entry = session.current_entry().cloned();
    let Some(game) = session.game() else {
        return Ok(());
    };

    let view = GridView {
        puzzle: game.puzzle(),
        selected,
        entry: entry.as_ref(),
    };
    write!(output, "{}", render::render(&view, style))?;
    if let Some(entry) = &entry {
        writeln!(output, "{}", render::clue_line(entry))?;
    }
    if game.is_solved() {
        writeln!(output, "Solved!")?;
    }
    Ok(())
}
