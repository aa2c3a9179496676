//! Line-oriented command parsing for the terminal front end.
//!
//! A line is either a run of letters to type (`cat`, `c a t`), a `-` for
//! delete, or a `:`-prefixed keyword such as `:next` or `:tap 2 3`.

use std::num::ParseIntError;

use crosscan_core::Position;
use crosscan_game::{Command, MoveDirection};

struct Keyword {
    name: &'static str,
    command: Command,
}

impl Keyword {
    const fn new(name: &'static str, command: Command) -> Self {
        Self { name, command }
    }
}

const KEYWORDS: [Keyword; 11] = [
    Keyword::new("del", Command::Delete),
    Keyword::new("next", Command::NextClue),
    Keyword::new("prev", Command::PreviousClue),
    Keyword::new("swap", Command::SwitchDirection),
    Keyword::new("up", Command::Move(MoveDirection::Up)),
    Keyword::new("down", Command::Move(MoveDirection::Down)),
    Keyword::new("left", Command::Move(MoveDirection::Left)),
    Keyword::new("right", Command::Move(MoveDirection::Right)),
    Keyword::new("reset", Command::Reset),
    Keyword::new("n", Command::NextClue),
    Keyword::new("p", Command::PreviousClue),
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Commands to run in order. Empty for a blank line.
    Commands(Vec<Command>),
    /// End the session.
    Quit,
}

/// Why an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    /// `:name` is not a known keyword.
    #[display("unknown command `:{_0}`")]
    UnknownKeyword(#[error(not(source))] String),
    /// A keyword got arguments it does not take.
    #[display("`:{_0}` takes no arguments")]
    UnexpectedArguments(#[error(not(source))] String),
    /// `:tap` needs exactly a row and a column.
    #[display("usage: :tap ROW COL")]
    TapUsage,
    /// A `:tap` coordinate is not a number.
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(ParseIntError),
    /// A typed character is not an ASCII letter.
    #[display("cannot type {_0:?}")]
    InvalidLetter(#[error(not(source))] char),
}

/// Parses one line of user input.
///
/// # Errors
///
/// Returns an error for unknown keywords, malformed `:tap` arguments, and
/// non-letter characters in a typing line.
pub fn parse_line(line: &str) -> Result<Line, ParseCommandError> {
    let line = line.trim();
    if line == "-" {
        return Ok(Line::Commands(vec![Command::Delete]));
    }
    match line.strip_prefix(':') {
        Some(rest) => parse_keyword(rest),
        None => parse_letters(line),
    }
}

fn parse_keyword(rest: &str) -> Result<Line, ParseCommandError> {
    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args = words.collect::<Vec<_>>();

    match name {
        "q" | "quit" => return Ok(Line::Quit),
        "tap" => {
            let pos = parse_tap(&args)?;
            return Ok(Line::Commands(vec![Command::Tap(pos)]));
        }
        _ => {}
    }

    let keyword = KEYWORDS
        .iter()
        .find(|keyword| keyword.name == name)
        .ok_or_else(|| ParseCommandError::UnknownKeyword(name.to_owned()))?;
    if !args.is_empty() {
        return Err(ParseCommandError::UnexpectedArguments(name.to_owned()));
    }
    Ok(Line::Commands(vec![keyword.command]))
}

fn parse_tap(args: &[&str]) -> Result<Position, ParseCommandError> {
    let [row, col] = args else {
        return Err(ParseCommandError::TapUsage);
    };
    let row = row.parse().map_err(ParseCommandError::InvalidCoordinate)?;
    let col = col.parse().map_err(ParseCommandError::InvalidCoordinate)?;
    Ok(Position::new(row, col))
}

fn parse_letters(line: &str) -> Result<Line, ParseCommandError> {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                Ok(Command::TypeLetter(ch))
            } else {
                Err(ParseCommandError::InvalidLetter(ch))
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Line::Commands)
}
