//! Terminal front end for the Crosscan crossword player.
//!
//! Reads commands line by line, routes them through a
//! [`crosscan_game::Session`], and redraws the grid as text after each one.
#![allow(missing_docs, clippy::missing_panics_doc)]

pub use self::{
    app::{load_puzzle, run, start_session},
    command::{Line, ParseCommandError, parse_line},
    error::AppError,
    render::{GridView, clue_line, render},
    style::GridStyle,
};

pub mod app;
pub mod command;
pub mod error;
pub mod render;
pub mod style;
pub mod version;
