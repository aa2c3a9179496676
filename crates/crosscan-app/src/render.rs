use crosscan_core::{Cell, Entry, Position, Puzzle, PuzzleModel as _};

use crate::style::GridStyle;

const CELL_WIDTH: usize = 3;

/// What the renderer needs to know about the current selection.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub puzzle: &'a Puzzle,
    pub selected: Option<Position>,
    pub entry: Option<&'a Entry>,
}

impl GridView<'_> {
    fn markers(&self, cell: &Cell, style: &GridStyle) -> (char, char) {
        let pos = cell.position();
        if self.selected == Some(pos) {
            style.selected
        } else if self.entry.is_some_and(|entry| entry.cells().contains(&pos)) {
            style.entry_highlight
        } else {
            style.unhighlighted
        }
    }
}

/// Draws the grid as text, one line per row (two with clue numbers).
#[must_use]
pub fn render(view: &GridView<'_>, style: &GridStyle) -> String {
    let puzzle = view.puzzle;
    let border = format!("+{}+", "-".repeat(puzzle.width() * CELL_WIDTH));
    let (left, right) = if style.frame { ("|", "|") } else { ("", "") };

    let mut out = String::new();
    if style.frame {
        out.push_str(&border);
        out.push('\n');
    }
    for row in 0..puzzle.height() {
        let cells = (0..puzzle.width())
            .filter_map(|col| puzzle.cell(Position::new(row, col)))
            .collect::<Vec<_>>();

        if style.show_clue_numbers {
            let numbers = cells
                .iter()
                .map(|cell| match cell.clue_number() {
                    Some(number) => format!("{number:<CELL_WIDTH$}"),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect::<String>();
            out.push_str(&format!("{left}{numbers}{right}\n"));
        }

        let letters = cells
            .iter()
            .map(|cell| {
                if !cell.is_white() {
                    return style.black_cell.to_string().repeat(CELL_WIDTH);
                }
                let (open, close) = view.markers(cell, style);
                let glyph = cell.value().unwrap_or(style.empty_cell);
                format!("{open}{glyph}{close}")
            })
            .collect::<String>();
        let letters = if style.frame {
            letters.as_str()
        } else {
            letters.trim_end_matches(' ')
        };
        out.push_str(&format!("{left}{letters}{right}\n"));
    }
    if style.frame {
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// Describes an entry as `12 across: clue text`.
#[must_use]
pub fn clue_line(entry: &Entry) -> String {
    let label = format!("{} {}", entry.clue_number(), entry.direction());
    match entry.clue() {
        Some(clue) => format!("{label}: {clue}"),
        None => label,
    }
}
