/// Glyphs used when drawing a crossword grid as text.
///
/// Marker pairs are drawn on either side of a white cell's letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStyle {
    pub black_cell: char,
    pub empty_cell: char,
    pub selected: (char, char),
    pub entry_highlight: (char, char),
    pub unhighlighted: (char, char),
    pub show_clue_numbers: bool,
    pub frame: bool,
}

impl GridStyle {
    /// Compact style: no frame, no clue numbers.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            black_cell: '#',
            empty_cell: '.',
            selected: ('[', ']'),
            entry_highlight: ('(', ')'),
            unhighlighted: (' ', ' '),
            show_clue_numbers: false,
            frame: false,
        }
    }

    /// Framed style with a clue-number line above each row.
    #[must_use]
    pub fn boxed() -> Self {
        Self {
            black_cell: '█',
            empty_cell: ' ',
            show_clue_numbers: true,
            frame: true,
            ..Self::plain()
        }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self::plain()
    }
}
