use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::puzzle::grid::LetterGrid;

#[derive(Debug, Clone, Copy, Serialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Directions a word-search word may run in. Backward directions are not used.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DiagonalDownRight,
    DiagonalUpRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DiagonalDownRight,
        Direction::DiagonalUpRight,
    ];

    /// Row and column step for one letter
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalUpRight => (-1, 1),
        }
    }
}

/// Crossword words only run along the two axes.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("Horizontal"),
            Orientation::Vertical => f.write_str("Vertical"),
        }
    }
}

/// Highlight mask for the word search: true where a placed word covers the cell
pub type HighlightMask = Vec<Vec<bool>>;

/// A word committed to the word-search grid
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct HiddenWord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// A word committed to the crossword grid. Created once, never modified.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct WordPlacement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    /// Occupied cells in letter order
    pub cells: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WordSearch {
    pub grid: LetterGrid,
    pub highlight: HighlightMask,
    pub hidden: Vec<HiddenWord>,
    pub dropped: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Crossword {
    pub grid: LetterGrid,
    pub placements: Vec<WordPlacement>,
    pub dropped: Vec<String>,
}

/// Placement as shown to players: 1-indexed row and column
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct PlacementSummary {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl From<&WordPlacement> for PlacementSummary {
    fn from(placement: &WordPlacement) -> Self {
        Self {
            word: placement.word.clone(),
            row: placement.row + 1,
            col: placement.col + 1,
            orientation: placement.orientation,
        }
    }
}

impl fmt::Display for PlacementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: row {}, col {} ({})",
            self.word, self.row, self.col, self.orientation
        )
    }
}

/// Both puzzles generated from one word list
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleSet {
    pub puzzle_id: Uuid,
    pub title: Option<String>,
    pub words: Vec<String>,
    /// Master seed both placers were derived from
    pub seed: u64,
    pub word_search: WordSearch,
    pub crossword: Crossword,
    pub created_at: DateTime<Utc>,
}
