pub mod puzzle;

pub use puzzle::{
    // Placement primitives
    Direction, HighlightMask, Orientation, Position,
    // Placer results
    Crossword, HiddenWord, WordPlacement, WordSearch,
    // Presentation and storage
    PlacementSummary, PuzzleSet,
};
