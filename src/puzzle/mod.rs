// Puzzle generation: word search and crossword placement

pub mod crossword;
pub mod generator;
pub mod grid;
pub mod scorer;
pub mod validator;
pub mod word_search;

pub use crossword::{CrosswordPlacer, DisconnectedWordPolicy};
pub use generator::{PuzzleGenerator, PuzzleSpec};
pub use validator::WordListValidator;
pub use word_search::{WordSearchPlacer, DEFAULT_PLACEMENT_ATTEMPTS};
