use crate::{models::Position, puzzle::grid::LetterGrid};

/// Where a candidate word crosses an already placed word
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    /// Offset of the shared letter within the candidate word
    pub candidate_offset: usize,
    pub candidate_len: usize,
    /// Offset of the shared letter within the placed word
    pub placed_offset: usize,
    pub placed_len: usize,
}

impl Crossing {
    fn at_candidate_end(&self) -> bool {
        self.candidate_offset == 0 || self.candidate_offset + 1 == self.candidate_len
    }

    fn at_placed_end(&self) -> bool {
        self.placed_offset == 0 || self.placed_offset + 1 == self.placed_len
    }
}

pub struct Scorer;

impl Scorer {
    /// Score a valid crossing position. Higher is better.
    ///
    /// Scoring rules:
    /// - +2 when the shared letter is at either end of the candidate, otherwise +1
    /// - +1 when the shared letter is at either end of the placed word
    /// - +1 for every cell along the candidate's path that already holds a letter
    pub fn score(grid: &LetterGrid, path: &[Position], crossing: &Crossing) -> u32 {
        let candidate_bonus = if crossing.at_candidate_end() { 2 } else { 1 };
        let placed_bonus = if crossing.at_placed_end() { 1 } else { 0 };

        candidate_bonus + placed_bonus + Self::reuse_bonus(grid, path)
    }

    fn reuse_bonus(grid: &LetterGrid, path: &[Position]) -> u32 {
        grid.occupied_along(path) as u32
    }
}
