use std::str::FromStr;

use anyhow::bail;
use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{Crossword, Orientation, Position, WordPlacement},
    puzzle::{
        grid::LetterGrid,
        scorer::{Crossing, Scorer},
    },
    utils::letters::compact_word,
};

/// What to do with a word that cannot cross any placed word
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DisconnectedWordPolicy {
    /// Leave the word out so every placed word stays connected
    #[default]
    Drop,
    /// Put the word in the first horizontal slot that fits, even if isolated
    ForceHorizontal,
}

impl FromStr for DisconnectedWordPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "force-horizontal" | "force_horizontal" => Ok(Self::ForceHorizontal),
            other => bail!("unknown disconnected word policy '{}'", other),
        }
    }
}

/// A scored position for the next word
#[derive(Debug)]
struct Candidate {
    row: usize,
    col: usize,
    orientation: Orientation,
    path: Vec<Position>,
    score: u32,
}

/// Builds a sparse crossword by attaching each word at its best-scoring crossing.
#[derive(Debug, Clone, Default)]
pub struct CrosswordPlacer {
    policy: DisconnectedWordPolicy,
}

impl CrosswordPlacer {
    pub fn new(policy: DisconnectedWordPolicy) -> Self {
        Self { policy }
    }

    /// Longest word anchors the puzzle in the middle; every later word is
    /// attached perpendicular to a word already on the grid.
    pub fn place(&self, words: &[String], grid_size: usize, rng: &mut impl Rng) -> Crossword {
        let mut grid = LetterGrid::new(grid_size);
        let mut placements: Vec<WordPlacement> = Vec::new();
        let mut dropped = Vec::new();

        let mut tokens: Vec<Vec<char>> = words.iter().map(|w| compact_word(w)).collect();
        // Stable, so equal lengths keep input order
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        for letters in tokens {
            let text: String = letters.iter().collect();
            if letters.is_empty() {
                dropped.push(text);
                continue;
            }

            let candidate = if placements.is_empty() {
                Self::anchor(&grid, &letters)
            } else {
                match Self::best_crossing(&grid, &placements, &letters, rng) {
                    Some(candidate) => Some(candidate),
                    None => self.fallback(&grid, &letters),
                }
            };

            let Some(candidate) = candidate else {
                tracing::info!("Could not place '{}' in the crossword", text);
                dropped.push(text);
                continue;
            };

            if !grid.place(&letters, &candidate.path) {
                // Candidates are validated against this grid, so this cannot happen
                tracing::error!("Rejected validated crossword position for '{}'", text);
                dropped.push(text);
                continue;
            }

            tracing::debug!(
                "Placed {} at ({}, {}) {} with score {}",
                text,
                candidate.row,
                candidate.col,
                candidate.orientation,
                candidate.score
            );
            placements.push(WordPlacement {
                word: text,
                row: candidate.row,
                col: candidate.col,
                orientation: candidate.orientation,
                cells: candidate.path,
            });
        }

        Crossword {
            grid,
            placements,
            dropped,
        }
    }

    /// Centered horizontally, or the first horizontal slot if the center is taken
    fn anchor(grid: &LetterGrid, letters: &[char]) -> Option<Candidate> {
        let size = grid.size() as isize;
        let row = size / 2;
        let col = (size - letters.len() as isize) / 2;

        let centered = grid
            .trace(row, col, Orientation::Horizontal.delta(), letters.len())
            .filter(|path| grid.fits(letters, path));

        centered
            .or_else(|| grid.first_horizontal_fit(letters))
            .map(|path| Self::horizontal_candidate(path, 0))
    }

    fn fallback(&self, grid: &LetterGrid, letters: &[char]) -> Option<Candidate> {
        match self.policy {
            DisconnectedWordPolicy::Drop => None,
            DisconnectedWordPolicy::ForceHorizontal => grid
                .first_horizontal_fit(letters)
                .map(|path| Self::horizontal_candidate(path, 0)),
        }
    }

    fn horizontal_candidate(path: Vec<Position>, score: u32) -> Candidate {
        let origin = path[0];
        Candidate {
            row: origin.row,
            col: origin.col,
            orientation: Orientation::Horizontal,
            path,
            score,
        }
    }

    /// Highest-scoring valid crossing against any placed word. Placed words are
    /// visited in random order; ties keep the first candidate found.
    fn best_crossing(
        grid: &LetterGrid,
        placements: &[WordPlacement],
        letters: &[char],
        rng: &mut impl Rng,
    ) -> Option<Candidate> {
        let mut order: Vec<&WordPlacement> = placements.iter().collect();
        order.shuffle(rng);

        let mut best: Option<Candidate> = None;
        for placed in order {
            let placed_letters: Vec<char> = placed.word.chars().collect();
            for (i, &placed_letter) in placed_letters.iter().enumerate() {
                for (j, &letter) in letters.iter().enumerate() {
                    if placed_letter != letter {
                        continue;
                    }

                    let (row, col) = match placed.orientation {
                        Orientation::Horizontal => {
                            (placed.row as isize - j as isize, (placed.col + i) as isize)
                        }
                        Orientation::Vertical => {
                            ((placed.row + i) as isize, placed.col as isize - j as isize)
                        }
                    };
                    let orientation = placed.orientation.perpendicular();

                    let Some(path) = grid.trace(row, col, orientation.delta(), letters.len())
                    else {
                        continue;
                    };
                    if !grid.fits(letters, &path) {
                        continue;
                    }

                    let crossing = Crossing {
                        candidate_offset: j,
                        candidate_len: letters.len(),
                        placed_offset: i,
                        placed_len: placed_letters.len(),
                    };
                    let score = Scorer::score(grid, &path, &crossing);

                    if best.as_ref().map_or(true, |b| score > b.score) {
                        best = Some(Candidate {
                            row: row as usize,
                            col: col as usize,
                            orientation,
                            path,
                            score,
                        });
                    }
                }
            }
        }

        best
    }
}
