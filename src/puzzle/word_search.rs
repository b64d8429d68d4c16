use rand::Rng;

use crate::{
    models::{Direction, HiddenWord, HighlightMask, Position, WordSearch},
    puzzle::grid::LetterGrid,
    utils::letters::normalize_word,
};

/// Random trials allowed per word before it is dropped
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 500;

/// Places words into a square grid by random trial, then fills the rest with noise letters.
#[derive(Debug, Clone)]
pub struct WordSearchPlacer {
    max_attempts: usize,
}

impl Default for WordSearchPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

impl WordSearchPlacer {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Words are placed in input order, so earlier words get first pick of the grid.
    pub fn place(&self, words: &[String], size: usize, rng: &mut impl Rng) -> WordSearch {
        let mut grid = LetterGrid::new(size);
        let mut highlight: HighlightMask = vec![vec![false; size]; size];
        let mut hidden = Vec::new();
        let mut dropped = Vec::new();

        for word in words {
            let letters = normalize_word(word);
            let text: String = letters.iter().collect();

            match self.place_word(&mut grid, &letters, rng) {
                Some((origin, direction, path)) => {
                    for pos in &path {
                        highlight[pos.row][pos.col] = true;
                    }
                    tracing::debug!(
                        "Hid {} at ({}, {}) going {:?}",
                        text,
                        origin.row,
                        origin.col,
                        direction
                    );
                    hidden.push(HiddenWord {
                        word: text,
                        row: origin.row,
                        col: origin.col,
                        direction,
                    });
                }
                None => {
                    tracing::debug!(
                        "Dropped {} from word search after {} attempts",
                        text,
                        self.max_attempts
                    );
                    dropped.push(text);
                }
            }
        }

        grid.fill_empty(rng);

        WordSearch {
            grid,
            highlight,
            hidden,
            dropped,
        }
    }

    /// Try random origins and directions until one fits, committing the first that does
    fn place_word(
        &self,
        grid: &mut LetterGrid,
        letters: &[char],
        rng: &mut impl Rng,
    ) -> Option<(Position, Direction, Vec<Position>)> {
        let size = grid.size();
        if letters.is_empty() || size == 0 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

            let Some(path) = grid.trace(row as isize, col as isize, direction.delta(), letters.len())
            else {
                continue;
            };

            if grid.place(letters, &path) {
                return Some((Position { row, col }, direction, path));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn path_of(hidden: &HiddenWord) -> Vec<Position> {
        let (dr, dc) = hidden.direction.delta();
        (0..hidden.word.chars().count() as isize)
            .map(|i| Position {
                row: (hidden.row as isize + dr * i) as usize,
                col: (hidden.col as isize + dc * i) as usize,
            })
            .collect()
    }

    #[test]
    fn test_grid_is_filled_after_generation() {
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = WordSearchPlacer::default().place(&words(&["RUST", "CARGO", "CRATE"]), 16, &mut rng);

        assert_eq!(puzzle.grid.size(), 16);
        assert!(puzzle.grid.is_filled());
        assert_eq!(puzzle.highlight.len(), 16);
        assert!(puzzle.highlight.iter().all(|row| row.len() == 16));
    }

    #[test]
    fn test_hidden_words_read_back_from_grid() {
        let mut rng = StdRng::seed_from_u64(9);
        let list = words(&["apple", "Banana", "CHERRY", "date", "ELDER", "fig"]);
        let puzzle = WordSearchPlacer::default().place(&list, 16, &mut rng);

        assert_eq!(puzzle.hidden.len() + puzzle.dropped.len(), list.len());
        for hidden in &puzzle.hidden {
            let read: String = path_of(hidden)
                .into_iter()
                .map(|pos| puzzle.grid.get(pos).unwrap())
                .collect();
            assert_eq!(read, hidden.word);
            assert!(path_of(hidden).iter().all(|pos| puzzle.highlight[pos.row][pos.col]));
        }
    }

    #[test]
    fn test_highlight_covers_only_placed_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = WordSearchPlacer::default().place(&words(&["ONE", "TWO"]), 10, &mut rng);

        let marked = puzzle.highlight.iter().flatten().filter(|&&m| m).count();
        let covered: std::collections::HashSet<Position> =
            puzzle.hidden.iter().flat_map(path_of).collect();
        assert_eq!(marked, covered.len());
    }

    #[test]
    fn test_full_length_word_spans_whole_line() {
        let mut rng = StdRng::seed_from_u64(16);
        let puzzle = WordSearchPlacer::default().place(&words(&["ABCDEFGHIJKLMNOP"]), 16, &mut rng);

        assert_eq!(puzzle.hidden.len(), 1);
        let hidden = &puzzle.hidden[0];
        let path = path_of(hidden);
        assert_eq!(path.len(), 16);
        match hidden.direction {
            Direction::Right => assert_eq!(hidden.col, 0),
            Direction::Down => assert_eq!(hidden.row, 0),
            Direction::DiagonalDownRight => assert_eq!((hidden.row, hidden.col), (0, 0)),
            Direction::DiagonalUpRight => assert_eq!((hidden.row, hidden.col), (15, 0)),
        }
    }

    #[test]
    fn test_word_with_space_is_dropped() {
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = WordSearchPlacer::default().place(&words(&["NEW YORK"]), 8, &mut rng);

        assert!(puzzle.hidden.is_empty());
        assert_eq!(puzzle.dropped, vec!["NEW YORK".to_string()]);
        assert!(puzzle.grid.is_filled());
        assert!(puzzle.highlight.iter().flatten().all(|&m| !m));
        for line in puzzle.grid.render('?') {
            assert!(!line.contains(' '));
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = WordSearchPlacer::default().place(&words(&["TOOLONG"]), 5, &mut rng);
        assert_eq!(puzzle.dropped, vec!["TOOLONG".to_string()]);
    }

    #[test]
    fn test_blank_token_is_reported_dropped() {
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = WordSearchPlacer::default().place(&words(&["CAT", ""]), 8, &mut rng);
        assert_eq!(puzzle.hidden.len(), 1);
        assert_eq!(puzzle.dropped, vec![String::new()]);
    }

    proptest! {
        #[test]
        fn prop_word_search_invariants(
            list in prop::collection::vec("[A-F]{1,10}", 0..8),
            size in 4usize..=20,
            seed in any::<u64>(),
        ) {
            let placer = WordSearchPlacer::default();
            let puzzle = placer.place(&list, size, &mut StdRng::seed_from_u64(seed));

            prop_assert!(puzzle.grid.is_filled());
            prop_assert_eq!(puzzle.hidden.len() + puzzle.dropped.len(), list.len());

            // Overlapping words agree on every shared cell
            for hidden in &puzzle.hidden {
                let read: String = path_of(hidden)
                    .into_iter()
                    .map(|pos| puzzle.grid.get(pos).unwrap())
                    .collect();
                prop_assert_eq!(&read, &hidden.word);
            }

            // A word that fits the grid is only ever dropped because of
            // earlier words; alone on an empty grid it always places
            for word in &puzzle.dropped {
                if word.chars().count() <= size {
                    let alone = placer.place(
                        std::slice::from_ref(word),
                        size,
                        &mut StdRng::seed_from_u64(seed),
                    );
                    prop_assert_eq!(alone.hidden.len(), 1, "{} failed on an empty grid", word);
                }
            }

            let again = placer.place(&list, size, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(&again, &puzzle);
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let list = words(&["ALPHA", "BRAVO", "CHARLIE", "DELTA"]);
        let first = WordSearchPlacer::default().place(&list, 16, &mut StdRng::seed_from_u64(77));
        let second = WordSearchPlacer::default().place(&list, 16, &mut StdRng::seed_from_u64(77));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_attempts_drops_everything() {
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = WordSearchPlacer::new(0).place(&words(&["CAT"]), 6, &mut rng);
        assert!(puzzle.hidden.is_empty());
        assert!(puzzle.grid.is_filled());
    }
}
