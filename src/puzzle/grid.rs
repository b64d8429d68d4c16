use rand::Rng;
use serde::Serialize;

use crate::{
    models::Position,
    utils::letters::{is_placeable, random_letter},
};

/// Square grid of letter cells. `None` is the empty cell.
///
/// A cell that holds a letter is never overwritten with a different letter:
/// every write goes through [`LetterGrid::fits`] first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LetterGrid {
    cells: Vec<Vec<Option<char>>>,
}

impl LetterGrid {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.row][pos.col]
    }

    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.cells
    }

    /// Cells covered by a word of `len` letters starting at (row, col) and
    /// stepping by `delta`. Returns `None` if any cell falls outside the grid.
    pub fn trace(
        &self,
        row: isize,
        col: isize,
        delta: (isize, isize),
        len: usize,
    ) -> Option<Vec<Position>> {
        if len == 0 {
            return Some(Vec::new());
        }
        let size = self.size() as isize;
        let last = len as isize - 1;
        let (end_row, end_col) = (row + delta.0 * last, col + delta.1 * last);
        let in_bounds = |r: isize, c: isize| (0..size).contains(&r) && (0..size).contains(&c);
        // Straight lines: both endpoints in bounds means every cell is
        if !in_bounds(row, col) || !in_bounds(end_row, end_col) {
            return None;
        }

        Some(
            (0..len as isize)
                .map(|i| Position {
                    row: (row + delta.0 * i) as usize,
                    col: (col + delta.1 * i) as usize,
                })
                .collect(),
        )
    }

    /// Every cell along the path is empty or already holds the matching letter
    pub fn fits(&self, letters: &[char], path: &[Position]) -> bool {
        letters.len() == path.len()
            && letters.iter().zip(path).all(|(&letter, &pos)| {
                is_placeable(letter)
                    && match self.get(pos) {
                        None => true,
                        Some(existing) => existing == letter,
                    }
            })
    }

    /// Write a word along a path if it fits. Nothing is written on failure.
    pub fn place(&mut self, letters: &[char], path: &[Position]) -> bool {
        if !self.fits(letters, path) {
            return false;
        }
        for (&letter, pos) in letters.iter().zip(path) {
            self.cells[pos.row][pos.col] = Some(letter);
        }
        true
    }

    /// Number of cells along the path that already hold a letter
    pub fn occupied_along(&self, path: &[Position]) -> usize {
        path.iter().filter(|&&pos| self.get(pos).is_some()).count()
    }

    /// First horizontal slot, scanning rows top to bottom then columns left
    /// to right, where the word fits
    pub fn first_horizontal_fit(&self, letters: &[char]) -> Option<Vec<Position>> {
        let size = self.size();
        if letters.is_empty() || letters.len() > size {
            return None;
        }
        (0..size)
            .flat_map(|row| (0..=size - letters.len()).map(move |col| (row, col)))
            .filter_map(|(row, col)| self.trace(row as isize, col as isize, (0, 1), letters.len()))
            .find(|path| self.fits(letters, path))
    }

    /// Fill every empty cell with a random letter
    pub fn fill_empty(&mut self, rng: &mut impl Rng) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_none() {
                *cell = Some(random_letter(rng));
            }
        }
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Plain-text rendering, one line per row. Empty cells are shown as `blank`.
    pub fn render(&self, blank: char) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(blank)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_trace_rejects_out_of_bounds() {
        let grid = LetterGrid::new(5);
        assert!(grid.trace(0, 3, (0, 1), 3).is_none());
        assert!(grid.trace(1, 0, (-1, 1), 3).is_none());
        assert!(grid.trace(-1, 0, (1, 0), 2).is_none());
        assert_eq!(grid.trace(2, 0, (-1, 1), 3).unwrap().len(), 3);
    }

    #[test]
    fn test_place_allows_matching_overlap() {
        let mut grid = LetterGrid::new(5);
        let across = grid.trace(0, 0, (0, 1), 3).unwrap();
        assert!(grid.place(&letters("CAT"), &across));

        let down = grid.trace(0, 1, (1, 0), 3).unwrap();
        assert!(grid.place(&letters("ARE"), &down));
        assert_eq!(grid.get(Position { row: 0, col: 1 }), Some('A'));
    }

    #[test]
    fn test_place_rejects_conflict_without_partial_write() {
        let mut grid = LetterGrid::new(5);
        let across = grid.trace(0, 0, (0, 1), 3).unwrap();
        assert!(grid.place(&letters("CAT"), &across));

        let down = grid.trace(1, 2, (-1, 0), 2).unwrap();
        assert!(!grid.place(&letters("XO"), &down));
        assert_eq!(grid.get(Position { row: 1, col: 2 }), None);
        assert_eq!(grid.get(Position { row: 0, col: 2 }), Some('T'));
    }

    #[test]
    fn test_whitespace_never_fits() {
        let grid = LetterGrid::new(5);
        let path = grid.trace(0, 0, (0, 1), 3).unwrap();
        assert!(!grid.fits(&letters("A B"), &path));
    }

    #[test]
    fn test_first_horizontal_fit_scans_row_major() {
        let mut grid = LetterGrid::new(4);
        let top = grid.trace(0, 0, (0, 1), 4).unwrap();
        grid.place(&letters("WXYZ"), &top);

        let path = grid.first_horizontal_fit(&letters("AB")).unwrap();
        assert_eq!(path[0], Position { row: 1, col: 0 });
        assert!(grid.first_horizontal_fit(&letters("ABCDE")).is_none());
    }

    #[test]
    fn test_fill_empty_leaves_no_blanks() {
        let mut grid = LetterGrid::new(6);
        let mut rng = StdRng::seed_from_u64(3);
        grid.fill_empty(&mut rng);
        assert!(grid.is_filled());
    }

    #[test]
    fn test_render_marks_blanks() {
        let mut grid = LetterGrid::new(3);
        let path = grid.trace(1, 0, (0, 1), 3).unwrap();
        grid.place(&letters("DOG"), &path);
        assert_eq!(grid.render('#'), vec!["###", "DOG", "###"]);
    }
}
