use crate::{config::PuzzleConfig, error::PuzzleError};

/// Checks the word list and grid sizes coming from the entry form
pub struct WordListValidator {
    max_words: usize,
    min_grid_size: usize,
    max_grid_size: usize,
}

impl WordListValidator {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            max_words: config.max_words,
            min_grid_size: config.min_grid_size,
            max_grid_size: config.max_grid_size,
        }
    }

    /// Trim every entry and drop empty ones, keeping input order
    pub fn clean_words(&self, words: &[String]) -> Result<Vec<String>, PuzzleError> {
        let cleaned: Vec<String> = words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        if cleaned.is_empty() {
            return Err(PuzzleError::NoWords);
        }
        if cleaned.len() > self.max_words {
            return Err(PuzzleError::TooManyWords {
                max: self.max_words,
                got: cleaned.len(),
            });
        }
        Ok(cleaned)
    }

    /// Use the requested size if given, otherwise the default; either must be in range
    pub fn grid_size(&self, requested: Option<usize>, default: usize) -> Result<usize, PuzzleError> {
        let size = requested.unwrap_or(default);
        if size < self.min_grid_size || size > self.max_grid_size {
            return Err(PuzzleError::InvalidGridSize {
                size,
                min: self.min_grid_size,
                max: self.max_grid_size,
            });
        }
        Ok(size)
    }

    /// Titles are optional; blank ones count as absent
    pub fn clean_title(title: Option<&str>) -> Option<String> {
        title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}
