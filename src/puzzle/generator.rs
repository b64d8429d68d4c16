use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Uuid;

use crate::{
    config::PuzzleConfig,
    error::PuzzleError,
    models::{PlacementSummary, PuzzleSet},
    puzzle::{CrosswordPlacer, WordSearchPlacer},
};

/// Validated input for one generation run
#[derive(Debug, Clone)]
pub struct PuzzleSpec {
    pub title: Option<String>,
    pub words: Vec<String>,
    pub word_search_size: usize,
    pub crossword_size: usize,
    /// Master seed; drawn at random when absent
    pub seed: Option<u64>,
}

/// Runs both placers for a word list
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    word_search: WordSearchPlacer,
    crossword: CrosswordPlacer,
}

impl PuzzleGenerator {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            word_search: WordSearchPlacer::new(config.placement_attempts),
            crossword: CrosswordPlacer::new(config.disconnected_words),
        }
    }

    /// Generate the word search and crossword concurrently on the blocking pool.
    /// Each placer owns its grid and its own RNG derived from the master seed.
    pub async fn generate(&self, spec: PuzzleSpec) -> Result<PuzzleSet, PuzzleError> {
        let seed = spec.seed.unwrap_or_else(|| rand::rng().random());
        let mut master = StdRng::seed_from_u64(seed);
        let word_search_seed: u64 = master.random();
        let crossword_seed: u64 = master.random();

        let word_search_task = {
            let placer = self.word_search.clone();
            let words = spec.words.clone();
            let size = spec.word_search_size;
            tokio::task::spawn_blocking(move || {
                let mut rng = StdRng::seed_from_u64(word_search_seed);
                placer.place(&words, size, &mut rng)
            })
        };

        let crossword_task = {
            let placer = self.crossword.clone();
            let words = spec.words.clone();
            let size = spec.crossword_size;
            tokio::task::spawn_blocking(move || {
                let mut rng = StdRng::seed_from_u64(crossword_seed);
                placer.place(&words, size, &mut rng)
            })
        };

        let (word_search, crossword) = tokio::join!(word_search_task, crossword_task);
        let (word_search, crossword) = (word_search?, crossword?);

        let puzzle_id = Uuid::new_v4();
        tracing::info!(
            "Generated puzzle set {} (seed {}): {} of {} words hidden, {} of {} crossed",
            puzzle_id,
            seed,
            word_search.hidden.len(),
            spec.words.len(),
            crossword.placements.len(),
            spec.words.len()
        );
        for placement in &crossword.placements {
            tracing::debug!("  {}", PlacementSummary::from(placement));
        }
        for word in &crossword.dropped {
            tracing::info!("Word '{}' left out of crossword {}", word, puzzle_id);
        }

        Ok(PuzzleSet {
            puzzle_id,
            title: spec.title,
            words: spec.words,
            seed,
            word_search,
            crossword,
            created_at: Utc::now(),
        })
    }
}
