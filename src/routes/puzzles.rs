use crate::{
    error::PuzzleError,
    models::{HiddenWord, HighlightMask, PlacementSummary, PuzzleSet},
    puzzle::{grid::LetterGrid, PuzzleSpec, WordListValidator},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Blank crossword cells in the text rendering
const BLOCKED_CELL: char = '#';

#[derive(Debug, Deserialize)]
pub struct CreatePuzzleRequest {
    /// Shown above the puzzles; not used for generation
    #[serde(default)]
    pub title: Option<String>,
    pub words: Vec<String>,
    #[serde(default)]
    pub word_search_size: Option<usize>,
    #[serde(default)]
    pub crossword_size: Option<usize>,
    /// Fix the seed to reproduce an earlier puzzle set
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct PuzzleResponse {
    pub puzzle_id: Uuid,
    pub title: Option<String>,
    pub words: Vec<String>,
    pub seed: u64,
    pub created_at: DateTime<Utc>,
    pub word_search: WordSearchResponse,
    pub crossword: CrosswordResponse,
}

#[derive(Debug, Serialize)]
pub struct WordSearchResponse {
    pub size: usize,
    pub grid: LetterGrid,
    pub highlight: HighlightMask,
    pub hidden: Vec<HiddenWord>,
    pub dropped: Vec<String>,
    pub text: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CrosswordResponse {
    pub size: usize,
    pub grid: LetterGrid,
    /// 1-indexed placements in the order they were made
    pub placements: Vec<PlacementSummary>,
    pub details: Vec<String>,
    pub dropped: Vec<String>,
    pub text: Vec<String>,
}

impl From<&PuzzleSet> for PuzzleResponse {
    fn from(set: &PuzzleSet) -> Self {
        let placements: Vec<PlacementSummary> = set
            .crossword
            .placements
            .iter()
            .map(PlacementSummary::from)
            .collect();

        Self {
            puzzle_id: set.puzzle_id,
            title: set.title.clone(),
            words: set.words.clone(),
            seed: set.seed,
            created_at: set.created_at,
            word_search: WordSearchResponse {
                size: set.word_search.grid.size(),
                grid: set.word_search.grid.clone(),
                highlight: set.word_search.highlight.clone(),
                hidden: set.word_search.hidden.clone(),
                dropped: set.word_search.dropped.clone(),
                text: set.word_search.grid.render(BLOCKED_CELL),
            },
            crossword: CrosswordResponse {
                size: set.crossword.grid.size(),
                grid: set.crossword.grid.clone(),
                details: placements.iter().map(ToString::to_string).collect(),
                placements,
                dropped: set.crossword.dropped.clone(),
                text: set.crossword.grid.render(BLOCKED_CELL),
            },
        }
    }
}

/// Generate a word search and a crossword from one word list
pub async fn create_puzzle(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePuzzleRequest>,
) -> Result<(StatusCode, Json<PuzzleResponse>), PuzzleError> {
    let validator = WordListValidator::new(&state.config.puzzle);

    let spec = PuzzleSpec {
        title: WordListValidator::clean_title(payload.title.as_deref()),
        words: validator.clean_words(&payload.words)?,
        word_search_size: validator
            .grid_size(payload.word_search_size, state.config.puzzle.word_search_size)?,
        crossword_size: validator
            .grid_size(payload.crossword_size, state.config.puzzle.crossword_size)?,
        seed: payload.seed,
    };

    tracing::info!(
        "Generating puzzles for {} words ({}x{} word search, {}x{} crossword)",
        spec.words.len(),
        spec.word_search_size,
        spec.word_search_size,
        spec.crossword_size,
        spec.crossword_size
    );

    let set = state.generator.generate(spec).await?;
    let response = PuzzleResponse::from(&set);
    state.puzzles.insert(set.puzzle_id, set);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Fetch a previously generated puzzle set
pub async fn get_puzzle(
    State(state): State<Arc<AppState>>,
    Path(puzzle_id): Path<Uuid>,
) -> Result<Json<PuzzleResponse>, PuzzleError> {
    let set = state
        .puzzles
        .get(&puzzle_id)
        .ok_or(PuzzleError::NotFound(puzzle_id))?;
    Ok(Json(PuzzleResponse::from(set.value())))
}

pub async fn delete_puzzle(
    State(state): State<Arc<AppState>>,
    Path(puzzle_id): Path<Uuid>,
) -> Result<StatusCode, PuzzleError> {
    state
        .puzzles
        .remove(&puzzle_id)
        .ok_or(PuzzleError::NotFound(puzzle_id))?;
    tracing::info!("Deleted puzzle set {}", puzzle_id);
    Ok(StatusCode::NO_CONTENT)
}
