use anyhow::{ensure, Context, Result};
use std::{env, time::Duration};

use crate::puzzle::{DisconnectedWordPolicy, DEFAULT_PLACEMENT_ATTEMPTS};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Static assets for the word entry form
    pub frontend_dir: String,
}

#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub word_search_size: usize,
    pub crossword_size: usize,
    pub min_grid_size: usize,
    pub max_grid_size: usize,
    pub max_words: usize,
    pub placement_attempts: usize,
    pub disconnected_words: DisconnectedWordPolicy,
    /// How long generated puzzle sets stay retrievable
    pub puzzle_ttl: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            word_search_size: 16,
            crossword_size: 16,
            min_grid_size: 4,
            max_grid_size: 40,
            max_words: 8,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            disconnected_words: DisconnectedWordPolicy::Drop,
            puzzle_ttl: Duration::from_secs(600),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PuzzleConfig::default();

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: lookup("FRONTEND_DIR").unwrap_or_else(|| "./frontend".to_string()),
        };

        let number = |key: &str, default: usize| -> Result<usize> {
            match lookup(key) {
                Some(value) => value
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a number", key)),
                None => Ok(default),
            }
        };

        let puzzle = PuzzleConfig {
            word_search_size: number("WORD_SEARCH_SIZE", defaults.word_search_size)?,
            crossword_size: number("CROSSWORD_SIZE", defaults.crossword_size)?,
            min_grid_size: number("MIN_GRID_SIZE", defaults.min_grid_size)?,
            max_grid_size: number("MAX_GRID_SIZE", defaults.max_grid_size)?,
            max_words: number("MAX_WORDS", defaults.max_words)?,
            placement_attempts: number("PLACEMENT_ATTEMPTS", defaults.placement_attempts)?,
            disconnected_words: match lookup("DISCONNECTED_WORDS") {
                Some(value) => value
                    .parse()
                    .context("DISCONNECTED_WORDS must be 'drop' or 'force-horizontal'")?,
                None => defaults.disconnected_words,
            },
            puzzle_ttl: Duration::from_secs(
                number("PUZZLE_TTL_SECS", defaults.puzzle_ttl.as_secs() as usize)? as u64,
            ),
        };

        ensure!(
            puzzle.min_grid_size >= 1 && puzzle.min_grid_size <= puzzle.max_grid_size,
            "MIN_GRID_SIZE must be between 1 and MAX_GRID_SIZE"
        );
        for (key, size) in [
            ("WORD_SEARCH_SIZE", puzzle.word_search_size),
            ("CROSSWORD_SIZE", puzzle.crossword_size),
        ] {
            ensure!(
                (puzzle.min_grid_size..=puzzle.max_grid_size).contains(&size),
                "{} must be between {} and {}",
                key,
                puzzle.min_grid_size,
                puzzle.max_grid_size
            );
        }

        Ok(Config { server, puzzle })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
