mod config;
mod error;
mod models;
mod puzzle;
mod routes;
mod utils;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::{DateTime, Utc};
use config::Config;
use dashmap::DashMap;
use models::PuzzleSet;
use puzzle::PuzzleGenerator;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// How often expired puzzle sets are purged
pub const PUZZLE_CLEANUP_INTERVAL: Duration = Duration::from_secs(30);

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub generator: PuzzleGenerator,
    /// Generated puzzle sets keyed by puzzle_id, kept until they expire
    pub puzzles: DashMap<Uuid, PuzzleSet>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            generator: PuzzleGenerator::new(&config.puzzle),
            config,
            puzzles: DashMap::new(),
        }
    }

    /// Remove puzzle sets created more than the configured TTL before `now`.
    /// Returns the number removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let ttl = chrono::Duration::from_std(self.config.puzzle.puzzle_ttl)
            .unwrap_or(chrono::Duration::MAX);
        let before = self.puzzles.len();
        self.puzzles
            .retain(|_, set| now.signed_duration_since(set.created_at) <= ttl);
        before.saturating_sub(self.puzzles.len())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puzzle_forge_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Puzzle Forge backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded: {}x{} word search, {}x{} crossword, {:?} for disconnected words",
        config.puzzle.word_search_size,
        config.puzzle.word_search_size,
        config.puzzle.crossword_size,
        config.puzzle.crossword_size,
        config.puzzle.disconnected_words
    );

    let state = Arc::new(AppState::new(config.clone()));

    // Spawn background task to drop expired puzzle sets
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        puzzle_cleanup_task(cleanup_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve the word entry form
    let frontend_service = ServeDir::new(&config.server.frontend_dir);

    let app = routes::create_routes()
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Puzzle endpoint: http://{}/api/puzzles", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task that periodically removes expired puzzle sets
async fn puzzle_cleanup_task(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(PUZZLE_CLEANUP_INTERVAL);

    loop {
        interval.tick().await;

        let removed = state.purge_expired(Utc::now());
        if removed > 0 {
            tracing::info!("Removed {} expired puzzle sets", removed);
        }
    }
}
