//! Libris library records server
//!
//! REST JSON API over three related tables: books, borrowers and the
//! borrowing transactions that link them.
//!
//! `cargo test` runs the unit tests and the router tests, which need no
//! database. The storage tests in `tests/storage_tests.rs` are ignored by
//! default; run them against a PostgreSQL server with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
