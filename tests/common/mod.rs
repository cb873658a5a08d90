#![allow(dead_code, unused_imports)]

mod db;
mod request;

pub use db::*;
pub use request::*;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use ping_api::handlers::ping;
use ping_api::state::AppState;

/// Shared error response type for test assertions
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Test context containing all test infrastructure
pub struct TestContext {
    pub db: DatabaseConnection,
    pub state: AppState,
}

impl TestContext {
    /// Create a new test context with in-memory database
    pub async fn new() -> Self {
        let db = setup_test_db().await;
        let state = AppState { db: db.clone() };

        Self { db, state }
    }

    /// Router exposing just the ping endpoint under test
    pub fn app(&self) -> Router {
        Router::new()
            .route("/ping", get(ping::ping))
            .with_state(self.state.clone())
    }

    /// Clear all test data between tests
    pub async fn cleanup(&self) {
        cleanup_db(&self.db).await;
    }
}
