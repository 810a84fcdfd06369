#![allow(dead_code)]

//! Test infrastructure for al-server API tests

use al_gateway::ProviderClient;
use al_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/al-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, pointing the gateway at a mock provider
pub async fn create_test_app_state(provider_url: &str) -> AppState {
    let pool = create_test_pool().await;
    let provider = Arc::new(ProviderClient::new(provider_url, "test-key"));

    AppState { pool, provider }
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn count_linked_accounts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM linked_accounts")
        .fetch_one(pool)
        .await
        .expect("Failed to count linked accounts")
}
