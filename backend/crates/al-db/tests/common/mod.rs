#![allow(dead_code)]

//! Shared test infrastructure for repository tests

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row directly, bypassing the repository
pub async fn insert_user_raw(pool: &SqlitePool, email: &str) -> i64 {
    let result = sqlx::query("INSERT INTO users (email, created_at) VALUES (?, ?)")
        .bind(email)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to insert user");

    result.last_insert_rowid()
}

/// Counts linked_accounts rows matching a (user, provider, account) triple
pub async fn count_linked_rows(
    pool: &SqlitePool,
    user_id: i64,
    provider: &str,
    account_id: &str,
) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM linked_accounts WHERE user_id = ? AND provider = ? AND account_id = ?",
    )
    .bind(user_id)
    .bind(provider)
    .bind(account_id)
    .fetch_one(pool)
    .await
    .expect("Failed to count linked accounts")
}
