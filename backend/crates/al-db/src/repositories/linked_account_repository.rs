//! Linked account repository.
//!
//! ## Upsert semantics
//!
//! `upsert` uses a single `INSERT OR REPLACE` statement against the
//! `UNIQUE (user_id, provider, account_id)` constraint. Re-linking the same
//! provider account replaces the prior row - the replacement gets a fresh
//! rowid and created_at.
//! Because it is one statement, two concurrent re-links of the same triple
//! cannot produce duplicates or a lost update.

use crate::{DbError, Result as DbErrorResult};

use al_core::LinkedAccount;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct LinkedAccountRepository {
    pool: SqlitePool,
}

impl LinkedAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the row matching (user_id, provider, account_id).
    /// Returns the stored record. Fails when user_id references no user.
    pub async fn upsert(
        &self,
        user_id: i64,
        provider: &str,
        account_id: &str,
    ) -> DbErrorResult<LinkedAccount> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT OR REPLACE INTO linked_accounts (user_id, provider, account_id, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(provider)
        .bind(account_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("linked account row {} missing after upsert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<LinkedAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, provider, account_id, created_at
                FROM linked_accounts
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_linked_account(&r)).transpose()
    }

    /// All accounts linked by a user, in insertion order.
    /// Empty vec when the user has linked nothing.
    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<LinkedAccount>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, provider, account_id, created_at
                FROM linked_accounts
                WHERE user_id = ?
                ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(map_linked_account)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn map_linked_account(row: &SqliteRow) -> DbErrorResult<LinkedAccount> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(LinkedAccount {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        provider: row.try_get("provider")?,
        account_id: row.try_get("account_id")?,
        created_at: DateTime::<Utc>::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in linked_accounts.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
