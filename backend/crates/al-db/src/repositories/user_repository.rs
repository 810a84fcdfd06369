//! User repository: lazy get-or-create by email.
//!
//! ## Concurrent first use
//!
//! Two callers may race on the first request for the same email: both miss
//! the lookup and both attempt the insert. The insert uses
//! `ON CONFLICT(email) DO NOTHING`, so the loser's write is a no-op and the
//! final re-select returns the winner's row. Callers always observe exactly
//! one user per email.

use crate::{DbError, Result as DbErrorResult};

use al_core::User;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up a user by exact email; create one if absent.
    /// Idempotent: repeated calls with the same email return the same row.
    pub async fn get_or_create(&self, email: &str) -> DbErrorResult<User> {
        if let Some(user) = self.find_by_email(email).await? {
            return Ok(user);
        }

        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (email, created_at)
                VALUES (?, ?)
                ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        self.find_by_email(email)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("user row for {} missing after insert", email),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        created_at: DateTime::<Utc>::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
