//! User entity - owner of zero or more linked accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user is created lazily on first reference by email and never mutated
/// afterwards. The id is the store-assigned rowid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique, matched case-sensitively as stored.
    pub email: String,
    pub created_at: DateTime<Utc>,
}
