//! Linked account entity - one external provider account owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provider account linked to a user.
///
/// The triple (user_id, provider, account_id) is unique: re-linking the same
/// provider account replaces the existing row instead of adding a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub id: i64,
    pub user_id: i64,
    /// Provider tag, e.g. "linkedin".
    pub provider: String,
    /// Opaque identifier assigned by the external aggregation API.
    pub account_id: String,
    pub created_at: DateTime<Utc>,
}
