use al_core::LinkedAccount;

use serde::Serialize;

/// Linked account DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct LinkedAccountDto {
    pub id: i64,
    pub provider: String,
    pub account_id: String,
    pub created_at: i64,
}

impl From<LinkedAccount> for LinkedAccountDto {
    fn from(a: LinkedAccount) -> Self {
        Self {
            id: a.id,
            provider: a.provider,
            account_id: a.account_id,
            created_at: a.created_at.timestamp(),
        }
    }
}
