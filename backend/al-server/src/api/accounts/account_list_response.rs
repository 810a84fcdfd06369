use crate::api::accounts::account_dto::LinkedAccountDto;

use serde::Serialize;

/// Response for GET /api/accounts/{email}
#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub success: bool,
    pub user_id: i64,
    pub email: String,
    pub accounts: Vec<LinkedAccountDto>,
}
