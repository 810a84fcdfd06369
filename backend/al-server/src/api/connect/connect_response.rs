use serde::Serialize;

/// Successful connection response
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub success: bool,
    pub message: String,
    pub account_id: String,
    pub user_id: i64,
}
