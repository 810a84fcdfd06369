//! Account listing handler - the query flow.

use crate::api::accounts::account_dto::LinkedAccountDto;
use crate::api::accounts::account_list_response::AccountListResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use al_db::{LinkedAccountRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/accounts/{email}
///
/// List the accounts linked by an email. A never-seen email creates a user
/// with zero accounts rather than returning 404, so a syntactically valid
/// email always yields a (possibly empty) listing.
pub async fn list_accounts(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AccountListResponse>> {
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }

    let users = UserRepository::new(state.pool.clone());
    let user = users.get_or_create(&email).await?;

    let repo = LinkedAccountRepository::new(state.pool.clone());
    let accounts = repo.find_by_user(user.id).await?;

    Ok(Json(AccountListResponse {
        success: true,
        user_id: user.id,
        email: user.email,
        accounts: accounts.into_iter().map(LinkedAccountDto::from).collect(),
    }))
}
