//! LinkedIn connect handler - the account-linking flow.
//!
//! Ordering matters: the store is only touched again after the provider
//! confirms the connection, so a failed gateway call never leaves a partial
//! linking record behind.

use crate::api::connect::connect_request::ConnectRequest;
use crate::api::connect::connect_response::ConnectResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use al_core::{ConnectMethod, PROVIDER_LINKEDIN};
use al_db::{LinkedAccountRepository, UserRepository};
use al_gateway::ConnectPayload;

use axum::{Json, extract::State};

/// POST /api/linkedin/connect
///
/// Link a LinkedIn account for the given email, creating the user on first
/// contact. Re-linking the same provider account is an upsert, never a
/// duplicate.
pub async fn connect_linkedin(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> ApiResult<Json<ConnectResponse>> {
    if req.email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }

    let method: ConnectMethod = req
        .method
        .parse()
        .map_err(|_| ApiError::validation("Method must be either 'credentials' or 'cookies'"))?;

    let payload = build_payload(method, &req)?;

    log::info!("connect request: method={} email={}", method.as_str(), req.email);

    let users = UserRepository::new(state.pool.clone());
    let user = users.get_or_create(&req.email).await?;

    let connected = state.provider.connect_account(&payload).await?;

    let accounts = LinkedAccountRepository::new(state.pool.clone());
    let account = accounts
        .upsert(user.id, PROVIDER_LINKEDIN, &connected.account_id)
        .await?;

    log::info!(
        "linked account {} for user {} ({})",
        account.account_id,
        user.id,
        user.email
    );

    Ok(Json(ConnectResponse {
        success: true,
        message: "LinkedIn account connected successfully".to_string(),
        account_id: account.account_id,
        user_id: user.id,
    }))
}

/// Validate the method-specific fields and assemble the gateway payload.
/// Exactly one of credentials/cookies reaches the gateway.
fn build_payload(method: ConnectMethod, req: &ConnectRequest) -> ApiResult<ConnectPayload> {
    match method {
        ConnectMethod::Credentials => {
            let username = req.username.as_deref().filter(|s| !s.is_empty());
            let password = req.password.as_deref().filter(|s| !s.is_empty());

            match (username, password) {
                (Some(username), Some(password)) => Ok(ConnectPayload::Credentials {
                    username: username.to_string(),
                    password: password.to_string(),
                    verification_code: req
                        .verification_code
                        .as_deref()
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                }),
                _ => Err(ApiError::validation(
                    "Username and password are required for credentials method",
                )),
            }
        }
        ConnectMethod::Cookies => match req.cookies.as_deref().filter(|s| !s.is_empty()) {
            Some(cookies) => Ok(ConnectPayload::Cookies(cookies.to_string())),
            None => Err(ApiError::validation(
                "Cookies are required for cookies method",
            )),
        },
    }
}
