use crate::{GatewayError, GatewayResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the external account-aggregation API.
///
/// Stateless: one outbound `POST {base_url}/accounts` per call, bearer-token
/// auth, no retries, nothing persisted.
pub struct ProviderClient {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
}

/// Connection input, exactly one shape per request. The caller (the linking
/// flow) enforces that before invoking the gateway.
#[derive(Debug, Clone)]
pub enum ConnectPayload {
    Credentials {
        username: String,
        password: String,
        /// Second-factor code, passed through untouched when the caller
        /// resubmits after a checkpoint.
        verification_code: Option<String>,
    },
    Cookies(String),
}

/// Successful connection result: the provider-assigned account identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedAccount {
    pub account_id: String,
}

#[derive(Serialize)]
struct ConnectBody<'a> {
    provider: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    credentials: Option<CredentialsBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookies: Option<&'a str>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification_code: Option<&'a str>,
}

impl ProviderClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Aggregation API URL (e.g., "https://api.example.com/v1")
    /// * `api_key` - Process-wide bearer token
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Forward a connect request and extract the provider account identifier.
    pub async fn connect_account(&self, payload: &ConnectPayload) -> GatewayResult<ConnectedAccount> {
        let url = format!("{}/accounts", self.base_url);

        let body = match payload {
            ConnectPayload::Credentials {
                username,
                password,
                verification_code,
            } => ConnectBody {
                provider: "linkedin",
                credentials: Some(CredentialsBody {
                    username,
                    password,
                    verification_code: verification_code.as_deref(),
                }),
                cookies: None,
            },
            ConnectPayload::Cookies(cookies) => ConnectBody {
                provider: "linkedin",
                credentials: None,
                cookies: Some(cookies),
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::BadResponse {
                message: format!("provider returned a non-JSON body: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // A checkpoint response means the provider wants a verification
        // code, regardless of the status code it arrived with.
        if is_checkpoint(&body) {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: provider_message(&body)
                    .unwrap_or_else(|| "verification code required".to_string()),
                needs_verification: true,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: provider_message(&body)
                    .unwrap_or_else(|| format!("provider returned status {}", status)),
                needs_verification: false,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match body.get("account_id").and_then(Value::as_str) {
            Some(account_id) if !account_id.is_empty() => Ok(ConnectedAccount {
                account_id: account_id.to_string(),
            }),
            _ => Err(GatewayError::BadResponse {
                message: "provider response is missing account_id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Structured checkpoint detection: the provider marks second-factor
/// challenges either with a `checkpoint` object or a type tag.
fn is_checkpoint(body: &Value) -> bool {
    if body.get("checkpoint").is_some() {
        return true;
    }

    body.get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| t.contains("checkpoint"))
}

/// Best-effort extraction of the provider's human-readable detail.
fn provider_message(body: &Value) -> Option<String> {
    for key in ["message", "error", "detail"] {
        if let Some(text) = body.get(key).and_then(Value::as_str)
            && !text.is_empty()
        {
            return Some(text.to_string());
        }
    }

    None
}
