//! Integration tests for the provider client using wiremock

use al_gateway::{ConnectPayload, GatewayErrorKind, ProviderClient};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

fn credentials_payload() -> ConnectPayload {
    ConnectPayload::Credentials {
        username: "u".to_string(),
        password: "p".to_string(),
        verification_code: None,
    }
}

#[tokio::test]
async fn test_connect_with_credentials_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("\"provider\":\"linkedin\""))
        .and(body_string_contains("\"username\":\"u\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "account_id": "li_123",
            "message": "account connected"
        })))
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let account = client
        .connect_account(&credentials_payload())
        .await
        .unwrap();

    assert_eq!(account.account_id, "li_123");
}

#[tokio::test]
async fn test_connect_with_cookies_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_string_contains("\"cookies\":\"li_at=abc\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "account_id": "li_456" })),
        )
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let account = client
        .connect_account(&ConnectPayload::Cookies("li_at=abc".to_string()))
        .await
        .unwrap();

    assert_eq!(account.account_id, "li_456");
}

#[tokio::test]
async fn test_verification_code_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_string_contains("\"verification_code\":\"424242\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "account_id": "li_123" })),
        )
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let payload = ConnectPayload::Credentials {
        username: "u".to_string(),
        password: "p".to_string(),
        verification_code: Some("424242".to_string()),
    };

    assert!(client.connect_account(&payload).await.is_ok());
}

#[tokio::test]
async fn test_rejection_carries_provider_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let err = client
        .connect_account(&credentials_payload())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::Rejected);
    assert!(!err.needs_verification());
    assert_eq!(err.detail(), "invalid credentials");
}

#[tokio::test]
async fn test_checkpoint_maps_to_needs_verification() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "type": "errors/checkpoint",
            "message": "a verification code has been sent"
        })))
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let err = client
        .connect_account(&credentials_payload())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::NeedsVerification);
    assert!(err.needs_verification());
}

#[tokio::test]
async fn test_missing_account_id_is_bad_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "connected, but no identifier"
        })))
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let err = client
        .connect_account(&credentials_payload())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::BadResponse);
    assert!(err.detail().contains("account_id"));
}

#[tokio::test]
async fn test_non_json_body_is_bad_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&mock_server)
        .await;

    let client = ProviderClient::new(&mock_server.uri(), "test-key");
    let err = client
        .connect_account(&credentials_payload())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::BadResponse);
}
