use httpmock::prelude::*;
use tm_portal_client::{ApiClient, ClientError, TomlConfig};

fn client_for(server: &MockServer, retry_attempts: u32) -> ApiClient<TomlConfig> {
    let toml_content = format!(
        r#"
[client]
name = "integration-test"

[api]
base_url = "{}"
timeout_seconds = 5
retry_attempts = {}
retry_delay_seconds = 0
"#,
        server.base_url(),
        retry_attempts
    );
    ApiClient::new(TomlConfig::from_toml_str(&toml_content).unwrap())
}

#[tokio::test]
async fn test_rejected_envelope_surfaces_backend_errors() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/tms/99");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": false,
                "message": "TM not accessible",
                "data": null,
                "errors": ["insufficient permissions"],
                "timestamp": "2026-02-01T12:00:00.000Z"
            }));
    });

    let client = client_for(&server, 0);
    let result = client.get_tm(99).await;

    api_mock.assert();
    match result {
        Err(ClientError::EnvelopeError { message, errors }) => {
            assert_eq!(message, "TM not accessible");
            assert_eq!(errors, vec!["insufficient permissions".to_string()]);
        }
        other => panic!("expected EnvelopeError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status_carries_envelope_message() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/tms/42");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": false,
                "message": "TM 42 not found",
                "data": null,
                "timestamp": "2026-02-01T12:00:00.000Z"
            }));
    });

    let client = client_for(&server, 0);
    let result = client.get_tm(42).await;

    api_mock.assert();
    match result {
        Err(ClientError::ApiError { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "TM 42 not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_retries_on_server_errors() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/tms/7");
        then.status(503)
            .header("Content-Type", "application/json")
            .body("{}");
    });

    let client = client_for(&server, 2);
    let result = client.get_tm(7).await;

    assert!(matches!(
        result,
        Err(ClientError::ApiError { status: 503, .. })
    ));
    // initial attempt plus two retries
    api_mock.assert_hits(3);
}

#[tokio::test]
async fn test_post_is_never_retried() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/requests");
        then.status(500)
            .header("Content-Type", "application/json")
            .body("{}");
    });

    let client = client_for(&server, 3);
    let body = tm_portal_client::domain::request::RequestCreateDto {
        subject: "noise complaint".to_string(),
        body: None,
        priority: None,
        tm_id: Some(7),
    };
    let result = client.create_request(&body).await;

    assert!(result.is_err());
    api_mock.assert_hits(1);
}
