//! Dispatch pipeline integration tests.
//!
//! These tests exercise the whole invoke path against a wiremock server:
//! identifier normalization, credential injection, status classification,
//! and reply decoding.
//!
//! # Invariants
//! - Exactly one HTTP request per invoke; no retry on any failure.
//! - Any non-200 status is an `InvalidAction` naming the normalized
//!   identifier.
//!
//! # What this does NOT handle
//! - Pure decoding edge cases (unit tests in the envelope module).
//! - Query assembly details (unit tests in the request module).

mod common;

use std::time::Duration;

use common::*;
use fms_client::{ClientError, FmsClient, Params};
use serde_json::json;

#[tokio::test]
async fn invoke_camelizes_action_and_sends_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/getStreamList"))
        .and(query_param("auser", "fms"))
        .and(query_param("apswd", "fms"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.invoke("get_stream_list", Params::new()).await.unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.level(), Some("status"));
    assert_eq!(reply.timestamp(), Some("0"));
}

#[tokio::test]
async fn invoke_camelizes_parameter_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/setAppConfig"))
        .and(query_param("maxBandwidth", "100"))
        .and(query_param("app", "live"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = Params::new().set("app", "live").set("max_bandwidth", 100);
    let reply = client.invoke("set_app_config", params).await.unwrap();

    assert!(reply.is_success());
}

#[tokio::test]
async fn unknown_action_is_an_invalid_action_error() {
    // No mock mounted: wiremock answers 404 for everything.
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client
        .invoke("get_stream_list", Params::new())
        .await
        .unwrap_err();

    match err {
        ClientError::InvalidAction { action, status } => {
            assert_eq!(action, "getStreamList");
            assert_eq!(status, 404);
        }
        other => panic!("expected InvalidAction, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_status_is_also_invalid_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/reloadApp"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.invoke("reload_app", Params::new()).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidAction { ref action, status: 500 } if action == "reloadApp"
    ));
}

#[tokio::test]
async fn failure_code_decodes_without_error() {
    let mock_server = MockServer::start().await;

    let body = SUCCESS_BODY.replace("NetConnection.Call.Success", "NetConnection.Call.Failed");
    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.invoke("ping", Params::new()).await.unwrap();

    assert!(!reply.is_success());
    assert_eq!(reply.code(), Some("NetConnection.Call.Failed"));
}

#[tokio::test]
async fn surrounding_whitespace_in_body_is_trimmed() {
    let mock_server = MockServer::start().await;

    let body = format!("\n\n   {SUCCESS_BODY}   \n");
    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.invoke("ping", Params::new()).await.unwrap();
    assert!(reply.is_success());
}

#[tokio::test]
async fn empty_body_decodes_to_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.invoke("ping", Params::new()).await.unwrap();

    assert!(!reply.is_success());
    assert!(reply.code().is_none());
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<result><level>oops</result>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.invoke("ping", Params::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn credential_override_reaches_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .and(query_param("auser", "operator"))
        .and(query_param("apswd", "fms"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client
        .invoke("ping", Params::new().set("auser", "operator"))
        .await
        .unwrap();
    assert!(reply.is_success());
}

#[tokio::test]
async fn non_scalar_parameter_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client
        .invoke("ping", Params::new().set("streams", json!(["a", "b"])))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidParameter { ref key } if key == "streams"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn slow_server_times_out_with_the_configured_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SUCCESS_BODY)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let uri = url::Url::parse(&mock_server.uri()).unwrap();
    let client = FmsClient::builder()
        .host(uri.host_str().unwrap())
        .port(uri.port().unwrap())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.invoke("ping", Params::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(100)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Reserve a port, then close the listener so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = FmsClient::builder()
        .host("127.0.0.1")
        .port(port)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.invoke("ping", Params::new()).await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}
