use std::sync::Arc;
use std::time::Duration;

use luapad::dispatch::{DispatchClient, DispatchConfig, DispatchError, INJECT_SENTINEL};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, timeout: Duration) -> DispatchClient {
    DispatchClient::new(DispatchConfig {
        endpoint: format!("{}/endpoint", server.uri()),
        timeout,
    })
}

#[tokio::test]
async fn execute_posts_script_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "data": "print('hi')" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"ok\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(10));
    let result = client.execute("print('hi')").await;

    assert_eq!(result.unwrap(), "{\"status\":\"ok\"}");
    assert!(!client.is_executing());
}

#[tokio::test]
async fn inject_sends_the_sentinel_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .and(body_json(json!({ "data": INJECT_SENTINEL })))
        .respond_with(ResponseTemplate::new(200).set_body_string("done"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(10));
    let result = client.inject().await;

    assert_eq!(result.unwrap(), "done");
    assert!(!client.is_injecting());
}

#[tokio::test]
async fn empty_script_never_reaches_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(10));
    let result = client.execute("   \n  ").await;

    assert!(matches!(result, Err(DispatchError::EmptyScript)));
    assert!(!client.is_executing());
    server.verify().await;
}

#[tokio::test]
async fn non_success_status_becomes_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(10));
    let result = client.execute("print(1)").await;

    match result {
        Err(DispatchError::Http { status }) => assert_eq!(status, 500),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_endpoint_is_classified_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(100));
    let result = client.execute("print(1)").await;

    match result {
        Err(err) => {
            assert!(err.is_timeout());
            // Distinguishable from a network failure in the display message.
            assert!(err.to_string().contains("timed out"));
        }
        Ok(body) => panic!("expected timeout, got {body}"),
    }
    // The busy flag is released even on the timeout path.
    assert!(!client.is_executing());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    let client = DispatchClient::new(DispatchConfig {
        endpoint: "http://127.0.0.1:1/endpoint".to_string(),
        timeout: Duration::from_secs(10),
    });

    let result = client.execute("print(1)").await;
    assert!(matches!(result, Err(DispatchError::Network(_))));
}

#[tokio::test]
async fn busy_flag_is_observable_while_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ok")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server, Duration::from_secs(10)));
    let background = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.execute("print(1)").await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(client.is_executing());
    // The two busy flags are independent per action.
    assert!(!client.is_injecting());

    let result = background.await.unwrap();
    assert!(result.is_ok());
    assert!(!client.is_executing());
}
