//! Integration tests for remote ads.txt fetching

use adstxt_client::{AdsTxtClient, Error};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_parses_remote_file() {
    let server = MockServer::start().await;

    let body = "openx.com, 343560932, DIRECT, 38f6ae102b # top banner\n\
                kargo.com, 105, DIRECT\n\
                subdomain=divisionone.example.com\n\
                subdomain=divisiontwo.example.com\n";
    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = AdsTxtClient::new().unwrap();
    let record = client
        .fetch(&format!("{}/ads.txt", server.uri()))
        .await
        .unwrap();

    assert_eq!(record.entry_count(), 2);
    assert_eq!(record.entries()[0].comment.as_deref(), Some("top banner"));
    assert_eq!(record.variable("subdomain").unwrap().len(), 2);
}

#[tokio::test]
async fn test_fetch_text_returns_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("kargo.com,105,DIRECT\n"))
        .mount(&server)
        .await;

    let client = AdsTxtClient::new().unwrap();
    let text = client
        .fetch_text(&format!("{}/ads.txt", server.uri()))
        .await
        .unwrap();

    assert_eq!(text, "kargo.com,105,DIRECT\n");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = AdsTxtClient::new().unwrap();
    let result = client.fetch(&format!("{}/ads.txt", server.uri())).await;

    match result {
        Err(Error::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_utf8_body_is_an_encoding_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
        .mount(&server)
        .await;

    let client = AdsTxtClient::new().unwrap();
    let result = client.fetch(&format!("{}/ads.txt", server.uri())).await;

    assert!(matches!(result, Err(Error::Encoding(_))));
}

#[tokio::test]
async fn test_server_errors_are_retried_when_enabled() {
    let server = MockServer::start().await;

    // First attempt hits the exhausted 500 mock, the retry gets 200
    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("openx.com,1,DIRECT\n"))
        .mount(&server)
        .await;

    let client = AdsTxtClient::new()
        .unwrap()
        .with_max_retries(1)
        .with_initial_backoff_ms(1);
    let record = client
        .fetch(&format!("{}/ads.txt", server.uri()))
        .await
        .unwrap();

    assert_eq!(record.entry_count(), 1);
}

#[tokio::test]
async fn test_server_errors_are_not_retried_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = AdsTxtClient::new().unwrap();
    let result = client.fetch(&format!("{}/ads.txt", server.uri())).await;

    assert!(matches!(result, Err(Error::Status { .. })));
}

#[tokio::test]
async fn test_user_agent_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ads.txt"))
        .and(header("User-Agent", "adstxt-crawler/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = AdsTxtClient::new()
        .unwrap()
        .with_user_agent("adstxt-crawler/0.1");
    let record = client
        .fetch(&format!("{}/ads.txt", server.uri()))
        .await
        .unwrap();

    assert!(record.is_empty());
}
