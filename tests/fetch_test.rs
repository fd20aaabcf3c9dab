//! Fetcher behaviour against a local mock server.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::time::Duration;

use httpmock::prelude::*;
use recipe_scraper::{Error, FetchConfig, Fetcher};

fn fetcher() -> Fetcher {
    Fetcher::new(&FetchConfig::default()).expect("client should build")
}

#[tokio::test]
async fn fetch_returns_page_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stew");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><h1>Stew</h1></body></html>");
    });

    let html = fetcher().fetch(&server.url("/stew")).await;
    mock.assert();

    assert_eq!(html.expect("fetch should succeed"), "<html><body><h1>Stew</h1></body></html>");
}

#[tokio::test]
async fn fetch_sends_user_agent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ua").header("user-agent", "test-agent/1.0");
        then.status(200).body("ok");
    });

    let config = FetchConfig { user_agent: "test-agent/1.0".into(), ..FetchConfig::default() };
    let fetcher = Fetcher::new(&config).expect("client should build");
    let result = fetcher.fetch(&server.url("/ua")).await;
    mock.assert();

    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_decodes_header_charset() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/latin1");
        then.status(200)
            .header("content-type", "text/html; charset=ISO-8859-1")
            .body(b"<h1>Guly\xE1s</h1>".to_vec());
    });

    let html = fetcher().fetch(&server.url("/latin1")).await;
    mock.assert();

    assert_eq!(html.expect("fetch should succeed"), "<h1>Gulyás</h1>");
}

#[tokio::test]
async fn non_success_status_is_fetch_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("not here");
    });

    let url = server.url("/missing");
    let err = fetcher().fetch(&url).await.expect_err("404 must fail");
    mock.assert();

    match err {
        Error::Fetch { url: failed, reason } => {
            assert_eq!(failed, url);
            assert!(reason.contains("404"), "reason was {reason}");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boom");
        then.status(503);
    });

    let err = fetcher().fetch(&server.url("/boom")).await.expect_err("503 must fail");

    assert!(matches!(err, Error::Fetch { .. }));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_millis(1500)).body("late");
    });

    let config = FetchConfig { timeout: Duration::from_millis(200), ..FetchConfig::default() };
    let fetcher = Fetcher::new(&config).expect("client should build");
    let err = fetcher.fetch(&server.url("/slow")).await.expect_err("must time out");

    assert!(matches!(err, Error::Fetch { .. }));
}

#[tokio::test]
async fn unreachable_host_is_fetch_error() {
    let err = fetcher()
        .fetch("http://127.0.0.1:1/nothing-listens-here")
        .await
        .expect_err("connection must fail");

    assert!(matches!(err, Error::Fetch { ref url, .. } if url.contains("127.0.0.1:1")));
}

#[tokio::test]
async fn relative_link_is_rejected_without_request() {
    let err = fetcher().fetch("/recipes/stew").await.expect_err("relative URL must fail");

    assert!(matches!(err, Error::Validation(_)));
}
