use std::time::{Duration, Instant};

use httpmock::Method::GET;
use premarket_pages::{
    Backoff, BriefError, CompanyProfile, QuoteService, QuoteState, Range, RetryConfig,
    fetch_profile_or_default, fetch_quote,
};

use crate::common::{client_for, client_with_retry, mock_chart, setup_server, unreachable_client};

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/TSLA");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let state = fetch_quote(&client, "TSLA", Range::M1).await;
    assert_eq!(mock.calls(), 1);
    assert_eq!(state, QuoteState::Unavailable);
}

#[tokio::test]
async fn status_error_carries_code() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(404).body("not found");
    });

    let client = client_for(&server);
    match client.fetch_chart("NOPE", Range::D1).await {
        Err(BriefError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn retries_transient_status_before_giving_up() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/RETRY");
        then.status(503).body("Service Unavailable");
    });

    let retry = RetryConfig {
        max_retries: 2,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    };
    let client = client_with_retry(&server, retry);
    let state = fetch_quote(&client, "RETRY", Range::D1).await;

    assert_eq!(mock.calls(), 3);
    assert_eq!(state, QuoteState::Unavailable);
}

#[tokio::test]
async fn malformed_json_is_unavailable() {
    let server = setup_server();
    let mock = mock_chart(&server, "MSFT", "1mo", "{ this is not json");

    let client = client_for(&server);
    assert!(matches!(
        client.fetch_chart("MSFT", Range::M1).await,
        Err(BriefError::Data(_))
    ));
    assert_eq!(fetch_quote(&client, "MSFT", Range::M1).await, QuoteState::Unavailable);
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn empty_series_is_unavailable() {
    let server = setup_server();
    let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{"close":[]}]}}],"error":null}}"#;
    let _mock = mock_chart(&server, "EMPTY", "1d", body);

    let client = client_for(&server);
    assert_eq!(fetch_quote(&client, "EMPTY", Range::D1).await, QuoteState::Unavailable);
}

#[tokio::test]
async fn refused_connection_is_unavailable() {
    let client = unreachable_client(RetryConfig::disabled());

    assert!(matches!(
        client.fetch_chart("AAPL", Range::M1).await,
        Err(BriefError::Http(_))
    ));
    assert_eq!(fetch_quote(&client, "AAPL", Range::M1).await, QuoteState::Unavailable);
    assert_eq!(
        fetch_profile_or_default(&client, "AAPL").await,
        CompanyProfile::default()
    );
}

#[tokio::test]
async fn connect_errors_are_retried_with_backoff() {
    let retry = RetryConfig {
        max_retries: 2,
        backoff: Backoff::Fixed(Duration::from_millis(60)),
        ..RetryConfig::default()
    };
    let client = unreachable_client(retry);

    let started = Instant::now();
    let state = fetch_quote(&client, "AAPL", Range::M1).await;

    assert_eq!(state, QuoteState::Unavailable);
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[tokio::test]
async fn connect_retry_can_be_switched_off() {
    let retry = RetryConfig {
        max_retries: 2,
        backoff: Backoff::Fixed(Duration::from_secs(5)),
        retry_on_connect: false,
        ..RetryConfig::default()
    };
    let client = unreachable_client(retry);

    let started = Instant::now();
    assert!(matches!(
        client.fetch_chart("AAPL", Range::M1).await,
        Err(BriefError::Http(e)) if e.is_connect()
    ));
    assert!(started.elapsed() < Duration::from_secs(5));
}
