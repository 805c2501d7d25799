use std::time::Duration;

use premarket_pages::{
    GenContext, QuoteService, QuoteState, Range, SiteWriter, Topic, fetch_quote, run_topics,
};

use crate::common::{cached_client_for, chart_body, client_for, day, mock_chart, setup_server};

#[tokio::test]
async fn repeated_chart_is_served_from_cache() {
    let server = setup_server();
    let body = chart_body(&[100.0, 101.0, 102.0], 101.0, 5_000);
    let month = mock_chart(&server, "AAPL", "1mo", &body);
    let week = mock_chart(&server, "AAPL", "5d", &body);

    let client = cached_client_for(&server, Duration::from_secs(60));
    let first = fetch_quote(&client, "AAPL", Range::M1).await;
    let second = fetch_quote(&client, "AAPL", Range::M1).await;

    assert!(matches!(first, QuoteState::Live(_)));
    assert_eq!(first, second);
    assert_eq!(month.calls(), 1);

    // a different range is a different URL
    client.fetch_chart("AAPL", Range::D5).await.unwrap();
    assert_eq!(week.calls(), 1);
}

#[tokio::test]
async fn uncached_client_fetches_every_time() {
    let server = setup_server();
    let body = chart_body(&[100.0, 101.0], 100.0, 5_000);
    let mock = mock_chart(&server, "AAPL", "1mo", &body);

    let client = client_for(&server);
    assert!(!client.cache_enabled());
    client.fetch_chart("AAPL", Range::M1).await.unwrap();
    client.fetch_chart("AAPL", Range::M1).await.unwrap();

    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = setup_server();
    let mut broken = mock_chart(&server, "MSFT", "1mo", "{ not json");

    let client = cached_client_for(&server, Duration::from_secs(60));
    assert_eq!(fetch_quote(&client, "MSFT", Range::M1).await, QuoteState::Unavailable);
    broken.delete();

    let good = mock_chart(&server, "MSFT", "1mo", &chart_body(&[400.0, 404.0], 400.0, 9));
    assert!(matches!(
        fetch_quote(&client, "MSFT", Range::M1).await,
        QuoteState::Live(_)
    ));
    assert_eq!(good.calls(), 1);
}

#[tokio::test]
async fn symbol_shared_by_stock_and_etf_pages_is_fetched_once() {
    let server = setup_server();
    let spy = mock_chart(
        &server,
        "SPY",
        "1mo",
        &chart_body(&[590.0, 592.0, 595.0, 598.0], 596.0, 40_000_000),
    );

    let client = cached_client_for(&server, Duration::from_secs(60));
    let dir = tempfile::tempdir().unwrap();
    let writer = SiteWriter::new(dir.path());
    let ctx = GenContext::new(day(2025, 2, 3), &client, &writer);

    let report = run_topics(&ctx, &[Topic::Stocks, Topic::Etfs]).await.unwrap();

    assert_eq!(spy.calls(), 1);
    let live: Vec<usize> = report.topics.iter().map(|t| t.live_quotes).collect();
    assert_eq!(live, [1, 1]);
}
