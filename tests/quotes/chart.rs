use premarket_pages::{QuoteService, QuoteState, Range, fetch_quote};

use crate::common::{chart_body, client_for, mock_chart, setup_server};

#[tokio::test]
async fn one_month_chart_derives_quote() {
    let server = setup_server();
    let closes = [100.0, 102.0, 104.0, 101.0, 103.0, 105.0, 110.0];
    let mock = mock_chart(&server, "AAPL", "1mo", &chart_body(&closes, 105.0, 42_000_000));

    let client = client_for(&server);
    let state = fetch_quote(&client, "AAPL", Range::M1).await;
    mock.assert();

    let QuoteState::Live(q) = state else {
        panic!("expected a live quote, got {state:?}");
    };
    assert_eq!(q.price, 110.0);
    assert_eq!(q.previous_close, 105.0);
    assert!((q.change - 5.0).abs() < 1e-9);
    assert!((q.change_pct - 100.0 * 5.0 / 105.0).abs() < 1e-9);
    // six sessions back from the last close is 102.0
    assert!((q.week_change_pct - 100.0 * 8.0 / 102.0).abs() < 1e-9);
    assert!((q.month_change_pct - 10.0).abs() < 1e-9);
    assert_eq!(q.volume, 42_000_000);
    assert_eq!(q.high_52w, Some(250.0));
    assert_eq!(q.market_cap, Some(3.0e12));
}

#[tokio::test]
async fn futures_symbol_is_used_verbatim_in_path() {
    let server = setup_server();
    let mock = mock_chart(&server, "ES=F", "5d", &chart_body(&[5000.0, 5010.0], 5000.0, 0));

    let client = client_for(&server);
    let chart = client.fetch_chart("ES=F", Range::D5).await.unwrap();
    mock.assert();
    assert_eq!(chart.closes, vec![5000.0, 5010.0]);
    assert_eq!(chart.symbol, "ES=F");
}

#[tokio::test]
async fn null_closes_are_skipped() {
    let server = setup_server();
    let body = r#"{"chart":{"result":[{"meta":{"chartPreviousClose":20.0},"indicators":{"quote":[{"close":[null,21.0,null,22.0,null]}]}}],"error":null}}"#;
    let mock = mock_chart(&server, "F", "1d", body);

    let client = client_for(&server);
    let q = fetch_quote(&client, "F", Range::D1).await.into_live().unwrap();
    mock.assert();
    assert_eq!(q.price, 22.0);
    // falls back to chartPreviousClose when previousClose is absent
    assert_eq!(q.previous_close, 20.0);
    assert_eq!(q.volume, 0);
}

#[tokio::test]
async fn week_change_counts_sessions_after_dropping_nulls() {
    let server = setup_server();
    let body = r#"{"chart":{"result":[{"meta":{"previousClose":110.0},"indicators":{"quote":[{"close":[100.0,null,102.0,104.0,106.0,108.0,110.0,112.0]}]}}],"error":null}}"#;
    let _mock = mock_chart(&server, "NVDA", "1mo", body);

    let client = client_for(&server);
    let q = fetch_quote(&client, "NVDA", Range::M1).await.into_live().unwrap();

    // seven real closes: the week anchor is 102.0, not the missing session
    assert!((q.week_change_pct - 100.0 * 10.0 / 102.0).abs() < 1e-9);
    assert!((q.month_change_pct - 12.0).abs() < 1e-9);
    assert_eq!(q.price, 112.0);
}
