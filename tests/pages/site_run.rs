use std::fs;
use std::path::Path;

use premarket_pages::{
    ChartSnapshot, GenContext, OfflineQuotes, SiteWriter, Topic, etfs, futures, indicators,
    run_all, run_topic, run_topics, screener, stocks,
};

use crate::common::{StubQuotes, day};

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[tokio::test]
async fn offline_run_writes_every_page_with_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let writer = SiteWriter::new(dir.path());
    let ctx = GenContext::new(day(2025, 2, 3), &OfflineQuotes, &writer);

    let report = run_all(&ctx).await.unwrap();

    let expected_pages = stocks::STOCKS.len()
        + 1
        + etfs::ETFS.len()
        + 1
        + 1 // futures
        + 5 // dividends, economic, ipo, earnings, screener
        + indicators::INDICATORS.len()
        + 1;
    assert_eq!(report.pages(), expected_pages);
    assert_eq!(report.live_quotes(), 0);
    assert_eq!(
        report.placeholder_quotes(),
        stocks::STOCKS.len()
            + etfs::ETFS.len()
            + futures::CONTRACTS.len()
            + screener::WATCHLIST.len()
    );
    let order: Vec<Topic> = report.topics.iter().map(|t| t.topic).collect();
    assert_eq!(order, Topic::ALL);

    for rel in [
        "stock/AAPL.html",
        "stock.html",
        "etf/SPY.html",
        "etf.html",
        "futures.html",
        "dividend-calendar.html",
        "economic-calendar.html",
        "ipo-calendar.html",
        "earnings-calendar.html",
        "screener.html",
        "indicators.html",
        "indicators/rsi-indicator.html",
    ] {
        assert!(dir.path().join(rel).is_file(), "missing {rel}");
    }

    assert!(read(dir.path(), "stock/AAPL.html").contains("$150.00"));
    let stock_index = read(dir.path(), "stock.html");
    for s in stocks::STOCKS {
        assert!(stock_index.contains(&format!(r#"href="/stock/{}.html""#, s.symbol)));
    }
    let screener_html = read(dir.path(), "screener.html");
    assert!(screener_html.contains("No stocks gapping up more than 5% in pre-market"));
    assert!(screener_html.contains("Full Watchlist (0 quoted)"));
}

#[tokio::test]
async fn same_day_and_data_give_identical_bytes() {
    let stub = StubQuotes::new().with_chart("AAPL", &[100.0, 110.0], 105.0, 30_000_000);
    let today = day(2025, 2, 3);

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let (wa, wb) = (SiteWriter::new(a.path()), SiteWriter::new(b.path()));
    run_all(&GenContext::new(today, &stub, &wa)).await.unwrap();
    run_all(&GenContext::new(today, &stub, &wb)).await.unwrap();

    for rel in [
        "stock/AAPL.html",
        "stock/MSFT.html",
        "earnings-calendar.html",
        "dividend-calendar.html",
        "screener.html",
        "futures.html",
    ] {
        assert_eq!(read(a.path(), rel), read(b.path(), rel), "{rel} differs");
    }
}

#[tokio::test]
async fn live_quote_reaches_stock_page() {
    let stub = StubQuotes::new().with_chart("NVDA", &[100.0, 104.0, 110.0], 100.0, 48_000_000);
    let dir = tempfile::tempdir().unwrap();
    let writer = SiteWriter::new(dir.path());
    let ctx = GenContext::new(day(2025, 2, 3), &stub, &writer);

    let report = run_topic(&ctx, Topic::Stocks).await.unwrap();
    assert_eq!(report.live_quotes, 1);
    assert_eq!(report.placeholder_quotes, stocks::STOCKS.len() - 1);
    assert_eq!(stub.chart_calls(), stocks::STOCKS.len());

    let html = read(dir.path(), "stock/NVDA.html");
    assert!(html.contains("$110.00"));
    assert!(html.contains("▲ 10.00%"));
    assert!(html.contains("48.0M"));
    assert!(!html.contains("$150.00"));
}

#[tokio::test]
async fn screener_sections_follow_quotes() {
    let stub = StubQuotes::new()
        .with_chart("SOFI", &[4.0, 4.4], 4.0, 60_000_000)
        .with_profile("SOFI", "SoFi <Technologies>", "Credit Services")
        .with_snapshot(ChartSnapshot {
            symbol: "AAPL".into(),
            closes: vec![200.0, 188.0],
            previous_close: Some(200.0),
            regular_market_volume: Some(5_000_000),
            market_cap: Some(3.0e12),
            ..ChartSnapshot::default()
        });
    let dir = tempfile::tempdir().unwrap();
    let writer = SiteWriter::new(dir.path());
    let ctx = GenContext::new(day(2025, 2, 3), &stub, &writer);

    let report = run_topics(&ctx, &[Topic::Screener]).await.unwrap();
    assert_eq!(report.live_quotes(), 2);

    let html = read(dir.path(), "screener.html");
    // SOFI: +10% on 60M shares under $5, AAPL: -6% large cap
    assert!(html.contains("SoFi &lt;Technologies&gt;"));
    assert!(!html.contains("SoFi <Technologies>"));
    assert!(html.contains("+10.00%"));
    assert!(html.contains("-6.00%"));
    assert!(html.contains("Full Watchlist (2 quoted)"));
    assert!(!html.contains("No stocks gapping up more than 5% in pre-market"));
    assert!(!html.contains("No stocks gapping down more than 5% in pre-market"));
    assert!(!html.contains("No large cap quotes available"));
    // AAPL had no profile, so its name falls back to the symbol
    assert!(html.contains(r#"<div class="stock-name">AAPL</div>"#));
}
