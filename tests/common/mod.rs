#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use httpmock::Method::GET;
use httpmock::{Mock, MockServer};
use premarket_pages::{
    BriefError, ChartSnapshot, CompanyProfile, QuoteClient, QuoteClientBuilder, QuoteService,
    Range, RetryConfig, ServiceFuture,
};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Client pointed at `server` with retries off and no cache.
pub fn client_for(server: &MockServer) -> QuoteClient {
    client_with_retry(server, RetryConfig::disabled())
}

pub fn client_with_retry(server: &MockServer, retry: RetryConfig) -> QuoteClient {
    builder_for(server).retry_config(retry).build().unwrap()
}

/// Client pointed at `server` with retries off and an in-run cache.
pub fn cached_client_for(server: &MockServer, ttl: Duration) -> QuoteClient {
    builder_for(server)
        .retry_config(RetryConfig::disabled())
        .cache_ttl(ttl)
        .build()
        .unwrap()
}

/// Client whose endpoints point at a local port nothing listens on.
pub fn unreachable_client(retry: RetryConfig) -> QuoteClient {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base = format!("http://127.0.0.1:{port}");
    QuoteClient::builder()
        .base_chart(Url::parse(&format!("{base}/v8/finance/chart/")).unwrap())
        .base_quote_api(Url::parse(&format!("{base}/v10/finance/quoteSummary/")).unwrap())
        .connect_timeout(Duration::from_secs(2))
        .request_spacing(Duration::ZERO)
        .retry_config(retry)
        .build()
        .unwrap()
}

fn builder_for(server: &MockServer) -> QuoteClientBuilder {
    QuoteClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_quote_api(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .request_spacing(Duration::ZERO)
}

pub fn chart_body(closes: &[f64], previous_close: f64, volume: u64) -> String {
    let closes: Vec<String> = closes.iter().map(|c| c.to_string()).collect();
    format!(
        r#"{{"chart":{{"result":[{{
            "meta":{{"previousClose":{previous_close},"regularMarketVolume":{volume},"fiftyTwoWeekHigh":250.0,"marketCap":3.0e12}},
            "indicators":{{"quote":[{{"close":[{}]}}]}}
        }}],"error":null}}}}"#,
        closes.join(",")
    )
}

pub fn summary_body(long_name: &str, industry: &str) -> String {
    format!(
        r#"{{"quoteSummary":{{"result":[{{
            "quoteType":{{"longName":"{long_name}"}},
            "assetProfile":{{"industry":"{industry}"}}
        }}],"error":null}}}}"#
    )
}

pub fn mock_chart<'a>(server: &'a MockServer, symbol: &str, range: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"))
            .query_param("interval", "1d")
            .query_param("range", range);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// In-memory [`QuoteService`]: symbols without a canned chart are unavailable.
#[derive(Default)]
pub struct StubQuotes {
    charts: HashMap<String, ChartSnapshot>,
    profiles: HashMap<String, CompanyProfile>,
    chart_calls: AtomicUsize,
}

impl StubQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart(
        mut self,
        symbol: &str,
        closes: &[f64],
        previous_close: f64,
        volume: u64,
    ) -> Self {
        self.charts.insert(
            symbol.to_string(),
            ChartSnapshot {
                symbol: symbol.to_string(),
                closes: closes.to_vec(),
                previous_close: Some(previous_close),
                regular_market_volume: Some(volume),
                ..ChartSnapshot::default()
            },
        );
        self
    }

    pub fn with_snapshot(mut self, snapshot: ChartSnapshot) -> Self {
        self.charts.insert(snapshot.symbol.clone(), snapshot);
        self
    }

    pub fn with_profile(mut self, symbol: &str, name: &str, sector: &str) -> Self {
        self.profiles.insert(
            symbol.to_string(),
            CompanyProfile {
                name: Some(name.to_string()),
                sector: Some(sector.to_string()),
            },
        );
        self
    }

    pub fn chart_calls(&self) -> usize {
        self.chart_calls.load(Ordering::SeqCst)
    }
}

impl QuoteService for StubQuotes {
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        _range: Range,
    ) -> ServiceFuture<'a, ChartSnapshot> {
        self.chart_calls.fetch_add(1, Ordering::SeqCst);
        let found = self.charts.get(symbol).cloned();
        Box::pin(async move {
            found.ok_or_else(|| BriefError::Unavailable(format!("no stub chart for {symbol}")))
        })
    }

    fn fetch_profile<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, CompanyProfile> {
        let found = self.profiles.get(symbol).cloned();
        Box::pin(async move {
            found.ok_or_else(|| BriefError::Unavailable(format!("no stub profile for {symbol}")))
        })
    }
}
