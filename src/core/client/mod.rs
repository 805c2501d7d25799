//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults), `retry` (backoff policy)
//! and `pacer` (request spacing).

mod constants;
mod pacer;
mod retry;

pub use pacer::RequestPacer;
pub use retry::{Backoff, RetryConfig};

use crate::core::BriefError;
use constants::{DEFAULT_BASE_CHART, DEFAULT_BASE_QUOTE_API, DEFAULT_REQUEST_SPACING_MS, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// HTTP client for the Yahoo chart and quoteSummary endpoints.
///
/// Cloning is cheap; clones share the connection pool, the request pacer and the cache.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_chart: Url,
    base_quote_api: Url,
    retry: RetryConfig,
    pacer: Arc<RequestPacer>,
    cache: Option<Arc<CacheStore>>,
}

impl QuoteClient {
    /// Create a new builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }
    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
    pub(crate) fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str) {
        let Some(store) = &self.cache else {
            return;
        };
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + store.default_ttl,
        };
        store.map.write().await.insert(url.as_str().to_string(), entry);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuoteClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_quote_api: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    request_spacing: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl QuoteClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the quoteSummary API base
    /// (e.g., `https://query1.finance.yahoo.com/v10/finance/quoteSummary/`).
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Minimum gap between two outbound requests. Default: 50ms.
    pub fn request_spacing(mut self, dur: Duration) -> Self {
        self.request_spacing = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    pub fn build(self) -> Result<QuoteClient, BriefError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_quote_api = match self.base_quote_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_API)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;
        let spacing = self
            .request_spacing
            .unwrap_or(Duration::from_millis(DEFAULT_REQUEST_SPACING_MS));

        Ok(QuoteClient {
            http,
            base_chart,
            base_quote_api,
            retry: self.retry.unwrap_or_default(),
            pacer: Arc::new(RequestPacer::new(spacing)),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
