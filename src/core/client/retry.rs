use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::QuoteClient;
use crate::core::BriefError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Fixed(d) => *d,
            Backoff::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = factor.powi(i32::try_from(attempt).unwrap_or(i32::MAX));
                let raw = base.as_secs_f64() * exp;
                let capped = raw.min(max.as_secs_f64());
                let secs = if *jitter {
                    capped * rand::thread_rng().gen_range(0.5..1.5)
                } else {
                    capped
                };
                Duration::from_secs_f64(secs.max(0.0))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt.
    /// The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl RetryConfig {
    /// A policy that performs exactly one attempt per request.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 2,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(250),
                factor: 2.0,
                max: Duration::from_secs(2),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl QuoteClient {
    /// Send a request, pacing it behind the previous one and retrying per the active policy.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, BriefError> {
        let cfg = self.retry_config();
        let mut attempt: u32 = 0;

        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| BriefError::Data("request is not cloneable".into()))?;
            self.pacer().wait().await;

            match this_try.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    let can_retry = cfg.enabled && attempt < cfg.max_retries;
                    if can_retry && cfg.retry_on_status.contains(&code) {
                        let delay = cfg.backoff.delay(attempt);
                        debug!(status = code, attempt, ?delay, "retrying after status");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if cfg.enabled && retryable && attempt < cfg.max_retries {
                        let delay = cfg.backoff.delay(attempt);
                        debug!(error = %e, attempt, ?delay, "retrying after transport error");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(BriefError::Http(e));
                }
            }
        }
    }
}
