//! Run configuration, loaded from JSON.
//!
//! Every field has a default, so an empty object (or no file at all) is a valid
//! configuration. Precedence, lowest first: defaults, config file, `PMB_OUTPUT_DIR`,
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::core::{Backoff, BriefError, QuoteClient, RetryConfig};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "premarket.json";
/// Environment variable overriding [`SiteConfig::output_dir`].
pub const OUTPUT_DIR_ENV: &str = "PMB_OUTPUT_DIR";

/// Retry policy as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub enabled: bool,
    pub max_retries: u32,
    pub base_ms: u64,
    pub max_ms: u64,
    pub jitter: bool,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 2,
            base_ms: 250,
            max_ms: 2000,
            jitter: true,
        }
    }
}

impl RetrySettings {
    pub fn to_retry_config(&self) -> RetryConfig {
        if !self.enabled {
            return RetryConfig::disabled();
        }
        RetryConfig {
            max_retries: self.max_retries,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(self.base_ms),
                factor: 2.0,
                max: Duration::from_millis(self.max_ms),
                jitter: self.jitter,
            },
            ..RetryConfig::default()
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Chart endpoint base; the symbol is appended.
    pub base_chart: Option<String>,
    /// quoteSummary endpoint base; the symbol is appended.
    pub base_quote_api: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Minimum gap between two requests.
    pub request_spacing_ms: u64,
    /// In-run response cache lifetime; `0` turns the cache off.
    pub cache_ttl_secs: u64,
    pub retry: RetrySettings,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            base_chart: None,
            base_quote_api: None,
            user_agent: None,
            timeout_secs: 10,
            connect_timeout_secs: 5,
            request_spacing_ms: 50,
            cache_ttl_secs: 300,
            retry: RetrySettings::default(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory generated pages are written below.
    pub output_dir: PathBuf,
    pub http: HttpSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            http: HttpSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config file.
    ///
    /// # Errors
    /// Returns [`BriefError::Config`] if the file cannot be read or is not valid JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BriefError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| BriefError::Config(format!("read {}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| BriefError::Config(format!("parse {}: {e}", path.display())))
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults;
    /// then apply [`OUTPUT_DIR_ENV`].
    ///
    /// # Errors
    /// A missing or malformed explicit file is an error; a malformed default file is too.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BriefError> {
        let mut cfg = match explicit {
            Some(p) => {
                info!(path = %p.display(), "loading config");
                Self::from_file(p)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                info!(path = DEFAULT_CONFIG_FILE, "loading config");
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        cfg.apply_env(std::env::var(OUTPUT_DIR_ENV).ok());
        Ok(cfg)
    }

    /// Apply an `PMB_OUTPUT_DIR` value; blank values are ignored.
    pub fn apply_env(&mut self, output_dir: Option<String>) {
        if let Some(dir) = output_dir.filter(|d| !d.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Build the HTTP quote client these settings describe.
    ///
    /// # Errors
    /// Fails on an unparseable base URL or if the HTTP client cannot be built.
    pub fn build_client(&self) -> Result<QuoteClient, BriefError> {
        let h = &self.http;
        let mut b = QuoteClient::builder()
            .timeout(Duration::from_secs(h.timeout_secs))
            .connect_timeout(Duration::from_secs(h.connect_timeout_secs))
            .request_spacing(Duration::from_millis(h.request_spacing_ms))
            .retry_config(h.retry.to_retry_config());
        if let Some(u) = &h.base_chart {
            b = b.base_chart(Url::parse(u)?);
        }
        if let Some(u) = &h.base_quote_api {
            b = b.base_quote_api(Url::parse(u)?);
        }
        if let Some(ua) = &h.user_agent {
            b = b.user_agent(ua.clone());
        }
        if h.cache_ttl_secs > 0 {
            b = b.cache_ttl(Duration::from_secs(h.cache_ttl_secs));
        }
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        let cfg: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.http.request_spacing_ms, 50);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("premarket.json");
        fs::write(
            &path,
            r#"{"output_dir":"site","http":{"retry":{"enabled":false},"cache_ttl_secs":0}}"#,
        )
        .unwrap();

        let cfg = SiteConfig::from_file(&path).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("site"));
        assert!(!cfg.http.retry.enabled);
        assert_eq!(cfg.http.timeout_secs, 10);
        assert!(!cfg.http.retry.to_retry_config().enabled);
        assert!(!cfg.build_client().unwrap().cache_enabled());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SiteConfig::from_file(&path),
            Err(BriefError::Config(_))
        ));
        assert!(matches!(
            SiteConfig::load(Some(dir.path().join("missing.json").as_path())),
            Err(BriefError::Config(_))
        ));
    }

    #[test]
    fn env_overrides_output_dir_unless_blank() {
        let mut cfg = SiteConfig::default();
        cfg.apply_env(Some("  ".into()));
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        cfg.apply_env(Some("/tmp/out".into()));
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let mut cfg = SiteConfig::default();
        cfg.http.base_chart = Some("not a url".into());
        assert!(matches!(cfg.build_client(), Err(BriefError::Url(_))));
    }
}
