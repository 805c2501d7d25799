//! premarket-pages: static page generator for the Pre-Market Brief finance site.
//!
//! Each topic module owns its catalog, its derived views and its renderer; [`site`]
//! runs them against a [`QuoteService`] and writes the results through a [`SiteWriter`].
//! Live prices come from the Yahoo chart and quoteSummary endpoints via [`QuoteClient`];
//! every lookup is fail-soft, so pages always render.

pub mod config;
pub mod core;
pub mod quote;
pub mod render;
pub mod site;

pub mod dividends;
pub mod earnings;
pub mod economic;
pub mod etfs;
pub mod futures;
pub mod indicators;
pub mod ipo;
pub mod screener;
pub mod stocks;

pub use config::SiteConfig;
pub use crate::core::{
    Backoff, BriefError, ChartSnapshot, CompanyProfile, OfflineQuotes, QuoteClient,
    QuoteClientBuilder, QuoteService, QuoteSnapshot, QuoteState, Range, RetryConfig,
    ServiceFuture,
};
pub use quote::{derive_quote, fetch_profile_or_default, fetch_quote, pct_change};
pub use site::{
    GenContext, GenerationReport, RenderedPage, SiteWriter, Topic, TopicReport, market_today,
    run_all, run_topic, run_topics,
};
