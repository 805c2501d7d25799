//! Run orchestration: which page families to generate, with what date and data source.

mod writer;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::America::New_York;
use tracing::info;

use crate::core::{BriefError, QuoteService, QuoteSnapshot, QuoteState};

pub use writer::{RenderedPage, SiteWriter};

/// One page family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Stocks,
    Etfs,
    Futures,
    Dividends,
    Economic,
    Ipo,
    Earnings,
    Screener,
    Indicators,
}

impl Topic {
    /// Every topic, in generation order.
    pub const ALL: [Topic; 9] = [
        Topic::Stocks,
        Topic::Etfs,
        Topic::Futures,
        Topic::Dividends,
        Topic::Economic,
        Topic::Ipo,
        Topic::Earnings,
        Topic::Screener,
        Topic::Indicators,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Stocks => "stocks",
            Topic::Etfs => "etfs",
            Topic::Futures => "futures",
            Topic::Dividends => "dividends",
            Topic::Economic => "economic",
            Topic::Ipo => "ipo",
            Topic::Earnings => "earnings",
            Topic::Screener => "screener",
            Topic::Indicators => "indicators",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BriefError::Config(format!("unknown topic: {s}")))
    }
}

/// Everything a generator needs for one run.
pub struct GenContext<'a> {
    today: NaiveDate,
    service: &'a dyn QuoteService,
    writer: &'a SiteWriter,
}

impl<'a> GenContext<'a> {
    pub fn new(today: NaiveDate, service: &'a dyn QuoteService, writer: &'a SiteWriter) -> Self {
        Self {
            today,
            service,
            writer,
        }
    }

    /// Generation date. Renderers use this instead of reading the clock.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Copyright year shown in footers.
    pub fn year(&self) -> i32 {
        self.today.year()
    }

    pub fn service(&self) -> &'a dyn QuoteService {
        self.service
    }

    pub fn writer(&self) -> &'a SiteWriter {
        self.writer
    }
}

/// Current calendar date on the US east coast, where the market session is anchored.
pub fn market_today() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}

/// Outcome of generating one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicReport {
    pub topic: Topic,
    pub pages: usize,
    pub live_quotes: usize,
    pub placeholder_quotes: usize,
}

impl TopicReport {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            pages: 0,
            live_quotes: 0,
            placeholder_quotes: 0,
        }
    }

    /// Count a lookup outcome as live or placeholder.
    pub fn record(&mut self, quote: &QuoteState<QuoteSnapshot>) {
        if quote.is_live() {
            self.live_quotes += 1;
        } else {
            self.placeholder_quotes += 1;
        }
    }

    /// Write `page` through the context's writer and count it.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write(&mut self, ctx: &GenContext<'_>, page: &RenderedPage) -> Result<(), BriefError> {
        ctx.writer().write_page(page)?;
        self.pages += 1;
        Ok(())
    }
}

/// Per-topic results of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub topics: Vec<TopicReport>,
}

impl GenerationReport {
    pub fn pages(&self) -> usize {
        self.topics.iter().map(|t| t.pages).sum()
    }

    pub fn live_quotes(&self) -> usize {
        self.topics.iter().map(|t| t.live_quotes).sum()
    }

    pub fn placeholder_quotes(&self) -> usize {
        self.topics.iter().map(|t| t.placeholder_quotes).sum()
    }
}

/// Generate and write one topic's pages.
///
/// # Errors
/// Only write failures are errors; unavailable quotes fall back to placeholders.
pub async fn run_topic(ctx: &GenContext<'_>, topic: Topic) -> Result<TopicReport, BriefError> {
    let report = match topic {
        Topic::Stocks => crate::stocks::generate(ctx).await?,
        Topic::Etfs => crate::etfs::generate(ctx).await?,
        Topic::Futures => crate::futures::generate(ctx).await?,
        Topic::Dividends => crate::dividends::generate(ctx)?,
        Topic::Economic => crate::economic::generate(ctx)?,
        Topic::Ipo => crate::ipo::generate(ctx)?,
        Topic::Earnings => crate::earnings::generate(ctx)?,
        Topic::Screener => crate::screener::generate(ctx).await?,
        Topic::Indicators => crate::indicators::generate(ctx)?,
    };
    info!(
        topic = %topic,
        pages = report.pages,
        live = report.live_quotes,
        placeholder = report.placeholder_quotes,
        "topic generated"
    );
    Ok(report)
}

/// Run `topics` one after another, in the order given, stopping at the first write failure.
///
/// # Errors
/// See [`run_topic`].
pub async fn run_topics(
    ctx: &GenContext<'_>,
    topics: &[Topic],
) -> Result<GenerationReport, BriefError> {
    let mut report = GenerationReport::default();
    for &topic in topics {
        report.topics.push(run_topic(ctx, topic).await?);
    }
    Ok(report)
}

/// Run every topic in [`Topic::ALL`] order.
///
/// # Errors
/// See [`run_topic`].
pub async fn run_all(ctx: &GenContext<'_>) -> Result<GenerationReport, BriefError> {
    run_topics(ctx, &Topic::ALL).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_names_round_trip_through_from_str() {
        for t in Topic::ALL {
            assert_eq!(t.as_str().parse::<Topic>().unwrap(), t);
        }
        assert_eq!("IPO".parse::<Topic>().unwrap(), Topic::Ipo);
        assert!("crypto".parse::<Topic>().is_err());
    }

    #[test]
    fn report_counts_quote_outcomes() {
        let mut r = TopicReport::new(Topic::Stocks);
        r.record(&QuoteState::Unavailable);
        r.record(&QuoteState::NotFetched);
        assert_eq!((r.live_quotes, r.placeholder_quotes), (0, 2));
    }
}
