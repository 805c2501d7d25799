//! premarket-pages CLI - regenerate the Pre-Market Brief static pages

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use premarket_pages::{
    GenContext, OfflineQuotes, QuoteService, SiteConfig, SiteWriter, Topic, market_today,
    run_topics,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "premarket-pages")]
#[command(about = "Generate the Pre-Market Brief static HTML pages")]
struct Cli {
    /// Page families to generate
    #[arg(value_enum, default_value = "all")]
    topics: Vec<TopicArg>,

    /// Output directory (overrides the config file and PMB_OUTPUT_DIR)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file (default: ./premarket.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip all network lookups and render placeholder figures
    #[arg(long)]
    offline: bool,

    /// Generation date as YYYY-MM-DD (default: today in New York)
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TopicArg {
    All,
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

impl TopicArg {
    fn topic(self) -> Option<Topic> {
        Some(match self {
            TopicArg::All => return None,
            TopicArg::Stocks => Topic::Stocks,
            TopicArg::Etfs => Topic::Etfs,
            TopicArg::Futures => Topic::Futures,
            TopicArg::Dividends => Topic::Dividends,
            TopicArg::Economic => Topic::Economic,
            TopicArg::Ipo => Topic::Ipo,
            TopicArg::Earnings => Topic::Earnings,
            TopicArg::Screener => Topic::Screener,
            TopicArg::Indicators => Topic::Indicators,
        })
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Expand `all` and drop repeats, keeping first-seen order.
fn selected_topics(args: &[TopicArg]) -> Vec<Topic> {
    if args.is_empty() || args.contains(&TopicArg::All) {
        return Topic::ALL.to_vec();
    }
    let mut out = Vec::new();
    for t in args.iter().filter_map(|a| a.topic()) {
        if !out.contains(&t) {
            out.push(t);
        }
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let cfg = SiteConfig::load(cli.config.as_deref()).context("loading config")?;
    let output = cli.output.unwrap_or_else(|| cfg.output_dir.clone());
    let today = cli.today.unwrap_or_else(market_today);
    let topics = selected_topics(&cli.topics);

    let client;
    let offline = OfflineQuotes;
    let service: &dyn QuoteService = if cli.offline {
        &offline
    } else {
        client = cfg.build_client().context("building HTTP client")?;
        &client
    };

    info!(
        output = %output.display(),
        %today,
        offline = cli.offline,
        topics = topics.len(),
        "generating pages"
    );

    let writer = SiteWriter::new(output);
    let ctx = GenContext::new(today, service, &writer);
    let report = run_topics(&ctx, &topics).await.context("generating pages")?;

    info!(
        pages = report.pages(),
        live = report.live_quotes(),
        placeholder = report.placeholder_quotes(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_and_repeats_collapse() {
        assert_eq!(selected_topics(&[]), Topic::ALL);
        assert_eq!(selected_topics(&[TopicArg::Ipo, TopicArg::All]), Topic::ALL);
        assert_eq!(
            selected_topics(&[TopicArg::Screener, TopicArg::Stocks, TopicArg::Screener]),
            [Topic::Screener, Topic::Stocks]
        );
    }

    #[test]
    fn today_flag_needs_iso_date() {
        assert_eq!(parse_day("2025-02-15"), Ok(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()));
        assert!(parse_day("02/15/2025").is_err());
    }
}
