//! The `screener.html` pre-market scanner.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::core::{BriefError, Range};
use crate::quote::{fetch_profile_or_default, fetch_quote};
use crate::render::format::{direction_class, dollars, escape_html, millions, signed_pct, up_down};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

/// Symbols scanned on every run.
pub const WATCHLIST: [&str; 33] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "AMD", "NFLX", "BABA", "JD", "PDD",
    "PLTR", "SOFI", "COIN", "HOOD", "GME", "AMC", "SPY", "QQQ", "IWM", "VIX", "UVXY", "SQQQ",
    "TQQQ", "F", "GE", "T", "BAC", "XOM", "CVX", "OXY", "MSTR",
];

const MAX_CARDS: usize = 20;
const GAP_PCT: f64 = 5.0;
const HIGH_VOLUME: u64 = 10_000_000;
const PENNY_PRICE: f64 = 5.0;
const PENNY_MOVE_PCT: f64 = 2.0;
const LARGE_CAP: f64 = 10_000_000_000.0;

/// A watchlist symbol that returned a quote. `name` and `sector` come from the network
/// and are escaped when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenerRow {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub change_pct: f64,
    pub volume: u64,
    pub market_cap: Option<f64>,
}

fn desc_by(f: impl Fn(&ScreenerRow) -> f64) -> impl Fn(&&ScreenerRow, &&ScreenerRow) -> Ordering {
    move |a: &&ScreenerRow, b: &&ScreenerRow| f(b).total_cmp(&f(a))
}

/// Change of at least +5%, biggest gain first.
pub fn gap_up(rows: &[ScreenerRow]) -> Vec<&ScreenerRow> {
    let mut out: Vec<_> = rows.iter().filter(|r| r.change_pct >= GAP_PCT).collect();
    out.sort_by(desc_by(|r| r.change_pct));
    out
}

/// Change of at most -5%, biggest loss first.
pub fn gap_down(rows: &[ScreenerRow]) -> Vec<&ScreenerRow> {
    let mut out: Vec<_> = rows.iter().filter(|r| r.change_pct <= -GAP_PCT).collect();
    out.sort_by(|a, b| a.change_pct.total_cmp(&b.change_pct));
    out
}

/// Volume above ten million shares, busiest first.
pub fn high_volume(rows: &[ScreenerRow]) -> Vec<&ScreenerRow> {
    let mut out: Vec<_> = rows.iter().filter(|r| r.volume > HIGH_VOLUME).collect();
    out.sort_by(|a, b| b.volume.cmp(&a.volume));
    out
}

/// Under $5 and moving more than 2% either way, sorted by change descending.
pub fn penny_movers(rows: &[ScreenerRow]) -> Vec<&ScreenerRow> {
    let mut out: Vec<_> = rows
        .iter()
        .filter(|r| r.price < PENNY_PRICE && r.change_pct.abs() > PENNY_MOVE_PCT)
        .collect();
    out.sort_by(desc_by(|r| r.change_pct));
    out
}

/// Market cap of at least $10B, biggest move either way first.
pub fn large_cap_movers(rows: &[ScreenerRow]) -> Vec<&ScreenerRow> {
    let mut out: Vec<_> = rows
        .iter()
        .filter(|r| r.market_cap.is_some_and(|c| c >= LARGE_CAP))
        .collect();
    out.sort_by(desc_by(|r| r.change_pct.abs()));
    out
}

/// Quote every watchlist symbol; symbols with a quote also get their profile.
pub async fn scan(ctx: &GenContext<'_>, report: &mut TopicReport) -> Vec<ScreenerRow> {
    let mut rows = Vec::new();
    for symbol in WATCHLIST {
        let quote = fetch_quote(ctx.service(), symbol, Range::D1).await;
        report.record(&quote);
        let Some(q) = quote.into_live() else {
            continue;
        };
        let profile = fetch_profile_or_default(ctx.service(), symbol).await;
        rows.push(ScreenerRow {
            symbol: symbol.to_string(),
            name: profile.name.unwrap_or_else(|| symbol.to_string()),
            sector: profile.sector.unwrap_or_else(|| "N/A".to_string()),
            price: q.price,
            change_pct: q.change_pct,
            volume: q.volume,
            market_cap: q.market_cap,
        });
    }
    rows
}

pub async fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Screener);
    let rows = scan(ctx, &mut report).await;
    report.write(ctx, &render_screener(&rows, ctx.year()))?;
    Ok(report)
}

const SCREENER_CSS: &str = r#"
        .screen-section { margin-bottom: 40px; }
        .screen-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
        .screen-header h2 { color: #00d4aa; font-size: 1.3em; }
        .count-badge { background: rgba(0, 212, 170, 0.2); color: #00d4aa; padding: 5px 15px; border-radius: 20px; font-size: 0.85em; }
        .stock-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; }
        .stock-card { background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 20px; }
        .stock-card:hover { border-color: #00d4aa; }
        .stock-card.up { border-left: 4px solid #00d4aa; }
        .stock-card.down { border-left: 4px solid #ff4757; }
        .stock-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px; }
        .stock-card .symbol { font-size: 1.3em; font-weight: bold; color: #fff; }
        .sector { font-size: 0.75em; color: #8b92a8; background: #1a1f2e; padding: 3px 8px; border-radius: 4px; }
        .stock-name { color: #8b92a8; font-size: 0.9em; margin-bottom: 15px; }
        .stock-metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; }
        .metric { text-align: center; }
        .metric .label { display: block; font-size: 0.7em; color: #4a5568; text-transform: uppercase; }
        .metric .value { display: block; font-size: 1.1em; font-weight: bold; margin-top: 5px; }
        .empty-state { text-align: center; padding: 60px; color: #4a5568; }
"#;

fn card(r: &ScreenerRow) -> String {
    format!(
        r#"
                <div class="stock-card {dir}">
                    <div class="stock-header"><span class="symbol">{sym}</span><span class="sector">{sector}</span></div>
                    <div class="stock-name">{name}</div>
                    <div class="stock-metrics">
                        <div class="metric"><span class="label">Price</span><span class="value">{price}</span></div>
                        <div class="metric"><span class="label">Change</span><span class="value change {class}">{change}</span></div>
                        <div class="metric"><span class="label">Volume</span><span class="value">{volume}</span></div>
                    </div>
                </div>"#,
        dir = up_down(r.change_pct),
        sym = escape_html(&r.symbol),
        sector = escape_html(&r.sector),
        name = escape_html(&r.name),
        price = dollars(r.price),
        class = direction_class(r.change_pct),
        change = signed_pct(r.change_pct),
        volume = millions(r.volume as f64),
    )
}

fn section(out: &mut String, heading: &str, rows: &[&ScreenerRow], empty: &str) {
    let _ = write!(
        out,
        r#"
        <div class="screen-section">
            <div class="screen-header"><h2>{heading}</h2><span class="count-badge">{n} Results</span></div>
            <div class="stock-grid">"#,
        n = rows.len(),
    );
    if rows.is_empty() {
        let _ = write!(out, r#"<div class="empty-state">{empty}</div>"#);
    } else {
        for r in rows.iter().take(MAX_CARDS) {
            out.push_str(&card(r));
        }
    }
    out.push_str("\n            </div>\n        </div>");
}

/// Render `screener.html` from the scanned rows.
pub fn render_screener(rows: &[ScreenerRow], year: i32) -> RenderedPage {
    let mut body = String::from(
        r#"
        <header>
            <h1>🔍 Pre-Market Screener</h1>
            <p class="tagline">Find gap up stocks and high volume movers</p>
        </header>"#,
    );
    section(
        &mut body,
        "🚀 Gap Up Stocks (&gt;5%)",
        &gap_up(rows),
        "No stocks gapping up more than 5% in pre-market",
    );
    section(
        &mut body,
        "📉 Gap Down Stocks (&lt;-5%)",
        &gap_down(rows),
        "No stocks gapping down more than 5% in pre-market",
    );
    section(
        &mut body,
        "🔥 High Volume Movers",
        &high_volume(rows),
        "No high volume stocks found",
    );
    section(
        &mut body,
        "💰 Penny Stock Movers (&lt;$5)",
        &penny_movers(rows),
        "No penny stocks moving significantly",
    );
    section(
        &mut body,
        "🏦 Large Cap Movers",
        &large_cap_movers(rows),
        "No large cap quotes available",
    );

    let mut table = String::new();
    for r in rows {
        let _ = write!(
            table,
            r#"
                    <tr><td class="symbol">{sym}</td><td>{name}</td><td>{price}</td><td class="{class}">{change}</td><td>{volume}</td></tr>"#,
            sym = escape_html(&r.symbol),
            name = escape_html(&r.name),
            price = dollars(r.price),
            class = direction_class(r.change_pct),
            change = signed_pct(r.change_pct),
            volume = millions(r.volume as f64),
        );
    }
    let _ = write!(
        body,
        r#"
        <div class="card">
            <div class="card-header"><h2>📋 Full Watchlist ({n} quoted)</h2></div>
            <table>
                <thead><tr><th>Symbol</th><th>Name</th><th>Price</th><th>Change</th><th>Volume</th></tr></thead>
                <tbody>{table}
                </tbody>
            </table>
        </div>"#,
        n = rows.len(),
    );

    let html = Page::new(
        "Stock Screener | Pre-Market Gap Up & High Volume Scanner",
        Theme::SCREENER,
        year,
    )
    .description(
        "Free pre-market stock screener. Find gap up stocks, high volume movers, and premarket gainers before the market opens.",
    )
    .keywords(
        "stock screener, premarket scanner, gap up stocks, high volume stocks, pre market filter",
    )
    .canonical("/screener")
    .css(SCREENER_CSS)
    .nav(&[("/earnings-calendar.html", "Earnings"), ("/screener.html", "Screener")])
    .body(body)
    .footer_note("Real-time stock screening")
    .disclaimer("Data delayed. Not investment advice.")
    .to_html();

    RenderedPage::new("screener.html", html)
}
