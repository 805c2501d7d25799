//! The `futures.html` board.

pub mod catalog;

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::{BriefError, QuoteSnapshot, QuoteState, Range};
use crate::quote::fetch_quote;
use crate::render::format::{direction_class, fixed, long_date, signed_pct};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{CONTRACTS, Contract};

/// Fetch a five-day chart per contract and write the board.
///
/// # Errors
/// Fails only when the page cannot be written.
pub async fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Futures);
    let mut board = Vec::with_capacity(CONTRACTS.len());
    for contract in CONTRACTS {
        let quote = fetch_quote(ctx.service(), contract.symbol, Range::D5).await;
        report.record(&quote);
        board.push((*contract, quote));
    }
    report.write(ctx, &render_futures_page(&board, ctx.today(), ctx.year()))?;
    Ok(report)
}

/// Row class; a missing change counts as positive.
pub fn row_class(quote: &QuoteState<QuoteSnapshot>) -> &'static str {
    direction_class(quote.live().map_or(0.0, |q| q.change_pct))
}

const FUTURES_CSS: &str = r#"
        .date { color: #f39c12; font-family: monospace; margin-top: 10px; }
        td.ticker { color: #8b92a8; font-family: monospace; }
        td.price { font-family: monospace; font-size: 1.1em; }
        td.change { font-weight: bold; }
        td.unit, td.tick { color: #8b92a8; font-size: 0.9em; }
        tr.positive td.change { color: #00d4aa; }
        tr.negative td.change { color: #ff4757; }
        .info-card p { line-height: 1.8; }
"#;

const INFO_CARDS: &str = r#"
        <div class="info-grid">
            <div class="info-card">
                <h3>🌅 Pre-Market Indicator</h3>
                <p>Stock futures trade nearly 24 hours a day, providing an early indication of how the stock market will open. S&P 500 futures (ES) and Nasdaq futures (NQ) are the most closely watched.</p>
            </div>
            <div class="info-card">
                <h3>🛢️ Commodity Futures</h3>
                <p>Crude oil and gold futures react to global events, inflation expectations, and currency movements. These can impact energy and mining stocks significantly.</p>
            </div>
            <div class="info-card">
                <h3>📊 Bond Futures</h3>
                <p>Treasury bond futures reflect interest rate expectations. When yields rise, bond futures fall, affecting financial stocks and mortgage rates.</p>
            </div>
        </div>"#;

/// Render `futures.html` from contracts and their quote outcomes, in board order.
pub fn render_futures_page(
    board: &[(Contract, QuoteState<QuoteSnapshot>)],
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let mut rows = String::new();
    for (contract, quote) in board {
        let (price, change) = match quote.live() {
            Some(q) => (fixed(q.price, 2), signed_pct(q.change_pct)),
            None => ("-".to_string(), "-".to_string()),
        };
        let _ = write!(
            rows,
            r#"
                    <tr class="{class}"><td class="symbol">{name}</td><td class="ticker">{ticker}</td><td class="price">{price}</td><td class="change">{change}</td><td class="unit">{unit}</td><td class="tick">{tick}</td></tr>"#,
            class = row_class(quote),
            name = contract.name,
            ticker = contract.ticker(),
            unit = contract.unit,
            tick = contract.tick,
        );
    }

    let body = format!(
        r#"
        <header>
            <h1>📈 Futures Market</h1>
            <p class="date">{date}</p>
        </header>

        <div class="card">
            <div class="card-header"><h2>Stock Index Futures</h2></div>
            <table>
                <thead><tr><th>Contract</th><th>Symbol</th><th>Price</th><th>Change</th><th>Unit</th><th>Tick</th></tr></thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>
{INFO_CARDS}"#,
        date = long_date(today),
    );

    let html = Page::new(
        "Futures Market Today | Stock Futures, Gold, Oil & Bond Futures",
        Theme::FUTURES,
        year,
    )
    .description(
        "Futures market data today. Track S&P 500 futures, Nasdaq futures, gold, crude oil, and bond futures before market open.",
    )
    .keywords("futures market, stock futures, gold futures, oil futures, s&p 500 futures")
    .canonical("/futures")
    .css(FUTURES_CSS)
    .body(body)
    .footer_note("Futures data for informational purposes only")
    .to_html();

    RenderedPage::new("futures.html", html)
}
