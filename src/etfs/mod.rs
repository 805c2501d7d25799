//! ETF detail pages under `etf/` and the `etf.html` index.

pub mod catalog;

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::{BriefError, QuoteSnapshot, QuoteState, Range};
use crate::quote::fetch_quote;
use crate::render::format::{direction_class, dollars, long_date, millions, signed_pct};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{ETFS, Etf};

const PLACEHOLDER_PRICE: f64 = 400.0;
const PLACEHOLDER_CHANGE: f64 = 0.5;
const PLACEHOLDER_VOLUME: f64 = 50_000_000.0;
const COMPETITIVE_BELOW_PCT: f64 = 0.1;

/// Fetch a one-month chart per ETF, write each page, then the index.
///
/// # Errors
/// Fails only when a page cannot be written.
pub async fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Etfs);
    for etf in ETFS {
        let quote = fetch_quote(ctx.service(), etf.symbol, Range::M1).await;
        report.record(&quote);
        report.write(ctx, &render_etf_page(etf, &quote, ctx.today(), ctx.year()))?;
    }
    report.write(ctx, &render_etf_index(ETFS, ctx.year()))?;
    Ok(report)
}

/// Sentence fragment judging the expense ratio.
pub fn expense_remark(etf: &Etf) -> &'static str {
    match etf.expense_pct() {
        Some(pct) if pct < COMPETITIVE_BELOW_PCT => "is very competitive and",
        _ => "is typical for its category and",
    }
}

const ETF_CSS: &str = r#"
        .etf-header { text-align: center; padding: 40px 0; border-bottom: 1px solid #1e3a5f; margin-bottom: 30px; }
        .symbol { font-size: 3em; font-weight: bold; background: linear-gradient(135deg, #9b59b6, #3498db); -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
        .etf-name { font-size: 1.3em; color: #8b92a8; margin: 10px 0; }
        .category { display: inline-block; background: rgba(155, 89, 182, 0.2); color: #9b59b6; padding: 5px 15px; border-radius: 20px; font-size: 0.85em; }
        .price-display { font-size: 3.5em; font-weight: bold; color: #fff; margin: 20px 0; }
        .change-display { font-size: 1.3em; padding: 10px 20px; border-radius: 8px; display: inline-block; }
        .change-display.positive { background: rgba(0, 212, 170, 0.2); }
        .change-display.negative { background: rgba(255, 71, 87, 0.2); }
        .stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; margin: 30px 0; }
        .stat-value { font-size: 1.5em; font-weight: bold; }
        .text-card { padding: 25px; }
        .text-card h2 { color: #9b59b6; font-size: 1.2em; margin-bottom: 15px; }
        .text-card p { color: #8b92a8; line-height: 1.8; margin-bottom: 15px; }
        .expense-highlight { background: linear-gradient(135deg, rgba(155, 89, 182, 0.1), rgba(52, 152, 219, 0.1)); border-left: 4px solid #9b59b6; }
"#;

/// Render `etf/<SYMBOL>.html`.
pub fn render_etf_page(
    etf: &Etf,
    quote: &QuoteState<QuoteSnapshot>,
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let Etf {
        symbol,
        name,
        desc,
        category,
        expense,
    } = *etf;
    let (price, change, volume) = match quote.live() {
        Some(q) => (q.price, q.change_pct, q.volume as f64),
        None => (PLACEHOLDER_PRICE, PLACEHOLDER_CHANGE, PLACEHOLDER_VOLUME),
    };

    let body = format!(
        r#"
        <div class="etf-header">
            <div class="symbol">{symbol}</div>
            <div class="etf-name">{name}</div>
            <div class="category">{category}</div>
            <div class="price-display">{price}</div>
            <div class="change-display {change_class}">{change}</div>
            <p style="color: #4a5568; margin-top: 15px;">{date}</p>
        </div>

        <div class="stats-grid">
            <div class="stat-box"><div class="stat-value">{expense}</div><div class="stat-label">Expense Ratio</div></div>
            <div class="stat-box"><div class="stat-value">{volume}</div><div class="stat-label">Volume</div></div>
            <div class="stat-box"><div class="stat-value">{category}</div><div class="stat-label">Category</div></div>
        </div>

        <div class="card text-card">
            <h2>📊 About {symbol}</h2>
            <p>{desc}. The {name} ({symbol}) provides investors with diversified exposure to {category_lower} assets through a single, tradable security.</p>
            <p>ETFs like {symbol} trade throughout the day like stocks, offering liquidity and flexibility compared to traditional mutual funds. Pre-market trading allows investors to react to overnight news before the regular session opens.</p>
        </div>

        <div class="card text-card expense-highlight">
            <h2>💰 Expense Ratio: {expense}</h2>
            <p>The expense ratio represents the annual cost of owning the ETF, expressed as a percentage of assets. {symbol}'s {expense} expense ratio {remark} covers management fees, administrative costs, and other operating expenses.</p>
        </div>"#,
        price = dollars(price),
        change_class = direction_class(change),
        change = signed_pct(change),
        date = long_date(today),
        volume = millions(volume),
        category_lower = category.to_lowercase(),
        remark = expense_remark(etf),
    );

    let html = Page::new(format!("{symbol} ETF | {name} Price & Holdings"), Theme::ETF, year)
        .description(format!(
            "{symbol} ETF - {desc}. Track {name} price, performance, and pre-market data."
        ))
        .keywords(format!(
            "{symbol} etf, {}, {symbol} price, etf premarket",
            name.to_lowercase()
        ))
        .canonical(&format!("/etf/{symbol}"))
        .css(ETF_CSS)
        .nav(&[
            ("/etf/SPY.html", "SPY"),
            ("/etf/QQQ.html", "QQQ"),
            ("/etf/VTI.html", "VTI"),
        ])
        .body(body)
        .footer_note(format!("{symbol} data for informational purposes only"))
        .to_html();

    RenderedPage::new(format!("etf/{symbol}.html"), html)
}

/// Render `etf.html`, a table linking every ETF page.
pub fn render_etf_index(etfs: &[Etf], year: i32) -> RenderedPage {
    let mut rows = String::new();
    for etf in etfs {
        let _ = write!(
            rows,
            r#"
                    <tr><td class="symbol"><a href="/etf/{s}.html">{s}</a></td><td class="name">{n}</td><td class="category">{c}</td><td class="expense">{e}</td></tr>"#,
            s = etf.symbol,
            n = etf.name,
            c = etf.category,
            e = etf.expense,
        );
    }

    let body = format!(
        r#"
        <header>
            <h1>📊 ETF Screener</h1>
            <p class="tagline">Top ETFs by category and expense ratio</p>
        </header>
        <div class="card">
            <table>
                <thead><tr><th>Symbol</th><th>Name</th><th>Category</th><th>Expense Ratio</th></tr></thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>"#
    );

    let html = Page::new(
        "ETF Screener | Top ETFs by Category & Expense Ratio",
        Theme::ETF.with_width(1000),
        year,
    )
    .description(
        "Compare top ETFs by category, expense ratio, and performance. SPY, QQQ, VTI, and more with pre-market data.",
    )
    .canonical("/etf")
    .body(body)
    .to_html();

    RenderedPage::new("etf.html", html)
}
