//! The `dividend-calendar.html` page.

pub mod catalog;

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::BriefError;
use crate::render::format::{dollars, fixed, month_day};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{DIVIDENDS, DividendRecord};

const HIGH_YIELD_LEN: usize = 10;

/// Records whose ex-date is today or later, earliest first.
///
/// Records without a parseable ex-date are never upcoming. Ties keep catalog order.
pub fn upcoming(records: &[DividendRecord], today: NaiveDate) -> Vec<&DividendRecord> {
    let mut out: Vec<(NaiveDate, &DividendRecord)> = records
        .iter()
        .filter_map(|r| r.ex_date().map(|d| (d, r)))
        .filter(|(d, _)| *d >= today)
        .collect();
    out.sort_by_key(|(d, _)| *d);
    out.into_iter().map(|(_, r)| r).collect()
}

/// The ten highest yields, highest first.
pub fn high_yield(records: &[DividendRecord]) -> Vec<&DividendRecord> {
    let mut out: Vec<&DividendRecord> = records.iter().collect();
    out.sort_by(|a, b| b.yield_pct.total_cmp(&a.yield_pct));
    out.truncate(HIGH_YIELD_LEN);
    out
}

/// CSS class for a yield: `high` from 4%, `medium` from 2%, else `low`.
pub fn yield_class(yield_pct: f64) -> &'static str {
    if yield_pct >= 4.0 {
        "high"
    } else if yield_pct >= 2.0 {
        "medium"
    } else {
        "low"
    }
}

fn display_date(r: &DividendRecord) -> String {
    r.ex_date().map_or_else(|| "N/A".to_string(), month_day)
}

/// Write the dividend calendar for `ctx.today()`.
///
/// # Errors
/// Fails only when the page cannot be written.
pub fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Dividends);
    report.write(ctx, &render_dividend_calendar(DIVIDENDS, ctx.today(), ctx.year()))?;
    Ok(report)
}

const DIVIDEND_CSS: &str = r#"
        td.yield { font-weight: bold; }
        .yield.high { color: #2ecc71; }
        .yield.medium { color: #f1c40f; }
        .yield.low { color: #e74c3c; }
"#;

const TABLE_HEAD: &str =
    "<tr><th>Symbol</th><th>Company</th><th>Dividend</th><th>Yield</th><th>Ex-Date</th></tr>";

fn symbol_first_rows(records: &[&DividendRecord]) -> String {
    let mut rows = String::new();
    for r in records {
        let _ = write!(
            rows,
            r#"
                    <tr><td class="symbol">{sym}</td><td class="company">{name}</td><td class="dividend">{div}</td><td class="yield {class}">{yld}%</td><td class="date">{date}</td></tr>"#,
            sym = r.symbol,
            name = r.name,
            div = dollars(r.dividend),
            class = yield_class(r.yield_pct),
            yld = fixed(r.yield_pct, 2),
            date = display_date(r),
        );
    }
    rows
}

/// Render `dividend-calendar.html` as of `today`.
pub fn render_dividend_calendar(
    records: &[DividendRecord],
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let upcoming = upcoming(records, today);
    let leaders = high_yield(records);
    let top_yield = leaders
        .first()
        .map_or_else(|| "-".to_string(), |r| format!("{}%", fixed(r.yield_pct, 1)));
    let total: f64 = upcoming.iter().map(|r| r.dividend).sum();

    let mut upcoming_rows = String::new();
    for r in &upcoming {
        let _ = write!(
            upcoming_rows,
            r#"
                    <tr><td class="date">{date}</td><td class="symbol">{sym}</td><td class="company">{name}</td><td class="dividend">{div}</td><td class="yield {class}">{yld}%</td></tr>"#,
            date = display_date(r),
            sym = r.symbol,
            name = r.name,
            div = dollars(r.dividend),
            class = yield_class(r.yield_pct),
            yld = fixed(r.yield_pct, 2),
        );
    }
    let all: Vec<&DividendRecord> = records.iter().collect();

    let body = format!(
        r#"
        <header>
            <h1>💰 Dividend Calendar</h1>
            <p class="tagline">Upcoming dividend payments & yield leaders</p>
        </header>

        <div class="stats">
            <div class="stat-box"><div class="stat-number">{count}</div><div class="stat-label">Upcoming Payments</div></div>
            <div class="stat-box"><div class="stat-number">{top_yield}</div><div class="stat-label">Highest Yield</div></div>
            <div class="stat-box"><div class="stat-number">{total}</div><div class="stat-label">Total Dividends</div></div>
        </div>

        <div class="card">
            <div class="card-header"><h2>📅 Upcoming Dividend Payments</h2></div>
            <table>
                <thead><tr><th>Ex-Date</th><th>Symbol</th><th>Company</th><th>Dividend</th><th>Yield</th></tr></thead>
                <tbody>{upcoming_rows}
                </tbody>
            </table>
        </div>

        <div class="card">
            <div class="card-header"><h2>🏆 Top Dividend Yields</h2></div>
            <table>
                <thead>{TABLE_HEAD}</thead>
                <tbody>{leader_rows}
                </tbody>
            </table>
        </div>

        <div class="card">
            <div class="card-header"><h2>📋 All Tracked Dividend Stocks</h2></div>
            <table>
                <thead>{TABLE_HEAD}</thead>
                <tbody>{all_rows}
                </tbody>
            </table>
        </div>"#,
        count = upcoming.len(),
        total = dollars(total),
        leader_rows = symbol_first_rows(&leaders),
        all_rows = symbol_first_rows(&all),
    );

    let html = Page::new(
        format!("Dividend Calendar {year} | Upcoming Dividend Payments"),
        Theme::DIVIDEND,
        year,
    )
    .description(format!(
        "Dividend calendar for {year}. Track upcoming dividend payments from AAPL, MSFT, JNJ, and top dividend stocks."
    ))
    .keywords("dividend calendar, dividend stocks, upcoming dividends, dividend yield")
    .canonical("/dividend-calendar")
    .css(DIVIDEND_CSS)
    .body(body)
    .footer_note("Dividend data for informational purposes only")
    .to_html();

    RenderedPage::new("dividend-calendar.html", html)
}
