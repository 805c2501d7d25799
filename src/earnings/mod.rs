//! The `earnings-calendar.html` page.
//!
//! Report dates and estimates are sample data: dates are spread over the next thirty days
//! by catalog position and the figures are drawn from a generator seeded by the generation
//! date and symbol, so one day's page is reproducible.

pub mod catalog;

use std::fmt::Write as _;

use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::BriefError;
use crate::render::format::{fixed, weekday_short};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{COMPANIES, EarningsCompany, Sector};

const SCHEDULE_SPAN_DAYS: usize = 30;
const THIS_WEEK_DAYS: u64 = 7;

/// One calendar row: a company with its sample report date and estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsEntry {
    pub company: EarningsCompany,
    pub date: NaiveDate,
    /// Estimated EPS, two decimals, in `[0.5, 5.5)`.
    pub eps: f64,
    /// Expected EPS growth in percent, one decimal, in `[-10, 30)`.
    pub eps_growth: f64,
    /// Last surprise in percent, one decimal, in `[-10, 10)`.
    pub surprise: f64,
}

fn round_to(v: f64, dp: i32) -> f64 {
    let f = 10f64.powi(dp);
    (v * f).round() / f
}

fn seed_for(today: NaiveDate, symbol: &str) -> u64 {
    // FNV-1a over the symbol, mixed with the day number
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in symbol.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h ^ (today.num_days_from_ce() as u64).rotate_left(32)
}

/// Build the calendar for `today`, sorted by report date (ties keep catalog order).
pub fn schedule(companies: &[EarningsCompany], today: NaiveDate) -> Vec<EarningsEntry> {
    let mut entries: Vec<EarningsEntry> = companies
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let offset = (i * 2) % SCHEDULE_SPAN_DAYS;
            let date = today
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(today);
            let mut rng = StdRng::seed_from_u64(seed_for(today, c.symbol));
            EarningsEntry {
                company: *c,
                date,
                eps: round_to(rng.gen_range(0.5..5.5), 2),
                eps_growth: round_to(rng.gen_range(-10.0..30.0), 1),
                surprise: round_to(rng.gen_range(-10.0..10.0), 1),
            }
        })
        .collect();
    entries.sort_by_key(|e| e.date);
    entries
}

/// Entries reporting within a week of `today`.
pub fn this_week(entries: &[EarningsEntry], today: NaiveDate) -> Vec<EarningsEntry> {
    let horizon = today
        .checked_add_days(Days::new(THIS_WEEK_DAYS))
        .unwrap_or(today);
    entries.iter().copied().filter(|e| e.date <= horizon).collect()
}

pub fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Earnings);
    report.write(ctx, &render_earnings_calendar(COMPANIES, ctx.today(), ctx.year()))?;
    Ok(report)
}

const EARNINGS_CSS: &str = r#"
        td.company { color: #e8eaed; }
        td.sector { font-size: 0.85em; }
        td.eps { font-family: monospace; }
        td.growth { font-weight: bold; }
        td.preview { text-align: right; }
        .preview-link { color: #00d4aa; text-decoration: none; }
        .card-badge { float: right; color: #ff4757; font-size: 0.8em; }
        .tag { padding: 4px 10px; border-radius: 4px; font-weight: bold; }
        .tag.technology { background: rgba(0, 168, 232, 0.2); color: #00a8e8; }
        .tag.finance { background: rgba(0, 212, 170, 0.2); color: #00d4aa; }
        .tag.healthcare { background: rgba(255, 71, 87, 0.2); color: #ff4757; }
        .tag.retail { background: rgba(247, 147, 26, 0.2); color: #f7931a; }
        .tag.consumer { background: rgba(155, 89, 182, 0.2); color: #9b59b6; }
        .tag.energy { background: rgba(231, 76, 60, 0.2); color: #e74c3c; }
        .info-section { background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 25px; }
        .info-section h3 { color: #00d4aa; margin: 15px 0 10px; }
        .info-section p { color: #8b92a8; line-height: 1.8; }
"#;

const TABLE_HEAD: &str = "<tr><th>Date</th><th>Symbol</th><th>Company</th><th>Sector</th><th>Est. EPS</th><th>Growth</th><th>Surprise</th><th></th></tr>";

fn rows(entries: &[EarningsEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let growth_class = if e.eps_growth >= 0.0 { "positive" } else { "negative" };
        let _ = write!(
            out,
            r#"
                    <tr><td class="date">{date}</td><td class="symbol">{sym}</td><td class="company">{name}</td><td class="sector"><span class="tag {tag}">{sector}</span></td><td class="eps">${eps}</td><td class="growth {growth_class}">{growth}%</td><td class="surprise">{surprise}%</td><td class="preview"><a href="https://finance.yahoo.com/quote/{sym}" target="_blank" class="preview-link">View →</a></td></tr>"#,
            date = weekday_short(e.date),
            sym = e.company.symbol,
            name = e.company.name,
            tag = e.company.sector.tag_class(),
            sector = e.company.sector.as_str(),
            eps = fixed(e.eps, 2),
            growth = fixed(e.eps_growth, 1),
            surprise = fixed(e.surprise, 1),
        );
    }
    out
}

/// Render `earnings-calendar.html` as of `today`.
pub fn render_earnings_calendar(
    companies: &[EarningsCompany],
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let all = schedule(companies, today);
    let week = this_week(&all, today);
    let growing = all.iter().filter(|e| e.eps_growth > 0.0).count();

    let body = format!(
        r#"
        <header>
            <h1>📅 Stock Earnings Calendar</h1>
            <p class="tagline">Upcoming quarterly earnings reports and estimates</p>
            <p class="sample-note">Report dates and estimates are sample data for {date}.</p>
        </header>

        <div class="stats">
            <div class="stat-box"><div class="stat-number">{week_count}</div><div class="stat-label">This Week</div></div>
            <div class="stat-box"><div class="stat-number">{month_count}</div><div class="stat-label">Next 30 Days</div></div>
            <div class="stat-box"><div class="stat-number">{growing}</div><div class="stat-label">Expected Growth</div></div>
        </div>

        <div class="card">
            <div class="card-header"><h2>🔥 This Week's Earnings <span class="card-badge">High Volatility Expected</span></h2></div>
            <table>
                <thead>{TABLE_HEAD}</thead>
                <tbody>{week_rows}
                </tbody>
            </table>
        </div>

        <div class="card">
            <div class="card-header"><h2>📈 Next 30 Days</h2></div>
            <table>
                <thead>{TABLE_HEAD}</thead>
                <tbody>{all_rows}
                </tbody>
            </table>
        </div>

        <div class="info-section">
            <h3>📊 What is an Earnings Calendar?</h3>
            <p>An earnings calendar tracks when publicly traded companies release their quarterly financial results. These reports include revenue, earnings per share (EPS), and forward guidance that can significantly impact stock prices.</p>
            <h3>⏰ When Do Companies Report?</h3>
            <p>Most companies report earnings before the market opens (7:00-9:00 AM ET) or after the market closes (4:00-6:00 PM ET). Pre-market reports often see immediate price action at the 9:30 AM opening bell.</p>
            <h3>📈 Why Earnings Matter</h3>
            <p>Earnings reports are among the biggest catalysts for stock price movement. The "earnings surprise" - the difference between estimated and actual EPS - is particularly important.</p>
        </div>"#,
        date = weekday_short(today),
        week_count = week.len(),
        month_count = all.len(),
        week_rows = rows(&week),
        all_rows = rows(&all),
    );

    let html = Page::new(
        format!("Stock Earnings Calendar {} | This Week & Upcoming Reports", today.year()),
        Theme::EARNINGS,
        year,
    )
    .description(
        "Stock earnings calendar for this week. Track upcoming earnings reports for AAPL, TSLA, NVDA, and major companies.",
    )
    .keywords(
        "earnings calendar, stock earnings this week, earnings report schedule, quarterly earnings",
    )
    .canonical("/earnings-calendar")
    .css(EARNINGS_CSS)
    .nav(&[("/earnings-calendar.html", "Earnings"), ("/screener.html", "Screener")])
    .body(body)
    .footer_note("Data for informational purposes only")
    .disclaimer(
        "Not investment advice. Earnings dates and estimates are sample data and subject to change.",
    )
    .to_html();

    RenderedPage::new("earnings-calendar.html", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn schedule_spreads_over_thirty_days() {
        let today = day(2025, 2, 3);
        let all = schedule(COMPANIES, today);
        assert_eq!(all.len(), COMPANIES.len());
        assert!(all.windows(2).all(|w| w[0].date <= w[1].date));
        let last = today.checked_add_days(Days::new(29)).unwrap();
        assert!(all.iter().all(|e| e.date >= today && e.date <= last));
        // indexes 15 and 30 wrap back to today alongside index 0
        let first_day: Vec<_> = all
            .iter()
            .filter(|e| e.date == today)
            .map(|e| e.company.symbol)
            .collect();
        assert_eq!(first_day, ["AAPL", "JNJ", "JD"]);
    }

    #[test]
    fn figures_stay_in_range_and_are_reproducible() {
        let today = day(2025, 2, 3);
        let a = schedule(COMPANIES, today);
        let b = schedule(COMPANIES, today);
        assert_eq!(a, b);
        for e in &a {
            assert!((0.5..=5.5).contains(&e.eps));
            assert!((-10.0..=30.0).contains(&e.eps_growth));
            assert!((-10.0..=10.0).contains(&e.surprise));
        }
    }

    #[test]
    fn this_week_is_within_seven_days() {
        let today = day(2025, 2, 3);
        let week = this_week(&schedule(COMPANIES, today), today);
        let horizon = day(2025, 2, 10);
        assert!(!week.is_empty());
        assert!(week.iter().all(|e| e.date <= horizon));
        // offsets 0, 2 and 4 occur three times, offset 6 twice
        assert_eq!(week.len(), 11);
    }
}
