//! The `economic-calendar.html` page.

pub mod catalog;

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::BriefError;
use crate::render::format::{weekday_long, weekday_short};
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{EVENTS, EconomicEvent, Impact};

const ALERT_FALLBACK: &str = "Nonfarm Payrolls - Coming Soon";

/// Events dated today or later, in catalog order.
pub fn upcoming(events: &[EconomicEvent], today: NaiveDate) -> Vec<&EconomicEvent> {
    events
        .iter()
        .filter(|e| e.day().is_some_and(|d| d >= today))
        .collect()
}

pub fn high_impact<'a>(events: &[&'a EconomicEvent]) -> Vec<&'a EconomicEvent> {
    events
        .iter()
        .copied()
        .filter(|e| e.impact == Impact::High)
        .collect()
}

pub fn fed_event_count(events: &[&EconomicEvent]) -> usize {
    events.iter().filter(|e| e.is_fed()).count()
}

/// Alert line for the next high-impact event.
pub fn next_alert(high: &[&EconomicEvent]) -> String {
    high.first()
        .and_then(|e| e.day().map(|d| format!("{} - {}", e.event, weekday_long(d))))
        .unwrap_or_else(|| ALERT_FALLBACK.to_string())
}

/// Write the economic calendar for `ctx.today()`.
///
/// # Errors
/// Fails only when the page cannot be written.
pub fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Economic);
    report.write(ctx, &render_economic_calendar(EVENTS, ctx.today(), ctx.year()))?;
    Ok(report)
}

const ECONOMIC_CSS: &str = r#"
        .alert-box { background: linear-gradient(135deg, rgba(231, 76, 60, 0.1), rgba(243, 156, 18, 0.1)); border: 1px solid #e74c3c; border-radius: 12px; padding: 20px; margin: 30px 0; text-align: center; }
        .alert-box h3 { color: #e74c3c; margin-bottom: 10px; }
        .alert-box p { color: #8b92a8; }
        td.time { color: #8b92a8; font-family: monospace; }
        td.event { font-weight: bold; color: #fff; }
        .impact-badge { padding: 4px 12px; border-radius: 4px; font-size: 0.75em; font-weight: bold; }
        .impact-badge.HIGH { background: rgba(231, 76, 60, 0.2); color: #e74c3c; }
        .impact-badge.MEDIUM { background: rgba(243, 156, 18, 0.2); color: #f39c12; }
        .impact-badge.LOW { background: rgba(46, 204, 113, 0.2); color: #2ecc71; }
        td.forecast { color: #3498db; }
        td.previous { color: #8b92a8; }
        .fed-section { background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 25px; margin-bottom: 30px; }
        .fed-section h3 { color: #e74c3c; margin-bottom: 15px; }
        .fed-section p { color: #8b92a8; line-height: 1.8; margin-bottom: 10px; }
"#;

/// Render `economic-calendar.html` as of `today`.
pub fn render_economic_calendar(
    events: &[EconomicEvent],
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let upcoming = upcoming(events, today);
    let high = high_impact(&upcoming);

    let mut rows = String::new();
    for e in &upcoming {
        let date = e.day().map(weekday_short).unwrap_or_default();
        let _ = write!(
            rows,
            r#"
                    <tr><td class="date">{date}</td><td class="time">{time}</td><td class="event">{event}</td><td class="impact"><span class="impact-badge {label}">{label}</span></td><td class="forecast">{forecast}</td><td class="previous">{previous}</td></tr>"#,
            time = e.time,
            event = e.event,
            label = e.impact.label(),
            forecast = e.forecast,
            previous = e.previous,
        );
    }

    let next_fomc = upcoming
        .iter()
        .find(|e| e.event.contains("FOMC") && e.event.contains("Decision"))
        .and_then(|e| e.day())
        .map(|d| {
            format!(
                r#"
            <p style="margin-top: 15px;"><strong>Next FOMC Decision:</strong> {}. Any change in forward guidance can cause significant volatility.</p>"#,
                weekday_long(d)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"
        <header>
            <h1>📊 Economic Calendar</h1>
            <p class="tagline">Fed meetings, jobs reports & market-moving events</p>
        </header>

        <div class="alert-box">
            <h3>⚠️ Next High-Impact Event</h3>
            <p>{alert}</p>
        </div>

        <div class="stats">
            <div class="stat-box"><div class="stat-number">{count}</div><div class="stat-label">Upcoming Events</div></div>
            <div class="stat-box"><div class="stat-number">{high_count}</div><div class="stat-label">High Impact</div></div>
            <div class="stat-box"><div class="stat-number">{fed}</div><div class="stat-label">Fed Events</div></div>
        </div>

        <div class="card">
            <div class="card-header"><h2>📅 Upcoming Economic Events</h2></div>
            <table>
                <thead><tr><th>Date</th><th>Time</th><th>Event</th><th>Impact</th><th>Forecast</th><th>Previous</th></tr></thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>

        <div class="fed-section">
            <h3>🏛️ About Fed Meetings</h3>
            <p>The Federal Open Market Committee (FOMC) meets 8 times per year to set interest rates. These meetings are the most market-moving events on the economic calendar.</p>{next_fomc}
        </div>

        <div class="fed-section">
            <h3>📈 Jobs Report Importance</h3>
            <p>The monthly Nonfarm Payrolls report, released on the first Friday of each month, is the most closely watched economic indicator. Strong job growth can lead to higher interest rates, while weak data may prompt rate cuts.</p>
        </div>

        <div class="fed-section">
            <h3>💹 CPI & Inflation Data</h3>
            <p>The Consumer Price Index (CPI) measures inflation. The Fed targets 2% annual inflation. Higher readings pressure the Fed to raise rates, while lower readings may allow for cuts.</p>
        </div>"#,
        alert = next_alert(&high),
        count = upcoming.len(),
        high_count = high.len(),
        fed = fed_event_count(&upcoming),
    );

    let html = Page::new(
        format!("Economic Calendar {year} | Fed Meetings, Jobs Report & CPI Data"),
        Theme::ECONOMIC,
        year,
    )
    .description(format!(
        "Economic calendar for {year}. Track Fed meetings, jobs reports, CPI inflation data, and major economic events affecting the stock market."
    ))
    .keywords("economic calendar, fed meeting schedule, jobs report, CPI data, inflation report")
    .canonical("/economic-calendar")
    .css(ECONOMIC_CSS)
    .body(body)
    .footer_note("Economic data for informational purposes only")
    .to_html();

    RenderedPage::new("economic-calendar.html", html)
}
