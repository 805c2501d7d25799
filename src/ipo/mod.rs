//! The `ipo-calendar.html` page.

pub mod catalog;

use std::fmt::Write as _;

use crate::core::BriefError;
use crate::render::format::weekday_short;
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{Exchange, RECENT, RecentIpo, UPCOMING, UpcomingIpo};

/// Headline counts shown above the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpoStats {
    pub upcoming: usize,
    pub recent: usize,
    pub nasdaq: usize,
    pub nyse: usize,
}

impl IpoStats {
    pub fn compute(upcoming: &[UpcomingIpo], recent: &[RecentIpo]) -> Self {
        let on = |x: Exchange| upcoming.iter().filter(|i| i.exchange == x).count();
        Self {
            upcoming: upcoming.len(),
            recent: recent.len(),
            nasdaq: on(Exchange::Nasdaq),
            nyse: on(Exchange::Nyse),
        }
    }
}

pub fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Ipo);
    report.write(ctx, &render_ipo_calendar(UPCOMING, RECENT, ctx.year()))?;
    Ok(report)
}

const IPO_CSS: &str = r#"
        td.company { font-weight: bold; }
        td.company .company-symbol { color: #8b92a8; font-size: 0.85em; font-weight: normal; }
        td.exchange { text-align: center; }
        td.price { font-family: monospace; }
        td.underwriters { color: #8b92a8; font-size: 0.85em; }
        td.performance { font-weight: bold; }
        .tag { padding: 4px 12px; border-radius: 4px; font-size: 0.75em; font-weight: bold; }
        .tag.exchange-nasdaq { background: rgba(0, 212, 170, 0.2); color: #00d4aa; }
        .tag.exchange-nyse { background: rgba(52, 152, 219, 0.2); color: #3498db; }
"#;

const INFO_CARDS: &str = r#"
        <div class="info-grid">
            <div class="info-card">
                <h3>📖 What is an IPO?</h3>
                <p>An Initial Public Offering (IPO) is when a private company first sells shares to the public. This process transforms a private company into a publicly traded one.</p>
                <p>IPOs allow companies to raise capital from public investors while giving early investors and employees a way to monetize their equity.</p>
            </div>
            <div class="info-card">
                <h3>💡 IPO Investment Tips</h3>
                <p>• Research the company's financials and growth prospects</p>
                <p>• Understand the lock-up period (typically 180 days)</p>
                <p>• Be aware of IPO volatility - first day swings can be extreme</p>
                <p>• Consider waiting for the initial hype to settle</p>
            </div>
        </div>"#;

/// Render `ipo-calendar.html`.
pub fn render_ipo_calendar(
    upcoming: &[UpcomingIpo],
    recent: &[RecentIpo],
    year: i32,
) -> RenderedPage {
    let stats = IpoStats::compute(upcoming, recent);

    let mut upcoming_rows = String::new();
    for ipo in upcoming {
        let _ = write!(
            upcoming_rows,
            r#"
                    <tr><td class="date">{date}</td><td class="company"><div class="company-name">{company}</div><div class="company-symbol">{symbol}</div></td><td class="exchange"><span class="tag {tag}">{exchange}</span></td><td class="sector">{sector}</td><td class="price">{range}</td><td class="shares">{shares}</td><td class="market-cap">{cap}</td><td class="underwriters">{uw}</td></tr>"#,
            date = ipo.day().map(weekday_short).unwrap_or_default(),
            company = ipo.company,
            symbol = ipo.symbol,
            tag = ipo.exchange.tag_class(),
            exchange = ipo.exchange.as_str(),
            sector = ipo.sector,
            range = ipo.price_range,
            shares = ipo.shares,
            cap = ipo.market_cap,
            uw = ipo.underwriters.join(", "),
        );
    }

    let mut recent_rows = String::new();
    for ipo in recent {
        let _ = write!(
            recent_rows,
            r#"
                    <tr><td class="date">{date}</td><td class="company"><div class="company-name">{company}</div><div class="company-symbol">{symbol}</div></td><td class="price">{price}</td><td class="current">{current}</td><td class="performance {class}">{change}</td></tr>"#,
            date = ipo.day().map(weekday_short).unwrap_or_default(),
            company = ipo.company,
            symbol = ipo.symbol,
            price = ipo.price,
            current = ipo.current,
            class = if ipo.is_up() { "positive" } else { "negative" },
            change = ipo.change,
        );
    }

    let body = format!(
        r#"
        <header>
            <h1>🚀 IPO Calendar {year}</h1>
            <p class="tagline">Upcoming IPOs & new stock listings</p>
            <p class="sample-note">Listings below are sample data for illustration.</p>
        </header>

        <div class="stats">
            <div class="stat-box"><div class="stat-number">{up}</div><div class="stat-label">Upcoming IPOs</div></div>
            <div class="stat-box"><div class="stat-number">{rec}</div><div class="stat-label">Recent Listings</div></div>
            <div class="stat-box"><div class="stat-number">{nasdaq}</div><div class="stat-label">NASDAQ IPOs</div></div>
            <div class="stat-box"><div class="stat-number">{nyse}</div><div class="stat-label">NYSE IPOs</div></div>
        </div>

        <div class="card">
            <div class="card-header"><h2>📅 Upcoming IPOs</h2></div>
            <table>
                <thead><tr><th>Date</th><th>Company</th><th>Exchange</th><th>Sector</th><th>Price Range</th><th>Shares</th><th>Market Cap</th><th>Underwriters</th></tr></thead>
                <tbody>{upcoming_rows}
                </tbody>
            </table>
        </div>

        <div class="card">
            <div class="card-header"><h2>📈 Recent IPO Performance</h2></div>
            <table>
                <thead><tr><th>Date</th><th>Company</th><th>IPO Price</th><th>Current</th><th>Performance</th></tr></thead>
                <tbody>{recent_rows}
                </tbody>
            </table>
        </div>
{INFO_CARDS}"#,
        up = stats.upcoming,
        rec = stats.recent,
        nasdaq = stats.nasdaq,
        nyse = stats.nyse,
    );

    let html = Page::new(
        format!("IPO Calendar {year} | Upcoming IPOs & New Stock Listings"),
        Theme::IPO,
        year,
    )
    .description(format!(
        "IPO calendar for {year}. Track upcoming IPOs, new stock listings, and recent IPO performance. Stay informed on the latest public offerings."
    ))
    .keywords(
        "IPO calendar, upcoming IPOs, new stock listings, IPO schedule, initial public offering",
    )
    .canonical("/ipo-calendar")
    .css(IPO_CSS)
    .nav(&[
        ("/earnings-calendar.html", "Earnings"),
        ("/screener.html", "Screener"),
        ("/ipo-calendar.html", "IPO Calendar"),
    ])
    .body(body)
    .footer_note("IPO data for informational purposes")
    .disclaimer("Not investment advice. IPO dates subject to change. Listings are sample data.")
    .to_html();

    RenderedPage::new("ipo-calendar.html", html)
}
