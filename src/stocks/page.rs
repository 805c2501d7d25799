use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::{QuoteSnapshot, QuoteState};
use crate::render::format::{arrow, direction_class, dollars, long_date, millions, signed_pct};
use crate::render::{Page, Theme};
use crate::site::RenderedPage;
use crate::stocks::catalog::{RELATED, Stock};

const PLACEHOLDER_PRICE: f64 = 150.0;
const PLACEHOLDER_CHANGE: f64 = 2.5;
const PLACEHOLDER_WEEK: f64 = 5.2;
const PLACEHOLDER_MONTH: f64 = 8.1;
const PLACEHOLDER_VOLUME: f64 = 25_000_000.0;

/// Figures shown on a stock page, live or placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockFigures {
    pub price: f64,
    pub change_pct: f64,
    pub week_pct: f64,
    pub month_pct: f64,
    pub volume: f64,
    pub high_52w: f64,
}

impl StockFigures {
    pub fn resolve(quote: &QuoteState<QuoteSnapshot>) -> Self {
        match quote.live() {
            Some(q) => Self {
                price: q.price,
                change_pct: q.change_pct,
                week_pct: q.week_change_pct,
                month_pct: q.month_change_pct,
                volume: q.volume as f64,
                high_52w: q.high_52w.unwrap_or(q.price * 1.2),
            },
            None => Self {
                price: PLACEHOLDER_PRICE,
                change_pct: PLACEHOLDER_CHANGE,
                week_pct: PLACEHOLDER_WEEK,
                month_pct: PLACEHOLDER_MONTH,
                volume: PLACEHOLDER_VOLUME,
                high_52w: PLACEHOLDER_PRICE * 1.2,
            },
        }
    }
}

const STOCK_CSS: &str = r#"
        .stock-header { text-align: center; padding: 40px 0; border-bottom: 1px solid #1e3a5f; margin-bottom: 30px; }
        .symbol { font-size: 3em; font-weight: bold; background: linear-gradient(135deg, #00d4aa, #00a8e8); -webkit-background-clip: text; -webkit-text-fill-color: transparent; margin-bottom: 10px; }
        .company-name { font-size: 1.3em; color: #8b92a8; margin-bottom: 20px; }
        .price-display { font-size: 4em; font-weight: bold; color: #fff; margin: 20px 0; }
        .change-display { font-size: 1.5em; padding: 10px 20px; border-radius: 8px; display: inline-block; }
        .change-display.positive { background: rgba(0, 212, 170, 0.2); }
        .change-display.negative { background: rgba(255, 71, 87, 0.2); }
        .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 15px; margin: 30px 0; }
        .stat-box.plain { background: #111827; padding: 20px; }
        .stat-value { font-size: 1.5em; font-weight: bold; }
        .text-card { padding: 25px; }
        .text-card h2 { color: #00d4aa; font-size: 1.2em; margin-bottom: 15px; }
        .text-card p { color: #8b92a8; line-height: 1.8; }
        .about-section { background: linear-gradient(135deg, rgba(0, 212, 170, 0.05), rgba(0, 168, 232, 0.05)); border-left: 4px solid #00d4aa; }
        .related-stocks { display: flex; gap: 10px; flex-wrap: wrap; margin-top: 15px; }
        .related-stock { background: #1a1f2e; padding: 10px 20px; border-radius: 8px; text-decoration: none; color: #8b92a8; border: 1px solid #2d3748; }
        .related-stock:hover { border-color: #00d4aa; color: #00d4aa; }
"#;

/// Render `stock/<SYMBOL>.html`.
pub fn render_stock_page(
    stock: &Stock,
    quote: &QuoteState<QuoteSnapshot>,
    today: NaiveDate,
    year: i32,
) -> RenderedPage {
    let Stock { symbol, name, desc } = *stock;
    let f = StockFigures::resolve(quote);

    let mut body = String::with_capacity(4096);
    let _ = write!(
        body,
        r#"
        <div class="stock-header">
            <div class="symbol">{symbol}</div>
            <div class="company-name">{name}</div>
            <div class="price-display">{price}</div>
            <div class="change-display {change_class}">{arrow} {abs_change:.2}%</div>
            <p style="color: #4a5568; margin-top: 15px;">{date}</p>
        </div>

        <div class="ad-container">AdSense Display Ad<br><small>{symbol} Stock - Finance Keywords</small></div>

        <div class="stats-grid">
            <div class="stat-box plain"><div class="stat-value {week_class}">{week}</div><div class="stat-label">1 Week</div></div>
            <div class="stat-box plain"><div class="stat-value {month_class}">{month}</div><div class="stat-label">1 Month</div></div>
            <div class="stat-box plain"><div class="stat-value">{volume}</div><div class="stat-label">Volume</div></div>
            <div class="stat-box plain"><div class="stat-value">{high}</div><div class="stat-label">52W High</div></div>
        </div>

        <div class="card text-card about-section">
            <h2>📊 About {name}</h2>
            <p>{desc}. {name} ({symbol}) is actively traded in pre-market sessions, offering investors early insights into market sentiment before the 9:30 AM ET opening bell.</p>
            <p style="margin-top: 15px;">Pre-market trading for {symbol} typically begins at 4:00 AM ET and can indicate how the stock will perform during regular market hours based on overnight news, earnings reports, and global market developments.</p>
        </div>

        <div class="ad-container">AdSense In-Article Ad</div>

        <div class="card text-card">
            <h2>📈 {symbol} Pre-Market Analysis</h2>
            <p>Pre-market trading activity in {symbol} reflects investor sentiment based on recent developments. Traders monitor {name}'s pre-market price action to gauge potential opening direction and volatility.</p>
            <p style="margin-top: 15px;">Key factors affecting {symbol} pre-market include earnings announcements, analyst upgrades/downgrades, sector trends, and broader market futures.</p>
        </div>

        <div class="card text-card">
            <h2>🔗 Related Stocks</h2>
            <div class="related-stocks">"#,
        price = dollars(f.price),
        change_class = direction_class(f.change_pct),
        arrow = arrow(f.change_pct),
        abs_change = f.change_pct.abs(),
        date = long_date(today),
        week_class = direction_class(f.week_pct),
        week = signed_pct(f.week_pct),
        month_class = direction_class(f.month_pct),
        month = signed_pct(f.month_pct),
        volume = millions(f.volume),
        high = dollars(f.high_52w),
    );
    for rel in RELATED {
        let _ = write!(
            body,
            r#"<a href="/stock/{rel}.html" class="related-stock">{rel}</a>"#
        );
    }
    body.push_str("</div>\n        </div>");

    let html = Page::new(
        format!("{symbol} Pre-Market | {name} Stock Price Today"),
        Theme::STOCK,
        year,
    )
    .description(format!(
        "{symbol} pre-market trading data. {name} stock price, earnings date, and analysis before market open."
    ))
    .keywords(format!(
        "{symbol} premarket, {symbol} stock price, {name} earnings, {symbol} today"
    ))
    .canonical(&format!("/stock/{symbol}"))
    .css(STOCK_CSS)
    .nav(&[
        ("/screener.html", "Screener"),
        ("/earnings-calendar.html", "Earnings"),
    ])
    .body(body)
    .footer_note(format!("{symbol} data for informational purposes only"))
    .disclaimer("Not investment advice. Real-time data delayed.")
    .to_html();

    RenderedPage::new(format!("stock/{symbol}.html"), html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(price: f64, change_pct: f64) -> QuoteSnapshot {
        QuoteSnapshot {
            price,
            previous_close: price,
            change: 0.0,
            change_pct,
            week_change_pct: -1.0,
            month_change_pct: 3.0,
            volume: 12_300_000,
            high_52w: None,
            market_cap: None,
        }
    }

    #[test]
    fn placeholders_without_quote() {
        let f = StockFigures::resolve(&QuoteState::Unavailable);
        assert_eq!(f.price, 150.0);
        assert_eq!(f.change_pct, 2.5);
        assert!((f.high_52w - 180.0).abs() < 1e-9);
        assert_eq!(f.volume, 25_000_000.0);
    }

    #[test]
    fn live_quote_keeps_zero_change() {
        let f = StockFigures::resolve(&QuoteState::Live(snapshot(10.0, 0.0)));
        assert_eq!(f.change_pct, 0.0);
        assert!((f.high_52w - 12.0).abs() < 1e-9);
    }

    #[test]
    fn negative_change_renders_down_badge() {
        let stock = Stock {
            symbol: "TEST",
            name: "Test Co",
            desc: "Testing",
        };
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let page = render_stock_page(
            &stock,
            &QuoteState::Live(snapshot(42.5, -3.456)),
            today,
            2025,
        );
        assert_eq!(page.path, "stock/TEST.html");
        assert!(page.html.contains("change-display negative\">▼ 3.46%"));
        assert!(page.html.contains("$42.50"));
        assert!(page.html.contains("12.3M"));
        assert!(page.html.contains("Monday, February 3, 2025"));
    }
}
