use std::fmt::Write as _;

use crate::render::{Page, Theme};
use crate::site::RenderedPage;
use crate::stocks::catalog::Stock;

const INDEX_CSS: &str = r#"
        .stock-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; margin: 30px 0; }
        .stock-link { background: #111827; border: 1px solid #1e3a5f; border-radius: 8px; padding: 14px 18px; text-decoration: none; display: block; }
        .stock-link:hover { border-color: #00d4aa; }
        .stock-link .symbol { color: #00d4aa; font-weight: bold; font-size: 1.1em; }
        .stock-link .name { color: #8b92a8; font-size: 0.85em; margin-top: 4px; }
"#;

/// Render `stock.html`, linking every stock page in catalog order.
pub fn render_stock_index(stocks: &[Stock], year: i32) -> RenderedPage {
    let mut links = String::with_capacity(stocks.len() * 160);
    for s in stocks {
        let _ = write!(
            links,
            r#"
            <a class="stock-link" href="/stock/{sym}.html"><div class="symbol">{sym}</div><div class="name">{name}</div></a>"#,
            sym = s.symbol,
            name = s.name,
        );
    }

    let body = format!(
        r#"
        <header>
            <h1>📈 Pre-Market Stocks</h1>
            <p class="tagline">{count} stocks tracked before the opening bell</p>
        </header>
        <div class="stock-grid">{links}
        </div>"#,
        count = stocks.len(),
    );

    let html = Page::new(
        "Pre-Market Stocks | Stock Prices Before the Open",
        Theme::STOCK.with_width(1100),
        year,
    )
    .description(
        "Pre-market stock pages for the most active US stocks. Prices, changes and volume before the 9:30 AM ET open.",
    )
    .keywords("premarket stocks, pre market movers, stock prices before open")
    .canonical("/stock")
    .css(INDEX_CSS)
    .nav(&[("/screener.html", "Screener"), ("/etf.html", "ETFs")])
    .body(body)
    .footer_note("Data for informational purposes only")
    .to_html();

    RenderedPage::new("stock.html", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::STOCKS;

    #[test]
    fn index_links_every_stock_once() {
        let page = render_stock_index(STOCKS, 2025);
        assert_eq!(page.path, "stock.html");
        for s in STOCKS {
            let href = format!(r#"href="/stock/{}.html""#, s.symbol);
            assert_eq!(page.html.matches(&href).count(), 1, "{}", s.symbol);
        }
        assert!(page.html.contains(&format!("{} stocks tracked", STOCKS.len())));
    }
}
