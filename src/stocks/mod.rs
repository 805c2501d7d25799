//! Per-stock detail pages under `stock/` and the `stock.html` index.

pub mod catalog;
mod index;
mod page;

use tracing::info;

use crate::core::{BriefError, Range};
use crate::quote::fetch_quote;
use crate::site::{GenContext, Topic, TopicReport};

pub use catalog::{STOCKS, Stock};
pub use index::render_stock_index;
pub use page::{StockFigures, render_stock_page};

const PROGRESS_EVERY: usize = 20;

/// Fetch a one-month chart per catalog stock and write its page, then the `stock.html` index.
///
/// # Errors
/// Fails only when a page cannot be written.
pub async fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Stocks);
    for stock in STOCKS {
        let quote = fetch_quote(ctx.service(), stock.symbol, Range::M1).await;
        report.record(&quote);
        let page = render_stock_page(stock, &quote, ctx.today(), ctx.year());
        report.write(ctx, &page)?;

        if report.pages % PROGRESS_EVERY == 0 {
            info!(done = report.pages, total = STOCKS.len(), "stock pages progress");
        }
    }
    report.write(ctx, &render_stock_index(STOCKS, ctx.year()))?;
    Ok(report)
}
