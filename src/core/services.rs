use std::future::Future;
use std::pin::Pin;

use crate::core::{BriefError, ChartSnapshot, CompanyProfile, Range};

/// Boxed future returned by [`QuoteService`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BriefError>> + Send + 'a>>;

/// A source of live market data.
///
/// This decouples the page generators from HTTP so they can run against the live client,
/// an offline stand-in, or a canned test double. It is implemented by [`QuoteClient`].
///
/// [`QuoteClient`]: crate::core::QuoteClient
pub trait QuoteService: Send + Sync {
    /// Fetch the daily chart for `symbol` over `range`.
    fn fetch_chart<'a>(&'a self, symbol: &'a str, range: Range) -> ServiceFuture<'a, ChartSnapshot>;

    /// Fetch display name and industry for `symbol`.
    fn fetch_profile<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, CompanyProfile>;
}

/// A [`QuoteService`] that never touches the network. Every lookup is `Unavailable`,
/// so generators fall back to their placeholder values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineQuotes;

impl QuoteService for OfflineQuotes {
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        _range: Range,
    ) -> ServiceFuture<'a, ChartSnapshot> {
        Box::pin(async move { Err(BriefError::Unavailable(format!("offline: {symbol}"))) })
    }

    fn fetch_profile<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, CompanyProfile> {
        Box::pin(async move { Err(BriefError::Unavailable(format!("offline: {symbol}"))) })
    }
}
