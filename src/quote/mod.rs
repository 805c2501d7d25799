//! Live quote lookups and the derivations the pages display.
//!
//! Everything here is fail-soft: a lookup that goes wrong for any reason comes back as
//! [`QuoteState::Unavailable`] and the caller renders its placeholder instead.

mod fetch;
mod wire;

use tracing::warn;

use crate::core::{
    ChartSnapshot, CompanyProfile, QuoteClient, QuoteService, QuoteSnapshot, QuoteState, Range,
    ServiceFuture,
};

impl QuoteService for QuoteClient {
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        range: Range,
    ) -> ServiceFuture<'a, ChartSnapshot> {
        Box::pin(fetch::fetch_chart(self, symbol, range))
    }

    fn fetch_profile<'a>(&'a self, symbol: &'a str) -> ServiceFuture<'a, CompanyProfile> {
        Box::pin(fetch::fetch_profile(self, symbol))
    }
}

/// Percent change from `from` to `to`; zero when `from` is not a usable base.
pub fn pct_change(from: f64, to: f64) -> f64 {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return 0.0;
    }
    (to - from) / from * 100.0
}

/// Derive the displayed quote from a chart series.
///
/// Returns `None` when the series has no closes.
pub fn derive_quote(chart: &ChartSnapshot) -> Option<QuoteSnapshot> {
    let price = *chart.closes.last()?;
    let previous = chart
        .previous_close
        .or(chart.chart_previous_close)
        .unwrap_or(price);
    // five sessions back, or the oldest close on a short series
    let week_ago = chart.closes[chart.closes.len().saturating_sub(6)];
    let month_ago = chart.closes[0];

    Some(QuoteSnapshot {
        price,
        previous_close: previous,
        change: price - previous,
        change_pct: pct_change(previous, price),
        week_change_pct: pct_change(week_ago, price),
        month_change_pct: pct_change(month_ago, price),
        volume: chart.regular_market_volume.unwrap_or(0),
        high_52w: chart.fifty_two_week_high,
        market_cap: chart.market_cap,
    })
}

/// Fetch and derive a quote for `symbol`. Never fails: errors are logged and
/// reported as [`QuoteState::Unavailable`].
pub async fn fetch_quote(
    service: &dyn QuoteService,
    symbol: &str,
    range: Range,
) -> QuoteState<QuoteSnapshot> {
    match service.fetch_chart(symbol, range).await {
        Ok(chart) => derive_quote(&chart).into(),
        Err(e) => {
            warn!(symbol, error = %e, "quote unavailable");
            QuoteState::Unavailable
        }
    }
}

/// Fetch the company profile for `symbol`, falling back to an empty profile.
pub async fn fetch_profile_or_default(
    service: &dyn QuoteService,
    symbol: &str,
) -> CompanyProfile {
    match service.fetch_profile(symbol).await {
        Ok(p) => p,
        Err(e) => {
            warn!(symbol, error = %e, "profile unavailable");
            CompanyProfile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(closes: &[f64]) -> ChartSnapshot {
        ChartSnapshot {
            symbol: "TEST".into(),
            closes: closes.to_vec(),
            ..ChartSnapshot::default()
        }
    }

    #[test]
    fn previous_close_falls_back_to_chart_previous_then_price() {
        let mut c = chart(&[10.0, 11.0]);
        assert_eq!(derive_quote(&c).unwrap().change_pct, 0.0);

        c.chart_previous_close = Some(10.0);
        let q = derive_quote(&c).unwrap();
        assert!((q.change_pct - 10.0).abs() < 1e-9);

        c.previous_close = Some(22.0);
        let q = derive_quote(&c).unwrap();
        assert!((q.change_pct + 50.0).abs() < 1e-9);
        assert!((q.change + 11.0).abs() < 1e-9);
    }

    #[test]
    fn week_and_month_anchor_on_series_positions() {
        let c = chart(&[50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0]);
        let q = derive_quote(&c).unwrap();
        // week anchor: closes[8 - 6] = 70
        assert!((q.week_change_pct - pct_change(70.0, 120.0)).abs() < 1e-9);
        assert!((q.month_change_pct - 140.0).abs() < 1e-9);
    }

    #[test]
    fn short_series_uses_first_close_for_week() {
        let q = derive_quote(&chart(&[100.0, 105.0])).unwrap();
        assert!((q.week_change_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_has_no_quote() {
        assert!(derive_quote(&chart(&[])).is_none());
    }

    #[test]
    fn zero_base_does_not_divide() {
        assert_eq!(pct_change(0.0, 5.0), 0.0);
    }
}
