use serde::Serialize;

/* ----- CHART PARAMS ----- */

/// Relative lookback window for a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    D1,
    D5,
    M1,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
        }
    }
}

/* ----- CHART (decoded, shared by quote/ and the page generators) ----- */

/// One symbol's chart series after wire decoding.
///
/// `closes` holds only the non-null daily closes, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSnapshot {
    pub symbol: String,
    pub closes: Vec<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub fifty_two_week_high: Option<f64>,
    pub market_cap: Option<f64>,
}

/// Price/volume/change snapshot for a symbol at generation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSnapshot {
    pub price: f64,
    pub previous_close: f64,
    /// Absolute change against `previous_close`.
    pub change: f64,
    /// Percent change against `previous_close`.
    pub change_pct: f64,
    pub week_change_pct: f64,
    pub month_change_pct: f64,
    pub volume: u64,
    pub high_52w: Option<f64>,
    pub market_cap: Option<f64>,
}

/// Display name and industry from the quoteSummary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub sector: Option<String>,
}

/* ----- FETCH OUTCOME ----- */

/// Outcome of looking up live data for one catalog entry.
///
/// Keeps "never asked" apart from "asked and got nothing", which a bare `Option` would merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteState<T> {
    #[default]
    NotFetched,
    Unavailable,
    Live(T),
}

impl<T> QuoteState<T> {
    pub fn live(&self) -> Option<&T> {
        match self {
            QuoteState::Live(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_live(self) -> Option<T> {
        match self {
            QuoteState::Live(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, QuoteState::Live(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QuoteState<U> {
        match self {
            QuoteState::NotFetched => QuoteState::NotFetched,
            QuoteState::Unavailable => QuoteState::Unavailable,
            QuoteState::Live(v) => QuoteState::Live(f(v)),
        }
    }
}

impl<T> From<Option<T>> for QuoteState<T> {
    fn from(v: Option<T>) -> Self {
        v.map_or(QuoteState::Unavailable, QuoteState::Live)
    }
}
