use chrono::NaiveDate;

use crate::render::format::parse_date;

/// A tracked dividend payer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividendRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Per-share payment in dollars.
    pub dividend: f64,
    pub yield_pct: f64,
    /// `YYYY-MM-DD`, or `N/A` when no ex-date is scheduled.
    pub ex_date: &'static str,
}

impl DividendRecord {
    const fn new(
        symbol: &'static str,
        name: &'static str,
        dividend: f64,
        yield_pct: f64,
        ex_date: &'static str,
    ) -> Self {
        Self {
            symbol,
            name,
            dividend,
            yield_pct,
            ex_date,
        }
    }

    pub fn ex_date(&self) -> Option<NaiveDate> {
        parse_date(self.ex_date)
    }
}

pub static DIVIDENDS: &[DividendRecord] = &[
    DividendRecord::new("AAPL", "Apple Inc", 0.25, 0.5, "2025-02-15"),
    DividendRecord::new("MSFT", "Microsoft Corp", 0.75, 0.7, "2025-02-20"),
    DividendRecord::new("JNJ", "Johnson & Johnson", 1.19, 2.9, "2025-02-18"),
    DividendRecord::new("JPM", "JPMorgan Chase", 1.05, 2.4, "2025-02-10"),
    DividendRecord::new("V", "Visa Inc", 0.52, 0.7, "2025-02-25"),
    DividendRecord::new("PG", "Procter & Gamble", 0.94, 2.4, "2025-02-22"),
    DividendRecord::new("UNH", "UnitedHealth Group", 1.88, 1.4, "2025-02-12"),
    DividendRecord::new("HD", "Home Depot", 2.09, 2.1, "2025-02-28"),
    DividendRecord::new("BAC", "Bank of America", 0.24, 2.6, "2025-02-08"),
    DividendRecord::new("MA", "Mastercard Inc", 0.57, 0.6, "2025-02-14"),
    DividendRecord::new("ABBV", "AbbVie Inc", 1.55, 3.4, "2025-02-16"),
    DividendRecord::new("PFE", "Pfizer Inc", 0.42, 5.8, "2025-02-26"),
    DividendRecord::new("KO", "Coca-Cola Co", 0.46, 3.1, "2025-02-24"),
    DividendRecord::new("PEP", "PepsiCo Inc", 1.26, 3.0, "2025-02-19"),
    DividendRecord::new("WMT", "Walmart Inc", 0.21, 1.4, "2025-02-11"),
    DividendRecord::new("MRK", "Merck & Co", 0.77, 2.8, "2025-02-13"),
    DividendRecord::new("CSCO", "Cisco Systems", 0.40, 3.2, "2025-02-21"),
    DividendRecord::new("VZ", "Verizon", 0.67, 6.5, "2025-02-27"),
    DividendRecord::new("ADBE", "Adobe Inc", 0.00, 0.0, "N/A"),
    DividendRecord::new("NKE", "Nike Inc", 0.37, 1.5, "2025-02-23"),
];
