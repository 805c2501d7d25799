use chrono::NaiveDate;

use crate::render::format::parse_date;

/// Expected market impact of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Badge label, also used as the badge's CSS class.
    pub fn label(self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }
}

/// A scheduled economic release or Fed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomicEvent {
    pub date: &'static str,
    pub time: &'static str,
    pub event: &'static str,
    pub impact: Impact,
    pub forecast: &'static str,
    pub previous: &'static str,
}

impl EconomicEvent {
    const fn new(
        date: &'static str,
        time: &'static str,
        event: &'static str,
        impact: Impact,
        forecast: &'static str,
        previous: &'static str,
    ) -> Self {
        Self {
            date,
            time,
            event,
            impact,
            forecast,
            previous,
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(self.date)
    }

    pub fn is_fed(&self) -> bool {
        self.event.contains("Fed") || self.event.contains("FOMC")
    }
}

pub static EVENTS: &[EconomicEvent] = &[
    EconomicEvent::new(
        "2025-02-05",
        "8:30 AM ET",
        "ADP Employment Report",
        Impact::High,
        "155K",
        "163K",
    ),
    EconomicEvent::new(
        "2025-02-07",
        "8:30 AM ET",
        "Nonfarm Payrolls",
        Impact::High,
        "180K",
        "256K",
    ),
    EconomicEvent::new(
        "2025-02-07",
        "8:30 AM ET",
        "Unemployment Rate",
        Impact::High,
        "4.1%",
        "4.1%",
    ),
    EconomicEvent::new(
        "2025-02-12",
        "8:30 AM ET",
        "CPI Inflation Data",
        Impact::High,
        "2.9%",
        "2.9%",
    ),
    EconomicEvent::new(
        "2025-02-13",
        "8:30 AM ET",
        "PPI Producer Price Index",
        Impact::Medium,
        "0.2%",
        "0.2%",
    ),
    EconomicEvent::new("2025-02-14", "8:30 AM ET", "Retail Sales", Impact::Medium, "0.3%", "0.4%"),
    EconomicEvent::new(
        "2025-02-18",
        "9:15 AM ET",
        "Industrial Production",
        Impact::Low,
        "0.2%",
        "0.3%",
    ),
    EconomicEvent::new("2025-02-19", "2:00 PM ET", "FOMC Meeting Minutes", Impact::High, "-", "-"),
    EconomicEvent::new(
        "2025-02-20",
        "8:30 AM ET",
        "Jobless Claims",
        Impact::Medium,
        "215K",
        "217K",
    ),
    EconomicEvent::new(
        "2025-02-21",
        "10:00 AM ET",
        "Existing Home Sales",
        Impact::Low,
        "4.2M",
        "4.2M",
    ),
    EconomicEvent::new(
        "2025-02-25",
        "8:30 AM ET",
        "Durable Goods Orders",
        Impact::Medium,
        "0.5%",
        "-0.2%",
    ),
    EconomicEvent::new("2025-02-27", "8:30 AM ET", "GDP Q4 Final", Impact::High, "2.3%", "2.3%"),
    EconomicEvent::new(
        "2025-02-28",
        "8:30 AM ET",
        "Core PCE Price Index",
        Impact::High,
        "0.2%",
        "0.2%",
    ),
    EconomicEvent::new("2025-03-07", "8:30 AM ET", "Nonfarm Payrolls", Impact::High, "175K", "TBD"),
    EconomicEvent::new(
        "2025-03-12",
        "8:30 AM ET",
        "CPI Inflation Data",
        Impact::High,
        "2.8%",
        "TBD",
    ),
    EconomicEvent::new(
        "2025-03-18",
        "2:00 PM ET",
        "FOMC Interest Rate Decision",
        Impact::High,
        "4.25-4.50%",
        "4.25-4.50%",
    ),
    EconomicEvent::new(
        "2025-03-18",
        "2:30 PM ET",
        "Fed Chair Powell Press Conference",
        Impact::High,
        "-",
        "-",
    ),
    EconomicEvent::new("2025-03-20", "8:30 AM ET", "Jobless Claims", Impact::Medium, "TBD", "TBD"),
    EconomicEvent::new(
        "2025-03-28",
        "8:30 AM ET",
        "Core PCE Price Index",
        Impact::High,
        "TBD",
        "TBD",
    ),
];
