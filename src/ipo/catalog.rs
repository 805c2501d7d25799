//! Sample IPO listings. Figures are illustrative, not sourced from a data provider.

use chrono::NaiveDate;

use crate::render::format::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Nasdaq,
    Nyse,
}

impl Exchange {
    pub fn as_str(self) -> &'static str {
        match self {
            Exchange::Nasdaq => "NASDAQ",
            Exchange::Nyse => "NYSE",
        }
    }

    /// CSS class of the exchange tag.
    pub fn tag_class(self) -> &'static str {
        match self {
            Exchange::Nasdaq => "exchange-nasdaq",
            Exchange::Nyse => "exchange-nyse",
        }
    }
}

/// A scheduled offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingIpo {
    pub company: &'static str,
    pub symbol: &'static str,
    pub date: &'static str,
    pub price_range: &'static str,
    pub shares: &'static str,
    pub market_cap: &'static str,
    pub exchange: Exchange,
    pub sector: &'static str,
    pub underwriters: &'static [&'static str],
}

/// A completed offering and how it has traded since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentIpo {
    pub company: &'static str,
    pub symbol: &'static str,
    pub date: &'static str,
    pub price: &'static str,
    pub current: &'static str,
    /// Signed percent string, e.g. `+18.75%`.
    pub change: &'static str,
}

impl UpcomingIpo {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(self.date)
    }
}

impl RecentIpo {
    const fn new(
        company: &'static str,
        symbol: &'static str,
        date: &'static str,
        price: &'static str,
        current: &'static str,
        change: &'static str,
    ) -> Self {
        Self {
            company,
            symbol,
            date,
            price,
            current,
            change,
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(self.date)
    }

    pub fn is_up(&self) -> bool {
        self.change.starts_with('+')
    }
}

pub static UPCOMING: &[UpcomingIpo] = &[
    UpcomingIpo {
        company: "TechFlow AI",
        symbol: "TFAI",
        date: "2025-02-10",
        price_range: "$18-22",
        shares: "15M",
        market_cap: "$450M",
        exchange: Exchange::Nasdaq,
        sector: "Artificial Intelligence",
        underwriters: &["Goldman Sachs", "Morgan Stanley"],
    },
    UpcomingIpo {
        company: "GreenEnergy Solutions",
        symbol: "GRES",
        date: "2025-02-12",
        price_range: "$12-15",
        shares: "20M",
        market_cap: "$300M",
        exchange: Exchange::Nyse,
        sector: "Clean Energy",
        underwriters: &["JP Morgan", "Bank of America"],
    },
    UpcomingIpo {
        company: "CloudMatrix Systems",
        symbol: "CMSY",
        date: "2025-02-15",
        price_range: "$25-28",
        shares: "12M",
        market_cap: "$650M",
        exchange: Exchange::Nasdaq,
        sector: "Cloud Computing",
        underwriters: &["Deutsche Bank", "Credit Suisse"],
    },
    UpcomingIpo {
        company: "BioGenetics Labs",
        symbol: "BGLX",
        date: "2025-02-18",
        price_range: "$8-10",
        shares: "8M",
        market_cap: "$150M",
        exchange: Exchange::Nasdaq,
        sector: "Biotechnology",
        underwriters: &["Jefferies", "Piper Sandler"],
    },
    UpcomingIpo {
        company: "RoboTech Industries",
        symbol: "ROTI",
        date: "2025-02-20",
        price_range: "$15-18",
        shares: "18M",
        market_cap: "$400M",
        exchange: Exchange::Nyse,
        sector: "Robotics",
        underwriters: &["Citigroup", "Barclays"],
    },
    UpcomingIpo {
        company: "FinServe Digital",
        symbol: "FSDG",
        date: "2025-02-25",
        price_range: "$20-24",
        shares: "10M",
        market_cap: "$350M",
        exchange: Exchange::Nasdaq,
        sector: "Fintech",
        underwriters: &["Goldman Sachs", "UBS"],
    },
    UpcomingIpo {
        company: "HealthPulse Medical",
        symbol: "HPME",
        date: "2025-03-01",
        price_range: "$14-17",
        shares: "14M",
        market_cap: "$280M",
        exchange: Exchange::Nyse,
        sector: "Healthcare",
        underwriters: &["Morgan Stanley", "Wells Fargo"],
    },
    UpcomingIpo {
        company: "DataSecure Corp",
        symbol: "DTSC",
        date: "2025-03-05",
        price_range: "$22-26",
        shares: "11M",
        market_cap: "$520M",
        exchange: Exchange::Nasdaq,
        sector: "Cybersecurity",
        underwriters: &["JP Morgan", "Deutsche Bank"],
    },
];

pub static RECENT: &[RecentIpo] = &[
    RecentIpo::new("SpaceVehicles Inc", "SPVI", "2025-01-28", "$24.00", "$28.50", "+18.75%"),
    RecentIpo::new("QuantumLeap AI", "QNTM", "2025-01-22", "$19.00", "$17.20", "-9.47%"),
    RecentIpo::new("EduTech Global", "EDUT", "2025-01-15", "$15.00", "$16.80", "+12.00%"),
    RecentIpo::new("MedDevice Pro", "MDVP", "2025-01-10", "$21.00", "$23.40", "+11.43%"),
];
