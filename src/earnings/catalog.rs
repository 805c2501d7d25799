#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    Technology,
    Finance,
    Healthcare,
    Retail,
    Consumer,
    Energy,
}

impl Sector {
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Finance => "Finance",
            Sector::Healthcare => "Healthcare",
            Sector::Retail => "Retail",
            Sector::Consumer => "Consumer",
            Sector::Energy => "Energy",
        }
    }

    /// CSS class of the sector tag.
    pub fn tag_class(self) -> &'static str {
        match self {
            Sector::Technology => "technology",
            Sector::Finance => "finance",
            Sector::Healthcare => "healthcare",
            Sector::Retail => "retail",
            Sector::Consumer => "consumer",
            Sector::Energy => "energy",
        }
    }
}

/// A company on the earnings calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsCompany {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: Sector,
}

impl EarningsCompany {
    const fn new(symbol: &'static str, name: &'static str, sector: Sector) -> Self {
        Self {
            symbol,
            name,
            sector,
        }
    }
}

pub static COMPANIES: &[EarningsCompany] = &[
    EarningsCompany::new("AAPL", "Apple Inc", Sector::Technology),
    EarningsCompany::new("MSFT", "Microsoft Corp", Sector::Technology),
    EarningsCompany::new("GOOGL", "Alphabet Inc", Sector::Technology),
    EarningsCompany::new("AMZN", "Amazon.com Inc", Sector::Technology),
    EarningsCompany::new("META", "Meta Platforms", Sector::Technology),
    EarningsCompany::new("NVDA", "NVIDIA Corp", Sector::Technology),
    EarningsCompany::new("TSLA", "Tesla Inc", Sector::Technology),
    EarningsCompany::new("NFLX", "Netflix Inc", Sector::Technology),
    EarningsCompany::new("JPM", "JPMorgan Chase", Sector::Finance),
    EarningsCompany::new("BAC", "Bank of America", Sector::Finance),
    EarningsCompany::new("WFC", "Wells Fargo", Sector::Finance),
    EarningsCompany::new("GS", "Goldman Sachs", Sector::Finance),
    EarningsCompany::new("MS", "Morgan Stanley", Sector::Finance),
    EarningsCompany::new("V", "Visa Inc", Sector::Finance),
    EarningsCompany::new("MA", "Mastercard Inc", Sector::Finance),
    EarningsCompany::new("JNJ", "Johnson & Johnson", Sector::Healthcare),
    EarningsCompany::new("UNH", "UnitedHealth Group", Sector::Healthcare),
    EarningsCompany::new("PFE", "Pfizer Inc", Sector::Healthcare),
    EarningsCompany::new("ABBV", "AbbVie Inc", Sector::Healthcare),
    EarningsCompany::new("MRK", "Merck & Co", Sector::Healthcare),
    EarningsCompany::new("LLY", "Eli Lilly", Sector::Healthcare),
    EarningsCompany::new("WMT", "Walmart Inc", Sector::Retail),
    EarningsCompany::new("HD", "Home Depot", Sector::Retail),
    EarningsCompany::new("COST", "Costco Wholesale", Sector::Retail),
    EarningsCompany::new("NKE", "Nike Inc", Sector::Consumer),
    EarningsCompany::new("MCD", "McDonald's Corp", Sector::Consumer),
    EarningsCompany::new("SBUX", "Starbucks Corp", Sector::Consumer),
    EarningsCompany::new("XOM", "Exxon Mobil", Sector::Energy),
    EarningsCompany::new("CVX", "Chevron Corp", Sector::Energy),
    EarningsCompany::new("BABA", "Alibaba Group", Sector::Technology),
    EarningsCompany::new("JD", "JD.com Inc", Sector::Retail),
    EarningsCompany::new("PDD", "PDD Holdings", Sector::Retail),
    EarningsCompany::new("BIDU", "Baidu Inc", Sector::Technology),
];
