/// An exchange-traded fund with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Etf {
    pub symbol: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    /// Annual expense ratio as displayed, e.g. `0.09%`.
    pub expense: &'static str,
}

impl Etf {
    /// Expense ratio in percent, if the display string parses.
    pub fn expense_pct(&self) -> Option<f64> {
        self.expense.trim().trim_end_matches('%').parse().ok()
    }
}

pub static ETFS: &[Etf] = &[
    Etf {
        symbol: "SPY",
        name: "SPDR S&P 500 ETF",
        desc: "Tracks the S&P 500 Index - the 500 largest US companies",
        category: "Large Cap",
        expense: "0.09%",
    },
    Etf {
        symbol: "VOO",
        name: "Vanguard S&P 500 ETF",
        desc: "Low-cost S&P 500 index tracking",
        category: "Large Cap",
        expense: "0.03%",
    },
    Etf {
        symbol: "IVV",
        name: "iShares Core S&P 500 ETF",
        desc: "S&P 500 index fund from BlackRock",
        category: "Large Cap",
        expense: "0.03%",
    },
    Etf {
        symbol: "QQQ",
        name: "Invesco QQQ ETF",
        desc: "Tracks the Nasdaq-100 Index - top 100 non-financial Nasdaq stocks",
        category: "Tech",
        expense: "0.20%",
    },
    Etf {
        symbol: "VTI",
        name: "Vanguard Total Stock Market ETF",
        desc: "Covers the entire US stock market",
        category: "Total Market",
        expense: "0.03%",
    },
    Etf {
        symbol: "VEA",
        name: "Vanguard Developed Markets ETF",
        desc: "International developed markets exposure",
        category: "International",
        expense: "0.05%",
    },
    Etf {
        symbol: "VWO",
        name: "Vanguard Emerging Markets ETF",
        desc: "Emerging markets stocks",
        category: "Emerging Markets",
        expense: "0.10%",
    },
    Etf {
        symbol: "VT",
        name: "Vanguard Total World Stock ETF",
        desc: "Global stock market exposure",
        category: "Global",
        expense: "0.07%",
    },
    Etf {
        symbol: "AGG",
        name: "iShares Core US Aggregate Bond ETF",
        desc: "Broad US investment-grade bonds",
        category: "Bonds",
        expense: "0.03%",
    },
    Etf {
        symbol: "BND",
        name: "Vanguard Total Bond Market ETF",
        desc: "Complete US bond market exposure",
        category: "Bonds",
        expense: "0.03%",
    },
    Etf {
        symbol: "ARKK",
        name: "ARK Innovation ETF",
        desc: "Active management in disruptive innovation",
        category: "Thematic",
        expense: "0.75%",
    },
    Etf {
        symbol: "IWM",
        name: "iShares Russell 2000 ETF",
        desc: "Small-cap US stocks",
        category: "Small Cap",
        expense: "0.19%",
    },
    Etf {
        symbol: "GLD",
        name: "SPDR Gold Shares",
        desc: "Physical gold exposure",
        category: "Commodities",
        expense: "0.40%",
    },
    Etf {
        symbol: "VNQ",
        name: "Vanguard Real Estate ETF",
        desc: "US real estate investment trusts",
        category: "Real Estate",
        expense: "0.12%",
    },
    Etf {
        symbol: "XLF",
        name: "Financial Select Sector SPDR",
        desc: "Financial sector stocks",
        category: "Sector",
        expense: "0.10%",
    },
    Etf {
        symbol: "XLK",
        name: "Technology Select Sector SPDR",
        desc: "Technology sector stocks",
        category: "Sector",
        expense: "0.10%",
    },
    Etf {
        symbol: "XLE",
        name: "Energy Select Sector SPDR",
        desc: "Energy sector stocks",
        category: "Sector",
        expense: "0.10%",
    },
    Etf {
        symbol: "XLV",
        name: "Health Care Select Sector SPDR",
        desc: "Healthcare sector stocks",
        category: "Sector",
        expense: "0.10%",
    },
    Etf {
        symbol: "TLT",
        name: "iShares 20+ Year Treasury Bond ETF",
        desc: "Long-term US Treasury bonds",
        category: "Bonds",
        expense: "0.15%",
    },
    Etf {
        symbol: "LQD",
        name: "iShares iBoxx $ Investment Grade Corporate Bond ETF",
        desc: "Investment-grade corporate bonds",
        category: "Bonds",
        expense: "0.14%",
    },
];
