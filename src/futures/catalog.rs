/// A futures contract on the futures board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    /// Yahoo continuous-contract symbol, e.g. `ES=F`.
    pub symbol: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub tick: &'static str,
}

impl Contract {
    const fn new(
        symbol: &'static str,
        name: &'static str,
        unit: &'static str,
        tick: &'static str,
    ) -> Self {
        Self {
            symbol,
            name,
            unit,
            tick,
        }
    }

    /// Symbol as shown to readers, without the `=F` suffix.
    pub fn ticker(&self) -> &'static str {
        self.symbol.strip_suffix("=F").unwrap_or(self.symbol)
    }
}

pub static CONTRACTS: &[Contract] = &[
    Contract::new("ES=F", "E-mini S&P 500", "Index", "0.25"),
    Contract::new("NQ=F", "E-mini Nasdaq-100", "Index", "0.25"),
    Contract::new("YM=F", "E-mini Dow", "Index", "1.00"),
    Contract::new("RTY=F", "E-mini Russell 2000", "Index", "0.10"),
    Contract::new("GC=F", "Gold", "Troy Oz", "0.10"),
    Contract::new("SI=F", "Silver", "Troy Oz", "0.005"),
    Contract::new("CL=F", "Crude Oil (WTI)", "Barrel", "0.01"),
    Contract::new("NG=F", "Natural Gas", "MMBtu", "0.001"),
    Contract::new("ZB=F", "30-Year T-Bond", "$100k", "1/32"),
    Contract::new("ZN=F", "10-Year T-Note", "$100k", "1/64"),
    Contract::new("6E=F", "Euro FX", "€125k", "0.0001"),
    Contract::new("6J=F", "Japanese Yen", "¥12.5M", "0.0001"),
];
