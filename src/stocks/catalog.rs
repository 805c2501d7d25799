/// A stock with its own detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub symbol: &'static str,
    pub name: &'static str,
    /// One-line business description.
    pub desc: &'static str,
}

impl Stock {
    const fn new(symbol: &'static str, name: &'static str, desc: &'static str) -> Self {
        Self { symbol, name, desc }
    }
}

/// Symbols linked from every stock page.
pub const RELATED: [&str; 8] = ["AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "AMD"];

pub static STOCKS: &[Stock] = &[
    Stock::new("AAPL", "Apple Inc", "Consumer electronics, software, and services"),
    Stock::new("MSFT", "Microsoft Corp", "Software, cloud computing, and productivity tools"),
    Stock::new("GOOGL", "Alphabet Inc", "Internet search, advertising, and cloud services"),
    Stock::new("AMZN", "Amazon.com Inc", "E-commerce, cloud computing, and digital streaming"),
    Stock::new("META", "Meta Platforms", "Social media and virtual reality technologies"),
    Stock::new("NVDA", "NVIDIA Corp", "Graphics processing units and AI technology"),
    Stock::new("TSLA", "Tesla Inc", "Electric vehicles and clean energy solutions"),
    Stock::new("AVGO", "Broadcom Inc", "Semiconductor and infrastructure software"),
    Stock::new("BRK-B", "Berkshire Hathaway", "Conglomerate holding company"),
    Stock::new("WMT", "Walmart Inc", "Retail and e-commerce"),
    Stock::new("JPM", "JPMorgan Chase", "Investment banking and financial services"),
    Stock::new("V", "Visa Inc", "Payment technology and digital payments"),
    Stock::new("MA", "Mastercard Inc", "Payment processing and financial services"),
    Stock::new("UNH", "UnitedHealth Group", "Healthcare and insurance services"),
    Stock::new("ORCL", "Oracle Corp", "Database software and cloud systems"),
    Stock::new("HD", "Home Depot", "Home improvement retail"),
    Stock::new("BAC", "Bank of America", "Banking and financial services"),
    Stock::new("PG", "Procter & Gamble", "Consumer goods and personal care"),
    Stock::new("KO", "Coca-Cola Co", "Beverage manufacturing"),
    Stock::new("COST", "Costco Wholesale", "Membership warehouse retail"),
    Stock::new("NFLX", "Netflix Inc", "Streaming entertainment service"),
    Stock::new("AMD", "AMD Inc", "Semiconductor processors and graphics"),
    Stock::new("PEP", "PepsiCo Inc", "Food and beverage company"),
    Stock::new("TMO", "Thermo Fisher", "Scientific equipment and services"),
    Stock::new("ADBE", "Adobe Inc", "Software for creative professionals"),
    Stock::new("CRM", "Salesforce Inc", "Cloud-based software and CRM"),
    Stock::new("LIN", "Linde plc", "Industrial gases and engineering"),
    Stock::new("DIS", "Walt Disney Co", "Entertainment and media conglomerate"),
    Stock::new("ABT", "Abbott Labs", "Healthcare and medical devices"),
    Stock::new("ACN", "Accenture plc", "Professional services and consulting"),
    Stock::new("CAT", "Caterpillar Inc", "Construction and mining equipment"),
    Stock::new("VZ", "Verizon", "Telecommunications and wireless services"),
    Stock::new("DHR", "Danaher Corp", "Medical and industrial products"),
    Stock::new("WFC", "Wells Fargo", "Banking and financial services"),
    Stock::new("INTC", "Intel Corp", "Semiconductor chips and processors"),
    Stock::new("IBM", "IBM Corp", "Cloud computing and AI solutions"),
    Stock::new("GE", "GE Aerospace", "Aerospace and defense technology"),
    Stock::new("AMAT", "Applied Materials", "Semiconductor manufacturing equipment"),
    Stock::new("UBER", "Uber Technologies", "Ride-sharing and delivery platform"),
    Stock::new("NOW", "ServiceNow Inc", "Enterprise cloud computing platform"),
    Stock::new("AXP", "American Express", "Payment card and financial services"),
    Stock::new("QCOM", "Qualcomm Inc", "Wireless technology and semiconductors"),
    Stock::new("TXN", "Texas Instruments", "Semiconductor manufacturing"),
    Stock::new("PM", "Philip Morris", "Tobacco and smoke-free products"),
    Stock::new("GS", "Goldman Sachs", "Investment banking and securities"),
    Stock::new("MS", "Morgan Stanley", "Investment management and financial services"),
    Stock::new("PFE", "Pfizer Inc", "Pharmaceutical and biotechnology"),
    Stock::new("INTU", "Intuit Inc", "Financial and tax preparation software"),
    Stock::new("LOW", "Lowe's Companies", "Home improvement retail"),
    Stock::new("SPGI", "S&P Global", "Financial information and analytics"),
    Stock::new("HON", "Honeywell", "Diversified technology and manufacturing"),
    Stock::new("UNP", "Union Pacific", "Railroad transportation"),
    Stock::new("RTX", "RTX Corp", "Aerospace and defense systems"),
    Stock::new("BKNG", "Booking Holdings", "Online travel and restaurant services"),
    Stock::new("T", "AT&T Inc", "Telecommunications and media"),
    Stock::new("LRCX", "Lam Research", "Semiconductor wafer fabrication"),
    Stock::new("SYK", "Stryker Corp", "Medical devices and equipment"),
    Stock::new("ETN", "Eaton Corp", "Power management solutions"),
    Stock::new("SCHW", "Charles Schwab", "Brokerage and banking services"),
    Stock::new("BMY", "Bristol Myers", "Pharmaceutical company"),
    Stock::new("MDT", "Medtronic plc", "Medical devices and healthcare"),
    Stock::new("TJX", "TJX Companies", "Off-price retail stores"),
    Stock::new("CVS", "CVS Health", "Healthcare and pharmacy services"),
    Stock::new("ELV", "Elevance Health", "Health insurance and care"),
    Stock::new("DE", "Deere & Company", "Agricultural and construction equipment"),
    Stock::new("NKE", "Nike Inc", "Athletic footwear and apparel"),
    Stock::new("C", "Citigroup Inc", "Global banking and financial services"),
    Stock::new("MU", "Micron Technology", "Memory and storage semiconductors"),
    Stock::new("PLTR", "Palantir Tech", "Data analytics and AI software"),
    Stock::new("SOFI", "SoFi Technologies", "Digital financial services"),
    Stock::new("COIN", "Coinbase Global", "Cryptocurrency exchange platform"),
    Stock::new("HOOD", "Robinhood Markets", "Commission-free trading platform"),
    Stock::new("BABA", "Alibaba Group", "E-commerce and cloud computing"),
    Stock::new("JD", "JD.com Inc", "E-commerce and retail"),
    Stock::new("PDD", "PDD Holdings", "E-commerce platform"),
    Stock::new("NIO", "NIO Inc", "Electric vehicle manufacturer"),
    Stock::new("XPEV", "XPeng Inc", "Electric vehicle and AI"),
    Stock::new("LI", "Li Auto Inc", "Electric vehicle manufacturer"),
    Stock::new("GME", "GameStop Corp", "Video game and consumer electronics"),
    Stock::new("AMC", "AMC Entertainment", "Movie theater chain"),
    Stock::new("BB", "BlackBerry Ltd", "Cybersecurity and IoT"),
    Stock::new("SPY", "SPDR S&P 500 ETF", "S&P 500 index fund"),
    Stock::new("QQQ", "Invesco QQQ ETF", "Nasdaq-100 index fund"),
    Stock::new("IWM", "iShares Russell 2000", "Small-cap index fund"),
    Stock::new("VIX", "CBOE Volatility Index", "Market volatility index"),
    Stock::new("UVXY", "ProShares Ultra VIX", "Leveraged volatility ETF"),
    Stock::new("TQQQ", "ProShares UltraPro QQQ", "3x leveraged Nasdaq ETF"),
    Stock::new("SQQQ", "ProShares UltraPro Short QQQ", "3x inverse Nasdaq ETF"),
    Stock::new("SNOW", "Snowflake Inc", "Cloud computing and data warehousing"),
    Stock::new("ZM", "Zoom Video Communications", "Video conferencing and collaboration"),
    Stock::new("ROKU", "Roku Inc", "Streaming platform and devices"),
    Stock::new("SQ", "Block Inc", "Digital payments and financial services"),
    Stock::new("PYPL", "PayPal Holdings", "Digital payments platform"),
    Stock::new("SHOP", "Shopify Inc", "E-commerce platform for businesses"),
    Stock::new("TWLO", "Twilio Inc", "Cloud communications platform"),
    Stock::new("DDOG", "Datadog Inc", "Cloud monitoring and analytics"),
    Stock::new("NET", "Cloudflare Inc", "Web infrastructure and security"),
    Stock::new("CRWD", "CrowdStrike Holdings", "Cybersecurity and endpoint protection"),
    Stock::new("OKTA", "Okta Inc", "Identity and access management"),
    Stock::new("DOCU", "DocuSign Inc", "Electronic signature and agreement"),
    Stock::new("FSLY", "Fastly Inc", "Edge cloud platform"),
    Stock::new("FSR", "Fisker Inc", "Electric vehicle manufacturer"),
    Stock::new("LCID", "Lucid Group", "Luxury electric vehicles"),
    Stock::new("RIVN", "Rivian Automotive", "Electric trucks and delivery vehicles"),
    Stock::new("BLNK", "Blink Charging", "Electric vehicle charging stations"),
    Stock::new("CHPT", "ChargePoint Holdings", "EV charging network"),
    Stock::new("MRNA", "Moderna Inc", "mRNA therapeutics and vaccines"),
    Stock::new("BNTX", "BioNTech SE", "Immunotherapy and vaccines"),
    Stock::new("NVAX", "Novavax Inc", "Vaccine development"),
    Stock::new("DKNG", "DraftKings Inc", "Sports betting and gaming"),
    Stock::new("PENN", "Penn Entertainment", "Casinos and sports betting"),
    Stock::new("MGM", "MGM Resorts", "Casino and hospitality"),
    Stock::new("WYNN", "Wynn Resorts", "Luxury casino resorts"),
    Stock::new("LVS", "Las Vegas Sands", "Casino resorts and gaming"),
    Stock::new("CZR", "Caesars Entertainment", "Casino and hotel operator"),
    Stock::new("BYD", "Boyd Gaming", "Casino and gaming company"),
    Stock::new("PTON", "Peloton Interactive", "Connected fitness equipment"),
    Stock::new("NLS", "Nautilus Inc", "Fitness equipment manufacturer"),
    Stock::new("CLOV", "Clover Health", "Medicare advantage plans"),
    Stock::new("WISH", "ContextLogic Inc", "Mobile e-commerce platform"),
    Stock::new("CLNE", "Clean Energy Fuels", "Natural gas fuel for vehicles"),
    Stock::new("SPCE", "Virgin Galactic", "Space tourism and exploration"),
    Stock::new("SRNE", "Sorrento Therapeutics", "Biopharmaceutical company"),
    Stock::new("TLRY", "Tilray Brands", "Cannabis producer and distributor"),
    Stock::new("ACB", "Aurora Cannabis", "Cannabis production"),
    Stock::new("CGC", "Canopy Growth", "Cannabis and hemp products"),
    Stock::new("SNDL", "SNDL Inc", "Cannabis retail and production"),
    Stock::new("CRON", "Cronos Group", "Cannabis company"),
    Stock::new("MO", "Altria Group", "Tobacco and wine products"),
    Stock::new("TGT", "Target Corp", "Retail department stores"),
    Stock::new("M", "Macy's Inc", "Department store chain"),
    Stock::new("KSS", "Kohl's Corp", "Department store retail"),
    Stock::new("JWN", "Nordstrom Inc", "Luxury department stores"),
    Stock::new("DELL", "Dell Technologies", "Computer technology"),
    Stock::new("HPQ", "HP Inc", "Personal computers and printers"),
    Stock::new("HPE", "Hewlett Packard Enterprise", "Enterprise technology"),
    Stock::new("LUMN", "Lumen Technologies", "Telecommunications"),
    Stock::new("UAL", "United Airlines", "Airline transportation"),
    Stock::new("DAL", "Delta Air Lines", "Airline transportation"),
    Stock::new("AAL", "American Airlines", "Airline transportation"),
    Stock::new("LUV", "Southwest Airlines", "Low-cost airline"),
    Stock::new("CCL", "Carnival Corp", "Cruise line operator"),
    Stock::new("RCL", "Royal Caribbean", "Cruise vacation company"),
    Stock::new("NCLH", "Norwegian Cruise Line", "Cruise line operator"),
    Stock::new("MAR", "Marriott International", "Hotel and lodging"),
    Stock::new("HLT", "Hilton Worldwide", "Hospitality company"),
];
