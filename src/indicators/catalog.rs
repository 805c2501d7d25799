/// A technical-analysis explainer with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// File stem under `indicators/`.
    pub slug: &'static str,
    pub name: &'static str,
    /// Badge abbreviation, e.g. `RSI`.
    pub short: &'static str,
    pub desc: &'static str,
    /// Trusted HTML fragment for the article body.
    pub content: &'static str,
}

pub static INDICATORS: &[Indicator] = &[
    Indicator {
        slug: "moving-averages",
        name: "Moving Averages",
        short: "MA",
        desc: "Simple and exponential moving averages for trend identification",
        content: r#"
            <p>Moving averages are the most widely used technical indicators. They smooth out price data to show the underlying trend direction.</p>
            <h3>Simple Moving Average (SMA)</h3>
            <p>The SMA calculates the average price over a specific period. Common periods include 20-day (short-term), 50-day (medium-term), and 200-day (long-term) moving averages.</p>
            <h3>Exponential Moving Average (EMA)</h3>
            <p>The EMA gives more weight to recent prices, making it more responsive to new information. The 12-day and 26-day EMAs are used in MACD calculations.</p>
            <h3>How to Use</h3>
            <p>• Price above MA = Uptrend<br>• Price below MA = Downtrend<br>• Golden Cross (50MA crosses above 200MA) = Bullish signal<br>• Death Cross (50MA crosses below 200MA) = Bearish signal</p>
"#,
    },
    Indicator {
        slug: "rsi-indicator",
        name: "RSI - Relative Strength Index",
        short: "RSI",
        desc: "Momentum oscillator measuring speed and change of price movements",
        content: r#"
            <p>The RSI is a momentum oscillator that measures the speed and magnitude of recent price changes. It oscillates between 0 and 100.</p>
            <h3>Reading RSI</h3>
            <p>• Above 70 = Overbought (potential sell signal)<br>• Below 30 = Oversold (potential buy signal)<br>• 50 = Neutral</p>
            <h3>Divergence</h3>
            <p>Bullish divergence occurs when price makes lower lows but RSI makes higher lows. Bearish divergence occurs when price makes higher highs but RSI makes lower highs.</p>
            <h3>Best Practices</h3>
            <p>Use RSI in conjunction with other indicators. In strong trends, RSI can remain overbought or oversold for extended periods.</p>
"#,
    },
    Indicator {
        slug: "macd-indicator",
        name: "MACD",
        short: "MACD",
        desc: "Moving Average Convergence Divergence trend-following momentum indicator",
        content: r#"
            <p>MACD is a trend-following momentum indicator that shows the relationship between two moving averages of a security's price.</p>
            <h3>Components</h3>
            <p>• MACD Line: 12-day EMA minus 26-day EMA<br>• Signal Line: 9-day EMA of the MACD Line<br>• Histogram: MACD Line minus Signal Line</p>
            <h3>Trading Signals</h3>
            <p>• MACD crosses above signal line = Bullish<br>• MACD crosses below signal line = Bearish<br>• MACD crosses above zero = Bullish trend<br>• MACD crosses below zero = Bearish trend</p>
            <h3>Divergence</h3>
            <p>MACD divergence can signal potential trend reversals before they occur in price action.</p>
"#,
    },
    Indicator {
        slug: "bollinger-bands",
        name: "Bollinger Bands",
        short: "BB",
        desc: "Volatility bands placed above and below a moving average",
        content: r#"
            <p>Bollinger Bands consist of a middle band (20-day SMA) with upper and lower bands (2 standard deviations away from the middle band).</p>
            <h3>Interpretation</h3>
            <p>• Price touching upper band = Potentially overbought<br>• Price touching lower band = Potentially oversold<br>• Squeeze (bands narrowing) = Low volatility, potential breakout ahead<br>• Expansion (bands widening) = High volatility</p>
            <h3>%B Indicator</h3>
            <p>%B measures where price is relative to the bands. Above 1 = above upper band, below 0 = below lower band.</p>
"#,
    },
    Indicator {
        slug: "volume-analysis",
        name: "Volume Analysis",
        short: "VOL",
        desc: "Using trading volume to confirm price trends and patterns",
        content: r#"
            <p>Volume is a crucial indicator that confirms the strength of price movements. High volume confirms trends, while low volume suggests weak moves.</p>
            <h3>Volume Patterns</h3>
            <p>• Rising price + Rising volume = Strong uptrend<br>• Rising price + Falling volume = Weak uptrend (potential reversal)<br>• Falling price + High volume = Strong selling pressure<br>• Breakout on high volume = Valid breakout<br>• Breakout on low volume = False breakout likely</p>
            <h3>Volume Indicators</h3>
            <p>• On-Balance Volume (OBV)<br>• Volume Weighted Average Price (VWAP)<br>• Chaikin Money Flow</p>
"#,
    },
    Indicator {
        slug: "support-resistance",
        name: "Support and Resistance",
        short: "S/R",
        desc: "Key price levels where buying or selling pressure concentrates",
        content: r#"
            <p>Support and resistance are price levels where the market has historically reversed or paused. These are among the most important concepts in technical analysis.</p>
            <h3>Support</h3>
            <p>Support is a price level where buying interest is strong enough to overcome selling pressure. Previous lows, moving averages, and psychological levels often act as support.</p>
            <h3>Resistance</h3>
            <p>Resistance is a price level where selling pressure overcomes buying interest. Previous highs, round numbers, and moving averages often act as resistance.</p>
            <h3>Trading Strategy</h3>
            <p>• Buy near support with stop-loss below<br>• Sell near resistance with stop-loss above<br>• Break above resistance = Buy signal<br>• Break below support = Sell signal</p>
"#,
    },
];
