use serde::Deserialize;

/* ---------------- chart v8 ---------------- */

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<MetaNode>,
    #[serde(default)]
    pub(crate) indicators: Option<Indicators>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetaNode {
    #[serde(default)]
    pub(crate) previous_close: Option<f64>,
    #[serde(default)]
    pub(crate) chart_previous_close: Option<f64>,
    #[serde(default)]
    pub(crate) regular_market_volume: Option<f64>,
    #[serde(default)]
    pub(crate) fifty_two_week_high: Option<f64>,
    #[serde(default)]
    pub(crate) market_cap: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
}

/* ---------------- quoteSummary v10 ---------------- */

#[derive(Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<SummaryNode>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryNode {
    pub(crate) result: Option<Vec<SummaryResult>>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryResult {
    #[serde(default)]
    pub(crate) quote_type: Option<QuoteTypeNode>,
    #[serde(default)]
    pub(crate) asset_profile: Option<AssetProfileNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteTypeNode {
    #[serde(default)]
    pub(crate) long_name: Option<String>,
    #[serde(default)]
    pub(crate) short_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct AssetProfileNode {
    #[serde(default)]
    pub(crate) industry: Option<String>,
}
