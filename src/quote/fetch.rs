use tracing::debug;

use crate::core::{BriefError, ChartSnapshot, CompanyProfile, QuoteClient, Range, net};
use crate::quote::wire::{ChartEnvelope, SummaryEnvelope};

const SUMMARY_MODULES: &str = "quoteType,assetProfile";

/// Fetch a daily chart, reading through the client's response cache when it has one.
#[tracing::instrument(skip(client), err)]
pub(crate) async fn fetch_chart(
    client: &QuoteClient,
    symbol: &str,
    range: Range,
) -> Result<ChartSnapshot, BriefError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("interval", "1d")
        .append_pair("range", range.as_str());

    if let Some(body) = client.cache_get(&url).await {
        debug!("chart cache hit");
        return decode_chart(symbol, &body);
    }

    let resp = client
        .send_with_retry(client.http().get(url.clone()))
        .await?;
    if !resp.status().is_success() {
        return Err(BriefError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "chart", symbol, "json").await?;
    let snapshot = decode_chart(symbol, &body)?;
    client.cache_put(&url, &body).await;
    Ok(snapshot)
}

pub(crate) fn decode_chart(symbol: &str, body: &str) -> Result<ChartSnapshot, BriefError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| BriefError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| BriefError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(BriefError::Data(format!(
            "yahoo error: {} - {}",
            err.code.unwrap_or_default(),
            err.description.unwrap_or_default()
        )));
    }

    let r0 = chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| BriefError::Data("missing result".into()))?;

    let quote = r0
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .ok_or_else(|| BriefError::Data("missing quote".into()))?;

    let closes: Vec<f64> = quote
        .close
        .into_iter()
        .flatten()
        .filter(|c| c.is_finite())
        .collect();
    if closes.is_empty() {
        return Err(BriefError::Data("empty close series".into()));
    }

    let meta = r0.meta.unwrap_or_default();
    Ok(ChartSnapshot {
        symbol: symbol.to_string(),
        closes,
        previous_close: meta.previous_close,
        chart_previous_close: meta.chart_previous_close,
        regular_market_volume: meta
            .regular_market_volume
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u64),
        fifty_two_week_high: meta.fifty_two_week_high,
        market_cap: meta.market_cap,
    })
}

#[tracing::instrument(skip(client), err)]
pub(crate) async fn fetch_profile(
    client: &QuoteClient,
    symbol: &str,
) -> Result<CompanyProfile, BriefError> {
    let mut url = client.base_quote_api().join(symbol)?;
    url.query_pairs_mut().append_pair("modules", SUMMARY_MODULES);

    if let Some(body) = client.cache_get(&url).await {
        return decode_profile(&body);
    }

    let resp = client
        .send_with_retry(client.http().get(url.clone()))
        .await?;
    if !resp.status().is_success() {
        return Err(BriefError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "profile", symbol, "json").await?;
    let profile = decode_profile(&body)?;
    client.cache_put(&url, &body).await;
    Ok(profile)
}

pub(crate) fn decode_profile(body: &str) -> Result<CompanyProfile, BriefError> {
    let parsed: SummaryEnvelope = serde_json::from_str(body)
        .map_err(|e| BriefError::Data(format!("quoteSummary json parse: {e}")))?;

    let node = parsed
        .quote_summary
        .ok_or_else(|| BriefError::Data("missing quoteSummary".into()))?;

    if let Some(err) = node.error {
        return Err(BriefError::Data(format!(
            "yahoo error: {}",
            err.description.unwrap_or_default()
        )));
    }

    let r0 = node
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| BriefError::Data("missing result".into()))?;

    let name = r0
        .quote_type
        .and_then(|q| q.long_name.or(q.short_name))
        .filter(|s| !s.trim().is_empty());
    let sector = r0
        .asset_profile
        .and_then(|a| a.industry)
        .filter(|s| !s.trim().is_empty());

    Ok(CompanyProfile { name, sector })
}
