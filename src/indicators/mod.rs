//! Technical-indicator guides under `indicators/` and the `indicators.html` index.

pub mod catalog;

use std::fmt::Write as _;

use crate::core::BriefError;
use crate::render::{Page, Theme};
use crate::site::{GenContext, RenderedPage, Topic, TopicReport};

pub use catalog::{INDICATORS, Indicator};

pub fn generate(ctx: &GenContext<'_>) -> Result<TopicReport, BriefError> {
    let mut report = TopicReport::new(Topic::Indicators);
    for indicator in INDICATORS {
        report.write(ctx, &render_indicator_page(indicator, ctx.year()))?;
    }
    report.write(ctx, &render_indicators_index(INDICATORS, ctx.year()))?;
    Ok(report)
}

const ARTICLE_CSS: &str = r#"
        header { border-bottom: 1px solid #1e3a5f; margin-bottom: 30px; }
        h3 { color: #00a8e8; margin: 20px 0 10px; font-size: 1.1em; }
        p { color: #8b92a8; margin-bottom: 15px; line-height: 1.8; }
        .content { background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 30px; }
"#;

const INDEX_CSS: &str = r#"
        .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; margin: 30px 0; }
        .indicator-card { background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 25px; }
        .indicator-card h3 { margin-bottom: 10px; }
        .indicator-card h3 a { color: #00d4aa; text-decoration: none; }
        .indicator-card p { color: #8b92a8; margin-bottom: 10px; }
        .badge { background: rgba(0, 212, 170, 0.2); color: #00d4aa; padding: 4px 10px; border-radius: 4px; font-size: 0.8em; }
"#;

/// Render `indicators/<slug>.html`.
pub fn render_indicator_page(indicator: &Indicator, year: i32) -> RenderedPage {
    let Indicator {
        slug,
        name,
        short,
        desc,
        content,
    } = *indicator;

    let body = format!(
        r#"
        <header>
            <h1>{name}</h1>
            <p class="tagline">{desc}</p>
        </header>
        <div class="content">{content}        </div>"#
    );

    let html = Page::new(format!("{name} | Technical Analysis Guide"), Theme::INDICATORS, year)
        .description(format!(
            "Learn how to use {name} ({short}) in technical analysis. Complete guide with examples and trading strategies."
        ))
        .canonical(&format!("/indicators/{slug}"))
        .css(ARTICLE_CSS)
        .nav(&[("/indicators.html", "All Indicators")])
        .body(body)
        .footer_note("Educational content only")
        .to_html();

    RenderedPage::new(format!("indicators/{slug}.html"), html)
}

/// Render `indicators.html` with a card per guide.
pub fn render_indicators_index(indicators: &[Indicator], year: i32) -> RenderedPage {
    let mut cards = String::new();
    for i in indicators {
        let _ = write!(
            cards,
            r#"
            <div class="indicator-card">
                <h3><a href="/indicators/{slug}.html">{name}</a></h3>
                <p>{desc}</p>
                <span class="badge">{short}</span>
            </div>"#,
            slug = i.slug,
            name = i.name,
            desc = i.desc,
            short = i.short,
        );
    }

    let body = format!(
        r#"
        <header>
            <h1>📊 Technical Indicators</h1>
            <p class="tagline">Learn essential technical analysis tools</p>
        </header>
        <div class="grid">{cards}
        </div>"#
    );

    let html = Page::new(
        "Technical Indicators | Pre-Market Brief",
        Theme::INDICATORS.with_width(1000),
        year,
    )
    .description(
        "Learn technical analysis indicators. Moving averages, RSI, MACD, Bollinger Bands, and more explained.",
    )
    .canonical("/indicators")
    .css(INDEX_CSS)
    .body(body)
    .to_html();

    RenderedPage::new("indicators.html", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_embeds_content() {
        let rsi = INDICATORS.iter().find(|i| i.short == "RSI").unwrap();
        let page = render_indicator_page(rsi, 2025);
        assert_eq!(page.path, "indicators/rsi-indicator.html");
        assert!(page.html.contains("<h3>Reading RSI</h3>"));
        assert!(page.html.contains("RSI - Relative Strength Index | Technical Analysis Guide"));
    }

    #[test]
    fn index_links_each_guide() {
        let page = render_indicators_index(INDICATORS, 2025);
        assert_eq!(INDICATORS.len(), 6);
        for i in INDICATORS {
            assert!(page.html.contains(&format!("/indicators/{}.html", i.slug)));
        }
    }
}
