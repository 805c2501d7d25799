use std::fmt::Write as _;

/// Accent palette of one page family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Link and heading color.
    pub accent: &'static str,
    /// Second stop of the title gradient.
    pub accent_alt: &'static str,
    /// `r, g, b` of the accent, used for translucent fills.
    pub accent_rgb: &'static str,
    /// `r, g, b` of the second stop.
    pub accent_alt_rgb: &'static str,
    /// Max width of the content column in px.
    pub width: u32,
}

impl Theme {
    pub const STOCK: Theme = Theme {
        accent: "#00d4aa",
        accent_alt: "#00a8e8",
        accent_rgb: "0, 212, 170",
        accent_alt_rgb: "0, 168, 232",
        width: 900,
    };
    pub const ETF: Theme = Theme {
        accent: "#9b59b6",
        accent_alt: "#3498db",
        accent_rgb: "155, 89, 182",
        accent_alt_rgb: "52, 152, 219",
        width: 900,
    };
    pub const FUTURES: Theme = Theme {
        accent: "#f39c12",
        accent_alt: "#e74c3c",
        accent_rgb: "243, 156, 18",
        accent_alt_rgb: "231, 76, 60",
        width: 1000,
    };
    pub const DIVIDEND: Theme = Theme {
        accent: "#2ecc71",
        accent_alt: "#3498db",
        accent_rgb: "46, 204, 113",
        accent_alt_rgb: "52, 152, 219",
        width: 1000,
    };
    pub const ECONOMIC: Theme = Theme {
        accent: "#e74c3c",
        accent_alt: "#f39c12",
        accent_rgb: "231, 76, 60",
        accent_alt_rgb: "243, 156, 18",
        width: 1100,
    };
    pub const IPO: Theme = Theme {
        width: 1100,
        ..Theme::ETF
    };
    pub const EARNINGS: Theme = Theme {
        width: 1100,
        ..Theme::STOCK
    };
    pub const SCREENER: Theme = Theme {
        width: 1200,
        ..Theme::STOCK
    };
    pub const INDICATORS: Theme = Theme {
        width: 800,
        ..Theme::STOCK
    };

    /// Same palette with a different column width.
    pub const fn with_width(self, width: u32) -> Theme {
        Theme { width, ..self }
    }
}

/// Full inline stylesheet: shared base rules, themed, followed by `extra`.
pub fn stylesheet(theme: &Theme, extra: &str) -> String {
    let Theme {
        accent,
        accent_alt,
        accent_rgb,
        accent_alt_rgb,
        width,
    } = *theme;

    let mut css = String::with_capacity(4096);
    let _ = write!(
        css,
        r#"
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0a0e1a; color: #e8eaed; line-height: 1.6; }}
        .container {{ max-width: {width}px; margin: 0 auto; padding: 20px; }}
        nav {{ background: #111827; padding: 15px 20px; border-bottom: 1px solid #1e3a5f; margin: -20px -20px 30px; }}
        nav a {{ color: {accent}; text-decoration: none; margin-right: 20px; font-size: 0.9em; }}
        header {{ text-align: center; padding: 40px 0; }}
        h1 {{ font-size: 2.2em; background: linear-gradient(135deg, {accent}, {accent_alt}); -webkit-background-clip: text; -webkit-text-fill-color: transparent; margin-bottom: 10px; }}
        .tagline {{ color: #8b92a8; margin-top: 10px; }}
        .card {{ background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; overflow: hidden; margin-bottom: 30px; }}
        .card-header {{ background: linear-gradient(135deg, rgba({accent_rgb}, 0.1), rgba({accent_alt_rgb}, 0.1)); padding: 20px 25px; border-bottom: 1px solid #1e3a5f; }}
        .card-header h2 {{ color: {accent}; font-size: 1.2em; }}
        .stats {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 20px; margin: 30px 0; }}
        .stat-box {{ background: linear-gradient(135deg, rgba({accent_rgb}, 0.1), rgba({accent_alt_rgb}, 0.1)); border: 1px solid #1e3a5f; border-radius: 12px; padding: 25px; text-align: center; }}
        .stat-number {{ font-size: 2.2em; font-weight: bold; color: {accent}; }}
        .stat-label {{ color: #8b92a8; margin-top: 5px; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 15px; text-align: left; border-bottom: 1px solid #1e3a5f; }}
        th {{ background: #0d1117; color: #8b92a8; font-size: 0.8em; text-transform: uppercase; }}
        td.symbol {{ font-weight: bold; color: #fff; }}
        td.symbol a {{ color: {accent}; text-decoration: none; }}
        td.date {{ color: {accent}; font-weight: bold; }}
        tr:hover {{ background: rgba({accent_rgb}, 0.05); }}
        .positive {{ color: #00d4aa; }}
        .negative {{ color: #ff4757; }}
        .info-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 25px; margin: 30px 0; }}
        .info-card {{ background: #111827; border: 1px solid #1e3a5f; border-radius: 12px; padding: 25px; }}
        .info-card h3 {{ color: {accent}; margin-bottom: 15px; }}
        .info-card p {{ color: #8b92a8; line-height: 1.8; margin-bottom: 10px; }}
        .ad-container {{ background: #1a1f2e; border: 2px dashed #2d3748; border-radius: 12px; padding: 60px 20px; text-align: center; margin: 30px 0; color: #4a5568; }}
        .sample-note {{ color: #f39c12; font-size: 0.85em; text-align: center; margin: 10px 0; }}
        footer {{ text-align: center; padding: 40px 0; color: #4a5568; border-top: 1px solid #1e3a5f; margin-top: 40px; }}
"#
    );
    css.push_str(extra);
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_theme_and_extra() {
        let css = stylesheet(&Theme::FUTURES, ".x { color: red; }");
        assert!(css.contains("max-width: 1000px"));
        assert!(css.contains("#f39c12"));
        assert!(css.ends_with(".x { color: red; }"));
    }

    #[test]
    fn derived_themes_keep_palette() {
        assert_eq!(Theme::IPO.accent, Theme::ETF.accent);
        assert_eq!(Theme::SCREENER.width, 1200);
        assert_eq!(Theme::STOCK.with_width(640).accent, "#00d4aa");
    }
}
