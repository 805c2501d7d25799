//! The HTML shell every generated page is poured into.
//!
//! Page families only build their `<body>` fragment and pick a [`Theme`]; document head,
//! stylesheet, navigation and footer come from [`Page::to_html`].

pub mod format;
pub mod style;

use std::fmt::Write as _;

pub use format::escape_html;
pub use style::Theme;

/// Public origin used for canonical links.
pub const SITE_URL: &str = "https://premarketbrief.com";

/// `(href, label)` of a navigation link.
pub type NavLink = (&'static str, &'static str);

pub const HOME: NavLink = ("/", "← Home");

/// One self-contained HTML document.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    theme: Theme,
    year: i32,
    description: Option<String>,
    keywords: Option<String>,
    canonical: Option<String>,
    extra_css: &'static str,
    nav: Vec<NavLink>,
    body: String,
    footer_note: Option<String>,
    disclaimer: Option<&'static str>,
}

impl Page {
    pub fn new(title: impl Into<String>, theme: Theme, year: i32) -> Self {
        Self {
            title: title.into(),
            theme,
            year,
            description: None,
            keywords: None,
            canonical: None,
            extra_css: "",
            nav: vec![HOME],
            body: String::new(),
            footer_note: None,
            disclaimer: None,
        }
    }

    #[must_use]
    pub fn description(mut self, d: impl Into<String>) -> Self {
        self.description = Some(d.into());
        self
    }

    #[must_use]
    pub fn keywords(mut self, k: impl Into<String>) -> Self {
        self.keywords = Some(k.into());
        self
    }

    /// Canonical link, as a path below [`SITE_URL`] (e.g. `/stock/AAPL`).
    #[must_use]
    pub fn canonical(mut self, path: &str) -> Self {
        self.canonical = Some(format!("{SITE_URL}{path}"));
        self
    }

    /// Family-specific CSS appended to the shared stylesheet.
    #[must_use]
    pub fn css(mut self, extra: &'static str) -> Self {
        self.extra_css = extra;
        self
    }

    /// Navigation links after the home link.
    #[must_use]
    pub fn nav(mut self, links: &[NavLink]) -> Self {
        self.nav.truncate(1);
        self.nav.extend_from_slice(links);
        self
    }

    #[must_use]
    pub fn body(mut self, body: String) -> Self {
        self.body = body;
        self
    }

    /// Text after `Pre-Market Brief |` in the footer.
    #[must_use]
    pub fn footer_note(mut self, note: impl Into<String>) -> Self {
        self.footer_note = Some(note.into());
        self
    }

    /// Small print line below the footer note.
    #[must_use]
    pub fn disclaimer(mut self, text: &'static str) -> Self {
        self.disclaimer = Some(text);
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 6144);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(out, "    <title>{}</title>", self.title);
        if let Some(d) = &self.description {
            let _ = writeln!(out, "    <meta name=\"description\" content=\"{d}\">");
        }
        if let Some(k) = &self.keywords {
            let _ = writeln!(out, "    <meta name=\"keywords\" content=\"{k}\">");
        }
        if let Some(c) = &self.canonical {
            let _ = writeln!(out, "    <link rel=\"canonical\" href=\"{c}\">");
        }
        let _ = writeln!(
            out,
            "    <style>{}    </style>",
            style::stylesheet(&self.theme, self.extra_css)
        );
        out.push_str("</head>\n<body>\n    <div class=\"container\">\n        <nav>");
        for (href, label) in &self.nav {
            let _ = write!(out, "<a href=\"{href}\">{label}</a>");
        }
        out.push_str("</nav>\n");
        out.push_str(&self.body);
        out.push_str("\n        <footer>\n");
        match &self.footer_note {
            Some(note) => {
                let _ = writeln!(
                    out,
                    "            <p>© {} Pre-Market Brief | {note}</p>",
                    self.year
                );
            }
            None => {
                let _ = writeln!(out, "            <p>© {} Pre-Market Brief</p>", self.year);
            }
        }
        if let Some(small) = self.disclaimer {
            let _ = writeln!(
                out,
                "            <p style=\"margin-top: 10px; font-size: 0.8em;\">{small}</p>"
            );
        }
        out.push_str("        </footer>\n    </div>\n</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_has_head_nav_and_footer() {
        let html = Page::new("Title Here", Theme::STOCK, 2025)
            .description("desc")
            .canonical("/stock/AAPL")
            .nav(&[("/screener.html", "Screener")])
            .body("<main>hi</main>".into())
            .footer_note("AAPL data")
            .disclaimer("Not investment advice.")
            .to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Title Here</title>"));
        assert!(html.contains("href=\"https://premarketbrief.com/stock/AAPL\""));
        assert!(html.contains("<a href=\"/\">← Home</a><a href=\"/screener.html\">Screener</a>"));
        assert!(html.contains("<main>hi</main>"));
        assert!(html.contains("© 2025 Pre-Market Brief | AAPL data"));
        assert!(html.contains("Not investment advice."));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn optional_head_entries_are_omitted() {
        let html = Page::new("T", Theme::ETF, 2030).to_html();
        assert!(!html.contains("rel=\"canonical\""));
        assert!(!html.contains("name=\"keywords\""));
        assert!(html.contains("© 2030 Pre-Market Brief</p>"));
    }
}
