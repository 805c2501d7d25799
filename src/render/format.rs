//! Number, date and text formatting shared by every page family.

use chrono::NaiveDate;

/// `value` with `dp` fixed decimals.
pub fn fixed(value: f64, dp: usize) -> String {
    format!("{value:.dp$}")
}

/// Dollar amount with two decimals, e.g. `$150.00`.
pub fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

/// Percentage with an explicit `+` on non-negative values, e.g. `+2.50%`.
pub fn signed_pct(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Share count in millions with one decimal, e.g. `25.0M`.
pub fn millions(volume: f64) -> String {
    format!("{:.1}M", volume / 1_000_000.0)
}

/// `positive` for values at or above zero, else `negative`.
pub fn direction_class(value: f64) -> &'static str {
    if value >= 0.0 { "positive" } else { "negative" }
}

/// Short form of [`direction_class`] used by card borders.
pub fn up_down(value: f64) -> &'static str {
    if value >= 0.0 { "up" } else { "down" }
}

pub fn arrow(value: f64) -> &'static str {
    if value >= 0.0 { "▲" } else { "▼" }
}

/// `Sat, Feb 15`
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// `Feb 15`
pub fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `Saturday, February 15, 2025`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `Saturday, February 15`
pub fn weekday_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Parse a catalog date (`YYYY-MM-DD`). `N/A` and anything else malformed is `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Escape text for use inside HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(fixed(5.2, 2), "5.20");
        assert_eq!(dollars(150.0), "$150.00");
        assert_eq!(signed_pct(2.5), "+2.50%");
        assert_eq!(signed_pct(-1.234), "-1.23%");
        assert_eq!(signed_pct(0.0), "+0.00%");
        assert_eq!(millions(25_000_000.0), "25.0M");
        assert_eq!(millions(1_260_000.0), "1.3M");
    }

    #[test]
    fn classes() {
        assert_eq!(direction_class(0.0), "positive");
        assert_eq!(direction_class(-0.01), "negative");
        assert_eq!(up_down(-3.0), "down");
        assert_eq!(arrow(1.0), "▲");
    }

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        assert_eq!(weekday_short(d), "Sat, Feb 15");
        assert_eq!(month_day(d), "Feb 15");
        assert_eq!(long_date(d), "Saturday, February 15, 2025");
        assert_eq!(weekday_long(d), "Saturday, February 15");
        assert_eq!(parse_date("2025-02-15"), Some(d));
        assert_eq!(parse_date("N/A"), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"AT&T's"</b>"#),
            "&lt;b&gt;&quot;AT&amp;T&#39;s&quot;&lt;/b&gt;"
        );
    }
}
