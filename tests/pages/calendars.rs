use premarket_pages::{dividends, earnings, economic};

use crate::common::day;

#[test]
fn apple_dividend_is_upcoming_until_its_ex_date() {
    let aapl = |today| {
        dividends::upcoming(dividends::DIVIDENDS, today)
            .iter()
            .any(|r| r.symbol == "AAPL")
    };
    assert!(aapl(day(2025, 2, 10)));
    assert!(aapl(day(2025, 2, 15)));
    assert!(!aapl(day(2025, 2, 16)));

    let page = dividends::render_dividend_calendar(dividends::DIVIDENDS, day(2025, 2, 10), 2025);
    assert!(page.html.contains(r#"<td class="yield low">0.50%</td>"#));
}

#[test]
fn upcoming_dividends_are_date_ordered() {
    let up = dividends::upcoming(dividends::DIVIDENDS, day(2025, 1, 1));
    let dates: Vec<_> = up.iter().map(|r| r.ex_date().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    assert!(up.len() <= dividends::DIVIDENDS.len());

    let leaders = dividends::high_yield(dividends::DIVIDENDS);
    assert_eq!(leaders.len(), 10);
    assert!(leaders.windows(2).all(|w| w[0].yield_pct >= w[1].yield_pct));
}

#[test]
fn past_economic_events_drop_off() {
    let today = day(2025, 2, 8);
    let up = economic::upcoming(economic::EVENTS, today);
    assert!(up.iter().all(|e| e.day().unwrap() >= today));
    assert!(!up.iter().any(|e| e.date == "2025-02-07"));
    assert!(up.iter().any(|e| e.date == "2025-03-07" && e.event == "Nonfarm Payrolls"));

    let high = economic::high_impact(&up);
    assert!(high.iter().all(|e| e.impact == economic::Impact::High));
}

#[test]
fn empty_economic_calendar_uses_fallback_alert() {
    let page = economic::render_economic_calendar(economic::EVENTS, day(2030, 1, 1), 2030);
    assert!(page.html.contains("Nonfarm Payrolls - Coming Soon"));
    assert_eq!(economic::next_alert(&[]), "Nonfarm Payrolls - Coming Soon");
}

#[test]
fn earnings_page_is_reproducible_for_a_day() {
    let a = earnings::render_earnings_calendar(earnings::COMPANIES, day(2025, 3, 3), 2025);
    let b = earnings::render_earnings_calendar(earnings::COMPANIES, day(2025, 3, 3), 2025);
    assert_eq!(a, b);

    let sched = earnings::schedule(earnings::COMPANIES, day(2025, 3, 3));
    assert!(sched.windows(2).all(|w| w[0].date <= w[1].date));
}
