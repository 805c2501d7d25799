use premarket_pages::{QuoteSnapshot, QuoteState};
use premarket_pages::{dividends, earnings, economic, etfs, futures, indicators, ipo, stocks};

use crate::common::day;

#[test]
fn every_stock_page_names_its_company() {
    let today = day(2025, 2, 3);
    for s in stocks::STOCKS {
        let page = stocks::render_stock_page(s, &QuoteState::Unavailable, today, 2025);
        assert_eq!(page.path, format!("stock/{}.html", s.symbol));
        assert!(page.html.contains(s.symbol), "{} missing symbol", s.symbol);
        assert!(page.html.contains(s.name), "{} missing name", s.symbol);
        assert!(page.html.contains("$150.00"));
        assert!(page.html.contains(&format!(
            r#"<link rel="canonical" href="https://premarketbrief.com/stock/{}">"#,
            s.symbol
        )));
    }
}

#[test]
fn etf_pages_and_index_cover_catalog() {
    let today = day(2025, 2, 3);
    let index = etfs::render_etf_index(etfs::ETFS, 2025);
    for e in etfs::ETFS {
        let page = etfs::render_etf_page(e, &QuoteState::NotFetched, today, 2025);
        assert!(page.html.contains(e.name));
        assert!(index.html.contains(e.symbol));
        assert!(index.html.contains(e.name));
    }
}

#[test]
fn futures_board_lists_each_contract() {
    let board: Vec<(futures::Contract, QuoteState<QuoteSnapshot>)> = futures::CONTRACTS
        .iter()
        .map(|c| (*c, QuoteState::Unavailable))
        .collect();
    let page = futures::render_futures_page(&board, day(2025, 2, 3), 2025);
    for c in futures::CONTRACTS {
        assert!(page.html.contains(c.name));
        assert!(page.html.contains(c.ticker()));
    }
}

#[test]
fn calendars_list_each_record() {
    // before any catalog date, so nothing is filtered out as past
    let early = day(2025, 1, 1);

    let div = dividends::render_dividend_calendar(dividends::DIVIDENDS, early, 2025);
    for r in dividends::DIVIDENDS {
        assert!(div.html.contains(r.symbol) && div.html.contains(r.name));
    }

    let eco = economic::render_economic_calendar(economic::EVENTS, early, 2025);
    for e in economic::EVENTS {
        assert!(eco.html.contains(e.event), "missing {}", e.event);
    }

    let ipo_page = ipo::render_ipo_calendar(ipo::UPCOMING, ipo::RECENT, 2025);
    for i in ipo::UPCOMING {
        assert!(ipo_page.html.contains(i.symbol) && ipo_page.html.contains(i.company));
    }
    for i in ipo::RECENT {
        assert!(ipo_page.html.contains(i.symbol) && ipo_page.html.contains(i.company));
    }

    let earn = earnings::render_earnings_calendar(earnings::COMPANIES, early, 2025);
    for c in earnings::COMPANIES {
        assert!(earn.html.contains(c.symbol) && earn.html.contains(c.name));
    }

    let idx = indicators::render_indicators_index(indicators::INDICATORS, 2025);
    for i in indicators::INDICATORS {
        assert!(idx.html.contains(i.name));
    }
}

#[test]
fn pages_share_the_document_frame() {
    let page = dividends::render_dividend_calendar(dividends::DIVIDENDS, day(2025, 2, 3), 2025);
    assert!(page.html.starts_with("<!DOCTYPE html>"));
    assert!(page.html.contains("© 2025 Pre-Market Brief"));
    assert!(page.html.trim_end().ends_with("</html>"));
}
