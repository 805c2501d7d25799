use httpmock::Method::GET;
use premarket_pages::{CompanyProfile, fetch_profile_or_default};

use crate::common::{client_for, setup_server, summary_body};

#[tokio::test]
async fn profile_reads_name_and_industry() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/NVDA")
            .query_param("modules", "quoteType,assetProfile");
        then.status(200)
            .header("content-type", "application/json")
            .body(summary_body("NVIDIA Corporation", "Semiconductors"));
    });

    let client = client_for(&server);
    let p = fetch_profile_or_default(&client, "NVDA").await;
    mock.assert();
    assert_eq!(p.name.as_deref(), Some("NVIDIA Corporation"));
    assert_eq!(p.sector.as_deref(), Some("Semiconductors"));
}

#[tokio::test]
async fn failed_profile_is_empty() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/GME");
        then.status(401).body("unauthorized");
    });

    let client = client_for(&server);
    assert_eq!(fetch_profile_or_default(&client, "GME").await, CompanyProfile::default());
}
