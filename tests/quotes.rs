mod common;

#[path = "quotes/cache.rs"]
mod quotes_cache;
#[path = "quotes/chart.rs"]
mod quotes_chart;
#[path = "quotes/fail_soft.rs"]
mod quotes_fail_soft;
#[path = "quotes/profile.rs"]
mod quotes_profile;
