//! Next suburban train between two stations, looked up on tutu.ru.
//!
//! One search request, a handful of checks on the returned page, then the
//! first departure after the current time.

pub mod client;
pub mod error;
pub mod page;
pub mod query;
pub mod report;
pub mod schedule;
pub mod select;
pub mod stations;
pub mod validate;

use chrono::NaiveDateTime;

pub use client::{SearchClient, SearchConfig, SearchResponse};
pub use error::LookupError;
pub use page::{TimetablePage, TutuPage};
pub use query::SearchQuery;
pub use select::Departure;

/// Fetch the search page for `query` and pick the next departure.
pub async fn run_lookup(
    client: &SearchClient,
    query: &SearchQuery,
    now: NaiveDateTime,
) -> Result<Departure, LookupError> {
    let response = client.search(query).await?;
    let page = TutuPage::parse(&response.body);
    resolve(&page, &response.url, now)
}

/// Check a received page and pick the next departure from it.
pub fn resolve<P: TimetablePage>(
    page: &P,
    resolved_url: &str,
    now: NaiveDateTime,
) -> Result<Departure, LookupError> {
    page.check(resolved_url)?;
    let entries = page.departures()?;
    Ok(select::next_departure(&entries, now))
}
