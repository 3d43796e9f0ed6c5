//! Departure entries from the timetable section of a result page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::LookupError;
use crate::page::element_text;

static DIRECT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#timetable").unwrap());
static CONNECTING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#schedule_table").unwrap());
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// A link in the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureEntry {
    /// Visible text, `HH:MM` on route-leading entries
    pub display_time: String,
    /// `href`; may end in `date=DD.MM.YYYY`
    pub link_target: String,
}

/// Every link of the timetable in page order.
///
/// Direct routes render a `div#timetable`; routes with a change render a
/// `table#schedule_table` instead.
pub fn extract(document: &Html) -> Result<Vec<DepartureEntry>, LookupError> {
    let container = timetable(document).ok_or(LookupError::ScheduleNotFound)?;

    let entries: Vec<DepartureEntry> = container
        .select(&ANCHOR_SELECTOR)
        .map(|anchor| DepartureEntry {
            display_time: element_text(anchor).trim().to_string(),
            link_target: anchor.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect();

    if entries.is_empty() {
        return Err(LookupError::ScheduleNotFound);
    }
    debug!(count = entries.len(), "timetable entries extracted");
    Ok(entries)
}

fn timetable(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(direct) = document.select(&DIRECT_SELECTOR).next() {
        return Some(direct);
    }
    debug!("no direct timetable, trying connecting route table");
    document
        .select(&CONNECTING_SELECTOR)
        .next()?
        .select(&BODY_SELECTOR)
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_timetable() {
        let document = Html::parse_document(
            r#"<div id="timetable">
                 <a href="/view.php?id=1">08:00</a>
                 <a href="/station.php?nnst=2">Пушкин</a>
               </div>"#,
        );
        let entries = extract(&document).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_time, "08:00");
        assert_eq!(entries[0].link_target, "/view.php?id=1");
        assert_eq!(entries[1].display_time, "Пушкин");
    }

    #[test]
    fn connecting_table_uses_body_only() {
        let document = Html::parse_document(
            r#"<table id="schedule_table">
                 <thead><tr><th><a href="/sort">Время</a></th></tr></thead>
                 <tbody><tr><td><a href="/view.php?id=7">10:30</a></td></tr></tbody>
               </table>"#,
        );
        let entries = extract(&document).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_time, "10:30");
    }

    #[test]
    fn direct_wins_over_connecting() {
        let document = Html::parse_document(
            r#"<div id="timetable"><a href="/a">07:00</a></div>
               <table id="schedule_table"><tbody><tr><td><a href="/b">09:00</a></td></tr></tbody></table>"#,
        );
        assert_eq!(extract(&document).unwrap()[0].display_time, "07:00");
    }

    #[test]
    fn missing_or_empty_timetable() {
        let document = Html::parse_document("<div>nothing</div>");
        assert!(matches!(
            extract(&document),
            Err(LookupError::ScheduleNotFound)
        ));

        let document = Html::parse_document(r#"<div id="timetable"></div>"#);
        assert!(matches!(
            extract(&document),
            Err(LookupError::ScheduleNotFound)
        ));
    }
}
