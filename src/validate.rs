//! Rejection checks on a search result page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::LookupError;
use crate::page::element_text;
use crate::stations::{self, Side};

/// Resolved URL suffix when the site threw the date out.
const DATE_REJECTED_SUFFIX: &str = "all";
/// Resolved URL marker when both names point at one station.
const SAME_STATION_MARKER: &str = "nnst=";

static STATION_SELECT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.stationSelect").unwrap());
static MESSAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static WARNING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.warning_ico").unwrap());

/// Run the checks in order and stop at the first one that matches.
pub fn validate(resolved_url: &str, document: &Html) -> Result<(), LookupError> {
    if resolved_url.ends_with(DATE_REJECTED_SUFFIX) {
        return Err(LookupError::InvalidDate);
    }

    if resolved_url.contains(SAME_STATION_MARKER) {
        return Err(LookupError::SameStation);
    }

    if let Some(selection) = document.select(&STATION_SELECT_SELECTOR).next() {
        if let Some(message) = selection.select(&MESSAGE_SELECTOR).next() {
            return Err(LookupError::SiteMessage(first_sentence(&element_text(
                message,
            ))));
        }

        let origin = stations::candidates(selection, Side::Origin);
        let destination = stations::candidates(selection, Side::Destination);
        debug!(
            origin = origin.len(),
            destination = destination.len(),
            "station names are ambiguous"
        );
        return Err(LookupError::AmbiguousStation {
            origin,
            destination,
        });
    }

    if let Some(warning) = document.select(&WARNING_SELECTOR).next() {
        return Err(LookupError::SiteWarning(element_text(warning)));
    }

    Ok(())
}

/// Text up to the first period, period included.
fn first_sentence(text: &str) -> String {
    let head = text.split('.').next().unwrap_or_default();
    format!("{}.", head.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_URL: &str = "https://www.tutu.ru/prigorod/search.php?st1=a&st2=b&date=01.05.2026";

    fn check(url: &str, body: &str) -> Result<(), LookupError> {
        validate(url, &Html::parse_document(body))
    }

    #[test]
    fn rejected_date_comes_first() {
        let body = r#"<div class="warning_ico">ignored</div>"#;
        let err = check("https://www.tutu.ru/prigorod/?date=all", body).unwrap_err();
        assert!(matches!(err, LookupError::InvalidDate));
    }

    #[test]
    fn same_station_marker() {
        let err = check("https://www.tutu.ru/prigorod/?nnst=123", "").unwrap_err();
        assert!(matches!(err, LookupError::SameStation));
    }

    #[test]
    fn inline_message_is_cut_at_first_period() {
        let body = r#"<div class="stationSelect"><p>
            Станция не найдена. Попробуйте другое название.</p></div>"#;
        match check(SEARCH_URL, body).unwrap_err() {
            LookupError::SiteMessage(text) => assert_eq!(text, "Станция не найдена."),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn selection_without_message_is_ambiguous() {
        let body = r#"<div class="stationSelect">
            <div class="stationSelectLeft">
              <label>Пушкино<span class="small">MO</span></label>
              <label>Пушкино<span class="small">SPB</span></label>
            </div>
            <div class="stationSelectRight">
              <label>Сусанино<span class="small">SPB</span></label>
            </div>
          </div>
          <div class="warning_ico">not reached</div>"#;
        match check(SEARCH_URL, body).unwrap_err() {
            LookupError::AmbiguousStation {
                origin,
                destination,
            } => {
                assert_eq!(origin.len(), 2);
                assert_eq!(destination.len(), 1);
                assert_eq!(origin[1].qualifier, "SPB");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn warning_banner_text_is_verbatim() {
        let body = r#"<html><body><div class="warning_ico">X</div></body></html>"#;
        match check(SEARCH_URL, body).unwrap_err() {
            LookupError::SiteWarning(text) => assert_eq!(text, "X"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clean_page_passes() {
        let body = r#"<div id="timetable"><a href="/view.php">08:00</a></div>"#;
        assert!(check(SEARCH_URL, body).is_ok());
    }

    #[test]
    fn first_sentence_without_period() {
        assert_eq!(first_sentence("Нет маршрута"), "Нет маршрута.");
    }
}
