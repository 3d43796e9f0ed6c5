//! Parser boundary over the search result page.
//!
//! Everything that depends on the site's markup sits behind
//! [`TimetablePage`]; a layout change means a new implementation, not a new
//! pipeline.

use scraper::{ElementRef, Html};

use crate::error::LookupError;
use crate::schedule::{self, DepartureEntry};
use crate::validate;

/// A search result page that can be checked for rejections and read for
/// departures.
pub trait TimetablePage {
    /// Fail with the first rejection the page (or its resolved URL) carries.
    fn check(&self, resolved_url: &str) -> Result<(), LookupError>;

    /// Departure entries in page order.
    fn departures(&self) -> Result<Vec<DepartureEntry>, LookupError>;
}

/// Result page of tutu.ru's suburban search.
pub struct TutuPage {
    document: Html,
}

impl TutuPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }
}

impl TimetablePage for TutuPage {
    fn check(&self, resolved_url: &str) -> Result<(), LookupError> {
        validate::validate(resolved_url, &self.document)
    }

    fn departures(&self) -> Result<Vec<DepartureEntry>, LookupError> {
        schedule::extract(&self.document)
    }
}

/// Concatenated text of an element and its descendants.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
