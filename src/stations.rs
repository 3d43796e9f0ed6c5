//! Station candidates offered when a name is ambiguous.

use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::page::element_text;

static LEFT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.stationSelectLeft").unwrap());
static RIGHT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.stationSelectRight").unwrap());
static LABEL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("label").unwrap());
static QUALIFIER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.small").unwrap());

/// Which end of the trip a candidate list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Origin,
    Destination,
}

impl Side {
    fn selector(self) -> &'static Selector {
        match self {
            Side::Origin => &LEFT_SELECTOR,
            Side::Destination => &RIGHT_SELECTOR,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Side::Origin => "Пункт отправления:",
            Side::Destination => "Пункт прибытия:",
        }
    }
}

/// A station the site proposed for an ambiguous name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCandidate {
    pub name: String,
    /// Region or line hint, e.g. `МО`
    pub qualifier: String,
}

impl fmt::Display for StationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.qualifier)
    }
}

/// Candidates for one side of the station selection form, in page order.
///
/// Each label embeds its qualifier; the qualifier text is cut out of the
/// label to get the bare name.
pub fn candidates(selection: ElementRef<'_>, side: Side) -> Vec<StationCandidate> {
    let Some(column) = selection.select(side.selector()).next() else {
        return Vec::new();
    };

    column
        .select(&LABEL_SELECTOR)
        .map(|label| {
            let qualifier = label
                .select(&QUALIFIER_SELECTOR)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let label_text = element_text(label);
            let name = if qualifier.is_empty() {
                label_text.trim().to_string()
            } else {
                label_text.replace(&qualifier, "").trim().to_string()
            };
            StationCandidate {
                name,
                qualifier: qualifier.trim().to_string(),
            }
        })
        .collect()
}

/// Write one side's heading followed by a line per candidate.
pub fn write_candidates<W: Write>(
    out: &mut W,
    side: Side,
    candidates: &[StationCandidate],
) -> io::Result<()> {
    writeln!(out, "{}", side.heading())?;
    for candidate in candidates {
        writeln!(out, "\t{candidate}")?;
    }
    Ok(())
}
