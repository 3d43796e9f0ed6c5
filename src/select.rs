//! Picks the next train from the timetable entries.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tracing::{debug, warn};

use crate::schedule::DepartureEntry;

/// Links per route in a same-day timetable; the first carries the departure.
pub const ROUTE_STRIDE: usize = 4;

const DATE_MARKER: &str = "date=";

static LINK_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}\.\d{1,2}\.\d{4})$").unwrap());

/// What the timetable says about the next train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// Departure time as shown on the page
    Next(String),
    /// The requested day is already over
    DayElapsed,
    /// Same-day timetable with nothing after the current time
    NoneLater,
}

/// Choose the next departure relative to `now`.
///
/// If the first link is dated for another day the page lists that day's
/// trains: a past day has no suitable train, a future one answers with its
/// first entry. Otherwise every [`ROUTE_STRIDE`]th entry is a departure and
/// the first strictly later than the clock time wins.
pub fn next_departure(entries: &[DepartureEntry], now: NaiveDateTime) -> Departure {
    let Some(first) = entries.first() else {
        return Departure::NoneLater;
    };

    let today = now.date();
    if let Some(date) = linked_date(&first.link_target) {
        if date != today {
            debug!(%date, %today, "timetable is for another day");
            if date < today {
                return Departure::DayElapsed;
            }
            return Departure::Next(first.display_time.clone());
        }
    }

    let clock = now.time();
    for entry in entries.iter().step_by(ROUTE_STRIDE) {
        let time = match NaiveTime::parse_from_str(&entry.display_time, "%H:%M") {
            Ok(time) => time,
            Err(e) => {
                warn!(text = %entry.display_time, error = %e, "skipping unreadable departure time");
                continue;
            }
        };
        if clock < time {
            return Departure::Next(entry.display_time.clone());
        }
    }

    debug!(%clock, "no departure later than now");
    Departure::NoneLater
}

/// Date encoded at the end of a `date=` link, if any.
fn linked_date(href: &str) -> Option<NaiveDate> {
    if !href.contains(DATE_MARKER) {
        return None;
    }
    let parsed = LINK_DATE_REGEX
        .captures(href)
        .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%d.%m.%Y").ok());
    if parsed.is_none() {
        warn!(%href, "link has a date marker but no readable date");
    }
    parsed
}
