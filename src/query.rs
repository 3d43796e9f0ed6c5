//! Search query built from command-line arguments.

use crate::error::LookupError;

pub const DEFAULT_ORIGIN: &str = "Санкт-Петербург";
pub const DEFAULT_DESTINATION: &str = "Сусанино";

/// Fixed action flag the search form submits.
const ACTION_FLAG: (&str, &str) = ("button", "clicked1");

/// One lookup: date plus origin and destination station names.
///
/// The date is passed to the site as typed (`DD.MM.YYYY`); the site is the
/// one that rejects malformed dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub departure_date: String,
    pub origin: String,
    pub destination: String,
}

impl SearchQuery {
    /// Build a query from raw arguments.
    ///
    /// Missing stations fall back to the defaults. Underscores in station
    /// names stand for spaces.
    pub fn from_args(
        date: Option<String>,
        origin: Option<String>,
        destination: Option<String>,
    ) -> Result<Self, LookupError> {
        let departure_date = date.ok_or(LookupError::MissingDate)?;
        let origin = origin.unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let destination = destination.unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        Ok(Self {
            departure_date,
            origin: decode_station(&origin),
            destination: decode_station(&destination),
        })
    }

    /// Query string parameters in the order the site's form sends them.
    pub fn params(&self) -> [(&str, &str); 4] {
        [
            ("st1", self.origin.as_str()),
            ("st2", self.destination.as_str()),
            ("date", self.departure_date.as_str()),
            ACTION_FLAG,
        ]
    }
}

fn decode_station(name: &str) -> String {
    name.replace('_', " ")
}
