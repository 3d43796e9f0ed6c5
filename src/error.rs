//! Lookup error types.
//!
//! Every variant ends the run. `Display` is the message shown to the user.

use crate::stations::StationCandidate;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No departure date was given on the command line
    #[error("Вы не указали дату отправления.")]
    MissingDate,

    /// The endpoint could not be reached
    #[error("Сайта не существует или проблемы с интернет соединением.")]
    Connectivity(#[source] reqwest::Error),

    /// Final status outside 200..=399
    #[error("[{status}] - ошибка клиента или сервера.")]
    Server { status: u16 },

    /// The site rejected the date
    #[error("Дата отправления была введена не корректно.")]
    InvalidDate,

    /// Origin and destination resolved to the same place
    #[error("Для отправки и отбытия вы указали одну и туже станцию.")]
    SameStation,

    /// Inline message from the station selection form
    #[error("{0}")]
    SiteMessage(String),

    /// At least one station name matched several stations
    #[error("Пожалуйста уточните станции и запустите скрипт с более конкретными названиями.")]
    AmbiguousStation {
        origin: Vec<StationCandidate>,
        destination: Vec<StationCandidate>,
    },

    /// Generic warning banner
    #[error("{0}")]
    SiteWarning(String),

    /// Neither timetable shape present, or it had no entries
    #[error("Расписание на странице не найдено.")]
    ScheduleNotFound,
}

impl LookupError {
    /// True for failures that happen before any page was received.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, LookupError::Connectivity(_) | LookupError::Server { .. })
    }
}
