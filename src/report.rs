//! Console rendering of a lookup outcome.

use std::io::{self, Write};

use crate::error::LookupError;
use crate::select::Departure;
use crate::stations::{Side, write_candidates};

const FETCH_FAILED: &str = "Получен некорректный html.";
const DAY_ELAPSED: &str = "Подходящего электропоезда нет, так как указанный день уже закончился.";

/// Write what the user sees for one run.
///
/// A same-day timetable with nothing left today prints nothing.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<Departure, LookupError>,
) -> io::Result<()> {
    match outcome {
        Ok(Departure::Next(time)) => {
            writeln!(out, "Подходящий электропоезд отправляется в {time}.")
        }
        Ok(Departure::DayElapsed) => writeln!(out, "{DAY_ELAPSED}"),
        Ok(Departure::NoneLater) => Ok(()),
        Err(err) => write_error(out, err),
    }
}

fn write_error<W: Write>(out: &mut W, err: &LookupError) -> io::Result<()> {
    writeln!(out, "{err}")?;
    match err {
        LookupError::AmbiguousStation {
            origin,
            destination,
        } => {
            write_candidates(out, Side::Origin, origin)?;
            write_candidates(out, Side::Destination, destination)
        }
        err if err.is_fetch_failure() => writeln!(out, "{FETCH_FAILED}"),
        _ => Ok(()),
    }
}
