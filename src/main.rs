use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use prigorod_next::report::write_outcome;
use prigorod_next::{
    Departure, LookupError, SearchClient, SearchConfig, SearchQuery, run_lookup,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Next suburban train between two stations.
///
/// Multi-word station names are written with underscores,
/// e.g. Ленинский_Проспект.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Departure date, DD.MM.YYYY
    date: Option<String>,
    /// Origin station
    origin: Option<String>,
    /// Destination station
    destination: Option<String>,
    /// Anything after the destination is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage problems are reported, not turned into an exit status.
            e.print().ok();
            return;
        }
    };
    let outcome = lookup(args, Local::now().naive_local()).await;

    let mut stdout = io::stdout().lock();
    if let Err(e) = write_outcome(&mut stdout, &outcome) {
        error!("failed to write result: {e}");
    }
    stdout.flush().ok();
}

async fn lookup(args: Args, now: NaiveDateTime) -> Result<Departure, LookupError> {
    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "extra arguments ignored");
    }
    let query = SearchQuery::from_args(args.date, args.origin, args.destination)?;
    let client = SearchClient::new(SearchConfig::default())?;
    run_lookup(&client, &query, now).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_arguments_are_ignored() {
        let args =
            Args::try_parse_from(["prigorod-next", "01.05.2026", "a", "b", "extra", "--more"])
                .unwrap();
        assert_eq!(args.date.as_deref(), Some("01.05.2026"));
        assert_eq!(args.origin.as_deref(), Some("a"));
        assert_eq!(args.destination.as_deref(), Some("b"));
        assert_eq!(args.rest, ["extra", "--more"]);
    }

    #[test]
    fn no_arguments_parse() {
        let args = Args::try_parse_from(["prigorod-next"]).unwrap();
        assert!(args.date.is_none());
        assert!(args.rest.is_empty());
    }
}
