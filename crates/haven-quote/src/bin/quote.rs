//! # Quote CLI
//!
//! Prices a stay against a listings fixture file, for support staff and
//! for checking fixtures by hand.
//!
//! ## Usage
//! ```bash
//! cargo run -p haven-quote --bin quote -- \
//!     --listings crates/haven-quote/fixtures/listings.json \
//!     --listing 6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b \
//!     --from 2024-02-10 --to 2024-02-17 \
//!     --adults 2 --children 1
//!
//! # Custom config and "today"
//! cargo run -p haven-quote --bin quote -- ... --config crates/haven-quote/fixtures/quote.toml --today 2024-02-01
//! ```
//!
//! ## Output
//! - Bookable: the quote as JSON, exit code 0
//! - Refused: `{ kind, message, detail }` as JSON, exit code 1
//! - Anything else (bad arguments, missing files): message on stderr, exit code 2

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use haven_core::{DateRange, GuestCounts, StayValidator};
use haven_quote::{init_tracing, InMemoryListings, QuoteConfig, QuoteDesk, QuoteError, StayRequest};
use tracing::debug;

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    listings: Option<PathBuf>,
    listing_id: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: Option<NaiveDate>,
    config: Option<PathBuf>,
    guests: GuestCounts,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut i = 1;

    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{} needs a value", flag))?;

        match flag {
            "--listings" => parsed.listings = Some(PathBuf::from(value)),
            "--listing" => parsed.listing_id = Some(value.clone()),
            "--from" => parsed.from = Some(parse_date(flag, value)?),
            "--to" => parsed.to = Some(parse_date(flag, value)?),
            "--today" => parsed.today = Some(parse_date(flag, value)?),
            "--config" => parsed.config = Some(PathBuf::from(value)),
            "--adults" => parsed.guests.adults = parse_count(flag, value)?,
            "--children" => parsed.guests.children = parse_count(flag, value)?,
            "--infant" => parsed.guests.infant = parse_count(flag, value)?,
            "--pets" => parsed.guests.pets = parse_count(flag, value)?,
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 2;
    }

    Ok(parsed)
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("{} expects YYYY-MM-DD, got '{}'", flag, value))
}

fn parse_count(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a non-negative number, got '{}'", flag, value))
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("missing required argument {}", flag))
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = QuoteConfig::load(args.config)?;
    init_tracing(&config);

    let listings = InMemoryListings::from_path(required(args.listings, "--listings")?)?;
    let request = StayRequest {
        listing_id: required(args.listing_id, "--listing")?,
        range: DateRange::new(required(args.from, "--from")?, required(args.to, "--to")?),
        guests: args.guests,
    };
    let today = args
        .today
        .unwrap_or_else(|| StayValidator::for_today().today());
    debug!(%today, "Resolved quote date");

    let desk = QuoteDesk::new(listings, config);
    match desk.quote(&request, today) {
        Ok(quote) => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
            eprintln!(
                "{} nights, total {}",
                quote.nights,
                quote.breakdown.total.display_in(&quote.currency)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(QuoteError::Booking(err)) => {
            println!("{}", serde_json::to_string_pretty(&err.to_rejection())?);
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!(
                "usage: quote --listings <file.json> --listing <id> --from <YYYY-MM-DD> \
                 --to <YYYY-MM-DD> [--adults N] [--children N] [--infant N] [--pets N] \
                 [--today <YYYY-MM-DD>] [--config <file.toml>]"
            );
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("quote")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&argv(&[
            "--listings", "l.json", "--listing", "abc", "--from", "2024-02-10", "--to",
            "2024-02-12", "--adults", "2", "--pets", "1",
        ]))
        .unwrap();
        assert_eq!(args.listing_id.as_deref(), Some("abc"));
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert_eq!(args.guests.adults, 2);
        assert_eq!(args.guests.pets, 1);
        assert_eq!(args.guests.children, 0);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&argv(&["--from", "10/02/2024"])).is_err());
        assert!(parse_args(&argv(&["--adults", "-1"])).is_err());
        assert!(parse_args(&argv(&["--adults"])).is_err());
        assert!(parse_args(&argv(&["--bogus", "1"])).is_err());
    }
}
