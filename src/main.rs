use crate::availability::available;
use crate::catalog::Catalog;
use crate::hotel::Hotel;
use crate::night::{Night, Stay};
use crate::occupancy::Occupancy;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::settings::Style;

mod availability;
mod booking;
mod catalog;
mod error;
mod hotel;
mod night;
mod occupancy;
mod rows;

/// Lists the hotels that have a free room on every night of a stay.
#[derive(Parser)]
struct Args {
    /// Path to the hotel catalog CSV (hotel,rooms)
    #[arg(long, value_name = "FILE")]
    hotels: PathBuf,

    /// Path to the booking ledger CSV (hotel,checkin,checkout)
    #[arg(long, value_name = "FILE")]
    bookings: PathBuf,

    /// First night of the stay (yyyy-mm-dd)
    #[arg(long, value_name = "DATE")]
    checkin: Night,

    /// Check-out date (yyyy-mm-dd); that night is not part of the stay
    #[arg(long, value_name = "DATE")]
    checkout: Night,

    /// How to print the available hotels
    #[arg(long, value_enum, default_value = "plain")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One hotel identifier per line, ascending
    Plain,
    /// Table of available hotels with their room counts
    Table,
    /// JSON array of hotel identifiers
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let stay = Stay::new(args.checkin, args.checkout)?;
    let catalog = Catalog::load_from_file(&args.hotels)?;
    let occupancy = Occupancy::load_from_file(&args.bookings, &catalog)?;
    let free = available(&stay, &catalog, &occupancy);

    match args.format {
        Format::Plain => {
            for id in &free {
                println!("{id}");
            }
        }
        Format::Table => {
            let rows: Vec<&Hotel> = free.iter().filter_map(|id| catalog.get(id)).collect();
            let mut table = tabled::Table::new(&rows);
            table.with(Style::rounded());
            table.with(tabled::settings::Alignment::left());
            println!("{table}");
        }
        Format::Json => println!("{}", json!(free)),
    }
    Ok(())
}
