//! # taxi-fare CLI
//!
//! Estimates a fare from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use taxi_fare::form::FareForm;
use taxi_fare::receipt::Receipt;
use taxi_fare::tariff::Tariff;
use taxi_fare::FareCalculator;
use tracing_subscriber::EnvFilter;

/// Estimate a taxi fare
#[derive(Parser)]
#[command(name = "taxi-fare")]
#[command(about = "Estimate a Tunisian taxi fare from trip details")]
struct Cli {
    /// Trip distance in kilometers
    #[arg(short, long, allow_hyphen_values = true)]
    distance: String,

    /// Waiting time in minutes
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    waiting: String,

    /// Number of large packages
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    baggage: String,

    /// Apply the night rate (9PM - 5AM)
    #[arg(short, long)]
    night: bool,

    /// JSON file overriding the official tariff
    #[arg(long)]
    tariff: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let tariff = match &cli.tariff {
        Some(path) => Tariff::from_json_file(path)
            .with_context(|| format!("loading tariff from {}", path.display()))?,
        None => Tariff::official(),
    };
    let calculator = FareCalculator::new(tariff)?;

    let form = FareForm::new(cli.distance)
        .with_waiting_time(cli.waiting)
        .with_baggage(cli.baggage)
        .with_night_rate(cli.night);
    let trip = form.parse()?;
    let fare = calculator.calculate(&trip)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&fare)?);
    } else {
        let receipt = Receipt::from_form(&form, &trip, &fare, calculator.tariff());
        print!("{receipt}");
    }

    Ok(())
}
