use catering_engine::application::engine::{CateringEngine, DEFAULT_UPCOMING_LIMIT};
use catering_engine::error::CateringError;
use catering_engine::interfaces::csv::booking_writer::BookingWriter;
use catering_engine::interfaces::csv::menu_item_reader::MenuItemReader;
use catering_engine::interfaces::summary::{BookingItemRow, BookingSummary, Row};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file of menu items to add to the catalog
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Start from an empty catalog instead of the demo data
    #[arg(long)]
    no_sample_data: bool,

    /// Only list bookings from today onwards, soonest first
    #[arg(long, conflicts_with = "booking")]
    upcoming: bool,

    /// Print the line items of a single booking
    #[arg(long)]
    booking: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn write_output<T: Row>(format: OutputFormat, rows: Vec<T>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Csv => BookingWriter::new(out).write_rows(rows).into_diagnostic(),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows).into_diagnostic()?;
            writeln!(out).into_diagnostic()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let engine = CateringEngine::in_memory();
    let today = chrono::Local::now().date_naive();

    if !cli.no_sample_data {
        engine.seed_sample_data(today).await.into_diagnostic()?;
    }

    if let Some(path) = cli.menu {
        let file = File::open(path).into_diagnostic()?;
        for item in MenuItemReader::new(file).menu_items() {
            match item {
                Ok(item) => {
                    engine
                        .create_or_update_menu_item(item)
                        .await
                        .into_diagnostic()?;
                }
                Err(e) => tracing::error!("Error reading menu item: {}", e),
            }
        }
    }

    if let Some(id) = cli.booking {
        let booking = engine
            .get_booking(id)
            .await
            .into_diagnostic()?
            .ok_or(CateringError::NotFound { kind: "Booking", id })
            .into_diagnostic()?;
        let rows: Vec<BookingItemRow> = booking.items.iter().map(BookingItemRow::from).collect();
        return write_output(cli.format, rows);
    }

    let bookings = if cli.upcoming {
        engine
            .upcoming_bookings(today, DEFAULT_UPCOMING_LIMIT)
            .await
            .into_diagnostic()?
    } else {
        engine.list_bookings().await.into_diagnostic()?
    };
    let rows: Vec<BookingSummary> = bookings.iter().map(BookingSummary::from).collect();
    write_output(cli.format, rows)
}
