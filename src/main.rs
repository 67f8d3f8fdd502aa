//! CLI entry point for the booking dashboard tool.
//!
//! Provides subcommands for computing the dashboard payload for one hotel,
//! listing the hotels present in a dataset, and exporting reports for all of
//! them at once.

use anyhow::Result;
use booking_dashboard::booking::{distinct_hotels, filter_by_hotel};
use booking_dashboard::fetch::load_source;
use booking_dashboard::output::{print_json, print_pretty, write_json, write_table_csv};
use booking_dashboard::parser::parse_bookings;
use booking_dashboard::pipeline::aggregate::build_report;
use booking_dashboard::pipeline::export::export_all;
use booking_dashboard::stats::Kpis;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "booking_dashboard")]
#[command(about = "A tool to compute hotel booking dashboard data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the dashboard report for one hotel type
    Report {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Hotel type to filter by (e.g. "Resort Hotel")
        #[arg(short = 't', long)]
        hotel: String,

        /// JSON file to write the report to; logged as JSON when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Directory to write the six aggregate tables as CSV
        #[arg(long)]
        tables_dir: Option<String>,
    },
    /// List hotel types present in a dataset
    ListHotels {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
    /// Export a report for every hotel plus an index
    Export {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Directory to write JSON reports to
        #[arg(short, long, default_value = "reports")]
        output_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/booking_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("booking_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            source,
            hotel,
            output,
            tables_dir,
        } => {
            let bytes = load_source(&source).await?;
            let table = parse_bookings(&bytes)?;

            let report = build_report(&table, &hotel);

            if report.kpis.total_bookings == 0 {
                warn!(hotel = %hotel, "No bookings matched the selection");
            }

            info!(
                hotel = %hotel,
                total_bookings = report.kpis.total_bookings,
                avg_lead_time = report.kpis.avg_lead_time,
                cancel_rate = report.kpis.cancel_rate,
                "Report computed"
            );
            print_pretty(&report);

            if let Some(dir) = &tables_dir {
                write_table_csv(
                    &format!("{dir}/bookings_per_month.csv"),
                    &report.bookings_per_month,
                )?;
                write_table_csv(
                    &format!("{dir}/bookings_by_room_type.csv"),
                    &report.bookings_by_room_type,
                )?;
                write_table_csv(
                    &format!("{dir}/adr_vs_lead_time.csv"),
                    &report.adr_vs_lead_time,
                )?;
                write_table_csv(
                    &format!("{dir}/adr_by_room_type.csv"),
                    &report.adr_by_room_type,
                )?;
                write_table_csv(
                    &format!("{dir}/cancellations_by_deposit.csv"),
                    &report.cancellations_by_deposit,
                )?;
                write_table_csv(
                    &format!("{dir}/cancellations_by_segment.csv"),
                    &report.cancellations_by_segment,
                )?;
                info!(dir = %dir, "Aggregate tables written");
            }

            match &output {
                Some(path) => {
                    write_json(path, &report)?;
                    info!(path = %path, "Report written");
                }
                None => print_json(&report)?,
            }
        }
        Commands::ListHotels { source } => {
            let bytes = load_source(&source).await?;
            let table = parse_bookings(&bytes)?;

            let hotels = distinct_hotels(&table);
            info!(total = hotels.len(), "Hotel list loaded");

            for hotel in &hotels {
                let view = filter_by_hotel(&table, hotel);
                let kpis = Kpis::from_view(&view);

                info!(
                    hotel = %hotel,
                    bookings = kpis.total_bookings,
                    cancel_rate = kpis.cancel_rate,
                    "Hotel"
                );
            }

            info!(rows = table.len(), hotels = hotels.len(), "Dataset summary");
        }
        Commands::Export { source, output_dir } => {
            let bytes = load_source(&source).await?;
            let table = parse_bookings(&bytes)?;

            export_all(&table, &output_dir)?;
            info!(output_dir = %output_dir, "Export complete");
        }
    }

    Ok(())
}
