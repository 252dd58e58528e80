mod config;
mod grid;
mod query;
mod telemetry;
mod tracking;
mod web;
mod window;
mod wspr;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::query::WsprLiveClient;
use crate::telemetry::{fetch_enhanced_telemetry, TelemetryRequest};
use crate::tracking::{fetch_track, TrackRequest};
use crate::wspr::Band;

#[derive(Parser)]
#[command(name = "wspr-track")]
#[command(about = "Balloon tracking and enhanced telemetry from WSPR reception reports")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair carrier reports with telemetry messages and decode them
    Telemetry {
        #[arg(long)]
        callsign: String,
        #[arg(long)]
        channel: u32,
        #[arg(long, value_enum)]
        band: Band,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day, YYYY-MM-DD (defaults to now)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Also print spots that carry no telemetry
        #[arg(long)]
        include_unmatched: bool,
    },
    /// Plain position track of a callsign
    Track {
        #[arg(long)]
        callsign: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Only transmissions starting at this minute of each ten
        #[arg(long)]
        minute: Option<u32>,
    },
    /// Serve the HTTP API
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let client = match WsprLiveClient::new(&config.query) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error creating query client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Telemetry {
            callsign,
            channel,
            band,
            start,
            end,
            include_unmatched,
        } => {
            let request =
                match TelemetryRequest::new(&callsign, channel, band, start, end, Utc::now()) {
                    Ok(r) => r.include_unmatched(include_unmatched),
                    Err(e) => {
                        eprintln!("Invalid request: {}", e);
                        return ExitCode::FAILURE;
                    }
                };
            match fetch_enhanced_telemetry(&client, &request).await {
                Ok(spots) => print_json(&spots),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Track {
            callsign,
            start,
            end,
            minute,
        } => {
            let request = match TrackRequest::new(&callsign, start, end, Utc::now(), minute) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Invalid request: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            match fetch_track(&client, &request).await {
                Ok(track) => print_json(&track),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Serve => match web::run_server(config, client).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Server error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            ExitCode::FAILURE
        }
    }
}
