//! Wind Monitoring Service - command line entry point
//!
//! Fetches the station feed, reconstructs the 10-minute wind series and
//! prints the prevailing directions and peak wind speeds.
//!
//! Usage:
//!   cargo run --release -- innsbruck 3          # Summary message for one station
//!   cargo run --release -- innsbruck 3 --json   # Same, as JSON
//!   cargo run --release -- --all 1              # Every registered station, in turn
//!   cargo run --release -- --endpoint 8080      # Serve the HTTP endpoint on port 8080
//!
//! Environment:
//!   WINDMON_CONFIG   - configuration file (default: windmon.toml)
//!   WINDMON_BASE_URL - overrides the feed base URL
//!   RUST_LOG         - log filter (default: info)

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use windmon_service::analysis::summary::{direction_message, WindReport};
use windmon_service::config::Config;
use windmon_service::endpoint;
use windmon_service::service::WindService;
use windmon_service::stations::{all_station_names, ALLOWED_DAYS};

enum Command {
    Station { station: String, days: u32, json: bool },
    All { days: u32 },
    Endpoint { port: u16 },
}

fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {0} <STATION> <DAYS> [--json]\n  {0} --all <DAYS>\n  {0} --endpoint PORT\n\n\
         Stations: {1}\nDays: {2:?}",
        program,
        all_station_names().join(", "),
        ALLOWED_DAYS
    )
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut positional: Vec<&str> = Vec::new();
    let mut json = false;
    let mut all_days: Option<u32> = None;
    let mut endpoint_port: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json = true;
                i += 1;
            }
            "--all" => {
                let days = args.get(i + 1).ok_or("--all requires a number of days")?;
                all_days = Some(days.parse().map_err(|_| format!("invalid days '{}'", days))?);
                i += 2;
            }
            "--endpoint" => {
                let port = args.get(i + 1).ok_or("--endpoint requires a port number")?;
                endpoint_port = Some(port.parse().map_err(|_| format!("invalid port '{}'", port))?);
                i += 2;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {}", flag));
            }
            value => {
                positional.push(value);
                i += 1;
            }
        }
    }

    if let Some(port) = endpoint_port {
        return Ok(Command::Endpoint { port });
    }

    if let Some(days) = all_days {
        return Ok(Command::All { days });
    }

    match positional.as_slice() {
        [station, days] => Ok(Command::Station {
            station: station.to_string(),
            days: days.parse().map_err(|_| format!("invalid days '{}'", days))?,
            json,
        }),
        _ => Err("expected a station and a number of days".to_string()),
    }
}

fn print_report(report: &WindReport, json: bool) -> Result<(), String> {
    if json {
        let body = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        println!("{}", body);
    } else {
        println!("{}", direction_message(&report.summary));
        if report.hours_excluded > 0 {
            println!(
                "   ({} of {} hours excluded from hourly averages due to missing samples)",
                report.hours_excluded,
                report.hours_excluded + report.hours_used
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("windmon_service");

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, usage(program));
            return ExitCode::from(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut service = WindService::with_config(config);
    if let Err(e) = service.initialize() {
        eprintln!("❌ Initialization failed: {}", e);
        return ExitCode::FAILURE;
    }

    match command {
        Command::Station { station, days, json } => match service.report(&station, days) {
            Ok(report) => match print_report(&report, json) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                eprintln!("❌ {}", e);
                if e.is_transient() {
                    eprintln!("   Cannot reach the station feed. Check the connection and retry.");
                }
                ExitCode::FAILURE
            }
        },
        Command::All { days } => {
            let mut failures = 0;
            for (station, result) in service.report_all(days) {
                match result {
                    Ok(report) => println!("✓ {}\n", direction_message(&report.summary)),
                    Err(e) => {
                        failures += 1;
                        eprintln!("✗ {} - {}\n", station, e);
                    }
                }
            }
            if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Command::Endpoint { port } => {
            println!("🚀 Starting HTTP endpoint on http://0.0.0.0:{}", port);
            println!("   GET /wind/{{station}}/{{days}} - Wind summary");
            println!("   GET /stations - Station registry");
            println!("   GET /health - Service health check\n");

            match endpoint::start_endpoint_server(port, service) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("❌ Endpoint server error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
