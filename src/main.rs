//! FWS Gage Scraper - command line entry point
//!
//! Fetches one gage's stream elevation readings from the Harris County
//! Flood Warning System and prints them as JSON or saves them to a file.
//!
//! Usage:
//!   cargo run -- --gage 520
//!   cargo run -- --gage 520 --from "09/02/2017 07:31:00 AM" --span "6 Hours"
//!   cargo run -- --gage 520 --span "24 Hours" --out gage_data.json --indent 2
//!
//! Environment:
//!   FWS_GAGE_CONFIG - path to the TOML config (default: fws_gage.toml)

use chrono::Local;
use fws_gage::config::{self, DEFAULT_CONFIG_PATH, ScraperConfig};
use fws_gage::ingest::query::format_reported_from;
use fws_gage::logging::{self, Component};
use fws_gage::scraper::{GageScraper, report_to_json};
use std::env;
use std::path::PathBuf;

const DEFAULT_SPAN: &str = "6 Hours";

struct CliArgs {
    gage_id: u32,
    reported_from: Option<String>,
    span: String,
    out: Option<PathBuf>,
    indent: Option<usize>,
    config_path: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} --gage ID [--from \"MM/DD/YYYY hh:mm:ss AM\"] [--span \"6 Hours\"] [--out FILE] [--indent N] [--config PATH]",
        program
    )
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut gage_id: Option<u32> = None;
    let mut reported_from = None;
    let mut span = DEFAULT_SPAN.to_string();
    let mut out = None;
    let mut indent = None;
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{} requires a value", flag))?;

        match flag {
            "--gage" => {
                gage_id = Some(value.parse().map_err(|_| format!("Invalid gage id: {}", value))?);
            }
            "--from" => reported_from = Some(value.clone()),
            "--span" => span = value.clone(),
            "--out" => out = Some(PathBuf::from(value)),
            "--indent" => {
                indent = Some(value.parse().map_err(|_| format!("Invalid indent: {}", value))?);
            }
            "--config" => config_path = Some(PathBuf::from(value)),
            _ => return Err(format!("Unknown argument: {}", flag)),
        }
        i += 2;
    }

    Ok(CliArgs {
        gage_id: gage_id.ok_or("--gage is required")?,
        reported_from,
        span,
        out,
        indent,
        config_path,
    })
}

fn load_config(cli: &CliArgs) -> Result<ScraperConfig, String> {
    let path = match &cli.config_path {
        Some(p) => return config::load_config(p).map_err(|e| e.to_string()),
        None => env::var("FWS_GAGE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
    };
    config::load_config_or_default(&path).map_err(|e| e.to_string())
}

fn main() {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fws_gage");

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    logging::init_logger(
        config.logging.min_level(),
        config.logging.log_file.as_deref(),
        config.logging.console_timestamps,
    );

    let scraper = match GageScraper::from_config(&config.http) {
        Ok(s) => s,
        Err(e) => {
            logging::error(Component::System, None, &e.to_string());
            std::process::exit(1);
        }
    };

    let reported_from = cli
        .reported_from
        .clone()
        .unwrap_or_else(|| format_reported_from(Local::now().naive_local()));
    let indent = cli.indent.unwrap_or(config.output.json_indent);

    let result = match &cli.out {
        Some(path) => scraper
            .download_gage(path, cli.gage_id, &reported_from, &cli.span, indent)
            .map(|report| {
                logging::info(
                    Component::System,
                    Some(cli.gage_id),
                    &format!("✓ Saved {} readings to {}", report.sensor_data.len(), path.display()),
                );
            }),
        None => scraper
            .query_gage(cli.gage_id, &reported_from, &cli.span)
            .and_then(|report| report_to_json(&report, indent))
            .map(|json| println!("{}", json)),
    };

    if let Err(e) = result {
        eprintln!("\n❌ Gage {} failed: {}\n", cli.gage_id, e);
        std::process::exit(1);
    }
}
