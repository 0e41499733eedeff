//! Campaign-assessment ingestion service
//!
//! - `serve`  - HTTP endpoint (`POST /`, `GET /health`)
//! - `parse`  - parse a local HTML file and print the JSON
//! - `ingest` - run the fetch/parse/store pipeline once

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isw_ingest::{server, IngestConfig, IngestRequest};
use isw_report::ReportParser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "isw-ingest")]
#[command(about = "Fetch, parse and store daily campaign-assessment reports")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "ISW_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Parse a local HTML file
    Parse {
        /// HTML file to parse
        file: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch, parse and store one report
    Ingest {
        /// Report date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Stored HTML to use instead of fetching
        #[arg(long)]
        html_source_path: Option<String>,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json);

    let config = IngestConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Serve { port } => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            server::serve(config).await?;
        }
        Command::Parse { file, output } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let report = ReportParser::new(config.parser.clone()).parse(&html)?;
            let json = report.to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), sections = report.sections.len(), "Report written");
                }
                None => println!("{}", json),
            }
        }
        Command::Ingest {
            date,
            html_source_path,
        } => {
            let ingestor = server::build_ingestor(&config)?;
            let response = ingestor
                .ingest(&IngestRequest {
                    date,
                    html_source_path,
                })
                .await?;
            println!("{}", response.parsed_report_path);
        }
    }

    Ok(())
}
