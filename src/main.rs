//! ARCA Console - terminal client for the ARCA regulatory compliance analyzer
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use arca_app::config::{default_config_path, init_config, resolve_settings, Settings};
use arca_client::HttpAnalysisClient;
use arca_console::headless::HeadlessEvent;
use arca_console::{check_service, HeadlessJob, JobInput, Outcome};
use arca_core::prelude::*;
use clap::Parser;

/// ARCA Console - analyze regulations against internal policies
#[derive(Parser, Debug)]
#[command(name = "arca", version)]
#[command(about = "Terminal client for the ARCA regulatory compliance analyzer", long_about = None)]
struct Args {
    /// Analysis service base URL (overrides ARCA_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Query the service health endpoint and exit
    #[arg(long, conflicts_with = "headless")]
    check: bool,

    /// Run one analysis with NDJSON output, no TUI
    #[arg(long)]
    headless: bool,

    /// Regulation text to analyze (headless)
    #[arg(long, value_name = "PATH", requires = "headless", conflicts_with = "file")]
    text_file: Option<PathBuf>,

    /// Regulation document to upload (headless)
    #[arg(long, value_name = "PATH", requires = "headless")]
    file: Option<PathBuf>,

    /// Regulation title (headless)
    #[arg(long, requires = "headless")]
    title: Option<String>,

    /// Date of law (headless)
    #[arg(long, requires = "headless")]
    date: Option<String>,

    /// Export the report to the configured directory (headless)
    #[arg(long, requires = "headless")]
    export: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    arca_core::logging::init()?;

    if args.init_config {
        let Some(path) = args.config.clone().or_else(default_config_path) else {
            eprintln!("No config directory on this platform; pass --config <PATH>");
            std::process::exit(1);
        };
        if init_config(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists, left unchanged", path.display());
        }
        return Ok(());
    }

    let (settings, client) = match connect(&args) {
        Ok(connected) => connected,
        Err(e) => {
            // Scripts read stdout in headless mode, so report there too
            if args.headless {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e);
        }
    };

    if args.check {
        let mut stdout = std::io::stdout();
        let outcome = check_service(&client, &settings.api.base_url, &mut stdout).await?;
        exit_on_failure(outcome);
        return Ok(());
    }

    if args.headless {
        let Some(job) = headless_job(args) else {
            std::process::exit(1);
        };
        let outcome = arca_console::run_headless(client, settings, job).await?;
        exit_on_failure(outcome);
        return Ok(());
    }

    arca_console::run_tui(client, settings).await
}

/// Effective settings plus a client for the configured service
fn connect(args: &Args) -> Result<(Settings, HttpAnalysisClient)> {
    let settings = resolve_settings(args.config.as_deref(), args.api_url.as_deref())
        .context("Failed to resolve settings")?;
    let client = HttpAnalysisClient::new(&settings.api.base_url, settings.api.timeout())?;
    Ok((settings, client))
}

/// Build the headless job from flags, emitting an error event when that fails
fn headless_job(args: Args) -> Option<HeadlessJob> {
    let input = match (args.text_file, args.file) {
        (Some(path), _) => match std::fs::read_to_string(&path) {
            Ok(text) => JobInput::Text(text),
            Err(e) => {
                HeadlessEvent::error(format!("Failed to read {}: {}", path.display(), e), true)
                    .emit();
                return None;
            }
        },
        (None, Some(path)) => JobInput::File(path),
        (None, None) => {
            HeadlessEvent::error("--headless needs --text-file or --file".to_string(), true)
                .emit();
            return None;
        }
    };

    Some(HeadlessJob {
        input,
        title: args.title,
        date: args.date,
        export: args.export,
    })
}

fn exit_on_failure(outcome: Outcome) {
    if outcome != Outcome::Succeeded {
        std::process::exit(outcome.exit_code());
    }
}
