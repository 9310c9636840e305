use anyhow::{Context, bail};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use forecast_core::{Config, ForecastSource, ProviderPayload, format_historical, normalize};

use crate::output;
use crate::source::FileSource;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Forecast normalization CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a provider payload and print the hourly/daily windows.
    Show {
        /// Path to a provider JSON payload, or "-" for stdin. Falls back to
        /// the configured default payload.
        payload: Option<PathBuf>,

        /// Reference local time, e.g. "2024-01-01T05:00"; if absent, means "now".
        #[arg(long)]
        now: Option<String>,

        /// Maximum number of hourly samples; overrides the configured limit.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print per-day historical chart points (temperature + precipitation).
    History {
        /// Path to a provider JSON payload, or "-" for stdin.
        payload: Option<PathBuf>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Interactively set defaults (hourly limit, default payload path).
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show {
                payload,
                now,
                limit,
                json,
            } => {
                let config = Config::load()?;
                let payload = load_payload(payload, &config).await?;
                let now_local = parse_reference(now.as_deref())?;
                let limit = limit.unwrap_or_else(|| config.hourly_limit());

                let window = normalize(&payload, now_local, limit);
                if json {
                    println!("{}", serde_json::to_string_pretty(&window)?);
                } else {
                    print!("{}", output::render_window(&window));
                }
            }

            Command::History { payload, json } => {
                let config = Config::load()?;
                let payload = load_payload(payload, &config).await?;

                let points = format_historical(&payload);
                if json {
                    println!("{}", serde_json::to_string_pretty(&points)?);
                } else {
                    print!("{}", output::render_history(&points));
                }
            }

            Command::Configure => configure()?,
        }

        Ok(())
    }
}

/// Resolve the payload path (argument first, configured default second) and
/// fetch it through the file source.
async fn load_payload(arg: Option<PathBuf>, config: &Config) -> anyhow::Result<ProviderPayload> {
    let Some(path) = arg.or_else(|| config.default_payload.clone()) else {
        bail!(
            "No payload given.\n\
             Hint: pass a payload path (or \"-\" for stdin), or set a default via `forecast configure`."
        );
    };

    let source = FileSource::new(path);
    let payload = source.fetch().await.context("Failed to load payload")?;
    Ok(payload)
}

/// Parse `--now`, defaulting to the current local time.
fn parse_reference(raw: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match raw {
        None => Ok(Local::now().naive_local()),
        Some(s) => forecast_core::parse_local_datetime(s).with_context(|| {
            format!("Invalid --now value '{s}'; expected e.g. 2024-01-01T05:00")
        }),
    }
}

/// Interactive configuration via prompts, persisted to the platform config dir.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let limit = inquire::CustomType::<u32>::new("Hourly window length:")
        .with_default(config.hourly_limit() as u32)
        .with_help_message("How many upcoming hourly samples to keep")
        .prompt()
        .context("Failed to read hourly window length")?;
    config.hourly_limit = Some(limit);

    let default_payload = inquire::Text::new("Default payload path (empty to clear):")
        .with_initial_value(
            config
                .default_payload
                .as_deref()
                .and_then(|p| p.to_str())
                .unwrap_or(""),
        )
        .prompt()
        .context("Failed to read default payload path")?;
    config.default_payload = if default_payload.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(default_payload.trim()))
    };

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
