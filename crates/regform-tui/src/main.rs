//! Registration form TUI entry point.

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use clap::{Parser, ValueEnum};
use regform_app::{DEFAULT_MIN_PASSWORD_LENGTH, FormConfig, ValidationMode};
use regform_tui::{Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// When validation errors become visible.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Show a field's error as soon as it is edited
    OnChange,
    /// Show a field's error once focus leaves it
    OnTouched,
}

impl From<Mode> for ValidationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::OnChange => ValidationMode::OnChange,
            Mode::OnTouched => ValidationMode::OnTouched,
        }
    }
}

/// Registration form terminal UI
#[derive(Parser, Debug)]
#[command(name = "regform-tui")]
#[command(about = "Terminal registration form with live validation")]
#[command(version)]
struct Args {
    /// When validation errors are revealed
    #[arg(long, value_enum, default_value_t = Mode::OnChange)]
    mode: Mode,

    /// Minimum number of characters in a password
    #[arg(long, default_value_t = DEFAULT_MIN_PASSWORD_LENGTH)]
    min_password_length: usize,

    /// File receiving logs and submitted form data
    #[arg(long, default_value = "regform.log")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config =
        FormConfig { min_password_length: args.min_password_length, mode: args.mode.into() };
    config.validate()?;

    let log_file = OpenOptions::new().create(true).append(true).open(&args.log_file)?;
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false))
        .init();

    tracing::info!(?config, "starting registration form");

    let driver = TerminalDriver::new()?;
    let app = Runtime::new(driver, &config).run().await?;

    tracing::info!(submissions = app.submissions(), "registration form closed");
    Ok(())
}
