//! Servana - book home-service professionals from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use servana_app::config::{self, CheckoutOutcome, Settings, ThemePreference};
use servana_app::theme::detect_system_appearance;
use servana_core::prelude::*;

/// Servana - book home-service professionals from the terminal
#[derive(Parser, Debug)]
#[command(name = "servana")]
#[command(about = "A terminal storefront for booking home-service professionals", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Make the local checkout decline every payment with this reason
    #[arg(long, value_name = "REASON")]
    decline: Option<String>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(reason) = &self.decline {
            settings.payment.outcome = CheckoutOutcome::Decline;
            settings.payment.decline_reason = Some(reason.clone());
        }
        if self.dark {
            settings.ui.theme = ThemePreference::Dark;
        } else if self.light {
            settings.ui.theme = ThemePreference::Light;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file, since the TUI owns stdout
    servana_core::logging::init()?;

    let mut settings = config::load_settings(&config_path);
    args.apply_overrides(&mut settings);
    info!("Config: {}", config_path.display());

    let result = servana_tui::run(settings, detect_system_appearance()).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Servana exiting");
    result
}
