use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use snake_cheatbot::game::GameConfig;
use snake_cheatbot::modes::HumanMode;
use snake_cheatbot::render::{Renderer, ToggleIcons};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_cheatbot")]
#[command(version, about = "Snake on a wrap-around grid, with a Cheat-Bot autopilot")]
struct Cli {
    /// Image shown on the switch while the autopilot is on
    #[arg(long, default_value = "toggle_on.png")]
    toggle_on: PathBuf,

    /// Image shown on the switch while the autopilot is off
    #[arg(long, default_value = "toggle_off.png")]
    toggle_off: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the game, so logs only go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install logger: {err}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    config.validate().map_err(|err| anyhow!(err))?;

    // Icons are required; a missing file ends the program before the
    // terminal is touched
    let (width, height) = Renderer::new(&config).toggle_icon_size();
    let icons = ToggleIcons::load(&cli.toggle_on, &cli.toggle_off, width, height)?;

    let mut human_mode = HumanMode::new(config, icons);
    human_mode.run().await?;

    Ok(())
}
