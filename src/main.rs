use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;
use snake_tui::store::HighScoreStore;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Grid snake with a deterministic simulation core")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Label shown above the grid
    #[arg(long, default_value = "Snake")]
    label: String,

    /// Base tick interval at level 1, in milliseconds
    #[arg(long, default_value = "200")]
    speed: u64,

    /// High-score file
    #[arg(long, default_value = "snake_scores.json")]
    scores: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        label: cli.label,
        initial_speed_ms: cli.speed,
    };
    let store = HighScoreStore::new(cli.scores);

    let mut human_mode = HumanMode::new(config, store)?;
    human_mode.run().await?;

    Ok(())
}

/// Log to a file when RUST_LOG is set; the TUI owns the terminal.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("snake_tui.log").context("failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
