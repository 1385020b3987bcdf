//! Five-in-a-row GUI
//!
//! Play on a 10x10 board against another player or a random computer.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use gomoku::ui::GomokuApp;
use gomoku::{GameMode, SessionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Player vs player (hotseat)
    Pvp,
    /// Player vs random computer
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Pvc => GameMode::PvComputer,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Ten-by-ten five-in-a-row with a move timer")]
struct Cli {
    /// Start directly in this mode instead of showing the welcome page
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long, default_value_t = gomoku::config::OPPONENT_DELAY.as_millis() as u64)]
    opponent_delay_ms: u64,

    /// Seconds per move
    #[arg(long, default_value_t = gomoku::config::TURN_SECONDS)]
    turn_seconds: u32,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let config = SessionConfig::default()
            .with_opponent_delay(Duration::from_millis(self.opponent_delay_ms))
            .with_turn_seconds(self.turn_seconds);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.session_config();
    let mode = cli.mode.map(GameMode::from);
    tracing::info!(?config, ?mode, "launching");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config, mode)))),
    )
}
