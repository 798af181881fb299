//! Two-player chess with click-to-move legality checking
//!
//! The window shows an 8x8 board. Clicking a piece of the side to move
//! selects it; clicking a destination asks the rules crate for a verdict
//! and applies the move only when approved.

mod app;
mod board;
mod config;
mod game;
mod styles;

use app::ChessApp;
use clap::Parser;
use env_logger::Env;
use iced::application;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess_gui", version, about = "Two-player chess board with basic move legality")]
struct Cli {
    /// Path to a TOML appearance config; CHESS_GUI_CONFIG is used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the black side at the bottom
    #[arg(long)]
    flipped: bool,
}

fn main() -> iced::Result {
    // Initialize logger
    let env = Env::default().filter_or("CHESS_GUI_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let cfg_path = cli
        .config
        .or_else(|| std::env::var_os("CHESS_GUI_CONFIG").map(PathBuf::from));
    let config = config::UiConfig::load(cfg_path.as_deref());

    let window_width = config.square_size * 8.0 + styles::PANEL_WIDTH + 60.0;
    let window_height = config.square_size * 8.0 + 40.0;
    let flipped = cli.flipped;

    application("Chess", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((window_width, window_height))
        .run_with(move || ChessApp::new(config, flipped))
}
