//! Blind Pong simulator entry point
//!
//! Runs the session controller against a simulated board on the host.

use std::path::PathBuf;

use clap::Parser;

use blind_pong::platform::SimulatedBoard;
use blind_pong::renderer::time_text;
use blind_pong::{GameMode, SessionController, Settings};

#[derive(Parser, Debug)]
#[command(name = "blind-pong", about = "Run Blind Pong sessions on a simulated board")]
struct Cli {
    /// Seed for the paddle autopilot
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of sessions to play
    #[arg(long, default_value_t = 3)]
    sessions: u32,

    /// Settings file (JSON); defaults are used if missing or invalid
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_settings: Option<PathBuf>,

    /// Power-on mode (easy, medium, hard, impossible); overrides the settings file
    #[arg(long)]
    mode: Option<String>,

    /// Mode button presses before each start
    #[arg(long, default_value_t = 0)]
    mode_presses: u32,

    /// Chance the autopilot lets a ball through on each approach (at 0 a session may never end)
    #[arg(long, default_value_t = 0.1)]
    miss_rate: f32,

    /// Sleep for real between ticks
    #[arg(long)]
    realtime: bool,

    /// Print summaries as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    if let Some(name) = &cli.mode {
        match GameMode::from_str(name) {
            Some(mode) => settings.initial_mode = mode,
            None => {
                log::error!("Unknown mode '{name}', expected one of easy, medium, hard, impossible");
                std::process::exit(2);
            }
        }
    }

    if let Some(path) = &cli.write_settings {
        if let Err(err) = settings.save_to(path) {
            log::error!("Failed to write settings to {}: {err}", path.display());
            std::process::exit(1);
        }
        return;
    }

    log::info!("Blind Pong (simulated board) starting, seed {}", cli.seed);

    let board = SimulatedBoard::new(cli.seed, settings.screen_width)
        .with_miss_rate(cli.miss_rate)
        .with_mode_presses(cli.mode_presses)
        .with_realtime(cli.realtime);
    let mut controller = SessionController::power_on(board, settings);

    for (i, summary) in controller.run_sessions(cli.sessions).iter().enumerate() {
        if cli.json {
            match serde_json::to_string(summary) {
                Ok(line) => println!("{line}"),
                Err(err) => log::error!("Failed to encode summary: {err}"),
            }
        } else {
            println!(
                "Session {}: {:<10} Score: {:<4} {}",
                i + 1,
                summary.mode.as_str(),
                summary.score,
                time_text(summary.elapsed_secs)
            );
        }
    }

    log::info!("Beeps played: {}", controller.board().beeps());
}
