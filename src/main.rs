mod core;
mod renderer;
mod scene;
mod shared;
mod sync;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::shared::constants;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the animation in the current terminal
    Play {
        #[arg(short, long, default_value_t = constants::DEFAULT_FPS)]
        fps: u32,
        /// Loop length in seconds (the frame counter wraps after fps * duration)
        #[arg(short, long, default_value_t = constants::DEFAULT_DURATION_SECS)]
        duration: u32,
    },
    /// Render a single frame to stdout (headless, no terminal control)
    Render {
        #[arg(short, long, default_value_t = 0)]
        frame: u64,
        #[arg(short = 'W', long, default_value_t = 120)]
        width: usize,
        #[arg(short = 'H', long, default_value_t = 40)]
        height: usize,
    },
    /// Query the terminal size as crossterm sees it
    TerminalSize,
}

fn main() -> Result<()> {
    utils::logger::init();

    // undo any raw-mode/alt-screen state left by a previous crashed run
    utils::terminal::reset_state();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { fps, duration } => {
            let mut player = core::Player::new(fps, duration)?;
            if let Err(e) = player.run() {
                utils::logger::error(&format!("playback failed: {:#}", e));
                return Err(e);
            }
        }
        Commands::Render {
            frame,
            width,
            height,
        } => {
            let width = width.max(1);
            let height = height.max(1);
            println!("{}", renderer::render(frame, width, height));
        }
        Commands::TerminalSize => {
            let (cols, rows) = crossterm::terminal::size()?;
            println!("{}x{}", cols, rows);
        }
    }

    Ok(())
}
