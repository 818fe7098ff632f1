use std::io::{BufWriter, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use crate::renderer;
use crate::shared::constants;
use crate::sync::FrameClock;
use crate::utils::logger;

/// Interactive playback: owns the terminal for the duration of the run and
/// restores it on drop, including on panic or Ctrl-C.
///
/// The render pipeline itself is pure; everything temporal lives here. The
/// terminal size is re-queried every tick, so a resize takes effect on the
/// next rendered frame and never mid-frame.
pub struct Player {
    stdout: BufWriter<Stdout>,
    fps: u32,
    total_frames: u64,
}

impl Player {
    pub fn new(fps: u32, duration_secs: u32) -> Result<Self> {
        let fps = fps.max(1);
        let stdout = BufWriter::with_capacity(1024 * 1024, std::io::stdout());
        let mut player = Self {
            stdout,
            fps,
            total_frames: (fps as u64 * duration_secs as u64).max(1),
        };
        player.initialize_terminal()?;
        Ok(player)
    }

    fn initialize_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.execute(EnterAlternateScreen)?;
        self.stdout.execute(cursor::Hide)?;
        // no line wrap: a full-width row must not push the screen
        write!(self.stdout, "\x1b[?7l")?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        {
            let flag = interrupted.clone();
            ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
        }

        let mut clock = FrameClock::new();
        let tick = Duration::from_secs_f64(1.0 / self.fps as f64);
        logger::info(&format!(
            "playback started: {} fps, {} frames per loop",
            self.fps, self.total_frames
        ));

        loop {
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break
                        }
                        KeyCode::Char(' ') => {
                            if clock.is_paused() {
                                clock.resume();
                            } else {
                                clock.pause();
                            }
                            logger::debug(&format!("paused: {}", clock.is_paused()));
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => clock.reset(),
                        _ => {}
                    },
                    // size is re-read below; nothing to do here
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            if interrupted.load(Ordering::SeqCst) {
                break;
            }

            let (cols, rows) =
                terminal::size().unwrap_or((constants::FALLBACK_COLUMNS, constants::FALLBACK_ROWS));
            let width = cols.max(constants::MIN_COLUMNS) as usize;
            let height = rows.max(constants::MIN_ROWS) as usize;

            let frame = clock.frame_at(self.fps) % self.total_frames;
            // bottom row is reserved for the status line
            let text = renderer::render(frame, width, height - 1);
            self.present(frame, &text, width, clock.is_paused())?;
        }

        logger::info("playback stopped");
        Ok(())
    }

    fn present(&mut self, frame: u64, text: &str, width: usize, paused: bool) -> Result<()> {
        let mut status = format!(
            " Frame {:03}/{} {} | Space: pause/resume  R: restart  Q: quit ",
            frame + 1,
            self.total_frames,
            if paused { "(paused)" } else { "" }
        );
        status.truncate(width.saturating_sub(1));
        let status = format!("{:<1$}", status, width.saturating_sub(1));

        // synchronized update guards keep partially written frames off screen
        write!(
            self.stdout,
            "\x1b[?2026h\x1b[H{}\n\x1b[0m{}\x1b[?2026l",
            text, status
        )?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        let _ = write!(self.stdout, "\x1b[?7h\x1b[0m");
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
