//! Disc Soccer entry point
//!
//! Headless native runner: loads settings, plays a scripted match through a
//! `Session` at the fixed tick rate and prints the final snapshot as JSON.
//! Rendering and touch input live in the host UI, not here.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use disc_soccer::sim::{GameEvent, MatchPhase};
    use disc_soccer::{Session, Settings};

    /// Frames to simulate before giving up on a result
    const MAX_FRAMES: u32 = 3600;

    /// Scripted key changes as (frame, key, pressed)
    const SCRIPT: &[(u32, &str, bool)] = &[
        (0, "d", true),
        (0, "ArrowLeft", true),
        (20, "ArrowLeft", false),
        (20, "ArrowDown", true),
        (40, "ArrowDown", false),
        (90, "d", false),
        (90, "a", true),
        (150, "a", false),
        (150, "d", true),
    ];

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Disc Soccer (headless) starting...");

        let settings = match std::env::args().nth(1).map(PathBuf::from) {
            Some(path) => Settings::load(&path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        settings.validate().context("invalid settings")?;

        let mut session = Session::new(&settings);
        session.start();

        let frame = settings.tick_interval();
        let mut frames = 0;
        while session.phase() == MatchPhase::Playing && frames < MAX_FRAMES {
            // Loop the script so the match keeps moving after kickoff resets
            let script_frame = frames % 240;
            for &(at, key, pressed) in SCRIPT {
                if at == script_frame {
                    if pressed {
                        session.key_down(key);
                    } else {
                        session.key_up(key);
                    }
                }
            }

            session.advance(frame);
            for event in &session.state().events {
                if let GameEvent::Goal { scorer } = event {
                    log::info!("Frame {}: goal for {}", frames, scorer);
                }
            }
            frames += 1;
        }

        match session.snapshot().winner {
            Some(winner) => log::info!("{} won after {} frames", winner, frames),
            None => log::info!("No winner after {} frames", frames),
        }

        let json = serde_json::to_string_pretty(&session.snapshot())
            .context("serializing final snapshot")?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is provided by the host UI on web
}
