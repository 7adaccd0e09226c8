//! Tap Bird entry point
//!
//! Headless demo driver standing in for a real presentation layer: it owns
//! the fixed 20 ms tick timer, feeds viewport dimensions and input flags into
//! the simulation, and maps drained [`GameEvent`]s to the audio cues a real
//! host would play. The autopilot flies the bird.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tap_bird::Settings;
use tap_bird::consts::TICK_PERIOD_MS;
use tap_bird::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, tick};

/// Demo length cap (one minute of simulated time)
const MAX_DEMO_TICKS: u64 = 3000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default_seed);
    let width = args.next().and_then(|s| s.parse().ok()).unwrap_or(800.0);
    let height = args.next().and_then(|s| s.parse().ok()).unwrap_or(600.0);
    let viewport = Viewport::new(width, height);

    let settings = Settings::load(Path::new("tap-bird-settings.json"));
    log::info!(
        "Tap Bird demo starting: seed {seed}, viewport {width}x{height}, sfx volume {:.2}",
        settings.effective_sfx_volume()
    );

    let mut state = GameState::new(seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let period = Duration::from_millis(TICK_PERIOD_MS);
    let mut next_tick = Instant::now();

    for _ in 0..MAX_DEMO_TICKS {
        tick(&mut state, &input, viewport);
        play_cues(&mut state, &settings);

        if state.phase == GamePhase::GameOver {
            break;
        }

        // Fixed-period schedule; late wakeups drop the slack rather than
        // running ticks back to back.
        next_tick += period;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            next_tick = now;
        }
    }

    log::info!(
        "Demo finished after {} ticks: score {}, speed {}",
        state.time_ticks,
        state.score,
        state.speed
    );
    println!("Final score: {}", state.score);
}

/// Map simulation events to the cues a real host would play
fn play_cues(state: &mut GameState, settings: &Settings) {
    for event in state.drain_events() {
        match event {
            GameEvent::Flap => log::debug!("cue: tap"),
            GameEvent::Started => log::info!(
                "cue: background loop (volume {:.2})",
                settings.effective_music_volume()
            ),
            GameEvent::GameOver { score } => {
                log::info!("cue: game over (final score {score})");
            }
        }
    }
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
