//! Game state and core simulation types
//!
//! Everything the host needs to render a frame lives here and is read
//! directly after each tick. Mutation happens only through [`GameState`]
//! methods and [`super::tick::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start input; nothing moves
    Ready,
    /// Active gameplay, ticking
    Playing,
    /// Run ended, terminal until reset
    GameOver,
}

/// Discrete events the host reacts to (audio cues, UI transitions)
///
/// Recorded by the simulation and drained by the host after each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The bird flapped ("tap" cue)
    Flap,
    /// A run started (start looping the background track)
    Started,
    /// The run ended (stop background track, one-shot game-over cue)
    GameOver { score: u32 },
}

/// Viewport dimensions in world units
///
/// Supplied by the host on every tick; the window may resize between ticks,
/// so these are never cached inside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; `pos.x` stays at [`BIRD_X`] for the whole run
    pub pos: Vec2,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
        }
    }
}

impl Bird {
    /// Apply one tick of gravity
    pub fn fall(&mut self) {
        self.pos.y += GRAVITY_PER_TICK;
    }

    /// Apply the instantaneous flap impulse
    pub fn flap(&mut self) {
        self.pos.y -= FLAP_IMPULSE;
    }
}

/// A top/bottom rectangle pair sharing one horizontal position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (world units); decreases each tick by the current speed
    pub x: f32,
    /// Height of the top rectangle, anchored at y = 0
    pub top_height: f32,
    /// Height of the bottom rectangle, anchored at the viewport floor
    pub bottom_height: f32,
    /// Flips false -> true exactly once, when the bird overtakes the pair
    pub passed: bool,
}

impl Obstacle {
    /// Top edge of the bottom rectangle for the given viewport height
    pub fn gap_bottom(&self, viewport_height: f32) -> f32 {
        viewport_height - self.bottom_height
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self, viewport_height: f32) -> f32 {
        (self.top_height + self.gap_bottom(viewport_height)) / 2.0
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The bird
    pub bird: Bird,
    /// Active obstacle pairs, insertion-ordered (oldest first)
    pub obstacles: Vec<Obstacle>,
    /// Score, +10 per pair passed
    pub score: u32,
    /// Obstacle scroll speed, stepped up by the score ramp
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the host
    events: Vec<GameEvent>,
    /// Seeded RNG for obstacle heights
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh game in the `Ready` phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Ready,
            bird: Bird::default(),
            obstacles: Vec::new(),
            score: 0,
            speed: INITIAL_SPEED,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restore the initial run state: bird at the start position, no
    /// obstacles, score 0, speed reset, phase `Ready`.
    ///
    /// The RNG keeps advancing across resets so consecutive runs differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.bird = Bird::default();
        self.obstacles.clear();
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.time_ticks = 0;
        self.events.clear();
    }

    /// Player flap/start input.
    ///
    /// - `Ready`: starts the run without moving the bird
    /// - `Playing`: applies the upward impulse immediately
    /// - `GameOver`: no-op (restart is a separate input)
    pub fn flap(&mut self) {
        match self.phase {
            GamePhase::Ready => {
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Started);
            }
            GamePhase::Playing => {
                self.bird.flap();
                self.events.push(GameEvent::Flap);
            }
            GamePhase::GameOver => {}
        }
    }

    /// End the run. Idempotent; emits the game-over event once.
    pub fn end_run(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
        }
    }

    /// Spawn a new obstacle pair just off the right edge of the viewport.
    ///
    /// The top height is uniform over `[MIN_TOP_HEIGHT, height - gap)`,
    /// floored to a whole unit; the bottom height fills the remainder so
    /// `top + bottom + GAP_SIZE == height` holds at creation.
    pub fn spawn_obstacle(&mut self, viewport: Viewport) {
        // Clamp the span so tiny viewports sample a valid range instead of
        // panicking; the gap invariant still holds.
        let span = (viewport.height - GAP_SIZE - MIN_TOP_HEIGHT).max(1.0);
        let top_height = self.rng.random_range(0.0..span).floor() + MIN_TOP_HEIGHT;
        self.obstacles.push(Obstacle {
            x: viewport.width + HORIZONTAL_SPACING,
            top_height,
            bottom_height: viewport.height - top_height - GAP_SIZE,
            passed: false,
        });
    }

    /// Take all pending events (host side: map to audio cues / UI)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
