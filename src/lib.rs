//! Tap Bird - a side-scrolling tap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, obstacles, scoring, collisions)
//! - `settings`: Player preferences (audio volumes, HUD)
//!
//! The simulation owns all game state and is advanced on a fixed 20 ms tick.
//! Everything presentational (rendering, audio playback, timers) lives in the
//! host; it feeds input flags and viewport dimensions into each tick and reads
//! state plus drained [`sim::GameEvent`]s back out.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period in milliseconds
    pub const TICK_PERIOD_MS: u64 = 20;

    /// Bird horizontal position (constant for the lifetime of a run)
    pub const BIRD_X: f32 = 50.0;
    /// Bird vertical start position
    pub const BIRD_START_Y: f32 = 200.0;
    /// Bird bounding-box size (square)
    pub const BIRD_SIZE: f32 = 50.0;

    /// Downward displacement applied to the bird each tick
    pub const GRAVITY_PER_TICK: f32 = 2.0;
    /// Instantaneous upward displacement on a flap
    pub const FLAP_IMPULSE: f32 = 50.0;

    /// Obstacle rectangle width
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    /// Vertical gap between the top and bottom rectangles of a pair
    pub const GAP_SIZE: f32 = 150.0;
    /// Minimum horizontal distance between consecutive pairs
    pub const HORIZONTAL_SPACING: f32 = 200.0;
    /// Smallest height the top rectangle may take
    pub const MIN_TOP_HEIGHT: f32 = 100.0;
    /// Obstacles are dropped once their x falls to this or below
    pub const DESPAWN_X: f32 = -50.0;

    /// Obstacle scroll speed at the start of a run
    pub const INITIAL_SPEED: f32 = 2.0;
    /// Points awarded per obstacle pair passed
    pub const SCORE_PER_PASS: u32 = 10;
}
