//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Viewport dimensions are inputs to each tick, never captured
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bird_hits_obstacle, out_of_bounds, spans_overlap};
pub use state::{Bird, GameEvent, GamePhase, GameState, Obstacle, Viewport};
pub use tick::{TickInput, tick};
