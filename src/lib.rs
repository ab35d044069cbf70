//! Frog Jump - An endless vertical-jump arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform stream, physics, collisions, scoring)
//! - `renderer`: Pure conversion of game state into draw commands
//! - `platform`: Input/render seams and the fixed-rate app driver
//! - `locale`: Localized display strings with fallback
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod highscores;
pub mod locale;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use locale::Strings;
pub use settings::Settings;

/// Default game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions (one screen wide, infinite upward)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on landing (negative = up)
    pub const BOUNCE_VELOCITY: f32 = -15.0;
    /// Horizontal speed while a direction is held
    pub const HORIZONTAL_SPEED: f32 = 5.0;

    /// Character is a square sprite
    pub const CHARACTER_SIZE: f32 = 80.0;

    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Vertical spacing between consecutive platforms (inclusive)
    pub const MIN_PLATFORM_DISTANCE: f32 = 130.0;
    pub const MAX_PLATFORM_DISTANCE: f32 = 220.0;

    /// Camera exponential smoothing factor
    pub const CAMERA_SMOOTHING: f32 = 0.05;

    /// Platforms generated before a session starts
    pub const INITIAL_PLATFORMS: usize = 6;

    /// Game over display (2 seconds at 60 Hz)
    pub const GAME_OVER_TICKS: u32 = 2 * TICK_RATE;
}

/// Pick a uniform value in `[min, max]`; a degenerate range yields `min`.
#[inline]
pub fn uniform_inclusive<R: rand::Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        min
    } else {
        rng.random_range(min..=max)
    }
}
