//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order, ties broken by platform ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod rect;
pub mod scoring;
pub mod state;
pub mod stream;
pub mod tick;

pub use camera::Camera;
pub use collision::{LandingResult, resolve_landings};
pub use rect::Rect;
pub use scoring::{ScoreUpdate, award};
pub use state::{
    Character, Direction, Facing, GameEvent, GamePhase, GameState, LastPlatform, Platform,
    PlatformId, Session,
};
pub use stream::PlatformStream;
pub use tick::{TickInput, tick};
