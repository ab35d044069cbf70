//! Game state and core simulation types
//!
//! A [`Session`] holds everything belonging to one run and is rebuilt from
//! scratch when a run starts. [`GameState`] outlives sessions and carries the
//! high score, the phase machine and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::rect::Rect;
use super::stream::PlatformStream;
use crate::settings::Settings;

/// Current phase of the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the confirm input
    StartScreen,
    /// Active gameplay
    Playing,
    /// Run ended; shown for a fixed number of ticks
    GameOver,
}

/// Platform identity, unique and increasing within a session
pub type PlatformId = u32;

/// A platform entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub rect: Rect,
    /// Vertical coordinate at spawn time; the next platform is placed relative to it
    pub absolute_y: f32,
    /// Credited toward the score (set once, never cleared)
    pub passed: bool,
}

impl Platform {
    pub fn new(id: PlatformId, rect: Rect) -> Self {
        Self {
            id,
            absolute_y: rect.top(),
            rect,
            passed: false,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }
}

/// Horizontal direction of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Which way the character sprite faces (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Reference to the platform the character last bounced off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastPlatform {
    pub id: PlatformId,
    /// Top edge when landed, kept so the reference survives retirement
    pub top: f32,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub rect: Rect,
    pub vel: Vec2,
    pub facing: Facing,
    /// Last platform jumped from; only ever advances upward
    pub last_platform: Option<LastPlatform>,
}

impl Character {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            facing: Facing::default(),
            last_platform: None,
        }
    }

    /// Add one tick of gravity to vertical velocity (no terminal velocity)
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel.y += gravity;
    }

    /// Binary horizontal motion: full speed left/right, or stop
    pub fn set_horizontal_intent(&mut self, intent: Option<Direction>, speed: f32) {
        self.vel.x = match intent {
            Some(Direction::Left) => {
                self.facing = Facing::Left;
                -speed
            }
            Some(Direction::Right) => {
                self.facing = Facing::Right;
                speed
            }
            None => 0.0,
        };
    }

    /// Translate by the given deltas, then clamp against the side walls
    pub fn integrate(&mut self, x_change: f32, y_change: f32, screen_width: f32) {
        self.rect.translate(Vec2::new(x_change, y_change));
        self.rect.clamp_horizontal(screen_width);
    }

    /// Whether the character is moving down
    #[inline]
    pub fn is_falling(&self) -> bool {
        self.vel.y > 0.0
    }
}

/// One run: score, character, platforms and camera
#[derive(Debug, Clone)]
pub struct Session {
    pub score: u64,
    pub character: Character,
    pub platforms: PlatformStream,
    pub camera: Camera,
    /// Ticks spent playing
    pub time_ticks: u64,
}

impl Session {
    /// Build a fresh session: ids restart at 1, the initial platforms are
    /// generated and the character stands on the second one.
    pub fn new(settings: &Settings, rng: &mut Pcg32) -> Self {
        let mut platforms = PlatformStream::new(settings);
        while platforms.len() < settings.initial_platforms.max(2) {
            platforms.spawn(rng);
        }

        let size = settings.character_size;
        let mut rect = Rect::new(
            (settings.screen_width - size) / 2.0,
            settings.screen_height - size,
            size,
            size,
        );
        if let Some(start) = platforms.iter().nth(1) {
            let x = start.rect.center().x - size / 2.0;
            rect.pos.x = x.min(settings.screen_width - size).max(0.0);
            rect.set_bottom(start.top());
        }

        Self {
            score: 0,
            character: Character::new(rect),
            platforms,
            camera: Camera::new(settings.camera_smoothing),
            time_ticks: 0,
        }
    }

    /// Number of platforms credited in this session
    pub fn passed_count(&self) -> u64 {
        self.platforms.passed_count()
    }
}

/// Complete game state across sessions
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducible platform layouts
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Best score of this process (never decreases)
    pub high_score: u64,
    /// Ticks left on the game over screen
    pub game_over_ticks: u32,
    /// Sessions started so far
    pub sessions_started: u32,
    pub session: Session,
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Create a new game state on the start screen
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new(&settings, &mut rng);
        Self {
            seed,
            settings,
            phase: GamePhase::StartScreen,
            high_score: 0,
            game_over_ticks: 0,
            sessions_started: 0,
            session,
            rng,
        }
    }

    /// Discard the current session and begin a new one
    pub fn start_session(&mut self) {
        self.session = Session::new(&self.settings, &mut self.rng);
        self.sessions_started += 1;
        self.phase = GamePhase::Playing;
        log::info!(
            "Game session {} started ({} platforms)",
            self.sessions_started,
            self.session.platforms.len()
        );
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    Landed { platform: PlatformId },
    PlatformPassed { platform: PlatformId, score: u64 },
    NewHighScore { high_score: u64 },
    GameOver { score: u64 },
    ReturnedToStart,
}
