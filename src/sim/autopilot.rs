//! Demo steering
//!
//! Plays the game for idle/demo mode: while falling it lines up with the
//! platform below the feet, while rising with the next platform above.

use std::cmp::Ordering;

use super::state::{Direction, Platform, Session};

/// Platform the autopilot is currently aiming for
pub fn target(session: &Session) -> Option<&Platform> {
    let character = &session.character;
    let feet = character.rect.bottom();
    let by_top = |a: &&Platform, b: &&Platform| a.top().partial_cmp(&b.top()).unwrap_or(Ordering::Equal);

    let below = || {
        session
            .platforms
            .iter()
            .filter(|p| p.top() >= feet)
            .min_by(by_top)
    };
    let above = || {
        session
            .platforms
            .iter()
            .filter(|p| p.top() < feet)
            .max_by(by_top)
    };

    if character.is_falling() {
        below().or_else(above)
    } else {
        above().or_else(below)
    }
}

/// Horizontal intent that moves the character toward its target
pub fn steer(session: &Session, speed: f32) -> Option<Direction> {
    let platform = target(session)?;
    let dx = platform.rect.center().x - session.character.rect.center().x;
    if dx.abs() <= speed {
        None
    } else if dx < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}
