//! Collision detection and bounce response
//!
//! A falling character that overlaps a platform is placed on top of it and
//! immediately bounced upward; there is no resting contact.
//!
//! Simultaneous overlaps are resolved in ascending (top y, id) order, so the
//! highest platform wins and equal heights go to the earlier spawn. Once the
//! first landing sets an upward velocity, the remaining overlaps are ignored.

use std::cmp::Ordering;

use super::state::{Character, LastPlatform, Platform, PlatformId};

/// Result of resolving one tick of landings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandingResult {
    /// Platform the character bounced off this tick
    pub landed: Option<PlatformId>,
    /// Whether the last-platform reference moved up
    pub advanced: bool,
}

/// Platforms overlapping `character`, in resolution order
pub fn overlapping<'a>(character: &Character, platforms: &'a [Platform]) -> Vec<&'a Platform> {
    let mut hits: Vec<&Platform> = platforms
        .iter()
        .filter(|p| character.rect.overlaps(&p.rect))
        .collect();
    hits.sort_by(|a, b| {
        a.top()
            .partial_cmp(&b.top())
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    hits
}

/// Land and bounce the character off any platform it fell into
pub fn resolve_landings(
    character: &mut Character,
    platforms: &[Platform],
    bounce_velocity: f32,
) -> LandingResult {
    let mut result = LandingResult::default();

    for platform in overlapping(character, platforms) {
        if !character.is_falling() {
            continue;
        }

        character.rect.set_bottom(platform.top());
        character.vel.y = bounce_velocity;
        // One unit up so the same platform is not hit again next tick
        character.rect.pos.y -= 1.0;
        result.landed = Some(platform.id);

        let higher = character
            .last_platform
            .is_none_or(|last| platform.top() < last.top);
        if higher {
            character.last_platform = Some(LastPlatform {
                id: platform.id,
                top: platform.top(),
            });
            result.advanced = true;
        }
    }

    result
}
