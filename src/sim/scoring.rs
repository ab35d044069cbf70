//! Scoring
//!
//! A platform is credited when the character has cleared the platform it last
//! jumped from and that platform is the highest live one. Each platform is
//! credited at most once.

use super::state::{Character, PlatformId};
use super::stream::PlatformStream;

/// Outcome of a scoring check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub platform: PlatformId,
    pub score: u64,
    pub high_score: u64,
    /// The high score was raised by this update
    pub new_high_score: bool,
}

/// Credit the last platform jumped from if it qualifies.
///
/// Returns `Some` only when the score went up by exactly one.
pub fn award(
    character: &Character,
    platforms: &mut PlatformStream,
    score: &mut u64,
    high_score: &mut u64,
) -> Option<ScoreUpdate> {
    let last = character.last_platform?;
    if character.rect.bottom() > last.top {
        return None;
    }
    if platforms.highest() != Some(last.id) {
        return None;
    }
    if !platforms.mark_passed(last.id) {
        return None;
    }

    *score += 1;
    let new_high_score = *score > *high_score;
    if new_high_score {
        *high_score = *score;
    }
    log::debug!("Passed platform with ID {}", last.id);

    Some(ScoreUpdate {
        platform: last.id,
        score: *score,
        high_score: *high_score,
        new_high_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::rect::Rect;
    use crate::sim::state::LastPlatform;

    fn setup() -> (Character, PlatformStream, PlatformId, PlatformId) {
        let mut platforms = PlatformStream::new(&Settings::default());
        let low = platforms.push_at(100.0, 450.0);
        let high = platforms.push_at(100.0, 300.0);
        let c = Character::new(Rect::new(100.0, 200.0, 80.0, 80.0));
        (c, platforms, low, high)
    }

    fn jumped_from(c: &mut Character, platforms: &PlatformStream, id: PlatformId) {
        c.last_platform = Some(LastPlatform {
            id,
            top: platforms.get(id).unwrap().top(),
        });
    }

    #[test]
    fn test_no_last_platform_no_score() {
        let (c, mut platforms, _, _) = setup();
        let (mut score, mut high) = (0, 0);
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_none());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_scores_highest_platform_once() {
        let (mut c, mut platforms, _, high_id) = setup();
        jumped_from(&mut c, &platforms, high_id);
        c.rect.set_bottom(299.0);

        let (mut score, mut high) = (0, 0);
        let update = award(&c, &mut platforms, &mut score, &mut high).unwrap();
        assert_eq!(update.platform, high_id);
        assert_eq!(score, 1);
        assert_eq!(high, 1);
        assert!(update.new_high_score);
        assert!(platforms.get(high_id).unwrap().passed);

        // Same platform never counts twice
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_none());
        assert_eq!(score, 1);
    }

    #[test]
    fn test_bottom_at_top_edge_counts() {
        let (mut c, mut platforms, _, high_id) = setup();
        jumped_from(&mut c, &platforms, high_id);
        c.rect.set_bottom(300.0);
        let (mut score, mut high) = (0, 0);
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_some());
    }

    #[test]
    fn test_not_yet_cleared() {
        let (mut c, mut platforms, _, high_id) = setup();
        jumped_from(&mut c, &platforms, high_id);
        c.rect.set_bottom(310.0);
        let (mut score, mut high) = (0, 0);
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_none());
    }

    #[test]
    fn test_lower_platform_does_not_score() {
        let (mut c, mut platforms, low_id, _) = setup();
        jumped_from(&mut c, &platforms, low_id);
        c.rect.set_bottom(440.0);
        let (mut score, mut high) = (0, 0);
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_none());
        assert!(!platforms.get(low_id).unwrap().passed);
    }

    #[test]
    fn test_high_score_kept_when_higher() {
        let (mut c, mut platforms, _, high_id) = setup();
        jumped_from(&mut c, &platforms, high_id);
        c.rect.set_bottom(299.0);
        let (mut score, mut high) = (0, 12);
        let update = award(&c, &mut platforms, &mut score, &mut high).unwrap();
        assert_eq!(update.score, 1);
        assert_eq!(high, 12);
        assert!(!update.new_high_score);
    }

    #[test]
    fn test_retired_last_platform_does_not_score() {
        let (mut c, mut platforms, _, high_id) = setup();
        jumped_from(&mut c, &platforms, high_id);
        c.rect.set_bottom(299.0);
        platforms.retire_offscreen(-1000.0, 600.0);
        let (mut score, mut high) = (0, 0);
        assert!(award(&c, &mut platforms, &mut score, &mut high).is_none());
    }
}
