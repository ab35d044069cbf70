//! High score leaderboard
//!
//! Lives for the lifetime of the process only; tracks the top 10 runs.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Platforms passed
    pub score: u64,
    /// Platforms spawned during the run
    pub platforms: u64,
    /// Ticks survived
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Record a finished run.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, score: u64, platforms: u64, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            platforms,
            ticks,
        };

        // Ties keep the earlier run ahead
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!(
            "Run placed #{} with score {} ({} platforms, {} ticks)",
            rank,
            score,
            platforms,
            ticks
        );

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score recorded (0 if none)
    pub fn top_score(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_score(0, 1, 100), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(3, 9, 100), Some(1));
        assert_eq!(scores.add_score(7, 14, 200), Some(1));
        assert_eq!(scores.add_score(5, 11, 300), Some(2));
        assert_eq!(scores.add_score(5, 12, 400), Some(3));

        let order: Vec<(u64, u64)> = scores.entries.iter().map(|e| (e.score, e.platforms)).collect();
        assert_eq!(order, vec![(7, 14), (5, 11), (5, 12), (3, 9)]);
        assert_eq!(scores.top_score(), 7);
    }

    #[test]
    fn test_full_board() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_score(i * 10, i, 0);
        }
        assert!(!scores.qualifies(10));
        assert!(scores.qualifies(11));
        assert_eq!(scores.add_score(1000, 99, 0), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(20));
    }

    proptest! {
        #[test]
        fn prop_top_score_never_decreases(runs in proptest::collection::vec(0u64..50, 1..40)) {
            let mut scores = HighScores::new();
            let mut best = 0;
            for (i, score) in runs.into_iter().enumerate() {
                scores.add_score(score, i as u64, 0);
                prop_assert!(scores.top_score() >= best);
                best = scores.top_score();
            }
        }
    }
}
