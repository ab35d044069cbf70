//! Vertical scroll camera
//!
//! Follows the character's vertical center with exponential smoothing. The
//! camera never moves horizontally and is not clamped to any world bound.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World y shown at the top of the screen
    pub offset: f32,
    pub smoothing: f32,
}

impl Camera {
    pub fn new(smoothing: f32) -> Self {
        Self {
            offset: 0.0,
            smoothing,
        }
    }

    /// Ease the offset toward centering `target` in a view of `view_height`
    pub fn update(&mut self, target: &Rect, view_height: f32) {
        let target_offset = target.center().y - view_height / 2.0;
        self.offset += (target_offset - self.offset) * self.smoothing;
    }

    /// World box to screen box
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(Vec2::new(0.0, -self.offset))
    }

    /// World y of the bottom screen edge
    #[inline]
    pub fn view_bottom(&self, view_height: f32) -> f32 {
        self.offset + view_height
    }
}
