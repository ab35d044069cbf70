//! Procedural platform stream
//!
//! Platforms are spawned one at a time above the last spawned one and retired
//! once they scroll below the view, so the live set is a sliding window.
//! Spawn order is also height order: every new platform is strictly higher
//! than all previous ones, which keeps the highest platform at the back.

use rand::Rng;

use super::rect::Rect;
use super::state::{Platform, PlatformId};
use crate::settings::Settings;
use crate::uniform_inclusive;

/// Live platforms plus the generator that extends them upward
#[derive(Debug, Clone)]
pub struct PlatformStream {
    platforms: Vec<Platform>,
    next_id: PlatformId,
    /// Absolute y of the most recently spawned platform
    last_spawned_y: Option<f32>,
    /// Highest live platform, maintained on spawn and retire
    highest: Option<PlatformId>,
    passed_total: u64,

    screen_width: f32,
    screen_height: f32,
    platform_width: f32,
    platform_height: f32,
    min_distance: f32,
    max_distance: f32,
}

impl PlatformStream {
    /// Empty stream; the first id handed out is 1
    pub fn new(settings: &Settings) -> Self {
        Self {
            platforms: Vec::new(),
            next_id: 1,
            last_spawned_y: None,
            highest: None,
            passed_total: 0,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            platform_width: settings.platform_width,
            platform_height: settings.platform_height,
            min_distance: settings.min_platform_distance,
            max_distance: settings.max_platform_distance,
        }
    }

    fn next_platform_id(&mut self) -> PlatformId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Generate one platform above the last spawned one
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> PlatformId {
        let max_x = (self.screen_width - self.platform_width).max(0.0);
        let x = uniform_inclusive(rng, 0.0, max_x);

        let baseline = self.last_spawned_y.unwrap_or(self.screen_height);
        let y = baseline - uniform_inclusive(rng, self.min_distance, self.max_distance);

        let id = self.next_platform_id();
        let platform = Platform::new(id, Rect::new(x, y, self.platform_width, self.platform_height));
        log::trace!("Spawned platform {} at ({:.1}, {:.1})", id, x, y);

        self.platforms.push(platform);
        self.last_spawned_y = Some(y);
        self.highest = Some(id);
        id
    }

    /// Spawn one platform when the character's top is in the upper third of the view
    pub fn spawn_if_needed<R: Rng>(
        &mut self,
        rng: &mut R,
        character_top: f32,
        camera_offset: f32,
        view_height: f32,
    ) -> Option<PlatformId> {
        if character_top < camera_offset + view_height / 3.0 {
            Some(self.spawn(rng))
        } else {
            None
        }
    }

    /// Remove every platform lying entirely below the view.
    ///
    /// Returns the number removed.
    pub fn retire_offscreen(&mut self, camera_offset: f32, view_height: f32) -> usize {
        let view_bottom = camera_offset + view_height;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.top() < view_bottom);
        let removed = before - self.platforms.len();

        if removed > 0 {
            // Removal only takes platforms from the bottom, so the highest
            // survives unless the whole window was retired.
            if !self.platforms.iter().any(|p| Some(p.id) == self.highest) {
                self.highest = self.platforms.last().map(|p| p.id);
            }
            log::trace!("Retired {} platforms", removed);
        }
        removed
    }

    /// Id of the highest (smallest top y) live platform
    pub fn highest(&self) -> Option<PlatformId> {
        self.highest
    }

    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Mark a live platform as passed. Returns false if it is gone or already passed.
    pub fn mark_passed(&mut self, id: PlatformId) -> bool {
        match self.platforms.iter_mut().find(|p| p.id == id) {
            Some(platform) if !platform.passed => {
                platform.passed = true;
                self.passed_total += 1;
                true
            }
            _ => false,
        }
    }

    /// Platforms passed this session, including retired ones
    pub fn passed_count(&self) -> u64 {
        self.passed_total
    }

    /// Live platforms in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platforms created this session, live or retired
    pub fn spawned_count(&self) -> u64 {
        u64::from(self.next_id - 1)
    }

    /// Insert a platform at an explicit position (scenario setup, tests)
    pub fn push_at(&mut self, x: f32, y: f32) -> PlatformId {
        let id = self.next_platform_id();
        self.platforms
            .push(Platform::new(id, Rect::new(x, y, self.platform_width, self.platform_height)));
        if self.highest_top().is_none_or(|top| y < top) {
            self.highest = Some(id);
        }
        if self.last_spawned_y.is_none_or(|last| y < last) {
            self.last_spawned_y = Some(y);
        }
        id
    }

    fn highest_top(&self) -> Option<f32> {
        self.highest.and_then(|id| self.get(id)).map(|p| p.top())
    }

    /// Empty the live set without resetting ids
    pub fn clear(&mut self) {
        self.platforms.clear();
        self.highest = None;
    }
}
