//! Render sinks

use crate::error::Result;
use crate::renderer::Frame;
use crate::sim::GamePhase;

/// Receives one frame per tick
pub trait RenderSink {
    /// Load images and fonts before the first frame. Failure is fatal.
    fn load_assets(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &Frame);
}

/// Headless sink that reports frames through the log
#[derive(Debug, Clone)]
pub struct LogSink {
    /// Log the overlay every this many frames (0 = only on screen changes)
    every: u64,
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            frames: 0,
            last_phase: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn overlay(frame: &Frame) -> String {
        frame
            .text
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;

        if self.last_phase != Some(frame.phase) {
            log::info!("[{:?}] {}", frame.phase, Self::overlay(frame));
            self.last_phase = Some(frame.phase);
        } else if self.every > 0 && self.frames.is_multiple_of(self.every) {
            log::debug!(
                "frame {}: {} sprites, {}",
                self.frames,
                frame.sprites.len(),
                Self::overlay(frame)
            );
        }
    }
}
