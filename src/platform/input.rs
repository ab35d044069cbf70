//! Input events
//!
//! Devices are abstracted as a stream of discrete events polled once per
//! tick. [`InputMapper`] folds each batch into a [`TickInput`].

use std::collections::VecDeque;

use crate::sim::{Direction, TickInput};

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    DirectionDown(Direction),
    DirectionUp(Direction),
    Confirm,
}

/// Anything that can be polled for the events since the last poll, in order
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// One tick's worth of mapped input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedInput {
    pub input: TickInput,
    pub quit: bool,
}

/// Tracks the held direction across ticks
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    direction: Option<Direction>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of events into the input for this tick
    pub fn map(&mut self, events: &[InputEvent], idle_mode: bool) -> MappedInput {
        let mut mapped = MappedInput::default();

        for event in events {
            match *event {
                InputEvent::Quit => mapped.quit = true,
                InputEvent::DirectionDown(direction) => {
                    log::debug!("{direction:?} pressed");
                    self.direction = Some(direction);
                }
                // Releasing either direction stops horizontal movement
                InputEvent::DirectionUp(_) => {
                    log::debug!("Direction released");
                    self.direction = None;
                }
                InputEvent::Confirm => mapped.input.confirm = true,
            }
        }

        mapped.input.direction = self.direction;
        mapped.input.idle_mode = idle_mode;
        mapped
    }

    /// Forget any held direction
    pub fn reset(&mut self) {
        self.direction = None;
    }
}

/// Replays prepared event batches, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
    quit_when_exhausted: bool,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
            quit_when_exhausted: false,
        }
    }

    /// Report a quit once every batch has been replayed
    pub fn quit_when_exhausted(mut self) -> Self {
        self.quit_when_exhausted = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        match self.batches.pop_front() {
            Some(batch) => batch,
            None if self.quit_when_exhausted => vec![InputEvent::Quit],
            None => Vec::new(),
        }
    }
}
