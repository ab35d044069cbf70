//! Fixed-rate app driver
//!
//! Each tick polls input once, advances the simulation, then hands a frame to
//! the render sink, strictly in that order.

use std::time::Instant;

use super::input::{InputEvent, InputMapper, InputSource};
use super::sink::RenderSink;
use crate::error::Result;
use crate::highscores::HighScores;
use crate::locale::Strings;
use crate::renderer::{Frame, build_frame};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub control: Control,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
    /// Pace ticks to the configured tick rate
    pub realtime: bool,
    /// Let the autopilot play
    pub idle_mode: bool,
}

/// Totals reported when a run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub sessions: u32,
    pub high_score: u64,
}

/// Game plus everything that lives for the whole process
pub struct App {
    pub state: GameState,
    pub high_scores: HighScores,
    pub strings: Strings,
    mapper: InputMapper,
}

impl App {
    pub fn new(state: GameState, strings: Strings) -> Self {
        Self {
            state,
            high_scores: HighScores::new(),
            strings,
            mapper: InputMapper::new(),
        }
    }

    /// Advance one tick with the events polled for it
    pub fn step(&mut self, events: &[InputEvent], idle_mode: bool) -> Step {
        let mapped = if self.state.phase == GamePhase::GameOver {
            // The game over display swallows input except quit
            self.mapper.reset();
            let quit = events.contains(&InputEvent::Quit);
            let mut mapped = self.mapper.map(&[], idle_mode);
            mapped.quit = quit;
            mapped
        } else {
            self.mapper.map(events, idle_mode)
        };

        if mapped.quit {
            return Step {
                control: Control::Quit,
                events: Vec::new(),
            };
        }

        let events = tick(&mut self.state, &mapped.input);
        for event in &events {
            match event {
                GameEvent::SessionStarted => self.mapper.reset(),
                GameEvent::NewHighScore { high_score } => {
                    log::info!("New high score: {high_score}");
                }
                GameEvent::GameOver { score } => {
                    let session = &self.state.session;
                    self.high_scores.add_score(
                        *score,
                        session.platforms.spawned_count(),
                        session.time_ticks,
                    );
                }
                _ => {}
            }
        }

        Step {
            control: Control::Continue,
            events,
        }
    }

    /// Frame for the current state
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, &self.strings)
    }

    /// Run until quit or `max_ticks`.
    ///
    /// Fails only if the sink cannot load its assets.
    pub fn run<I, R>(&mut self, input: &mut I, sink: &mut R, options: &RunOptions) -> Result<RunSummary>
    where
        I: InputSource,
        R: RenderSink,
    {
        sink.load_assets()?;

        let tick_duration = self.state.settings.tick_duration();
        let mut ticks = 0u64;

        while options.max_ticks.is_none_or(|max| ticks < max) {
            let started = Instant::now();

            let events = input.poll();
            if self.step(&events, options.idle_mode).control == Control::Quit {
                log::info!("Quit event received. Application shutting down.");
                break;
            }
            sink.present(&self.frame());
            ticks += 1;

            if options.realtime {
                std::thread::sleep(tick_duration.saturating_sub(started.elapsed()));
            }
        }

        Ok(RunSummary {
            ticks,
            sessions: self.state.sessions_started,
            high_score: self.state.high_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::platform::input::ScriptedInput;
    use crate::settings::Settings;
    use crate::sim::Direction;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Frame>,
        fail_assets: bool,
    }

    impl RenderSink for RecordingSink {
        fn load_assets(&mut self) -> Result<()> {
            if self.fail_assets {
                return Err(Error::AssetLoadFailure {
                    asset: "frog.png".into(),
                    reason: "missing".into(),
                });
            }
            Ok(())
        }

        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    fn app(seed: u64) -> App {
        App::new(GameState::new(seed, Settings::default()), Strings::default())
    }

    #[test]
    fn test_quit_stops_immediately() {
        let mut app = app(1);
        let mut input = ScriptedInput::new([vec![InputEvent::Confirm], vec![InputEvent::Quit]]);
        let mut sink = RecordingSink::default();

        let summary = app.run(&mut input, &mut sink, &RunOptions::default()).unwrap();
        assert_eq!(summary.ticks, 1);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].phase, GamePhase::Playing);
    }

    #[test]
    fn test_asset_failure_is_fatal() {
        let mut app = app(2);
        let mut input = ScriptedInput::new([]);
        let mut sink = RecordingSink {
            fail_assets: true,
            ..Default::default()
        };
        let result = app.run(
            &mut input,
            &mut sink,
            &RunOptions {
                max_ticks: Some(10),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(Error::AssetLoadFailure { .. })));
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_direction_input_reaches_character() {
        let mut app = app(3);
        app.step(&[InputEvent::Confirm], false);
        let x = app.state.session.character.rect.left();
        app.step(&[InputEvent::DirectionDown(Direction::Left)], false);
        let after = app.state.session.character.rect.left();
        assert!(after < x || after == 0.0);
    }

    #[test]
    fn test_game_over_records_run_and_swallows_input() {
        let mut app = app(4);
        app.step(&[InputEvent::Confirm], false);
        app.state.session.score = 3;
        app.state.session.character.rect.pos.y = 10_000.0;

        let step = app.step(&[], false);
        assert!(step.events.contains(&GameEvent::GameOver { score: 3 }));
        assert_eq!(app.high_scores.top_score(), 3);

        // Confirm during the display does nothing
        let step = app.step(&[InputEvent::Confirm], false);
        assert!(step.events.is_empty());
        assert_eq!(app.state.phase, GamePhase::GameOver);

        // Quit still works
        assert_eq!(app.step(&[InputEvent::Quit], false).control, Control::Quit);
    }

    #[test]
    fn test_high_score_survives_session_reset() {
        let mut app = app(5);
        app.step(&[InputEvent::Confirm], false);

        // One platform right under the character, so the first landing is on the highest
        let session = &mut app.state.session;
        session.platforms.clear();
        let id = session.platforms.push_at(160.0, 500.0);
        session.character.rect.pos.x = 160.0;
        session.character.rect.set_bottom(499.75);
        session.character.vel = glam::Vec2::ZERO;
        session.camera.offset = 100.0;

        let step = app.step(&[], false);
        assert!(step.events.contains(&GameEvent::PlatformPassed { platform: id, score: 1 }));
        assert!(step.events.contains(&GameEvent::NewHighScore { high_score: 1 }));
        assert_eq!(app.state.high_score, 1);

        app.state.session.character.rect.pos.y = 10_000.0;
        let step = app.step(&[], false);
        assert!(step.events.contains(&GameEvent::GameOver { score: 1 }));
        let entry = &app.high_scores.entries[0];
        assert_eq!(entry.score, 1);
        assert_eq!(
            entry.platforms,
            app.state.settings.initial_platforms as u64 + 1
        );
        assert_eq!(entry.ticks, 2);

        for _ in 0..app.state.settings.game_over_ticks {
            app.step(&[], false);
        }
        assert_eq!(app.state.phase, GamePhase::StartScreen);

        let step = app.step(&[InputEvent::Confirm], false);
        assert_eq!(step.events, vec![GameEvent::SessionStarted]);
        assert_eq!(app.state.sessions_started, 2);
        assert_eq!(app.state.session.score, 0);
        assert_eq!(app.state.high_score, 1);
        assert_eq!(app.high_scores.top_score(), 1);

        let frame = app.frame();
        assert_eq!(frame.text[0].text, "Score: 0");
        assert_eq!(frame.text[1].text, "High Score: 1");
    }

    #[test]
    fn test_autopilot_run_paces_sessions() {
        let mut app = app(6);
        let mut input = ScriptedInput::new([]);
        let mut sink = RecordingSink::default();
        let options = RunOptions {
            max_ticks: Some(5000),
            idle_mode: true,
            ..Default::default()
        };

        let summary = app.run(&mut input, &mut sink, &options).unwrap();
        assert_eq!(summary.ticks, 5000);
        assert_eq!(sink.frames.len(), 5000);
        assert!(summary.sessions >= 1);
        assert_eq!(summary.high_score, app.state.high_score);
        assert!(sink.frames.iter().all(|f| f.background == crate::renderer::colors::BACKGROUND));
    }
}
