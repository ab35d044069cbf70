//! Fixed timestep simulation tick
//!
//! One call advances the session loop by one tick. While playing, the order
//! is: horizontal intent and gravity, integration, landings, scoring,
//! spawning and retiring platforms, camera, then the game over check.

use super::autopilot;
use super::collision::resolve_landings;
use super::scoring::award;
use super::state::{Direction, GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held horizontal direction, if any
    pub direction: Option<Direction>,
    /// Start a session from the start screen
    pub confirm: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::StartScreen => {
            if input.confirm || input.idle_mode {
                state.start_session();
                events.push(GameEvent::SessionStarted);
            }
        }

        GamePhase::Playing => play(state, input, &mut events),

        GamePhase::GameOver => {
            state.game_over_ticks = state.game_over_ticks.saturating_sub(1);
            if state.game_over_ticks == 0 {
                state.phase = GamePhase::StartScreen;
                events.push(GameEvent::ReturnedToStart);
            }
        }
    }

    events
}

fn play(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let GameState {
        settings,
        session,
        rng,
        high_score,
        ..
    } = state;
    let view_height = settings.screen_height;

    session.time_ticks += 1;

    let intent = if input.idle_mode {
        autopilot::steer(session, settings.horizontal_speed)
    } else {
        input.direction
    };

    // Character body
    let character = &mut session.character;
    character.set_horizontal_intent(intent, settings.horizontal_speed);
    character.apply_gravity(settings.gravity);
    let (dx, dy) = (character.vel.x, character.vel.y);
    character.integrate(dx, dy, settings.screen_width);

    // Landings
    let landing = resolve_landings(
        &mut session.character,
        session.platforms.as_slice(),
        settings.bounce_velocity,
    );
    if let Some(platform) = landing.landed {
        events.push(GameEvent::Landed { platform });
    }

    // Scoring
    if let Some(update) = award(
        &session.character,
        &mut session.platforms,
        &mut session.score,
        high_score,
    ) {
        log::info!(
            "Current score: {}, High score: {}.",
            update.score,
            update.high_score
        );
        events.push(GameEvent::PlatformPassed {
            platform: update.platform,
            score: update.score,
        });
        if update.new_high_score {
            events.push(GameEvent::NewHighScore {
                high_score: update.high_score,
            });
        }
    }

    // Platform stream
    session.platforms.spawn_if_needed(
        rng,
        session.character.rect.top(),
        session.camera.offset,
        view_height,
    );
    session
        .platforms
        .retire_offscreen(session.camera.offset, view_height);

    session.camera.update(&session.character.rect, view_height);

    if session.character.rect.top() > session.camera.view_bottom(view_height) {
        let score = session.score;
        log::info!("Game over (score {}, high score {})", score, high_score);
        state.phase = GamePhase::GameOver;
        state.game_over_ticks = state.settings.game_over_ticks;
        events.push(GameEvent::GameOver { score });
    }
}
