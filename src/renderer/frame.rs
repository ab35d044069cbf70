//! Frame building
//!
//! A frame is a pure function of the game state and the display strings:
//! sprites already translated by the camera, plus overlay text.

use glam::Vec2;

use super::text::{chars_per_line, wrap_text};
use crate::locale::Strings;
use crate::sim::{Facing, GamePhase, GameState, Rect};

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [135.0 / 255.0, 206.0 / 255.0, 250.0 / 255.0, 1.0]; // Light blue
    pub const PLATFORM: [f32; 4] = [101.0 / 255.0, 67.0 / 255.0, 33.0 / 255.0, 1.0]; // Dark brown
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Font sizes in pixels
pub mod font {
    pub const TITLE: f32 = 48.0;
    pub const HUD: f32 = 36.0;
    pub const BODY: f32 = 24.0;
    pub const NOTE: f32 = 18.0;
}

/// What a sprite looks like
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    Character { facing: Facing },
    Platform { passed: bool },
}

/// A box to draw in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub visual: Visual,
}

/// How `TextLine::pos` anchors the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
    pub align: Align,
}

impl TextLine {
    fn centered(text: impl Into<String>, pos: Vec2, size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            color: colors::TEXT,
            align: Align::Center,
        }
    }
}

/// Everything a sink needs to draw one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: GamePhase,
    pub background: [f32; 4],
    /// Platforms first, character last
    pub sprites: Vec<Sprite>,
    pub text: Vec<TextLine>,
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState, strings: &Strings) -> Frame {
    let (sprites, text) = match state.phase {
        GamePhase::StartScreen => (Vec::new(), start_screen_text(state, strings)),
        GamePhase::Playing => (world_sprites(state), hud_text(state, strings)),
        GamePhase::GameOver => {
            let mut text = hud_text(state, strings);
            let center = Vec2::new(state.settings.screen_width, state.settings.screen_height) / 2.0;
            text.push(TextLine {
                color: colors::GAME_OVER,
                ..TextLine::centered(strings.game_over.clone(), center, font::HUD)
            });
            (world_sprites(state), text)
        }
    };

    Frame {
        phase: state.phase,
        background: colors::BACKGROUND,
        sprites,
        text,
    }
}

fn world_sprites(state: &GameState) -> Vec<Sprite> {
    let session = &state.session;
    let camera = &session.camera;

    let mut sprites: Vec<Sprite> = session
        .platforms
        .iter()
        .map(|p| Sprite {
            rect: camera.apply(&p.rect),
            visual: Visual::Platform { passed: p.passed },
        })
        .collect();
    sprites.push(Sprite {
        rect: camera.apply(&session.character.rect),
        visual: Visual::Character {
            facing: session.character.facing,
        },
    });
    sprites
}

fn hud_text(state: &GameState, strings: &Strings) -> Vec<TextLine> {
    let line = |text: String, y: f32| TextLine {
        text,
        pos: Vec2::new(10.0, y),
        size: font::HUD,
        color: colors::TEXT,
        align: Align::TopLeft,
    };
    vec![
        line(format!("{}: {}", strings.score, state.session.score), 10.0),
        line(
            format!("{}: {}", strings.high_score, state.high_score),
            10.0 + font::HUD,
        ),
    ]
}

fn start_screen_text(state: &GameState, strings: &Strings) -> Vec<TextLine> {
    let width = state.settings.screen_width;
    let height = state.settings.screen_height;
    let cx = width / 2.0;
    let wrap_width = width - 40.0;

    let mut text = vec![TextLine::centered(
        strings.title.clone(),
        Vec2::new(cx, height / 4.0),
        font::TITLE,
    )];

    let mut y = height / 4.0 + font::TITLE / 2.0 + 20.0;
    let budget = chars_per_line(wrap_width, font::BODY);
    for line in strings
        .instructions
        .iter()
        .flat_map(|instruction| wrap_text(instruction, budget))
    {
        text.push(TextLine::centered(line, Vec2::new(cx, y), font::BODY));
        y += font::BODY + 10.0;
    }

    text.push(TextLine::centered(
        strings.start_prompt.clone(),
        Vec2::new(cx, y + 40.0),
        font::BODY,
    ));
    let high_score_y = y + 80.0;
    text.push(TextLine::centered(
        format!("{}: {}", strings.high_score, state.high_score),
        Vec2::new(cx, high_score_y),
        font::HUD,
    ));

    let mut y = high_score_y + font::HUD / 2.0 + 40.0;
    for line in wrap_text(&strings.project_note, chars_per_line(wrap_width, font::NOTE)) {
        text.push(TextLine::centered(line, Vec2::new(cx, y), font::NOTE));
        y += font::NOTE + 5.0;
    }

    text
}
