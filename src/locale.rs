//! Localized display strings
//!
//! Strings are resolved entry by entry: built-in English, then
//! `<dir>/en.json`, then `<dir>/<language>.json`. Missing files or keys fall
//! back to the previous layer and never fail the session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Language used for the base layer
pub const DEFAULT_LANGUAGE: &str = "en";

/// Every string the game displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strings {
    pub title: String,
    pub instructions: Vec<String>,
    pub start_prompt: String,
    pub score: String,
    pub high_score: String,
    pub game_over: String,
    pub project_note: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            title: "Frog Jump".into(),
            instructions: vec![
                "Use the LEFT and RIGHT arrow keys or A and D to move.".into(),
                "The frog bounces automatically when it lands on a platform.".into(),
                "Climb as high as you can and don't fall off the screen!".into(),
            ],
            start_prompt: "Press SPACE to start".into(),
            score: "Score".into(),
            high_score: "High Score".into(),
            game_over: "Game Over".into(),
            project_note: "An endless jumping game. Every platform you clear while it is the highest one earns a point.".into(),
        }
    }
}

/// One locale file; absent keys keep the lower layer
#[derive(Debug, Default, Deserialize)]
struct LocaleFile {
    title: Option<String>,
    instructions: Option<Vec<String>>,
    start_prompt: Option<String>,
    score: Option<String>,
    high_score: Option<String>,
    game_over: Option<String>,
    project_note: Option<String>,
}

impl Strings {
    /// Resolve strings for `language` from locale files in `dir`
    pub fn load(dir: &Path, language: &str) -> Self {
        let mut strings = Self::default();

        if let Err(e) = strings.overlay_file(&locale_path(dir, DEFAULT_LANGUAGE)) {
            log::error!("Default localization unavailable: {e}");
        }
        if language == DEFAULT_LANGUAGE {
            return strings;
        }

        if !is_language_code(language) {
            log::error!("Ignoring malformed language code {language:?}");
            return strings;
        }
        match strings.overlay_file(&locale_path(dir, language)) {
            Ok(()) => log::info!("Loaded localization for {language}"),
            Err(e) => log::error!("Localization for {language} unavailable: {e}"),
        }
        strings
    }

    /// Replace the entries present in a JSON locale file
    pub fn overlay_file(&mut self, path: &Path) -> Result<()> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigurationMissing {
                path: path.to_path_buf(),
            },
            _ => Error::InvalidConfiguration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        let file: LocaleFile =
            serde_json::from_str(&json).map_err(|e| Error::InvalidConfiguration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.apply(file);
        Ok(())
    }

    fn apply(&mut self, file: LocaleFile) {
        let LocaleFile {
            title,
            instructions,
            start_prompt,
            score,
            high_score,
            game_over,
            project_note,
        } = file;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = instructions {
            self.instructions = v;
        }
        if let Some(v) = start_prompt {
            self.start_prompt = v;
        }
        if let Some(v) = score {
            self.score = v;
        }
        if let Some(v) = high_score {
            self.high_score = v;
        }
        if let Some(v) = game_over {
            self.game_over = v;
        }
        if let Some(v) = project_note {
            self.project_note = v;
        }
    }
}

fn locale_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{language}.json"))
}

/// Letters, digits, `-` and `_` only, so a code cannot escape the locale dir
fn is_language_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
