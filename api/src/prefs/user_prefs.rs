use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::theme::Theme;
use crate::token::Token;

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc. For now they are read from env vars on the server.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    default_token: Token,
    theme: Theme,
}

impl UserPrefs {
    pub fn default_token(&self) -> Token {
        self.default_token
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Creates a UserPrefs instance from environment variables, with
    /// conservative in-code defaults.
    ///
    /// # Environment Variables (case-insensitive):
    /// - `STAKEHUB_TOKEN`: "UNQ" or "QTZ"; the token selected on startup.
    /// - `STAKEHUB_THEME`: "auto", "light", or "dark".
    pub fn from_env() -> Self {
        let default_token = env::var("STAKEHUB_TOKEN")
            .ok()
            .and_then(|s| Token::from_str(&s).ok())
            .unwrap_or_default();

        let theme = env::var("STAKEHUB_THEME")
            .ok()
            .and_then(|s| Theme::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            default_token,
            theme,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
