//! View models: what each page shows, as JSON.
//!
//! The route handlers build a [`ViewModel`] and say which [`View`] it is
//! for. Rendering it (HTML, a SPA, a test) is up to the client. Field
//! names are camelCase on the wire, e.g. `gameStatsMessage`.

use serde::{Deserialize, Serialize};

/// Title of the home page.
pub const HOME_TITLE: &str = "Welcome to the Guessing Game";

/// Title of the game form (also used after a guess).
pub const GAME_TITLE: &str = "Number Guess Game";

/// Which page a view model is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page, also shown when a game ends.
    #[default]
    Home,

    /// The guess form.
    GameForm,
}

/// How the client should style [`ViewModel::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Error,
}

/// Everything a page needs to render.
///
/// Fields that don't apply to a page are `None` and left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub view: View,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_stats_message: Option<String>,

    /// `true` on the home page of a browser's first visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_session: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_guess: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guesses_left: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    /// Set only when a game just ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub you_won: Option<bool>,
}

impl ViewModel {
    /// Starts a view model for the given page and title.
    pub fn new(view: View, title: &str) -> Self {
        Self {
            view,
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Attaches an error message, as shown above the guess form.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self.message_type = Some(MessageType::Error);
        self
    }
}

/// The result of handling a request: a page to show, or somewhere else
/// to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    View(ViewModel),
    Redirect(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_model_serializes_camel_case_and_skips_none() {
        let mut vm = ViewModel::new(View::GameForm, GAME_TITLE);
        vm.is_first_guess = Some(true);
        vm.guesses_left = Some(3);

        let json = serde_json::to_value(&vm).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "view": "game_form",
                "title": "Number Guess Game",
                "isFirstGuess": true,
                "guessesLeft": 3,
            })
        );
    }

    #[test]
    fn test_with_error_sets_message_and_type() {
        let vm = ViewModel::new(View::GameForm, GAME_TITLE).with_error("nope");

        let json = serde_json::to_value(&vm).unwrap();

        assert_eq!(json["message"], "nope");
        assert_eq!(json["messageType"], "error");
    }
}
