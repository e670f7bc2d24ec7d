//! Route handlers: turn a request for a session into the next page.
//!
//! These functions know nothing about HTTP. They take the game center, the
//! already-resolved session, and the raw request parameter, and return a
//! [`Page`]. The router in [`crate::router`] adapts them to axum.
//!
//! The flow of one game:
//!   1. `GET /` → home page on a first visit, otherwise redirect to `/game`
//!   2. `GET /game` → guess form (creates the game if needed)
//!   3. `POST /guess` → "try again", or the home page with the result

use std::sync::Arc;

use numguess_game::{GuessGame, GuessOutcome};
use numguess_session::{GameCenter, SessionId, SessionStore};

use crate::view::{GAME_TITLE, HOME_TITLE, Page, View, ViewModel};
use crate::NumguessError;

/// Where the guess form lives.
pub const GAME_URL: &str = "/game";

/// Name of the request parameter carrying the player's guess.
pub const GUESS_PARAM: &str = "myGuess";

/// Shown after a wrong guess when attempts remain.
pub const BAD_GUESS: &str = "Nope, try again...";

/// Message for input that isn't an integer at all.
pub fn make_bad_arg_message(raw: &str) -> String {
    format!("You entered '{raw}' but that's not a number.")
}

/// Message for an integer outside the guessing range.
pub fn make_invalid_arg_message(raw: &str) -> String {
    format!("You entered {raw}; make a guess between zero and nine.")
}

/// `GET /`: the landing page.
///
/// A brand-new browser session sees the welcome page with site-wide
/// statistics. A returning one already has a game going (or is about to),
/// so it is sent straight to the form.
pub fn home<S>(center: &GameCenter<S>, session: &SessionId) -> Page
where
    S: SessionStore<Arc<GuessGame>>,
{
    if !center.store().is_new(session) {
        return Page::Redirect(GAME_URL);
    }

    let mut vm = ViewModel::new(View::Home, HOME_TITLE);
    vm.game_stats_message = Some(center.game_stats_message());
    vm.new_session = Some(true);
    Page::View(vm)
}

/// `GET /game`: the guess form for this session's game.
pub fn game<S>(
    center: &GameCenter<S>,
    session: &SessionId,
) -> Result<Page, NumguessError>
where
    S: SessionStore<Arc<GuessGame>>,
{
    let game = center.get(Some(session))?;

    let mut vm = ViewModel::new(View::GameForm, GAME_TITLE);
    vm.is_first_guess = Some(game.is_game_beginning());
    vm.guesses_left = Some(game.guesses_left());
    Ok(Page::View(vm))
}

/// `POST /guess`: submit `raw` (the `myGuess` parameter) as a guess.
///
/// Input that isn't an integer in range re-shows the form with a message
/// and leaves the game untouched. A win or a loss ends the game and shows
/// the home page with the updated statistics.
///
/// # Errors
/// Returns a [`NumguessError::Game`] with an `IllegalState` kind if the
/// game was already over, which only happens when two requests for the
/// same session race on its last guess.
pub fn guess<S>(
    center: &GameCenter<S>,
    session: &SessionId,
    raw: Option<&str>,
) -> Result<Page, NumguessError>
where
    S: SessionStore<Arc<GuessGame>>,
{
    let game = center.get(Some(session))?;

    let mut vm = ViewModel::new(View::GameForm, GAME_TITLE);
    vm.new_session = Some(false);
    vm.is_first_guess = Some(game.is_game_beginning());
    vm.guesses_left = Some(game.guesses_left());

    let raw = raw.unwrap_or_default();
    let Ok(value) = raw.parse::<i32>() else {
        return Ok(Page::View(vm.with_error(make_bad_arg_message(raw))));
    };
    if !game.is_valid_guess(value) {
        return Ok(Page::View(vm.with_error(make_invalid_arg_message(raw))));
    }

    let outcome = game.submit(value)?;
    tracing::debug!(session_id = %session, value, ?outcome, "guess submitted");

    vm.is_first_guess = Some(false);
    match outcome {
        GuessOutcome::TryAgain { guesses_left } => {
            vm.guesses_left = Some(guesses_left);
            Ok(Page::View(vm.with_error(BAD_GUESS)))
        }
        GuessOutcome::Won => end_game(center, session, vm, true),
        GuessOutcome::Lost => end_game(center, session, vm, false),
    }
}

fn end_game<S>(
    center: &GameCenter<S>,
    session: &SessionId,
    mut vm: ViewModel,
    you_won: bool,
) -> Result<Page, NumguessError>
where
    S: SessionStore<Arc<GuessGame>>,
{
    center.end(Some(session))?;

    vm.view = View::Home;
    vm.guesses_left = None;
    vm.game_stats_message = Some(center.game_stats_message());
    vm.you_won = Some(you_won);
    Ok(Page::View(vm))
}

// =========================================================================
// Tests
// =========================================================================
