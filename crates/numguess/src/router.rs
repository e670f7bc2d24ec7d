//! The axum router: HTTP in, [`handler`](crate::handler) calls, JSON out.
//!
//! The only HTTP-specific work here is session correlation: the session id
//! travels in the `NUMGUESS_SESSION` cookie, is resolved against the store
//! on every request, and is sent back on every response.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use numguess_session::{GameCenter, SessionId};
use serde::Deserialize;

use crate::handler;
use crate::view::Page;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "NUMGUESS_SESSION";

/// The game center shared by every request.
pub type SharedCenter = Arc<GameCenter>;

/// Form body of `POST /guess`.
#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(rename = "myGuess")]
    pub my_guess: Option<String>,
}

/// Builds the application router over the given game center.
pub fn router(center: SharedCenter) -> Router {
    Router::new()
        .route("/", get(get_home))
        .route(handler::GAME_URL, get(get_game))
        .route("/guess", post(post_guess))
        .with_state(center)
}

async fn get_home(
    State(center): State<SharedCenter>,
    headers: HeaderMap,
) -> Response {
    let session = open_session(&center, &headers);
    let page = handler::home(&*center, &session);
    respond(&session, page)
}

async fn get_game(
    State(center): State<SharedCenter>,
    headers: HeaderMap,
) -> Response {
    let session = open_session(&center, &headers);
    match handler::game(&*center, &session) {
        Ok(page) => respond(&session, page),
        Err(e) => e.into_response(),
    }
}

async fn post_guess(
    State(center): State<SharedCenter>,
    headers: HeaderMap,
    Form(form): Form<GuessForm>,
) -> Response {
    let session = open_session(&center, &headers);
    match handler::guess(&*center, &session, form.my_guess.as_deref()) {
        Ok(page) => respond(&session, page),
        Err(e) => e.into_response(),
    }
}

/// Resolves the session cookie, starting a new session if there is none
/// (or it is no longer known).
fn open_session(center: &GameCenter, headers: &HeaderMap) -> SessionId {
    center.store().open(session_cookie(headers))
}

/// Finds the session id among the request's `Cookie` headers.
fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

fn respond(session: &SessionId, page: Page) -> Response {
    let cookie = [(
        header::SET_COOKIE,
        format!("{SESSION_COOKIE}={session}; Path=/; HttpOnly"),
    )];
    match page {
        Page::View(vm) => (cookie, Json(vm)).into_response(),
        Page::Redirect(to) => (cookie, Redirect::to(to)).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_session_cookie_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; NUMGUESS_SESSION=abc123; lang=en"),
        );

        assert_eq!(session_cookie(&headers), Some("abc123"));
    }

    #[test]
    fn test_session_cookie_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("NUMGUESS_SESSION=xyz"),
        );

        assert_eq!(session_cookie(&headers), Some("xyz"));
    }

    #[test]
    fn test_session_cookie_absent() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("other=1"));
        assert_eq!(session_cookie(&headers), None);
    }
}
