//! # API Module
//!
//! This module provides the HTTP endpoints for the Spinlist web application.
//! It implements the full page flow: login, playlist building, playback
//! lookup and logout.
//!
//! ## Overview
//!
//! The API module is the web interface layer for Spinlist, a browser
//! front-end for building Spotify playlists. It provides HTTP endpoints
//! that handle:
//!
//! - **OAuth Authentication Flow**: The main page renders the consent link
//!   and exchanges the authorization code Spotify appends to the redirect
//!   back, completing the authorization-code flow
//! - **Playlist Building**: Form posts that create a playlist and add the
//!   top search match for a song to it
//! - **Playback Lookup**: A read-only endpoint that shows what the user's
//!   player is currently playing
//! - **Health Monitoring**: A health check endpoint for system monitoring
//!   and deployment verification
//!
//! ## Endpoints
//!
//! ### Page & Authentication
//!
//! - [`index`] - Renders the login page or the main page depending on the
//!   session, and completes the code-for-token exchange when Spotify
//!   redirects back with `?code=…`
//! - [`logout`] - Clears the session state and redirects to a clean page
//!
//! ### Actions
//!
//! - [`create_playlist`] - Creates a new public playlist owned by the user
//! - [`add_track`] - Searches the catalog and appends the top match to the
//!   session's playlist
//! - [`now_playing`] - Renders the page with the current playback state
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status, version and session count
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each request runs one pass: read the session keyed by the browser cookie,
//! perform at most a handful of Spotify calls, write the session back and
//! render a full page. Handlers never retry failed calls; an unrecoverable
//! API error tears the session down to the login state.
//!
//! ## Security Considerations
//!
//! - The session cookie carries only a random identifier; tokens stay
//!   server-side in the session store
//! - Authorization codes are single-use: a code that was already processed
//!   is never exchanged a second time, so reloading a stale redirect URL
//!   cannot fire another token request
//! - All user-controlled text is HTML-escaped before it reaches a page
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use spinlist::api::{health, index};
//!
//! let app = Router::new()
//!     .route("/", get(index))
//!     .route("/health", get(health));
//! ```
//!
//! ## Dependencies
//!
//! This module depends on:
//! - [`axum`] for HTTP server functionality
//! - [`axum_extra`] for cookie handling
//! - [`tokio`] for async runtime support
//! - [`serde_json`] for JSON serialization
//!
//! ## Related Modules
//!
//! - [`crate::management`] - Session state and the session store
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::render`] - HTML rendering for both pages

mod health;
mod logout;
mod page;
mod player;
mod playlist;
mod track;

pub use health::health;
pub use logout::logout;
pub use page::index;
pub use player::now_playing;
pub use playlist::create_playlist;
pub use track::add_track;

use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    config,
    management::{SESSION_COOKIE, Session, SessionManager},
    render::{self, Notice},
    spotify::{self, SpotifyClient, SpotifyError},
    types::UserProfile,
    utils::generate_session_id,
};

/// Returns the session id from the cookie jar, minting a fresh cookie when
/// the browser does not carry one yet. The possibly-updated jar must be
/// part of the response so the Set-Cookie header reaches the browser.
pub(crate) fn ensure_cookie(jar: CookieJar) -> (CookieJar, String) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let id = cookie.value().to_string();
        return (jar, id);
    }

    let id = generate_session_id();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), id)
}

pub(crate) fn login_url() -> String {
    spotify::auth::authorize_url(&config::spotify_client_id(), &config::spotify_redirect_uri())
}

/// Renders the login page, optionally with a banner explaining how the
/// visitor ended up logged out.
pub(crate) fn login_response(jar: CookieJar, notice: Option<Notice>) -> Response {
    let markup = render::login_page(&login_url(), notice.as_ref());
    (jar, Html(markup)).into_response()
}

/// Returns the session's cached user profile, fetching and caching it on
/// first use. Handlers that only need the profile for rendering read the
/// cache directly; this is for the ones that need it guaranteed.
pub(crate) async fn current_user(
    sessions: &SessionManager,
    session_id: &str,
    session: &mut Session,
    client: &SpotifyClient,
) -> Result<UserProfile, SpotifyError> {
    if let Some(user) = &session.user {
        return Ok(user.clone());
    }

    let user = spotify::profile::get_current_user(client).await?;
    session.user = Some(user.clone());
    sessions.save(session_id, session.clone()).await;
    Ok(user)
}
