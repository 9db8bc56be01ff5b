//! # Spotify Integration Module
//!
//! This module is the only place the application talks to Spotify. It
//! implements the OAuth 2.0 authorization-code flow against the accounts
//! service and the handful of Web API operations the page needs, handling
//! HTTP communication, status checking and typed decoding in one layer.
//!
//! ## Architecture
//!
//! Each submodule covers one domain of the Web API:
//!
//! ```text
//! Handlers (api)
//!      ↓
//! Spotify Integration Layer
//!     ├── auth      - authorize URL, code exchange, token refresh
//!     ├── profile   - current user profile
//!     ├── search    - track search
//!     ├── playlist  - create playlist, add tracks
//!     └── player    - currently-playing state
//!      ↓
//! HTTP Layer (reqwest, JSON)
//!      ↓
//! Spotify Web API
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`SpotifyError`]: either a non-success status
//! from the API (with the message dug out of Spotify's error body) or a
//! transport/decoding failure from reqwest. Nothing in this layer retries;
//! a failed call surfaces to the handler, which invalidates the session's
//! credentials and sends the user back to the login page.
//!
//! ## API Coverage
//!
//! - `POST /api/token` (accounts) - code exchange and refresh grants
//! - `GET /me` - user profile for the greeting and playlist ownership
//! - `POST /users/{user_id}/playlists` - create the working playlist
//! - `GET /search` - top track match for "add song"
//! - `POST /playlists/{playlist_id}/tracks` - add the matched track
//! - `GET /me/player/currently-playing` - now-playing view

pub mod auth;
pub mod player;
pub mod playlist;
pub mod profile;
pub mod search;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Spotify accounts endpoint that asks the user for consent.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
/// Spotify accounts endpoint that exchanges codes and refresh tokens.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Failure of a single Spotify call. `Api` carries what the service said;
/// `Transport` covers connection and malformed-body failures.
#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("Spotify API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Spotify request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Bearer-token handle for the Web API, held in the session after login.
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(access_token: &str) -> Self {
        SpotifyClient {
            http: Client::new(),
            access_token: access_token.to_string(),
        }
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }
}

/// Checks the response status and decodes the body into `T` exactly once.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SpotifyError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::Api {
            status,
            message: api_message(&body),
        });
    }
    Ok(response.json::<T>().await?)
}

/// Extracts a human-readable message from a Spotify error body.
///
/// The Web API wraps errors as `{"error": {"status": …, "message": …}}`
/// while the accounts service answers `{"error": …, "error_description": …}`.
/// Anything else falls back to the raw body, truncated.
pub fn api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            return message.to_string();
        }
        match (value["error"].as_str(), value["error_description"].as_str()) {
            (Some(code), Some(description)) => return format!("{}: {}", code, description),
            (Some(code), None) => return code.to_string(),
            _ => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error details".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
