//! Configuration management for the playlist web app.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage the Spotify application credentials and the local server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. A `.env` file in the working directory, or one named on the command line
//! 3. Application defaults (server address only)
//!
//! The three Spotify secrets have no defaults. They are checked once at
//! startup by [`validate`]; a missing one is fatal before the server binds.

use std::{env, path::Path};

/// Default bind address used when `SERVER_ADDRESS` is not set.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// The fixed set of OAuth permission scopes requested during authorization.
///
/// Covers everything the page can do: creating and modifying playlists,
/// reading the user profile for the greeting, and reading playback state for
/// the now-playing view. The set is hard-coded; it is part of the
/// application's contract with Spotify, not a deployment knob.
pub const SPOTIFY_SCOPE: &str =
    "playlist-modify-public playlist-modify-private user-read-private user-read-playback-state";

/// Environment variables that must be present for the app to run.
const REQUIRED_VARS: [&str; 3] = [
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
];

/// Loads environment variables from a `.env` file.
///
/// When `path` is given, that exact file is loaded and a missing or
/// unreadable file is an error. Without a path the default `.env` in the
/// working directory is loaded if present; its absence is fine because the
/// variables may be set directly in the environment.
///
/// # Arguments
///
/// * `path` - Optional explicit path to an env file (the `--env-file` flag)
///
/// # Errors
///
/// Returns an error string if an explicitly named file cannot be read or
/// parsed.
///
/// # Example
///
/// ```
/// use spinlist::config;
///
/// config::load_env(None)?;
/// ```
pub fn load_env(path: Option<&Path>) -> Result<(), String> {
    match path {
        Some(path) => {
            dotenv::from_path(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
        }
        None => {
            let _ = dotenv::dotenv();
        }
    }
    Ok(())
}

/// Checks that every required Spotify secret is present.
///
/// Walks the required variables (client id, client secret, redirect URI) and
/// reports the first one that is missing or empty. Called once at startup so
/// that a misconfigured deployment halts before the server binds instead of
/// failing on the first login attempt.
///
/// # Errors
///
/// Returns the name of the first missing variable.
///
/// # Example
///
/// ```
/// if let Err(missing) = spinlist::config::validate() {
///     eprintln!("Missing secret: {}", missing);
/// }
/// ```
pub fn validate() -> Result<(), String> {
    for var in REQUIRED_VARS {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => {}
            _ => return Err(var.to_string()),
        }
    }
    Ok(())
}

/// Returns the address the web server binds to.
///
/// Reads the `SERVER_ADDRESS` environment variable and falls back to
/// [`DEFAULT_SERVER_ADDRESS`] when it is not set. The `--address` command
/// line flag overrides both.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains the
/// client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set. This
/// cannot happen after a successful [`validate`] at startup.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret for the token endpoint's Basic credentials.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
/// This cannot happen after a successful [`validate`] at startup.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable. The value must
/// match the redirect URI registered in the Spotify application settings and
/// must point back at this app's own page (`GET /`), which is where the
/// authorization code is picked up.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
/// This cannot happen after a successful [`validate`] at startup.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}
