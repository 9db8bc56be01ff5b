//! Spotify Playlist Web App Library
//!
//! This library implements a small single-page web application that signs a
//! user in with Spotify, lets them build a playlist by searching for songs,
//! and shows what is currently playing on their account. All non-trivial
//! behavior is delegated to the Spotify Web API; the code here is the session
//! lifecycle, the typed API boundary and the page glue around it.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the page, the user actions and health
//! - `config` - Configuration management and environment variables
//! - `management` - Per-browser-session state (token, playlist, client)
//! - `render` - Server-side HTML rendering of the single page
//! - `server` - The axum router and serve loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spinlist::{config, management::SessionManager, server};
//!
//! #[tokio::main]
//! async fn main() -> spinlist::Res<()> {
//!     config::load_env(None)?;
//!     config::validate()?;
//!     let listener = tokio::net::TcpListener::bind(&config::server_addr()).await?;
//!     server::serve(listener, SessionManager::new()).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use spinlist::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates on the server console.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations, such as a finished Spotify login.
///
/// # Example
///
/// ```
/// success!("Spotify login completed for session {}", id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination, such as missing configuration
/// at startup or a failed socket bind.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It must never run on behalf of a single request;
/// request-level failures are rendered into the page instead.
///
/// # Example
///
/// ```
/// error!("Missing configuration: {}", missing);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues, such as a failed token exchange or a browser that
/// could not be opened.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
