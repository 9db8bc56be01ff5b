use rand::{Rng, distr::Alphanumeric};

use crate::types::TrackArtist;

/// Length of the random session identifier stored in the browser cookie.
const SESSION_ID_LEN: usize = 64;

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Trims user input and rejects anything that is empty afterwards.
/// Every text field on the page goes through this before an API call.
pub fn clean_input(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Escapes text for interpolation into HTML body or attribute positions.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// First eight characters of a session id, for log lines. Falls back to the
/// whole id when it is shorter (cookies are client-controlled).
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
