//! HTML rendering for the two pages the app serves.
//!
//! Every page is built server-side as a plain string and handed to axum as
//! an [`axum::response::Html`] body by the route handlers. There are only
//! two shapes: the login page (a single consent link, nothing else
//! actionable) and the main page (greeting, playlist form, song form,
//! now-playing section, logout). All user-controlled text passes through
//! [`crate::utils::html_escape`] on the way in.

use crate::{
    types::{CurrentlyPlaying, PlaylistSummary, UserProfile},
    utils::{artist_names, html_escape},
};

/// Severity of a [`Notice`], mapped onto a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }
}

/// One-line banner shown at the top of a page, the outcome of the last
/// action: a created playlist, a failed search, a rejected input.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }
}

/// State of the now-playing section on the main page.
///
/// `Hidden` renders just the check button; the other two are the outcome of
/// an actual player lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NowPlaying {
    #[default]
    Hidden,
    Idle,
    Active {
        name: String,
        artists: String,
        artwork_url: Option<String>,
    },
}

impl NowPlaying {
    /// Collapses a player response into what the section should show.
    ///
    /// `None` (the API answered 204, no active device) and a paused player
    /// both come out as `Idle`; only a track that is actually playing
    /// becomes `Active`.
    pub fn from_response(playing: Option<CurrentlyPlaying>) -> Self {
        match playing.as_ref().and_then(|current| current.active_track()) {
            Some(track) => NowPlaying::Active {
                name: track.name.clone(),
                artists: artist_names(&track.artists),
                artwork_url: track.artwork_url().map(str::to_string),
            },
            None => NowPlaying::Idle,
        }
    }
}

/// Everything the main page needs to render one response.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub user: Option<UserProfile>,
    pub playlist: Option<PlaylistSummary>,
    pub now_playing: NowPlaying,
    pub notice: Option<Notice>,
}

const STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', sans-serif; background: #121212; color: #f5f5f5; margin: 0; }
main { max-width: 36rem; margin: 3rem auto; padding: 0 1.5rem; }
section { margin: 1.5rem 0; padding: 1.25rem; background: #1e1e1e; border-radius: 8px; }
h1 { color: #1db954; }
h2 { margin-top: 0; font-size: 1.1rem; }
input[type=text] { padding: 0.5rem; border: 1px solid #444; border-radius: 4px; background: #2a2a2a; color: inherit; width: 60%; }
button, a.button { padding: 0.5rem 1.25rem; border: none; border-radius: 999px; background: #1db954; color: #000; font-weight: 600; cursor: pointer; text-decoration: none; display: inline-block; }
button.secondary { background: #333; color: #f5f5f5; }
.notice { padding: 0.75rem 1rem; border-radius: 4px; }
.notice.success { background: #143d22; color: #6fdf8f; }
.notice.error { background: #42191c; color: #ff8a8f; }
.notice.warning { background: #3e3618; color: #ffd866; }
.artwork { width: 120px; height: 120px; border-radius: 4px; }
.track { font-weight: 600; margin-bottom: 0.25rem; }
.artists, .idle { color: #b3b3b3; }
.logout { margin: 2rem 0; }
";

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Spinlist</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n<main>\n{body}</main>\n</body>\n</html>\n"
    )
}

fn notice_html(notice: &Notice) -> String {
    format!(
        "<p class=\"notice {}\">{}</p>\n",
        notice.kind.class(),
        html_escape(&notice.text)
    )
}

/// Renders the logged-out page.
///
/// The only actionable element is the consent link; there are no forms, so
/// nothing on this page can trigger an API call. Rendering the same inputs
/// always yields the same markup.
pub fn login_page(login_url: &str, notice: Option<&Notice>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Spinlist</h1>\n");
    body.push_str(
        "<p>Build a Spotify playlist and check what is playing, right from your browser.</p>\n",
    );
    if let Some(notice) = notice {
        body.push_str(&notice_html(notice));
    }
    body.push_str(&format!(
        "<p><a class=\"button\" href=\"{}\">Log in with Spotify</a></p>\n",
        html_escape(login_url)
    ));
    document(&body)
}

/// Renders the main page for a logged-in user.
pub fn page(view: &PageView) -> String {
    let mut body = String::new();
    body.push_str("<h1>Spinlist</h1>\n");
    body.push_str(&format!(
        "<p class=\"greeting\">{}</p>\n",
        greeting(view.user.as_ref())
    ));
    if let Some(notice) = &view.notice {
        body.push_str(&notice_html(notice));
    }
    body.push_str(&playlist_section(view.playlist.as_ref()));
    if let Some(playlist) = &view.playlist {
        body.push_str(&track_section(playlist));
    }
    body.push_str(&player_section(&view.now_playing));
    body.push_str(
        "<form class=\"logout\" method=\"post\" action=\"/logout\">\
         <button type=\"submit\" class=\"secondary\">Log out</button></form>\n",
    );
    document(&body)
}

fn greeting(user: Option<&UserProfile>) -> String {
    match user {
        Some(user) => {
            let mut greeting = format!(
                "Logged in as <strong>{}</strong>",
                html_escape(user.display_label())
            );
            // The id only adds information when a display name is shown.
            if user.display_name.is_some() {
                greeting.push_str(&format!(" ({})", html_escape(&user.id)));
            }
            greeting
        }
        None => "Logged in.".to_string(),
    }
}

fn playlist_section(playlist: Option<&PlaylistSummary>) -> String {
    let mut section = String::from("<section>\n<h2>Create a playlist</h2>\n");
    if let Some(playlist) = playlist {
        section.push_str(&format!(
            "<p>Current playlist: <strong>{}</strong></p>\n",
            html_escape(&playlist.name)
        ));
    }
    section.push_str(
        "<form method=\"post\" action=\"/playlists\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Playlist name\">\n\
         <button type=\"submit\">Create playlist</button>\n\
         </form>\n</section>\n",
    );
    section
}

fn track_section(playlist: &PlaylistSummary) -> String {
    format!(
        "<section>\n<h2>Add a song</h2>\n\
         <p>Searches the catalog and adds the top match to <strong>{}</strong>.</p>\n\
         <form method=\"post\" action=\"/tracks\">\n\
         <input type=\"text\" name=\"song\" placeholder=\"Song title\">\n\
         <button type=\"submit\">Add song</button>\n\
         </form>\n</section>\n",
        html_escape(&playlist.name)
    )
}

fn player_section(now_playing: &NowPlaying) -> String {
    let mut section = String::from("<section>\n<h2>Now playing</h2>\n");
    match now_playing {
        NowPlaying::Hidden => {}
        NowPlaying::Idle => {
            section.push_str("<p class=\"idle\">No song is currently playing.</p>\n");
        }
        NowPlaying::Active {
            name,
            artists,
            artwork_url,
        } => {
            if let Some(url) = artwork_url {
                section.push_str(&format!(
                    "<img class=\"artwork\" src=\"{}\" alt=\"Album artwork\">\n",
                    html_escape(url)
                ));
            }
            section.push_str(&format!("<p class=\"track\">{}</p>\n", html_escape(name)));
            if !artists.is_empty() {
                section.push_str(&format!(
                    "<p class=\"artists\">{}</p>\n",
                    html_escape(artists)
                ));
            }
        }
    }
    section.push_str(
        "<form method=\"get\" action=\"/player\">\
         <button type=\"submit\">Check now playing</button></form>\n</section>\n",
    );
    section
}
