use axum::{
    Extension,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    api::{ensure_cookie, login_response},
    management::SessionManager,
    render::{self, Notice, NowPlaying, PageView},
    spotify, warning,
};

/// GET `/player`. Renders the main page with the now-playing section filled
/// in from the player state.
pub async fn now_playing(
    Extension(sessions): Extension<SessionManager>,
    jar: CookieJar,
) -> Response {
    let (jar, session_id) = ensure_cookie(jar);
    let session = sessions.load_or_create(&session_id).await;

    let Some(client) = session.client.clone() else {
        return login_response(
            jar,
            Some(Notice::warning("Log in to check what's playing.")),
        );
    };

    match spotify::player::currently_playing(&client).await {
        Ok(playing) => {
            let view = PageView {
                user: session.user.clone(),
                playlist: session.playlist.clone(),
                now_playing: NowPlaying::from_response(playing),
                notice: None,
            };
            (jar, Html(render::page(&view))).into_response()
        }
        Err(err) => {
            warning!("Playback lookup failed: {}", err);
            sessions.reset(&session_id).await;
            login_response(
                jar,
                Some(Notice::error(format!("Checking playback failed: {}", err))),
            )
        }
    }
}
