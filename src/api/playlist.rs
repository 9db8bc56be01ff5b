use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    api::{current_user, ensure_cookie, login_response},
    info,
    management::SessionManager,
    render::{self, Notice, PageView},
    spotify,
    utils::clean_input,
    warning,
};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistForm {
    pub name: String,
}

/// POST `/playlists`. Validates the name, creates the playlist and makes it
/// the session's target for song additions.
pub async fn create_playlist(
    Extension(sessions): Extension<SessionManager>,
    jar: CookieJar,
    Form(form): Form<CreatePlaylistForm>,
) -> Response {
    let (jar, session_id) = ensure_cookie(jar);
    let mut session = sessions.load_or_create(&session_id).await;

    let Some(client) = session.client.clone() else {
        return login_response(
            jar,
            Some(Notice::warning("Log in before creating a playlist.")),
        );
    };

    // Rejected input never reaches the API.
    let Some(name) = clean_input(&form.name) else {
        let view = PageView {
            user: session.user.clone(),
            playlist: session.playlist.clone(),
            notice: Some(Notice::error("Please enter a valid playlist name.")),
            ..Default::default()
        };
        return (jar, Html(render::page(&view))).into_response();
    };

    let user = match current_user(&sessions, &session_id, &mut session, &client).await {
        Ok(user) => user,
        Err(err) => {
            warning!("Profile fetch failed: {}", err);
            sessions.reset(&session_id).await;
            return login_response(
                jar,
                Some(Notice::error(format!("Spotify rejected the session: {}", err))),
            );
        }
    };

    match spotify::playlist::create(&client, &user.id, name).await {
        Ok(playlist) => {
            info!("Created playlist '{}' ({})", playlist.name, playlist.id);
            let notice = Notice::success(format!("Playlist '{}' created!", playlist.name));
            session.playlist = Some(playlist.clone());
            sessions.save(&session_id, session).await;

            let view = PageView {
                user: Some(user),
                playlist: Some(playlist),
                notice: Some(notice),
                ..Default::default()
            };
            (jar, Html(render::page(&view))).into_response()
        }
        Err(err) => {
            warning!("Playlist creation failed: {}", err);
            sessions.reset(&session_id).await;
            login_response(
                jar,
                Some(Notice::error(format!(
                    "Creating the playlist failed: {}",
                    err
                ))),
            )
        }
    }
}
