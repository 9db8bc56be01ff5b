use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    api::{ensure_cookie, login_response},
    info,
    management::SessionManager,
    render::{self, Notice, PageView},
    spotify,
    utils::clean_input,
    warning,
};

#[derive(Debug, Deserialize)]
pub struct AddTrackForm {
    pub song: String,
}

/// POST `/tracks`. Searches the catalog for the song and appends the top
/// match to the session's playlist. A search miss leaves the playlist
/// untouched.
pub async fn add_track(
    Extension(sessions): Extension<SessionManager>,
    jar: CookieJar,
    Form(form): Form<AddTrackForm>,
) -> Response {
    let (jar, session_id) = ensure_cookie(jar);
    let session = sessions.load_or_create(&session_id).await;

    let Some(client) = session.client.clone() else {
        return login_response(jar, Some(Notice::warning("Log in before adding songs.")));
    };

    let Some(playlist) = session.playlist.clone() else {
        let view = PageView {
            user: session.user.clone(),
            notice: Some(Notice::warning("Create a playlist first.")),
            ..Default::default()
        };
        return (jar, Html(render::page(&view))).into_response();
    };

    let Some(song) = clean_input(&form.song) else {
        let view = PageView {
            user: session.user.clone(),
            playlist: Some(playlist),
            notice: Some(Notice::error("Please enter a valid song name.")),
            ..Default::default()
        };
        return (jar, Html(render::page(&view))).into_response();
    };

    let results = match spotify::search::search_tracks(&client, song, 1).await {
        Ok(results) => results,
        Err(err) => {
            warning!("Track search failed: {}", err);
            sessions.reset(&session_id).await;
            return login_response(
                jar,
                Some(Notice::error(format!(
                    "Searching for the song failed: {}",
                    err
                ))),
            );
        }
    };

    let Some(track) = results.top_track() else {
        let view = PageView {
            user: session.user.clone(),
            playlist: Some(playlist),
            notice: Some(Notice::warning(format!("No track found for '{}'.", song))),
            ..Default::default()
        };
        return (jar, Html(render::page(&view))).into_response();
    };

    match spotify::playlist::add_track(&client, &playlist.id, &track.uri).await {
        Ok(_) => {
            let added = match track.primary_artist() {
                Some(artist) => format!(
                    "Added '{}' by {} to '{}'.",
                    track.name, artist, playlist.name
                ),
                None => format!("Added '{}' to '{}'.", track.name, playlist.name),
            };
            info!("{}", added);

            let view = PageView {
                user: session.user.clone(),
                playlist: Some(playlist),
                notice: Some(Notice::success(added)),
                ..Default::default()
            };
            (jar, Html(render::page(&view))).into_response()
        }
        Err(err) => {
            warning!("Adding the track failed: {}", err);
            sessions.reset(&session_id).await;
            login_response(
                jar,
                Some(Notice::error(format!("Adding the song failed: {}", err))),
            )
        }
    }
}
