use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    api::{current_user, ensure_cookie, login_response},
    management::SessionManager,
    render::{self, Notice, PageView},
    spotify, success,
    utils::short_id,
    warning,
};

/// GET `/`. The registered redirect URI points at this route, so the login
/// page, the code-for-token exchange and the main page all live here; after
/// consent the authorization code arrives as a query parameter on the page
/// itself.
pub async fn index(
    Extension(sessions): Extension<SessionManager>,
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
) -> Response {
    let (jar, session_id) = ensure_cookie(jar);
    let mut session = sessions.load_or_create(&session_id).await;

    if !session.is_authenticated() {
        if let Some(code) = params.get("code") {
            if session.should_exchange(code) {
                session.mark_code(code);
                match spotify::auth::exchange_code(code).await {
                    Ok(token) => {
                        session.install_token(token);
                        sessions.save(&session_id, session).await;
                        success!("Session {} logged in", short_id(&session_id));
                        // Redirect so the single-use code drops out of the URL.
                        return (jar, Redirect::to("/")).into_response();
                    }
                    Err(err) => {
                        sessions.save(&session_id, session).await;
                        warning!("Code exchange failed: {}", err);
                        return login_response(
                            jar,
                            Some(Notice::error(format!("Login failed: {}", err))),
                        );
                    }
                }
            }
            // Code seen before; never burn a second exchange on a reloaded
            // redirect URL.
            return login_response(
                jar,
                Some(Notice::warning(
                    "That login link was already used. Please log in again.",
                )),
            );
        }
        return login_response(jar, None);
    }

    if let Some(token) = &session.token {
        if token.is_expired() {
            match spotify::auth::refresh_token(token).await {
                Ok(fresh) => {
                    session.install_token(fresh);
                    sessions.save(&session_id, session.clone()).await;
                }
                Err(err) => {
                    warning!("Token refresh failed: {}", err);
                    sessions.reset(&session_id).await;
                    return login_response(
                        jar,
                        Some(Notice::warning("Your session expired. Please log in again.")),
                    );
                }
            }
        }
    }

    let Some(client) = session.client.clone() else {
        sessions.reset(&session_id).await;
        return login_response(jar, None);
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

    let view = PageView {
        user: Some(user),
        playlist: session.playlist.clone(),
        ..Default::default()
    };
    (jar, Html(render::page(&view))).into_response()
}
