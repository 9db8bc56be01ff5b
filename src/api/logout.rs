use axum::{
    Extension,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{api::ensure_cookie, info, management::SessionManager, utils::short_id};

/// POST `/logout`. Drops the session's token and everything derived from
/// it, then redirects to a clean page. The cookie itself stays; the next
/// load finds an empty session behind it.
pub async fn logout(
    Extension(sessions): Extension<SessionManager>,
    jar: CookieJar,
) -> Response {
    let (jar, session_id) = ensure_cookie(jar);
    sessions.reset(&session_id).await;
    info!("Session {} logged out", short_id(&session_id));
    (jar, Redirect::to("/")).into_response()
}
