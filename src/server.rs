use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::{Res, api, management::SessionManager};

/// Builds the application router with the session store attached as an
/// extension, so every handler sees the same store.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/playlists", post(api::create_playlist))
        .route("/tracks", post(api::add_track))
        .route("/player", get(api::now_playing))
        .route("/logout", post(api::logout))
        .route("/health", get(api::health))
        .layer(Extension(sessions))
}

/// Serves the app on an already-bound listener until the process exits.
/// Binding stays with the caller so startup can report the address (and
/// open the browser) only once the port is actually held.
pub async fn serve(listener: TcpListener, sessions: SessionManager) -> Res<()> {
    axum::serve(listener, router(sessions)).await?;
    Ok(())
}
