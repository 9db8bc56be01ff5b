use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::SessionManager;

pub async fn health(Extension(sessions): Extension<SessionManager>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": sessions.count().await
    }))
}
