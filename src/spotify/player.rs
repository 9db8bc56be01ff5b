use reqwest::StatusCode;

use crate::{
    spotify::{SPOTIFY_API_URL, SpotifyClient, SpotifyError, read_json},
    types::CurrentlyPlaying,
};

/// Fetches what the user's player is currently playing, if anything.
///
/// The endpoint answers `204 No Content` when no device is active, which
/// comes back as `Ok(None)` rather than an error. A `200` body can still
/// describe a paused player (`is_playing: false`); callers go through
/// [`CurrentlyPlaying::active_track`] to tell the two apart.
pub async fn currently_playing(
    client: &SpotifyClient,
) -> Result<Option<CurrentlyPlaying>, SpotifyError> {
    let url = format!("{}/me/player/currently-playing", SPOTIFY_API_URL);
    let response = client.get(&url).send().await?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let playing: CurrentlyPlaying = read_json(response).await?;
    Ok(Some(playing))
}
