use crate::{
    spotify::{SPOTIFY_API_URL, SpotifyClient, SpotifyError, read_json},
    types::UserProfile,
};

/// Fetches the profile of the user the access token belongs to.
///
/// The profile id is needed as the owner when creating playlists, and the
/// display name feeds the page greeting. Called once per login; the result
/// is cached on the session afterwards.
pub async fn get_current_user(client: &SpotifyClient) -> Result<UserProfile, SpotifyError> {
    let url = format!("{}/me", SPOTIFY_API_URL);
    let response = client.get(&url).send().await?;
    read_json(response).await
}
