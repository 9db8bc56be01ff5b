use crate::{
    spotify::{SPOTIFY_API_URL, SpotifyClient, SpotifyError, read_json},
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, PlaylistSummary},
};

/// Creates a new public playlist owned by the given user.
///
/// The playlist is created empty, with no description; tracks are added one
/// at a time afterwards via [`add_track`].
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `user_id` - Spotify id of the owning user, from their profile
/// * `name` - Playlist name, already validated as non-blank
///
/// # Returns
///
/// The id and name of the created playlist, as echoed back by the API.
pub async fn create(
    client: &SpotifyClient,
    user_id: &str,
    name: &str,
) -> Result<PlaylistSummary, SpotifyError> {
    let url = format!("{}/users/{}/playlists", SPOTIFY_API_URL, user_id);
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: String::new(),
        public: true,
    };

    let response = client.post(&url).json(&body).send().await?;
    read_json(response).await
}

/// Appends a single track to a playlist.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `playlist_id` - Target playlist, created earlier in this session
/// * `uri` - Spotify track URI (`spotify:track:…`) from a search result
pub async fn add_track(
    client: &SpotifyClient,
    playlist_id: &str,
    uri: &str,
) -> Result<AddTracksResponse, SpotifyError> {
    let url = format!("{}/playlists/{}/tracks", SPOTIFY_API_URL, playlist_id);
    let body = AddTracksRequest {
        uris: vec![uri.to_string()],
    };

    let response = client.post(&url).json(&body).send().await?;
    read_json(response).await
}
