use crate::{
    spotify::{SPOTIFY_API_URL, SpotifyClient, SpotifyError, read_json},
    types::SearchResponse,
};

/// Runs a track search against the Spotify catalog.
///
/// The query goes through as free text, the way a user would type it into
/// the song field. Only track results are requested.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `query` - Free-text search, e.g. a song title or "title artist"
/// * `limit` - Maximum number of tracks to return (1..=50)
///
/// # Returns
///
/// The track page of the search response; with `limit` 1 the caller picks
/// the top match via [`SearchResponse::top_track`].
pub async fn search_tracks(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<SearchResponse, SpotifyError> {
    let url = format!("{}/search", SPOTIFY_API_URL);
    let response = client
        .get(&url)
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit.to_string().as_str()),
        ])
        .send()
        .await?;

    read_json(response).await
}
