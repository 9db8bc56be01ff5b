use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Seconds before the real expiry at which a token is treated as expired,
/// so a request never departs with a token about to lapse mid-flight.
const EXPIRY_BUFFER_SECS: u64 = 240;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Builds a token from a grant response, stamping the current time.
    /// Refresh grants may omit the refresh token; the previous one carries over.
    pub fn from_grant(grant: TokenGrant, previous_refresh: Option<&str>) -> Self {
        let refresh_token = grant
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default();
        Token {
            access_token: grant.access_token,
            refresh_token,
            scope: grant.scope.unwrap_or_default(),
            expires_in: grant.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_BUFFER_SECS >= self.obtained_at + self.expires_in
    }
}

/// Body of a successful response from the accounts token endpoint, for both
/// the authorization-code and the refresh-token grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

impl UserProfile {
    /// Name shown in the greeting; falls back to the id when the account
    /// has no display name.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

impl SearchResponse {
    /// The top-ranked match, which is the only one "add song" ever uses.
    pub fn top_track(self) -> Option<Track> {
        self.tracks.items.into_iter().next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|artist| artist.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

/// The slice of a playlist object the session keeps: enough to target
/// add-track calls and to name the playlist on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub is_playing: bool,
    pub item: Option<PlayingTrack>,
}

impl CurrentlyPlaying {
    /// The item, but only while playback is actually running; a paused or
    /// empty player reads as idle.
    pub fn active_track(&self) -> Option<&PlayingTrack> {
        if self.is_playing {
            self.item.as_ref()
        } else {
            None
        }
    }
}

/// Item of the currently-playing response. Artists and album are defaulted
/// because podcast episodes carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: Option<AlbumRef>,
}

impl PlayingTrack {
    pub fn artwork_url(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}
