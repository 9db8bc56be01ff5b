use serde_json::json;
use spinlist::types::{CurrentlyPlaying, SearchResponse, TokenGrant, Track, UserProfile};

#[test]
fn test_search_response_top_track() {
    let response: SearchResponse = serde_json::from_value(json!({
        "tracks": {
            "items": [
                {
                    "name": "Fade Into You",
                    "uri": "spotify:track:1LzNfuep1bnAUR9skqdHCK",
                    "artists": [{"name": "Mazzy Star"}]
                },
                {
                    "name": "Fade Into You - Live",
                    "uri": "spotify:track:other",
                    "artists": [{"name": "Mazzy Star"}]
                }
            ]
        }
    }))
    .unwrap();

    // The first item is the top match
    let track = response.top_track().unwrap();
    assert_eq!(track.name, "Fade Into You");
    assert_eq!(track.uri, "spotify:track:1LzNfuep1bnAUR9skqdHCK");
    assert_eq!(track.primary_artist(), Some("Mazzy Star"));
}

#[test]
fn test_search_response_no_results() {
    let response: SearchResponse =
        serde_json::from_value(json!({"tracks": {"items": []}})).unwrap();
    assert!(response.top_track().is_none());
}

#[test]
fn test_track_without_artists() {
    // Some catalog entries come back without an artists array
    let track: Track = serde_json::from_value(json!({
        "name": "Untitled",
        "uri": "spotify:track:x"
    }))
    .unwrap();

    assert!(track.artists.is_empty());
    assert!(track.primary_artist().is_none());
}

#[test]
fn test_currently_playing_full_shape() {
    let playing: CurrentlyPlaying = serde_json::from_value(json!({
        "is_playing": true,
        "item": {
            "name": "Halah",
            "artists": [{"name": "Mazzy Star"}, {"name": "Hope Sandoval"}],
            "album": {
                "images": [
                    {"url": "https://i.scdn.co/image/large"},
                    {"url": "https://i.scdn.co/image/small"}
                ]
            }
        }
    }))
    .unwrap();

    let track = playing.active_track().unwrap();
    assert_eq!(track.name, "Halah");
    assert_eq!(track.artists.len(), 2);

    // The first (largest) image is the artwork
    assert_eq!(track.artwork_url(), Some("https://i.scdn.co/image/large"));
}

#[test]
fn test_currently_playing_paused() {
    let playing: CurrentlyPlaying = serde_json::from_value(json!({
        "is_playing": false,
        "item": {
            "name": "Halah",
            "artists": [{"name": "Mazzy Star"}],
            "album": {"images": []}
        }
    }))
    .unwrap();

    // A paused player holds a track but nothing counts as active
    assert!(playing.active_track().is_none());
}

#[test]
fn test_currently_playing_without_item() {
    let playing: CurrentlyPlaying =
        serde_json::from_value(json!({"is_playing": true, "item": null})).unwrap();
    assert!(playing.active_track().is_none());
}

#[test]
fn test_currently_playing_without_album_art() {
    // Podcast episodes and local files can miss the album block entirely
    let playing: CurrentlyPlaying = serde_json::from_value(json!({
        "is_playing": true,
        "item": {"name": "Some Episode"}
    }))
    .unwrap();

    let track = playing.active_track().unwrap();
    assert!(track.artists.is_empty());
    assert!(track.artwork_url().is_none());

    // An empty images array also yields no artwork
    let playing: CurrentlyPlaying = serde_json::from_value(json!({
        "is_playing": true,
        "item": {"name": "Halah", "album": {"images": []}}
    }))
    .unwrap();
    assert!(playing.active_track().unwrap().artwork_url().is_none());
}

#[test]
fn test_token_grant_parsing() {
    // Authorization-code grants carry everything
    let grant: TokenGrant = serde_json::from_value(json!({
        "access_token": "BQD…access",
        "token_type": "Bearer",
        "scope": "playlist-modify-public user-read-private",
        "expires_in": 3600,
        "refresh_token": "AQC…refresh"
    }))
    .unwrap();
    assert_eq!(grant.access_token, "BQD…access");
    assert_eq!(grant.refresh_token.as_deref(), Some("AQC…refresh"));
    assert_eq!(grant.expires_in, 3600);

    // Refresh grants may omit the refresh token and scope
    let grant: TokenGrant = serde_json::from_value(json!({
        "access_token": "BQD…fresh",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .unwrap();
    assert!(grant.refresh_token.is_none());
    assert!(grant.scope.is_none());
}

#[test]
fn test_user_profile_display_label() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "user1",
        "display_name": "Vic"
    }))
    .unwrap();
    assert_eq!(user.display_label(), "Vic");

    // Spotify sends an explicit null for users without a display name
    let user: UserProfile = serde_json::from_value(json!({
        "id": "user1",
        "display_name": null
    }))
    .unwrap();
    assert_eq!(user.display_label(), "user1");
}
