use spinlist::render::*;
use spinlist::types::{
    AlbumRef, CurrentlyPlaying, Image, PlayingTrack, PlaylistSummary, TrackArtist, UserProfile,
};

// Helper function to create a playing-track response
fn playing(name: &str, artist: &str, artwork: Option<&str>) -> CurrentlyPlaying {
    CurrentlyPlaying {
        is_playing: true,
        item: Some(PlayingTrack {
            name: name.to_string(),
            artists: vec![TrackArtist {
                name: artist.to_string(),
            }],
            album: artwork.map(|url| AlbumRef {
                images: vec![Image {
                    url: url.to_string(),
                }],
            }),
        }),
    }
}

fn named_user() -> UserProfile {
    UserProfile {
        id: "user1".to_string(),
        display_name: Some("Vic".to_string()),
    }
}

fn test_playlist() -> PlaylistSummary {
    PlaylistSummary {
        id: "pl1".to_string(),
        name: "Road Trip".to_string(),
    }
}

#[test]
fn test_login_page_is_static() {
    let url = "https://accounts.spotify.com/authorize?client_id=abc&response_type=code";

    // Rendering twice yields byte-identical markup
    let first = login_page(url, None);
    let second = login_page(url, None);
    assert_eq!(first, second);

    // Exactly one link, no forms: nothing on the page can fire an API call
    assert_eq!(first.matches("<a ").count(), 1);
    assert_eq!(first.matches("<form").count(), 0);

    // The consent URL lands in the href with its ampersand escaped
    assert!(first.contains("client_id=abc&amp;response_type=code"));
}

#[test]
fn test_login_page_notice() {
    let notice = Notice::error("Login failed: invalid_grant");
    let page = login_page("https://accounts.spotify.com/authorize", Some(&notice));

    assert!(page.contains("notice error"));
    assert!(page.contains("Login failed: invalid_grant"));
}

#[test]
fn test_page_greeting() {
    // Display name and id both show
    let view = PageView {
        user: Some(named_user()),
        ..Default::default()
    };
    let markup = page(&view);
    assert!(markup.contains("Logged in as <strong>Vic</strong> (user1)"));

    // Without a display name the id stands alone
    let view = PageView {
        user: Some(UserProfile {
            id: "user1".to_string(),
            display_name: None,
        }),
        ..Default::default()
    };
    let markup = page(&view);
    assert!(markup.contains("Logged in as <strong>user1</strong>"));
    assert!(!markup.contains("(user1)"));

    // A missing profile degrades to a plain greeting
    let view = PageView::default();
    assert!(page(&view).contains("Logged in."));
}

#[test]
fn test_page_song_form_needs_playlist() {
    // Without a playlist only the create form is offered
    let view = PageView {
        user: Some(named_user()),
        ..Default::default()
    };
    let markup = page(&view);
    assert!(markup.contains("action=\"/playlists\""));
    assert!(!markup.contains("action=\"/tracks\""));

    // With a playlist the song form appears and the name is shown
    let view = PageView {
        user: Some(named_user()),
        playlist: Some(test_playlist()),
        ..Default::default()
    };
    let markup = page(&view);
    assert!(markup.contains("action=\"/tracks\""));
    assert!(markup.contains("Road Trip"));
}

#[test]
fn test_page_always_offers_player_and_logout() {
    let markup = page(&PageView::default());
    assert!(markup.contains("action=\"/player\""));
    assert!(markup.contains("action=\"/logout\""));
}

#[test]
fn test_page_escapes_user_text() {
    let view = PageView {
        user: Some(UserProfile {
            id: "user1".to_string(),
            display_name: Some("<b>Vic & Co</b>".to_string()),
        }),
        playlist: Some(PlaylistSummary {
            id: "pl1".to_string(),
            name: "\"Mix\" <tape>".to_string(),
        }),
        ..Default::default()
    };
    let markup = page(&view);

    assert!(markup.contains("&lt;b&gt;Vic &amp; Co&lt;/b&gt;"));
    assert!(markup.contains("&quot;Mix&quot; &lt;tape&gt;"));
    assert!(!markup.contains("<b>Vic"));
    assert!(!markup.contains("<tape>"));
}

#[test]
fn test_page_now_playing_states() {
    // Hidden: section renders with just the check button
    let markup = page(&PageView::default());
    assert!(!markup.contains("No song is currently playing."));
    assert!(!markup.contains("class=\"artwork\""));

    // Idle: the quiet message shows
    let view = PageView {
        now_playing: NowPlaying::Idle,
        ..Default::default()
    };
    assert!(page(&view).contains("No song is currently playing."));

    // Active: track, artists and artwork all render
    let view = PageView {
        now_playing: NowPlaying::from_response(Some(playing(
            "Halah",
            "Mazzy Star",
            Some("https://i.scdn.co/image/cover"),
        ))),
        ..Default::default()
    };
    let markup = page(&view);
    assert!(markup.contains("Halah"));
    assert!(markup.contains("Mazzy Star"));
    assert!(markup.contains("src=\"https://i.scdn.co/image/cover\""));
}

#[test]
fn test_now_playing_from_response() {
    // No response at all (204 from the API) is idle
    assert_eq!(NowPlaying::from_response(None), NowPlaying::Idle);

    // A paused player is idle even though a track is attached
    let mut paused = playing("Halah", "Mazzy Star", None);
    paused.is_playing = false;
    assert_eq!(NowPlaying::from_response(Some(paused)), NowPlaying::Idle);

    // Playing but with an empty item is idle too
    let empty = CurrentlyPlaying {
        is_playing: true,
        item: None,
    };
    assert_eq!(NowPlaying::from_response(Some(empty)), NowPlaying::Idle);

    // A playing track maps onto the active state
    let active = NowPlaying::from_response(Some(playing("Halah", "Mazzy Star", None)));
    match active {
        NowPlaying::Active {
            name,
            artists,
            artwork_url,
        } => {
            assert_eq!(name, "Halah");
            assert_eq!(artists, "Mazzy Star");
            assert!(artwork_url.is_none());
        }
        other => panic!("expected active playback, got {:?}", other),
    }
}

#[test]
fn test_notice_constructors() {
    assert_eq!(Notice::success("done").kind, NoticeKind::Success);
    assert_eq!(Notice::error("bad").kind, NoticeKind::Error);
    assert_eq!(Notice::warning("hm").kind, NoticeKind::Warning);
    assert_eq!(Notice::success("done").text, "done");
}
