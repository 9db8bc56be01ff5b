use spinlist::spotify::{api_message, auth::authorize_url};

#[test]
fn test_authorize_url_contents() {
    let url = authorize_url("client-123", "http://127.0.0.1:8080/");

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client-123"));
    assert!(url.contains("response_type=code"));

    // Consent dialog is forced on every login
    assert!(url.contains("show_dialog=true"));

    // The redirect URI is query-encoded, never raw
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8080%2F"));
    assert!(!url.contains("redirect_uri=http://"));

    // All required permission scopes are requested
    assert!(url.contains("playlist-modify-public"));
    assert!(url.contains("playlist-modify-private"));
    assert!(url.contains("user-read-private"));
    assert!(url.contains("user-read-playback-state"));
}

#[test]
fn test_authorize_url_deterministic() {
    let first = authorize_url("client-123", "http://127.0.0.1:8080/");
    let second = authorize_url("client-123", "http://127.0.0.1:8080/");
    assert_eq!(first, second);
}

#[test]
fn test_api_message_web_api_shape() {
    let body = r#"{"error": {"status": 404, "message": "Not found."}}"#;
    assert_eq!(api_message(body), "Not found.");
}

#[test]
fn test_api_message_accounts_shape() {
    let body = r#"{"error": "invalid_grant", "error_description": "Invalid authorization code"}"#;
    assert_eq!(api_message(body), "invalid_grant: Invalid authorization code");

    let body = r#"{"error": "invalid_grant"}"#;
    assert_eq!(api_message(body), "invalid_grant");
}

#[test]
fn test_api_message_fallbacks() {
    // Non-JSON bodies come back trimmed
    assert_eq!(api_message("  upstream exploded  "), "upstream exploded");

    // Empty bodies get a placeholder
    assert_eq!(api_message(""), "no error details");
    assert_eq!(api_message("   "), "no error details");

    // Long bodies are truncated
    let body = "x".repeat(500);
    assert_eq!(api_message(&body).len(), 200);
}
