use reqwest::Client;
use url::Url;

use crate::{
    config,
    spotify::{SPOTIFY_AUTH_URL, SPOTIFY_TOKEN_URL, SpotifyError, read_json},
    types::{Token, TokenGrant},
};

/// Builds the Spotify consent URL the login page links to.
///
/// The URL carries the client id, the redirect URI pointing back at this
/// app's page, the fixed permission-scope set and `show_dialog=true`, which
/// forces the consent dialog even for a user who approved the app before.
/// After consent, Spotify redirects to the app with `?code=…` appended.
///
/// # Arguments
///
/// * `client_id` - Client ID of the registered Spotify application
/// * `redirect_uri` - Registered callback, the app's own page URL
///
/// # Example
///
/// ```
/// let url = authorize_url("abc123", "http://127.0.0.1:8080/");
/// assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
/// ```
pub fn authorize_url(client_id: &str, redirect_uri: &str) -> String {
    let url = Url::parse_with_params(
        SPOTIFY_AUTH_URL,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", config::SPOTIFY_SCOPE),
            ("show_dialog", "true"),
        ],
    )
    .expect("authorize endpoint URL is valid");
    url.to_string()
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 authorization-code flow: one POST to the accounts
/// token endpoint with the code and the redirect URI, authenticated with the
/// client id and secret as HTTP Basic credentials.
///
/// # Arguments
///
/// * `code` - Authorization code from the redirect back to the page
///
/// # Returns
///
/// A full [`Token`] (access token, refresh token, scope, expiry) stamped
/// with the current time, or a [`SpotifyError`] when the exchange fails.
///
/// # Error Conditions
///
/// Codes are single-use and expire within minutes; an invalid, expired or
/// already-used code yields an `Api` error with Spotify's description
/// (typically `invalid_grant`). Network failures surface as `Transport`.
pub async fn exchange_code(code: &str) -> Result<Token, SpotifyError> {
    let redirect_uri = config::spotify_redirect_uri();

    let response = Client::new()
        .post(SPOTIFY_TOKEN_URL)
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let grant: TokenGrant = read_json(response).await?;
    Ok(Token::from_grant(grant, None))
}

/// Exchanges a refresh token for a fresh access token.
///
/// Used right before an authenticated render when the held token is past its
/// expiry buffer, so the user is not bounced to the login page just because
/// an hour passed. Spotify may rotate the refresh token; when the response
/// omits it, the previous one carries over into the new [`Token`].
///
/// # Arguments
///
/// * `token` - The expired (or expiring) token holding the refresh token
///
/// # Error Conditions
///
/// A revoked grant or an invalid refresh token yields an `Api` error; the
/// caller is expected to tear the session down to the login state.
pub async fn refresh_token(token: &Token) -> Result<Token, SpotifyError> {
    let response = Client::new()
        .post(SPOTIFY_TOKEN_URL)
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", token.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let grant: TokenGrant = read_json(response).await?;
    Ok(Token::from_grant(grant, Some(&token.refresh_token)))
}
