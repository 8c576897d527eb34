//! OAuth 2.0 Authorization Code flow with PKCE.
//!
//! One [`OAuthFlow`] drives both supported providers; the provider only decides
//! the endpoints, scopes, and how the profile is fetched. The handshake state
//! lives in the `oauth_states` table:
//!
//! 1. [`OAuthFlow::generate_auth_url`] builds the authorization URL, generates a
//!    random PKCE challenge, and persists the CSRF state + verifier with a
//!    10-minute expiry.
//! 2. [`OAuthFlow::exchange_code`] — called by the `/auth/:provider/callback`
//!    route in the `web` crate — retrieves and atomically deletes the matching
//!    state row (validating CSRF state and expiry in one query), exchanges the
//!    code + verifier for an access token, fetches the profile, and upserts the
//!    user keyed on `(provider, provider_id)` so returning users get their
//!    profile refreshed.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use crate::db::get_pool;
use crate::models::User;

/// Which upstream identity provider an OAuth flow talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    GitHub,
    Google,
}

impl OAuthProvider {
    /// Stable lowercase key used in routes, the `users.provider` column, and
    /// the `oauth_states.provider` column.
    pub fn key(self) -> &'static str {
        match self {
            OAuthProvider::GitHub => "github",
            OAuthProvider::Google => "google",
        }
    }

    /// Parse a provider key from a route segment.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "github" => Some(OAuthProvider::GitHub),
            "google" => Some(OAuthProvider::Google),
            _ => None,
        }
    }

    fn scopes(self) -> &'static [&'static str] {
        match self {
            OAuthProvider::GitHub => &["user:email", "read:user"],
            OAuthProvider::Google => &["openid", "email", "profile"],
        }
    }
}

/// GitHub user info from API.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    id: i64,
    login: String,
    email: Option<String>,
    name: Option<String>,
    avatar_url: Option<String>,
}

/// GitHub email info from API.
#[derive(Debug, Deserialize)]
struct GitHubEmail {
    email: String,
    primary: bool,
    verified: bool,
}

/// Google user info from API.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// Provider-agnostic profile used for the user upsert.
struct Profile {
    provider_id: String,
    email: String,
    name: Option<String>,
    avatar_url: Option<String>,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Authorization Code + PKCE flow for one provider.
pub struct OAuthFlow {
    provider: OAuthProvider,
    config: OAuthConfig,
}

impl OAuthFlow {
    /// Create a flow for the given provider, loading its config from the environment.
    pub fn new(provider: OAuthProvider) -> Result<Self, String> {
        let config = OAuthConfig::load(provider)?;
        Ok(Self { provider, config })
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Generate the authorization URL and persist the CSRF state + PKCE verifier.
    pub async fn generate_auth_url(&self) -> Result<String, String> {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut request = client
            .authorize_url(CsrfToken::new_random)
            .set_pkce_challenge(pkce_challenge);
        for scope in self.provider.scopes() {
            request = request.add_scope(Scope::new((*scope).to_string()));
        }
        let (auth_url, csrf_state) = request.url();

        let pool = get_pool().await.map_err(|e| e.to_string())?;

        sqlx::query(
            r#"
            INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at)
            VALUES ($1, $2, $3, NOW() + INTERVAL '10 minutes')
            "#,
        )
        .bind(csrf_state.secret())
        .bind(self.provider.key())
        .bind(pkce_verifier.secret())
        .execute(pool)
        .await
        .map_err(|e| e.to_string())?;

        Ok(auth_url.to_string())
    }

    /// Exchange an authorization code for tokens, fetch the profile, and upsert the user.
    pub async fn exchange_code(&self, code: &str, state: &str) -> Result<User, String> {
        let pool = get_pool().await.map_err(|e| e.to_string())?;

        // Retrieve and delete the state row; expiry and CSRF check in one query.
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            DELETE FROM oauth_states
            WHERE state = $1 AND provider = $2 AND expires_at > NOW()
            RETURNING pkce_verifier
            "#,
        )
        .bind(state)
        .bind(self.provider.key())
        .fetch_optional(pool)
        .await
        .map_err(|e| e.to_string())?;

        let pkce_verifier = row.ok_or("Invalid or expired OAuth state")?.0;

        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| e.to_string())?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| format!("Token exchange failed: {}", e))?;

        let profile = self
            .fetch_profile(token_result.access_token().secret())
            .await?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, name, avatar_url, provider, provider_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (provider, provider_id)
            DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                avatar_url = EXCLUDED.avatar_url,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&profile.email)
        .bind(&profile.name)
        .bind(&profile.avatar_url)
        .bind(self.provider.key())
        .bind(&profile.provider_id)
        .fetch_one(pool)
        .await
        .map_err(|e| e.to_string())?;

        Ok(user)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, String> {
        let api_client = Client::new();

        match self.provider {
            OAuthProvider::GitHub => {
                let github_user: GitHubUser = api_client
                    .get("https://api.github.com/user")
                    .header("Authorization", format!("Bearer {}", access_token))
                    .header("User-Agent", "ClipForge")
                    .send()
                    .await
                    .map_err(|e| e.to_string())?
                    .json()
                    .await
                    .map_err(|e| e.to_string())?;

                // The profile email can be private; fall back to the emails endpoint.
                let email = match github_user.email {
                    Some(email) => email,
                    None => {
                        let emails: Vec<GitHubEmail> = api_client
                            .get("https://api.github.com/user/emails")
                            .header("Authorization", format!("Bearer {}", access_token))
                            .header("User-Agent", "ClipForge")
                            .send()
                            .await
                            .map_err(|e| e.to_string())?
                            .json()
                            .await
                            .map_err(|e| e.to_string())?;

                        emails
                            .into_iter()
                            .find(|e| e.primary && e.verified)
                            .map(|e| e.email)
                            .ok_or("No verified primary email found")?
                    }
                };

                Ok(Profile {
                    provider_id: github_user.id.to_string(),
                    email,
                    name: github_user.name.or(Some(github_user.login)),
                    avatar_url: github_user.avatar_url,
                })
            }
            OAuthProvider::Google => {
                let google_user: GoogleUser = api_client
                    .get("https://www.googleapis.com/oauth2/v2/userinfo")
                    .header("Authorization", format!("Bearer {}", access_token))
                    .send()
                    .await
                    .map_err(|e| e.to_string())?
                    .json()
                    .await
                    .map_err(|e| e.to_string())?;

                Ok(Profile {
                    provider_id: google_user.id,
                    email: google_user.email,
                    name: google_user.name,
                    avatar_url: google_user.picture,
                })
            }
        }
    }
}
