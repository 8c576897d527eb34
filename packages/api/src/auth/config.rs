//! OAuth configuration from environment variables.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::oauth::OAuthProvider;

/// Endpoint and credential set for one upstream identity provider.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Load the configuration for a provider from the environment.
    ///
    /// `GITHUB_CLIENT_ID`/`GITHUB_CLIENT_SECRET` (or the `GOOGLE_` pair) must be
    /// set; `AUTH_REDIRECT_URI` defaults to the local dev callback and has its
    /// trailing `/callback` expanded to the provider-specific path.
    pub fn load(provider: OAuthProvider) -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let (id_var, secret_var) = match provider {
            OAuthProvider::GitHub => ("GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"),
            OAuthProvider::Google => ("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
        };

        let client_id = std::env::var(id_var).map_err(|_| format!("{id_var} not set"))?;
        let client_secret =
            std::env::var(secret_var).map_err(|_| format!("{secret_var} not set"))?;
        let redirect_uri = std::env::var("AUTH_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/callback".to_string());

        let (auth_endpoint, token_endpoint) = match provider {
            OAuthProvider::GitHub => (
                "https://github.com/login/oauth/authorize",
                "https://github.com/login/oauth/access_token",
            ),
            OAuthProvider::Google => (
                "https://accounts.google.com/o/oauth2/v2/auth",
                "https://oauth2.googleapis.com/token",
            ),
        };

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new(auth_endpoint.to_string()).map_err(|e| e.to_string())?,
            token_url: TokenUrl::new(token_endpoint.to_string()).map_err(|e| e.to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri.replace(
                "/callback",
                &format!("/{}/callback", provider.key()),
            ))
            .map_err(|e| e.to_string())?,
        })
    }
}
