//! Configuration for the GitHub source

use secrecy::SecretString;

pub const DEFAULT_HOST: &str = "github.com";

/// Explicit connection settings; the client never reads the environment itself
#[derive(Debug)]
pub struct GitHubConfig {
    pub api_url: String,
    pub token: Option<SecretString>,
    pub per_page: Option<u8>,
}

impl GitHubConfig {
    pub fn for_host(host: &str) -> Self {
        Self::with_api_url(build_api_url(host))
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: None,
            per_page: None,
        }
    }

    pub fn token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    pub fn per_page(mut self, per_page: Option<u8>) -> Self {
        self.per_page = per_page;
        self
    }

    /// Reads `GH_TOKEN`, falling back to `GITHUB_TOKEN`
    pub fn token_from_env() -> Option<SecretString> {
        ["GH_TOKEN", "GITHUB_TOKEN"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(SecretString::from)
    }
}

/// Builds the API URL for a host
pub fn build_api_url(host: &str) -> String {
    let host = host
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_lowercase();

    // Enterprise Server serves REST under /api/v3 on its own host
    if host.is_empty() || host == DEFAULT_HOST || host == "api.github.com" {
        "https://api.github.com".to_string()
    } else {
        format!("https://{host}/api/v3")
    }
}
