//! API host configuration.

/// Host used when `API_HOST` is not set.
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:3000";

/// Where the REST API lives. Every endpoint URL is derived from `host`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}

impl ApiConfig {
    pub fn new(host: impl Into<String>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the host from the environment.
    ///
    /// Browser builds only see `API_HOST` as it was at compile time. Native
    /// builds also read it at runtime, loading `.env` first.
    pub fn from_env() -> Self {
        if let Some(host) = option_env!("API_HOST").filter(|h| !h.is_empty()) {
            return Self::new(host);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(host) = std::env::var("API_HOST") {
                if !host.is_empty() {
                    return Self::new(host);
                }
            }
        }

        Self::default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.host)
    }

    pub fn login_url(&self) -> String {
        self.url("/api/login")
    }

    pub fn signup_url(&self) -> String {
        self.url("/api/signup")
    }

    /// Shared by the reset request (GET) and the new password submission (POST).
    pub fn reset_password_url(&self) -> String {
        self.url("/api/resetPassword")
    }

    pub fn me_url(&self) -> String {
        self.url("/api/me")
    }

    pub fn ingredients_url(&self) -> String {
        self.url("/api/ingredients")
    }

    pub fn recipes_url(&self) -> String {
        self.url("/api/recipes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.host, "https://api.example.com");
        assert_eq!(config.login_url(), "https://api.example.com/api/login");
        assert_eq!(config.signup_url(), "https://api.example.com/api/signup");
        assert_eq!(
            config.reset_password_url(),
            "https://api.example.com/api/resetPassword"
        );
        assert_eq!(config.me_url(), "https://api.example.com/api/me");
        assert_eq!(config.ingredients_url(), "https://api.example.com/api/ingredients");
        assert_eq!(config.recipes_url(), "https://api.example.com/api/recipes");
    }

    #[test]
    fn test_default_host() {
        assert_eq!(ApiConfig::default().me_url(), "http://127.0.0.1:3000/api/me");
    }
}
