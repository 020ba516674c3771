//! # ApiClient — typed calls against the REST API
//!
//! Each method builds one [`ApiRequest`], sends it through the configured
//! [`Transport`] and interprets the [`ApiResponse`] with the same rules:
//!
//! 1. 2xx: decode the body into the expected type ([`ApiError::Decode`] if it
//!    does not fit). Calls that return nothing ignore the body.
//! 2. 401/403 on a Bearer-authenticated call: [`ApiError::Unauthorized`].
//!    On the unauthenticated auth endpoints these are ordinary failures whose
//!    message (for example "wrong password") is shown to the user.
//! 3. Any other status: [`ApiError::Server`] carrying the body's `message`
//!    field, or its `error` field, or nothing.
//! 4. A failure body that is not JSON: [`ApiError::InvalidResponse`].

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AuthToken, Ingredient, Recipe, ResetPasswordRequest, SignupRequest, UserProfile,
};
use crate::transport::{ApiRequest, ApiResponse, Credentials, HttpTransport, Transport};

#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Client over reqwest, configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Exchange email and password for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        let request = ApiRequest::get(self.config.login_url()).with_credentials(Credentials::Basic {
            username: email.to_string(),
            password: password.to_string(),
        });
        self.fetch(request).await
    }

    /// Register a new account. The server answers with a session token.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<AuthToken, ApiError> {
        let body = serde_json::to_value(signup).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch(ApiRequest::post(self.config.signup_url(), body)).await
    }

    /// Ask the server to email a reset link to `email`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let request = ApiRequest::get(self.config.reset_password_url()).with_query("email", email);
        self.execute(request).await
    }

    /// Set a new password using the token delivered by the reset link.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::to_value(ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(ApiRequest::post(self.config.reset_password_url(), body))
            .await
    }

    /// Who the bearer of `token` is.
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.fetch(Self::bearer(self.config.me_url(), token)).await
    }

    pub async fn ingredients(&self, token: &str) -> Result<Vec<Ingredient>, ApiError> {
        self.fetch(Self::bearer(self.config.ingredients_url(), token))
            .await
    }

    pub async fn recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        self.fetch(Self::bearer(self.config.recipes_url(), token))
            .await
    }

    fn bearer(url: String, token: &str) -> ApiRequest {
        ApiRequest::get(url).with_credentials(Credentials::Bearer(token.to_string()))
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("Undecodable response body: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let authenticated = matches!(request.credentials, Credentials::Bearer(_));
        let url = request.url.clone();
        tracing::debug!("{:?} {}", request.method, url);

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            e
        })?;
        tracing::debug!("{} answered {}", url, response.status);

        interpret(response, authenticated)
    }
}

/// Apply the status rules above, passing successful responses through.
pub fn interpret(response: ApiResponse, authenticated: bool) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    if authenticated && (status == 401 || status == 403) {
        return Err(ApiError::Unauthorized { status });
    }

    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(body) => Err(ApiError::Server {
            status,
            message: error_message(&body),
        }),
        Err(_) => Err(ApiError::InvalidResponse { status }),
    }
}

fn error_message(body: &serde_json::Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|field| body.get(field)?.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
