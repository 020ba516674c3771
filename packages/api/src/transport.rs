//! # Transport — the HTTP seam under [`crate::ApiClient`]
//!
//! [`ApiClient`](crate::ApiClient) builds an [`ApiRequest`], hands it to a
//! [`Transport`], and interprets the returned [`ApiResponse`] itself. Keeping
//! the status interpretation out of the transport means the same rules apply
//! to the real [`HttpTransport`] (reqwest, native and wasm) and to scripted
//! transports in tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use reqwest::header::CONTENT_TYPE;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// How a request authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    None,
    /// `Authorization: Basic base64(username:password)`.
    Basic { username: String, password: String },
    /// `Authorization: Bearer <token>`.
    Bearer(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub credentials: Credentials,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            credentials: Credentials::None,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Self::get(url)
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Only failures to obtain a response are errors here; every HTTP status is a
/// successful [`ApiResponse`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// reqwest-backed transport. No timeout is configured.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.credentials {
            Credentials::None => builder,
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            Credentials::Bearer(token) => builder.bearer_auth(token),
        };

        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

/// Transport that replays queued responses and records every request.
///
/// Used by tests across the workspace. Clones share the queue and the log.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: ApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<ApiResponse, ApiError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}
