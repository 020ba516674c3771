//! # API crate — typed client for the recipe catalog REST API
//!
//! The web frontend never talks HTTP directly; every remote call goes through
//! [`ApiClient`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] and the shared status interpretation |
//! | [`config`] | [`ApiConfig`]: API host and endpoint URLs |
//! | [`error`] | [`ApiError`], one variant per UI reaction |
//! | [`models`] | Payloads: [`UserProfile`], [`Ingredient`], [`Recipe`], auth bodies |
//! | [`transport`] | The [`Transport`] seam, [`HttpTransport`] (reqwest) and [`MockTransport`] |
//!
//! ## Endpoints
//!
//! | Call | Method | Auth | Path |
//! |------|--------|------|------|
//! | [`login`](ApiClient::login) | GET | Basic | `/api/login` |
//! | [`signup`](ApiClient::signup) | POST | none | `/api/signup` |
//! | [`request_password_reset`](ApiClient::request_password_reset) | GET `?email=` | none | `/api/resetPassword` |
//! | [`reset_password`](ApiClient::reset_password) | POST | none | `/api/resetPassword` |
//! | [`current_user`](ApiClient::current_user) | GET | Bearer | `/api/me` |
//! | [`ingredients`](ApiClient::ingredients) | GET | Bearer | `/api/ingredients` |
//! | [`recipes`](ApiClient::recipes) | GET | Bearer | `/api/recipes` |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AuthToken, Ingredient, Nutrient, NutritionalValues, Recipe, ResourceId, SignupRequest,
    UserProfile,
};
pub use transport::{HttpTransport, MockTransport, Transport};
