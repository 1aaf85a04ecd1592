//! HTTP API for keyward.
//!
//! Thin request-handling layer over the credential and license engines:
//! JSON in and out, bearer tokens on the mutating license routes.

mod auth;
pub mod config;
mod error;
mod routes;
mod state;

pub use auth::AuthUser;
pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, ErrorDetail};
pub use routes::{
    build_router, AddLicenseRequest, CredentialsRequest, ExtendRequest, HealthResponse,
    KeyResponse, TokenResponse,
};
pub use state::AppState;
