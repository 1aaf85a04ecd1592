//! Routes and handlers.
//!
//! | Method | Path      | Auth   |
//! |--------|-----------|--------|
//! | GET    | `/`         | none   |
//! | POST   | `/register` | none   |
//! | POST   | `/login`    | none   |
//! | GET    | `/check`    | none   |
//! | POST   | `/add`      | bearer |
//! | POST   | `/invalid`  | bearer |
//! | POST   | `/extend`   | bearer |

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use keyward_types::LicenseCheck;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub health: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub ok: bool,
    pub message: String,
    pub access_token: String,
}

/// Body of `POST /add`. `expire_time` is a duration in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLicenseRequest {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub one_time: bool,
    pub expire_time: i64,
}

/// Body of `POST /extend`, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendRequest {
    pub additional_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResponse {
    pub message: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct KeyQuery {
    key: Option<String>,
}

/// Build the HTTP API router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/check", get(check))
        .route("/add", post(add_license))
        .route("/invalid", post(invalidate))
        .route("/extend", post(extend))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { health: true })
}

async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let req = extract_json(body)?;
    let engine = state.credentials.clone();
    let access_token = blocking(move || engine.register(&req.login, &req.password)).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            ok: true,
            message: "User successfully created".to_string(),
            access_token,
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let req = extract_json(body)?;
    let engine = state.credentials.clone();
    let access_token = blocking(move || engine.login(&req.login, &req.password)).await?;

    Ok(Json(TokenResponse {
        ok: true,
        message: "User successfully logged in".to_string(),
        access_token,
    }))
}

async fn check(
    State(state): State<AppState>,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<LicenseCheck>, ApiError> {
    let key = require_key(query)?;
    let engine = state.licenses.clone();
    let report = blocking(move || Ok::<_, ApiError>(engine.check_validity(&key))).await?;
    Ok(Json(report))
}

async fn add_license(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    body: Result<Json<AddLicenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<KeyResponse>), ApiError> {
    let req = extract_json(body)?;
    let engine = state.licenses.clone();
    let key = blocking(move || {
        engine.issue(&owner, &req.product, req.one_time, req.expire_time)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(KeyResponse {
            message: "License added successfully".to_string(),
            key,
        }),
    ))
}

async fn invalidate(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<KeyResponse>, ApiError> {
    let key = require_key(query)?;
    let engine = state.licenses.clone();
    let target = key.clone();
    blocking(move || engine.invalidate(&owner, &target)).await?;

    Ok(Json(KeyResponse {
        message: "License invalidated successfully".to_string(),
        key,
    }))
}

async fn extend(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    query: Result<Query<KeyQuery>, QueryRejection>,
    body: Result<Json<ExtendRequest>, JsonRejection>,
) -> Result<Json<KeyResponse>, ApiError> {
    let key = require_key(query)?;
    let req = extract_json(body)?;
    let engine = state.licenses.clone();
    let target = key.clone();
    blocking(move || engine.extend(&owner, &target, req.additional_time)).await?;

    Ok(Json(KeyResponse {
        message: "License extended successfully".to_string(),
        key,
    }))
}

/// Unwraps a JSON body, mapping deserialization errors to 400.
fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| ApiError::BadRequest(err.body_text()))
}

fn require_key(query: Result<Query<KeyQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .ok()
        .and_then(|Query(q)| q.key)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::BadRequest("key is required".into()))
}

/// Runs a synchronous engine call off the async workers.
async fn blocking<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(Into::into),
        Err(e) => Err(ApiError::Internal(format!("blocking task failed: {e}"))),
    }
}
