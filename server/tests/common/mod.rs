//! Shared helpers for HTTP API tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keyward_auth::TokenConfig;
use keyward_crypto::HashParams;
use keyward_server::{build_router, AppState, KeyResponse, TokenResponse};
use keyward_storage::SqliteStore;
use keyward_types::ManualClock;
use serde_json::json;
use std::sync::Arc;

pub const PASSWORD: &str = "password123";

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub clock: Arc<ManualClock>,
}

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap()
}

/// Spin up the HTTP server on an OS-assigned port over an in-memory store.
pub async fn spawn_test_server() -> TestServer {
    let clock = Arc::new(ManualClock::new(start_instant()));
    let state = AppState::new(
        SqliteStore::open_in_memory().unwrap(),
        TokenConfig::new("test-signing-secret"),
        HashParams::minimal(),
        clock.clone(),
    );
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
        clock,
    }
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn post_credentials(&self, path: &str, login: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .unwrap()
    }

    /// Registers `login` and returns its access token.
    pub async fn register(&self, login: &str) -> String {
        let resp = self.post_credentials("/register", login, PASSWORD).await;
        assert_eq!(resp.status(), 201);
        resp.json::<TokenResponse>().await.unwrap().access_token
    }

    pub async fn add(&self, token: &str, product: &str, minutes: i64) -> reqwest::Response {
        self.client
            .post(self.url("/add"))
            .bearer_auth(token)
            .json(&json!({ "product": product, "one_time": false, "expire_time": minutes }))
            .send()
            .await
            .unwrap()
    }

    /// Issues a license and returns its key.
    pub async fn issue(&self, token: &str, product: &str, minutes: i64) -> String {
        let resp = self.add(token, product, minutes).await;
        assert_eq!(resp.status(), 201);
        resp.json::<KeyResponse>().await.unwrap().key
    }

    pub async fn check(&self, key: &str) -> reqwest::Response {
        self.client
            .get(self.url("/check"))
            .query(&[("key", key)])
            .send()
            .await
            .unwrap()
    }

    pub async fn invalidate(&self, token: &str, key: &str) -> reqwest::Response {
        self.client
            .post(self.url("/invalid"))
            .bearer_auth(token)
            .query(&[("key", key)])
            .send()
            .await
            .unwrap()
    }

    pub async fn extend(&self, token: &str, key: &str, minutes: i64) -> reqwest::Response {
        self.client
            .post(self.url("/extend"))
            .bearer_auth(token)
            .query(&[("key", key)])
            .json(&json!({ "additional_time": minutes }))
            .send()
            .await
            .unwrap()
    }
}
