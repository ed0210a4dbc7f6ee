#![allow(dead_code)]

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use shorturl::config::Config;
use shorturl::state::AppState;

/// Creates a migrated in-memory database.
///
/// The pool is capped at one long-lived connection so the in-memory database
/// survives for the whole test.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        base_url: Some("https://sho.rt".to_string()),
        listen_addr: "127.0.0.1:0".to_string(),
        default_validity_minutes: 30,
        geoip_db: None,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 1,
    }
}

pub async fn create_test_state() -> (AppState, SqlitePool) {
    let pool = setup_pool().await;
    let state = AppState::build(pool.clone(), Arc::new(test_config()), None);
    (state, pool)
}

/// Inserts a link directly. Negative validity produces an expired link.
pub async fn create_test_link(
    pool: &SqlitePool,
    shortcode: &str,
    url: &str,
    validity_minutes: i64,
) {
    let now = Utc::now();

    sqlx::query("INSERT INTO links (shortcode, url, created_at, expiry_at) VALUES (?, ?, ?, ?)")
        .bind(shortcode)
        .bind(url)
        .bind(now)
        .bind(now + Duration::minutes(validity_minutes))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link_id(pool: &SqlitePool, shortcode: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM links WHERE shortcode = ?")
        .bind(shortcode)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn clicks_count(pool: &SqlitePool, shortcode: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks_count FROM links WHERE shortcode = ?")
        .bind(shortcode)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn click_rows(pool: &SqlitePool, shortcode: &str) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM clicks WHERE link_id = (SELECT id FROM links WHERE shortcode = ?)",
    )
    .bind(shortcode)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
