#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use std::sync::Arc;
use tinyurl::api::handlers::health_handler;
use tinyurl::api::routes::tinyurl_routes;
use tinyurl::domain::entities::{NewUrlMapping, UrlMapping};
use tinyurl::domain::repositories::UrlMappingRepository;
use tinyurl::error::AppError;
use tinyurl::infrastructure::persistence::InMemoryUrlMappingRepository;
use tinyurl::state::AppState;

pub const TEST_HOST: &str = "http://localhost:9090";

/// State over an empty in-memory store. The store is returned too so tests
/// can inspect what was written.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlMappingRepository>) {
    let repo = Arc::new(InMemoryUrlMappingRepository::new());
    let state = AppState::new(repo.clone(), TEST_HOST);

    (state, repo)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(tinyurl_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Store whose every call fails with a connectivity error.
pub struct FailingRepository;

#[async_trait]
impl UrlMappingRepository for FailingRepository {
    async fn save(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn find(&self, _id: u64) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }
}

/// Store that panics on writes and reads.
pub struct PanickingRepository;

#[async_trait]
impl UrlMappingRepository for PanickingRepository {
    async fn save(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        panic!("store exploded")
    }

    async fn find(&self, _id: u64) -> Result<Option<UrlMapping>, AppError> {
        panic!("store exploded")
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository), TEST_HOST)
}

pub fn create_panicking_state() -> AppState {
    AppState::new(Arc::new(PanickingRepository), TEST_HOST)
}
