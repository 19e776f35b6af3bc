#![allow(dead_code)]

use axum_test::TestServer;
use redirector::application::services::MappingService;
use redirector::domain::entities::Mapping;
use redirector::domain::repositories::MappingRepository;
use redirector::infrastructure::persistence::InMemoryMappingRepository;
use redirector::routes::app_router;
use redirector::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let service = Arc::new(MappingService::new(repo.clone()));

    (AppState::new(service), repo)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryMappingRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repo)
}

pub async fn create_test_mapping(
    repo: &InMemoryMappingRepository,
    id: &str,
    url: &str,
    created_at: i64,
    ttl_seconds: i64,
) {
    let inserted = repo
        .insert(Mapping::new(
            id.to_string(),
            url.to_string(),
            created_at,
            ttl_seconds,
        ))
        .await
        .unwrap();
    assert!(inserted, "fixture id {id} already taken");
}

pub async fn create_expired_mapping(repo: &InMemoryMappingRepository, id: &str, url: &str) {
    create_test_mapping(repo, id, url, 1_000, 60).await;
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
