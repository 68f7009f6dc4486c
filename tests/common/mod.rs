#![allow(dead_code)]

use axum::extract::ConnectInfo;
use chrono::{DateTime, Duration, Utc};
use shortly::domain::entities::NewLink;
use shortly::domain::repositories::LinkRepository;
use shortly::infrastructure::persistence::MemoryLinkRepository;
use shortly::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds an application state around a fresh, empty store and hands the
/// store back for direct seeding and inspection.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repository.clone());
    (state, repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    repository
        .insert(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
            expires_at: None,
        })
        .await
        .unwrap();
}

pub async fn create_expiring_link(
    repository: &MemoryLinkRepository,
    code: &str,
    url: &str,
    expires_at: DateTime<Utc>,
) {
    repository
        .insert(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
            expires_at: Some(expires_at),
        })
        .await
        .unwrap();
}

pub async fn create_expired_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    create_expiring_link(repository, code, url, Utc::now() - Duration::hours(1)).await;
}

pub async fn record_clicks(repository: &MemoryLinkRepository, code: &str, ips: &[&str]) {
    for ip in ips {
        repository.record_click(code, ip).await.unwrap();
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo<SocketAddr>`
/// work under `TestServer`, which has no real socket.
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
