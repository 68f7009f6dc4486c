//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::MemoryLinkRepository;

/// Handler-visible service handles.
///
/// Built once per service instance around a single shared store; cloning is
/// cheap (two `Arc`s). Constructing a second `AppState` with its own
/// repository yields a fully independent registry, which is what the
/// integration tests rely on.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<MemoryLinkRepository>>,
}

impl AppState {
    /// Wires both services onto one shared in-memory store.
    pub fn new(repository: Arc<MemoryLinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
        }
    }
}
