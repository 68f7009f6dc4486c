//! In-memory repository implementations.
//!
//! Concrete implementations of domain repository traits backed by a
//! process-local map. [`MemoryLinkRepository`] implements both
//! [`crate::domain::repositories::LinkRepository`] and
//! [`crate::domain::repositories::StatsRepository`], since the click log
//! lives inside the link records themselves.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
