//! Infrastructure layer for storage backends.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete in-memory store behind the repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
