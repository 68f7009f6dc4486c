//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL record with its click history
//! - [`Click`] - A single redirect event on a shortened link
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries the caller-controlled fields; the store fills in the rest.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{Link, NewLink};
