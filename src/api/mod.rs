//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to the wire contract (camelCase JSON, status codes
//! per error kind).
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
