//! HTTP layer: translates requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and path classification

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
