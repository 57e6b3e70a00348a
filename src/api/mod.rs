//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`extract`] - Extractors that reject with [`crate::error::ApiError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Error shaping and observability middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
