//! HTTP request handlers for API endpoints.

pub mod status;

pub use status::status_handler;
