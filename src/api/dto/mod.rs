//! Data Transfer Objects for API requests and responses.

pub mod status;

pub use status::StatusResponse;
