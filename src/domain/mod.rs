//! Core domain types.
//!
//! - [`status`] - Service version and readiness record

pub mod status;

pub use status::StatusInfo;
