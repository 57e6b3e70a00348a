//! HTTP middleware.
//!
//! Everything here exists to make framework-level failures come out in the
//! same JSON shape as handler errors, plus request tracing.

pub mod method;
pub mod negotiation;
pub mod panic;
pub mod tracing;
