//! Version and readiness record reported by the status endpoint.

use std::fmt;

/// Version and readiness of the running service.
///
/// Built once at startup and replaced wholesale whenever readiness changes.
/// The record only stores readiness; deciding when the service is ready is
/// left to whoever owns it (see [`crate::state::AppState`]).
///
/// # Example
///
/// ```
/// use service_status::domain::StatusInfo;
///
/// let status = StatusInfo::new().with_version("1.2.3").with_ready(true);
///
/// assert_eq!(status.version(), Some("1.2.3"));
/// assert!(status.is_ready());
/// assert_eq!(status.to_string(), "[StatusInfo version=1.2.3, ready=true]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    version: Option<String>,
    ready: bool,
}

impl StatusInfo {
    /// Creates a record with no version and `ready = false`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the version. Any string is accepted, including an empty one.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[StatusInfo version={}, ready={}]",
            self.version.as_deref().unwrap_or("null"),
            self.ready
        )
    }
}
