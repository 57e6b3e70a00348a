//! DTOs for the status endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::StatusInfo;

/// Body returned by `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: Option<String>,
    pub ready: bool,
}

impl From<StatusInfo> for StatusResponse {
    fn from(status: StatusInfo) -> Self {
        Self {
            ready: status.is_ready(),
            version: status.version().map(str::to_owned),
        }
    }
}
