//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies of the synchronizer endpoints are the service
//! types from [`crate::api`], re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::api::{DataListResponse, SyncFilter, SyncRequest, SyncResponse, TimezoneOption};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
