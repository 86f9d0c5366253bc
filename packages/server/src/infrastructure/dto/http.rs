//! HTTP API response DTOs for the relay.

use serde::{Deserialize, Serialize};

/// One live connection in the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSummaryDto {
    pub id: String,
    pub connected_at: String, // RFC 3339
}
