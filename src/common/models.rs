use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
}

/// System-wide counters shown on the portal dashboard
#[derive(Debug, ToSchema, Deserialize, Serialize)]
pub struct PortalStats {
    pub total_batches: u64,
    pub total_samples: u64,
    pub total_companies: u64,
    pub completed_batches: u64,
}
