pub mod auth_dto;
pub mod company_dto;
pub mod job_dto;

use serde::{Deserialize, Serialize};

/// Acknowledgment body for action endpoints that answer with a message only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
