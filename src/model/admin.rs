use serde::{Deserialize, Serialize};

/// Outcome of the "seed from CSV if empty" admin operation
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeedResultDto {
    pub done: bool,
    pub message: String,
}
