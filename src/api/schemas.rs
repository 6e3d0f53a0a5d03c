use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope; `data` carries the endpoint payload
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Error envelope shared by every endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "INVALID_FORMAT")]
    pub code: String,

    /// Human-readable message
    #[schema(example = "Invalid data format")]
    pub message: String,
}
