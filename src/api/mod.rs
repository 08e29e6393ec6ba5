pub mod attendance;
pub mod employee;


use serde::Serialize;
use utoipa::ToSchema;

/// Envelope used by every success and error message body.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee created successfully")]
    pub message: String,
}
