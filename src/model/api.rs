use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error envelope returned by all failing endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
