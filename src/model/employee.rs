use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "E1001",
        "full_name": "Alice Rahman",
        "email": "alice.rahman@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "E1001")]
    pub id: String,

    #[schema(example = "Alice Rahman")]
    pub full_name: String,

    #[schema(example = "alice.rahman@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}
