use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "E1001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,
}

/// Closed status vocabulary; parsing is case-sensitive and anything
/// outside it is rejected before the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum AttendanceStatus {
    Present,
    Absent,
}
