use crate::{
    api::MessageResponse,
    error::ApiError,
    model::attendance::{Attendance, AttendanceStatus},
};
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateAttendance {
    #[schema(example = "E1001", value_type = String)]
    pub employee_id: String,
    /// Defaults to the current date when omitted.
    #[schema(example = "2024-01-01", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    #[schema(example = "Present", value_type = String)]
    pub status: String,
}

#[derive(Deserialize)]
pub struct AttendanceDateFilter {
    pub date: Option<String>,
}

/// Record Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = MessageResponse, example = json!({
            "message": "Attendance recorded"
        })),
        (status = 400, description = "Status outside Present/Absent", body = MessageResponse, example = json!({
            "message": "Invalid status"
        })),
        (status = 404, description = "Employee not found", body = MessageResponse, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<HttpResponse, ApiError> {
    let employee = sqlx::query_scalar::<_, String>("SELECT id FROM employees WHERE id = ?")
        .bind(&payload.employee_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = %payload.employee_id, "Failed to look up employee");
            ApiError::Database(e)
        })?;

    if employee.is_none() {
        return Err(ApiError::EmployeeNotFound);
    }

    let status = payload
        .status
        .parse::<AttendanceStatus>()
        .map_err(|_| ApiError::InvalidStatus)?;

    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());

    sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(&payload.employee_id)
        .bind(date)
        .bind(status.to_string())
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = %payload.employee_id, "Failed to record attendance");
            ApiError::Database(e)
        })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Attendance recorded"
    })))
}

/// Query Attendance
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID"),
        ("date" = Option<String>, Query, description = "Restrict to an exact day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records for the employee", body = Vec<Attendance>),
        (status = 400, description = "Malformed date filter", body = MessageResponse, example = json!({
            "message": "Invalid date format. Use YYYY-MM-DD"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceDateFilter>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    // No existence check here: an unknown employee reads back as an
    // empty list, unlike the record operation.
    let mut sql =
        String::from("SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ?");

    let mut date_filter: Option<NaiveDate> = None;
    if let Some(raw) = query.date.as_deref() {
        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidDateFormat)?;
        sql.push_str(" AND date = ?");
        date_filter = Some(parsed);
    }

    let mut records_q = sqlx::query_as::<_, Attendance>(&sql).bind(&employee_id);
    if let Some(date) = date_filter {
        records_q = records_q.bind(date);
    }

    let records = records_q.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, %employee_id, "Failed to fetch attendance");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(records))
}
