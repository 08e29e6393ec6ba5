use crate::{
    api::MessageResponse, error::ApiError, model::employee::Employee, utils::email::is_valid_email,
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "E1001", value_type = String)]
    pub id: String,
    #[schema(example = "Alice Rahman", value_type = String)]
    pub full_name: String,
    #[schema(example = "alice.rahman@company.com", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = MessageResponse, example = json!({
            "message": "Employee created successfully"
        })),
        (status = 400, description = "Duplicate employee id or email", body = MessageResponse, example = json!({
            "message": "Employee ID already exists"
        })),
        (status = 422, description = "Malformed email address", body = MessageResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    if !is_valid_email(&payload.email) {
        return Err(ApiError::InvalidEmail);
    }

    let existing_id = sqlx::query_scalar::<_, String>("SELECT id FROM employees WHERE id = ?")
        .bind(&payload.id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = %payload.id, "Failed to look up employee id");
            ApiError::Database(e)
        })?;

    if existing_id.is_some() {
        return Err(ApiError::DuplicateEmployeeId);
    }

    // Second lookup rather than one transaction; the UNIQUE index on
    // email backstops the window between check and insert.
    let existing_email =
        sqlx::query_scalar::<_, String>("SELECT id FROM employees WHERE email = ?")
            .bind(&payload.email)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to look up employee email");
                ApiError::Database(e)
            })?;

    if existing_email.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    sqlx::query(
        r#"
        INSERT INTO employees (id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&payload.id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id = %payload.id, "Failed to create employee");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee created successfully"
    })))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employee records in storage order", body = Vec<Employee>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT id, full_name, email, department FROM employees")
            .fetch_all(pool.get_ref())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch employees");
                ApiError::Database(e)
            })?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted successfully", body = MessageResponse, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = MessageResponse, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    // Cascade removes the attendance rows along with the employee.
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(&employee_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, %employee_id, "Failed to delete employee");
            ApiError::Database(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::EmployeeNotFound);
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}
