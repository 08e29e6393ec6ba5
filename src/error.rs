use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Every failure a request can report, one variant per HTTP outcome.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Employee ID already exists")]
    DuplicateEmployeeId,
    #[display(fmt = "Email already exists")]
    DuplicateEmail,
    #[display(fmt = "Employee not found")]
    EmployeeNotFound,
    #[display(fmt = "Invalid status")]
    InvalidStatus,
    #[display(fmt = "Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat,
    #[display(fmt = "value is not a valid email address")]
    InvalidEmail,
    // Logged with context at the call site before it is mapped here.
    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmployeeId
            | ApiError::DuplicateEmail
            | ApiError::InvalidStatus
            | ApiError::InvalidDateFormat => StatusCode::BAD_REQUEST,
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::DuplicateEmployeeId.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmployeeNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidStatus.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidDateFormat.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            ApiError::DuplicateEmployeeId.to_string(),
            "Employee ID already exists"
        );
        assert_eq!(ApiError::EmployeeNotFound.to_string(), "Employee not found");
        assert_eq!(
            ApiError::InvalidDateFormat.to_string(),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }
}
