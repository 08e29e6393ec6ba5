use crate::api::MessageResponse;
use crate::api::attendance::CreateAttendance;
use crate::api::employee::CreateEmployee;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Attendance API",
        version = "1.0.0",
        description = r#"
## HR Employee & Attendance Service

Record-keeping API for employee records and daily attendance.

### Key Features
- **Employee Directory**
  - Create, list, and delete employee records
- **Attendance Ledger**
  - Record Present/Absent per day, query by employee and date

### Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::record_attendance,
        crate::api::attendance::get_attendance,
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            CreateAttendance,
            Attendance,
            MessageResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
