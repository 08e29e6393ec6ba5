use crate::api::{attendance, employee};
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(web::resource("").route(web::post().to(attendance::record_attendance)))
                // /attendance/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(attendance::get_attendance)),
                ),
        );
}
