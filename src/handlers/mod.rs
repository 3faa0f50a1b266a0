pub mod employee;
pub mod home;

use actix_web::web;

use crate::errors::AppError;

/// Registers every route. The caller provides `web::Data<EmployeeStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|_err, _req| {
        AppError::NotFound("Employee not found".to_string()).into()
    }))
    .service(web::resource("/").route(web::get().to(home::home)))
    .service(web::resource("/employee").route(web::post().to(employee::create_employee)))
    .service(
        web::resource("/employee/{employee_id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .default_service(web::to(home::not_found));
}
