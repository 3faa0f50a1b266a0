use actix_web::HttpResponse;

use crate::errors::AppError;

pub const WELCOME: &str = "WELCOME TO THE EMPLOYEE MANAGEMENT SYSTEM";

pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not found".to_string()))
}
