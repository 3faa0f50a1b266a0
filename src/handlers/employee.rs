use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use log::info;
use serde_json::{json, Map, Value};

use crate::db::employee::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::utils::validation::{validate, Mode};

fn require_json(req: &HttpRequest) -> Result<(), AppError> {
    if req.content_type() != "application/json" {
        return Err(AppError::BadRequest(
            "Content-Type must be application/json".to_string(),
        ));
    }
    Ok(())
}

/// Largest request body accepted by create and update.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| AppError::BadRequest(format!("Invalid request body: {}", err)))?;
        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(AppError::BadRequest("Request body is too large".to_string()));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {}", err)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

fn employee_not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

pub async fn create_employee(
    req: HttpRequest,
    store: web::Data<EmployeeStore>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    require_json(&req)?;

    let input = parse_object(&read_body(payload).await?)?;
    let new_employee = NewEmployee::try_from(validate(&input, Mode::Full)?)?;

    let employee = store.insert(&new_employee).await?;
    info!("Created employee {}", employee.id);

    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employee(
    store: web::Data<EmployeeStore>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = store
        .get(employee_id.into_inner())
        .await?
        .ok_or_else(employee_not_found)?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    req: HttpRequest,
    store: web::Data<EmployeeStore>,
    employee_id: web::Path<i64>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    require_json(&req)?;

    let employee_id = employee_id.into_inner();
    if store.get(employee_id).await?.is_none() {
        return Err(employee_not_found());
    }

    let input = parse_object(&read_body(payload).await?)?;
    let changes = validate(&input, Mode::Partial)?;

    store.update(employee_id, &changes).await?;
    info!("Updated employee {}", employee_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully",
    })))
}

pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    if store.get(employee_id).await?.is_none() {
        return Err(employee_not_found());
    }

    store.delete(employee_id).await?;
    info!("Deleted employee {}", employee_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully!",
    })))
}
