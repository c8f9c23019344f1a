//! # Employee HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/employees` | 직원 등록 |
//! | `GET` | `/api/v1/employees?store=&status=` | 목록 |
//! | `GET` | `/api/v1/employees/{id}` | 조회 |
//! | `PATCH` | `/api/v1/employees/{id}` | 부분 수정 |
//! | `POST` | `/api/v1/employees/{id}/resign` | 퇴사 처리 |
//!
//! 인사 관리는 관리자 전용 스코프에 등록됩니다.

use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::employees::{
    CreateEmployeeRequest, EmployeeQuery, ResignEmployeeRequest, UpdateEmployeeRequest,
};
use crate::errors::errors::AppError;
use crate::services::employees::EmployeeService;

/// 직원 등록
///
/// 같은 매장에 같은 이름이 있으면 409, 급여 형태에 맞는 금액이 없으면 400을 반환합니다.
#[post("")]
pub async fn create_employee(
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = EmployeeService::instance();
    let response = service.create_employee(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_employees(
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let employees = service.list_employees(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(employees)))
}

#[get("/{id}")]
pub async fn get_employee(
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let employee = service.get_employee(&id).await?;

    Ok(HttpResponse::Ok().json(employee))
}

#[patch("/{id}")]
pub async fn update_employee(
    id: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = EmployeeService::instance();
    let employee = service.update_employee(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// 퇴사 처리. 이미 퇴사했으면 409
#[post("/{id}/resign")]
pub async fn resign_employee(
    id: web::Path<String>,
    payload: web::Json<ResignEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let service = EmployeeService::instance();
    let employee = service.resign_employee(&id, payload.resign_date).await?;

    Ok(HttpResponse::Ok().json(employee))
}
