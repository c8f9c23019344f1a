//! # Payroll HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/v1/payroll/preview?store=&employee_name=&month=` | 저장 없이 계산 |
//! | `POST` | `/api/v1/payroll/run` | 매장 월 급여 일괄 계산 |
//! | `GET` | `/api/v1/payroll?store=&month=` | 명세 목록 |
//! | `GET` | `/api/v1/payroll/{id}` | 명세 조회 |
//! | `POST` | `/api/v1/payroll/{id}/approve` | 명세 승인 |
//!
//! 일괄 계산은 일부 직원이 실패해도 나머지를 저장하고, 실패 목록을 `failures`로 돌려줍니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::payroll::{PayrollListQuery, PayrollPreviewQuery, PayrollRunRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::payroll::PayrollService;
use crate::utils::date_utils::YearMonth;

#[get("/preview")]
pub async fn preview_payslip(
    query: web::Query<PayrollPreviewQuery>,
) -> Result<HttpResponse, AppError> {
    let month = YearMonth::parse(&query.month)?;

    let service = PayrollService::instance();
    let payslip = service
        .preview(&query.store, &query.employee_name, month)
        .await?;

    Ok(HttpResponse::Ok().json(payslip))
}

/// ```json
/// { "store": "강남점", "month": "2026-10" }
/// ```
#[post("/run")]
pub async fn run_payroll(
    payload: web::Json<PayrollRunRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let month = YearMonth::parse(&payload.month)?;

    let service = PayrollService::instance();
    let result = service.run(&payload.store, month).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[get("")]
pub async fn list_payslips(
    query: web::Query<PayrollListQuery>,
) -> Result<HttpResponse, AppError> {
    let month = YearMonth::parse(&query.month)?;

    let service = PayrollService::instance();
    let payslips = service.list(&query.store, month).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(payslips)))
}

#[get("/{id}")]
pub async fn get_payslip(
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PayrollService::instance();
    let payslip = service.get(&id).await?;

    Ok(HttpResponse::Ok().json(payslip))
}

#[post("/{id}/approve")]
pub async fn approve_payslip(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PayrollService::instance();
    let payslip = service.approve(&id, &user.name).await?;

    Ok(HttpResponse::Ok().json(payslip))
}
