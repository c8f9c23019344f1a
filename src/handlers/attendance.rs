//! # Attendance HTTP Handlers
//!
//! 출퇴근 기록, 연장근무 결재, 월간 근태 집계입니다.
//! `at`을 생략하면 서버의 매장 현지 시각으로 기록합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::attendance::{
    AttendanceQuery, ClockRequest, MonthlySummaryQuery, ReviewOvertimeRequest,
};
use crate::domain::dto::common::ListResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::attendance::AttendanceService;
use crate::utils::date_utils::YearMonth;

/// `POST /api/v1/attendance/clock-in`
///
/// ```json
/// { "store": "강남점", "employee_name": "홍길동", "at": "2026-10-14T09:07:00" }
/// ```
#[post("/clock-in")]
pub async fn clock_in(
    user: AuthenticatedUser,
    payload: web::Json<ClockRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = AttendanceService::instance();
    let log = service.clock_in(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(log))
}

/// 자정을 넘는 근무는 전날 출근 기록을 닫습니다.
#[post("/clock-out")]
pub async fn clock_out(
    user: AuthenticatedUser,
    payload: web::Json<ClockRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = AttendanceService::instance();
    let log = service.clock_out(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(log))
}

#[get("")]
pub async fn list_logs(
    user: AuthenticatedUser,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;

    let service = AttendanceService::instance();
    let logs = service.list_logs(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(logs)))
}

/// `GET /api/v1/attendance/summary?store=강남점&employee_name=홍길동&month=2026-10`
#[get("/summary")]
pub async fn monthly_summary(
    user: AuthenticatedUser,
    query: web::Query<MonthlySummaryQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;
    let month = YearMonth::parse(&query.month)?;

    let service = AttendanceService::instance();
    let summary = service
        .monthly_summary(&query.store, &query.employee_name, month)
        .await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// 연장근무 승인/반려 (대기 상태에서만)
#[post("/{id}/overtime")]
pub async fn review_overtime(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<ReviewOvertimeRequest>,
) -> Result<HttpResponse, AppError> {
    let service = AttendanceService::instance();
    let log = service
        .review_overtime(&id, payload.approve, &user)
        .await?;

    Ok(HttpResponse::Ok().json(log))
}
