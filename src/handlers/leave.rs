//! Leave request handlers

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::leave::{CreateLeaveRequest, LeaveBalanceQuery, LeaveQuery, RejectLeaveRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::handlers::scoped_store;
use crate::services::leave::LeaveService;

/// 휴가 신청
///
/// 기간 중복 409, 잔여 연차 초과 400
#[post("")]
pub async fn create_leave(
    user: AuthenticatedUser,
    payload: web::Json<CreateLeaveRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = LeaveService::instance();
    let response = service.create_leave(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_leaves(
    user: AuthenticatedUser,
    query: web::Query<LeaveQuery>,
) -> Result<HttpResponse, AppError> {
    let mut query = query.into_inner();
    query.store = scoped_store(&user, query.store.take())?;

    let service = LeaveService::instance();
    let leaves = service.list_leaves(query).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(leaves)))
}

/// `GET /api/v1/leave/balance?store=강남점&employee_name=홍길동&year=2026`
#[get("/balance")]
pub async fn leave_balance(
    user: AuthenticatedUser,
    query: web::Query<LeaveBalanceQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;

    let service = LeaveService::instance();
    let balance = service
        .balance(&query.store, &query.employee_name, query.year)
        .await?;

    Ok(HttpResponse::Ok().json(balance))
}

/// 승인/반려 모두 매니저는 소속 매장 신청만 처리할 수 있습니다.
#[post("/{id}/approve")]
pub async fn approve_leave(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = LeaveService::instance();
    let response = service.approve_leave(&id, &user).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/{id}/reject")]
pub async fn reject_leave(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<RejectLeaveRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = LeaveService::instance();
    let response = service
        .reject_leave(&id, &user, &payload.reason)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
