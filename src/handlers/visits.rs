//! Store visit check / complaint handlers

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::visits::{
    CheckQuery, ComplaintQuery, CreateCheckRequest, CreateComplaintRequest, ResolveComplaintRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::handlers::scoped_store;
use crate::services::visits::VisitService;

/// 방문 점검 등록. 점수와 등급은 통과 항목 비율로 계산됩니다.
#[post("")]
pub async fn create_check(
    user: AuthenticatedUser,
    payload: web::Json<CreateCheckRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = VisitService::instance();
    let check = service.create_check(payload.into_inner(), &user.name).await?;

    Ok(HttpResponse::Created().json(check))
}

/// `GET /api/v1/checks?store=강남점&from=2026-10-01&to=2026-10-31`
#[get("")]
pub async fn list_checks(
    user: AuthenticatedUser,
    query: web::Query<CheckQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;

    let service = VisitService::instance();
    let checks = service.list_checks(&query.store, query.from, query.to).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(checks)))
}

#[get("/{id}")]
pub async fn get_check(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = VisitService::instance();
    let check = service.get_check(&id).await?;
    user.ensure_store_access(&check.store)?;

    Ok(HttpResponse::Ok().json(check))
}

#[post("")]
pub async fn create_complaint(
    user: AuthenticatedUser,
    payload: web::Json<CreateComplaintRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = VisitService::instance();
    let complaint = service.create_complaint(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(complaint))
}

/// `status`는 `대기` | `처리완료`
#[get("")]
pub async fn list_complaints(
    user: AuthenticatedUser,
    query: web::Query<ComplaintQuery>,
) -> Result<HttpResponse, AppError> {
    let mut query = query.into_inner();
    query.store = scoped_store(&user, query.store.take())?;

    let service = VisitService::instance();
    let complaints = service.list_complaints(query).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(complaints)))
}

#[post("/{id}/resolve")]
pub async fn resolve_complaint(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<ResolveComplaintRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = VisitService::instance();
    let complaint = service
        .resolve_complaint(&id, &payload.resolution, &user)
        .await?;

    Ok(HttpResponse::Ok().json(complaint))
}
