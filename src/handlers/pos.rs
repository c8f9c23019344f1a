//! # POS HTTP Handlers
//!
//! 메뉴(`/api/v1/menus`), 쿠폰(`/api/v1/coupons`), 일 마감 정산(`/api/v1/settlements`).
//!
//! 쿠폰은 전 매장 공통이라 발행과 비활성화는 본사 관리자만 할 수 있고,
//! 견적과 사용 처리는 매장 매니저도 호출합니다. 정산 승인도 본사 관리자 몫입니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::pos::{
    CreateCouponRequest, CreateMenuRequest, MenuQuery, QuoteCouponRequest, SettlementQuery,
    SubmitSettlementRequest, UpdateMenuRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::handlers::require_admin;
use crate::services::pos::{CouponService, MenuService, SettlementService};
use crate::utils::date_utils::YearMonth;

// ---- 메뉴 ----

#[post("")]
pub async fn create_menu(
    user: AuthenticatedUser,
    payload: web::Json<CreateMenuRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = MenuService::instance();
    let menu = service.create_menu(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(menu))
}

/// `GET /api/v1/menus?store=강남점&active_only=true`
#[get("")]
pub async fn list_menus(
    user: AuthenticatedUser,
    query: web::Query<MenuQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;

    let service = MenuService::instance();
    let menus = service.list_menus(&query.store, query.active_only).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(menus)))
}

#[patch("/{id}")]
pub async fn update_menu(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateMenuRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = MenuService::instance();
    let current = service.get_menu(&id).await?;
    user.ensure_store_access(&current.store)?;

    let menu = service.update_menu(&id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(menu))
}

/// 판매 중 ↔ 판매 중지
#[post("/{id}/toggle")]
pub async fn toggle_menu(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MenuService::instance();
    let current = service.get_menu(&id).await?;
    user.ensure_store_access(&current.store)?;

    let menu = service.toggle_menu(&id).await?;
    Ok(HttpResponse::Ok().json(menu))
}

#[delete("/{id}")]
pub async fn delete_menu(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MenuService::instance();
    let current = service.get_menu(&id).await?;
    user.ensure_store_access(&current.store)?;

    service.delete_menu(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- 쿠폰 ----

#[derive(Debug, Deserialize)]
pub struct CouponListQuery {
    #[serde(default)]
    pub active_only: bool,
}

#[post("")]
pub async fn create_coupon(
    user: AuthenticatedUser,
    payload: web::Json<CreateCouponRequest>,
) -> Result<HttpResponse, AppError> {
    require_admin(&user)?;
    payload.validate()?;

    let service = CouponService::instance();
    let coupon = service.create_coupon(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(coupon))
}

#[get("")]
pub async fn list_coupons(
    query: web::Query<CouponListQuery>,
) -> Result<HttpResponse, AppError> {
    let service = CouponService::instance();
    let coupons = service.list_coupons(query.active_only).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(coupons)))
}

/// 할인 금액 계산만 하고 사용 횟수는 바꾸지 않습니다.
///
/// ```json
/// { "code": "AUTUMN15", "order_amount": 1250.0 }
/// ```
#[post("/quote")]
pub async fn quote_coupon(
    payload: web::Json<QuoteCouponRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = CouponService::instance();
    let quote = service
        .quote(&payload.code, payload.order_amount, payload.date)
        .await?;

    Ok(HttpResponse::Ok().json(quote))
}

/// 결제 확정 시 사용 처리. 한도 소진 시 409
#[post("/{code}/redeem")]
pub async fn redeem_coupon(
    code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = CouponService::instance();
    let coupon = service.redeem(&code).await?;

    Ok(HttpResponse::Ok().json(coupon))
}

#[post("/{id}/deactivate")]
pub async fn deactivate_coupon(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&user)?;

    let service = CouponService::instance();
    let coupon = service.deactivate_coupon(&id).await?;

    Ok(HttpResponse::Ok().json(coupon))
}

// ---- 정산 ----

/// 결제수단 합계가 순매출과 맞지 않으면 400, 같은 영업일 정산이 있으면 409
#[post("")]
pub async fn submit_settlement(
    user: AuthenticatedUser,
    payload: web::Json<SubmitSettlementRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = SettlementService::instance();
    let settlement = service.submit(payload.into_inner(), &user.name).await?;

    Ok(HttpResponse::Created().json(settlement))
}

#[get("")]
pub async fn list_settlements(
    user: AuthenticatedUser,
    query: web::Query<SettlementQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;
    let month = YearMonth::parse(&query.month)?;

    let service = SettlementService::instance();
    let settlements = service.list(&query.store, month).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(settlements)))
}

/// `GET /api/v1/settlements/summary?store=강남점&month=2026-10`
#[get("/summary")]
pub async fn settlement_summary(
    user: AuthenticatedUser,
    query: web::Query<SettlementQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;
    let month = YearMonth::parse(&query.month)?;

    let service = SettlementService::instance();
    let summary = service.monthly_summary(&query.store, month).await?;

    Ok(HttpResponse::Ok().json(summary))
}

#[post("/{id}/approve")]
pub async fn approve_settlement(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&user)?;

    let service = SettlementService::instance();
    let settlement = service.approve(&id, &user.name).await?;

    Ok(HttpResponse::Ok().json(settlement))
}
