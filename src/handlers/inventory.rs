//! # Inventory HTTP Handlers
//!
//! 거래처(`/api/v1/vendors`), 매장 재고(`/api/v1/items`),
//! 발주(`/api/v1/orders`) 엔드포인트입니다.
//!
//! 발주는 `대기` → `승인` → `입고완료` 순서로만 진행하며, 입고 시 발주 품목 수량만큼
//! 해당 매장 재고가 늘어납니다. 매니저는 소속 매장의 품목과 발주만 다룰 수 있습니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::{ListResponse, StoreQuery};
use crate::domain::dto::inventory::{
    AdjustStockRequest, CreateItemRequest, CreateOrderRequest, CreateVendorRequest, ItemQuery,
    ItemResponse, OrderQuery, OrderResponse, UpdateItemRequest, UpdateVendorRequest, VendorQuery,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::handlers::scoped_store;
use crate::services::inventory::{ItemService, OrderService, VendorService};

// ---- 거래처 ----

#[post("")]
pub async fn create_vendor(
    payload: web::Json<CreateVendorRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = VendorService::instance();
    let vendor = service.create_vendor(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(vendor))
}

#[get("")]
pub async fn list_vendors(
    query: web::Query<VendorQuery>,
) -> Result<HttpResponse, AppError> {
    let service = VendorService::instance();
    let vendors = service.list_vendors(query.into_inner().category).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(vendors)))
}

#[get("/{id}")]
pub async fn get_vendor(
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = VendorService::instance();
    let vendor = service.get_vendor(&id).await?;

    Ok(HttpResponse::Ok().json(vendor))
}

#[patch("/{id}")]
pub async fn update_vendor(
    id: web::Path<String>,
    payload: web::Json<UpdateVendorRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = VendorService::instance();
    let vendor = service.update_vendor(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(vendor))
}

#[delete("/{id}")]
pub async fn delete_vendor(
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = VendorService::instance();
    service.delete_vendor(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

// ---- 재고 품목 ----

#[post("")]
pub async fn create_item(
    user: AuthenticatedUser,
    payload: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = ItemService::instance();
    let item = service.create_item(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(item))
}

#[get("")]
pub async fn list_items(
    user: AuthenticatedUser,
    query: web::Query<ItemQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;
    let query = query.into_inner();

    let service = ItemService::instance();
    let items = service.list_items(&query.store, query.category).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(items)))
}

/// 안전재고 이하 품목
#[get("/low-stock")]
pub async fn low_stock_items(
    user: AuthenticatedUser,
    query: web::Query<StoreQuery>,
) -> Result<HttpResponse, AppError> {
    user.ensure_store_access(&query.store)?;

    let service = ItemService::instance();
    let items = service.low_stock(&query.store).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(items)))
}

#[get("/{id}")]
pub async fn get_item(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ItemService::instance();
    let item = service.get_item(&id).await?;
    user.ensure_store_access(&item.store)?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

#[patch("/{id}")]
pub async fn update_item(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = ItemService::instance();
    let current = service.get_item(&id).await?;
    user.ensure_store_access(&current.store)?;

    let item = service.update_item(&id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// 실사, 폐기 등 수동 조정. 결과 재고가 음수면 400
#[post("/{id}/adjust")]
pub async fn adjust_stock(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<AdjustStockRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = ItemService::instance();
    let current = service.get_item(&id).await?;
    user.ensure_store_access(&current.store)?;

    let item = service.adjust_stock(&id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/{id}")]
pub async fn delete_item(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ItemService::instance();
    let current = service.get_item(&id).await?;
    user.ensure_store_access(&current.store)?;

    service.delete_item(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- 발주 ----

#[post("")]
pub async fn create_order(
    user: AuthenticatedUser,
    payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    user.ensure_store_access(&payload.store)?;

    let service = OrderService::instance();
    let order = service.create_order(payload.into_inner(), &user.name).await?;

    Ok(HttpResponse::Created().json(order))
}

#[get("")]
pub async fn list_orders(
    user: AuthenticatedUser,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
    let mut query = query.into_inner();
    query.store = scoped_store(&user, query.store.take())?;

    let service = OrderService::instance();
    let orders = service.list_orders(query).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(orders)))
}

#[get("/{id}")]
pub async fn get_order(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let order = service.get_order(&id).await?;
    user.ensure_store_access(&order.store)?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

#[post("/{id}/approve")]
pub async fn approve_order(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let current = service.get_order(&id).await?;
    user.ensure_store_access(&current.store)?;

    let order = service.approve_order(&id, &user.name).await?;
    Ok(HttpResponse::Ok().json(order))
}

#[post("/{id}/reject")]
pub async fn reject_order(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let current = service.get_order(&id).await?;
    user.ensure_store_access(&current.store)?;

    let order = service.reject_order(&id, &user.name).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// 입고 처리: 승인된 발주만 가능하며 품목별 재고를 증가시킵니다.
#[post("/{id}/receive")]
pub async fn receive_order(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = OrderService::instance();
    let current = service.get_order(&id).await?;
    user.ensure_store_access(&current.store)?;

    let order = service.receive_order(&id, &user.name).await?;
    Ok(HttpResponse::Ok().json(order))
}
