//! Public holiday handlers (관리자 전용)

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::holidays::{CreateHolidayRequest, HolidayQuery};
use crate::errors::errors::AppError;
use crate::services::holidays::HolidayService;

/// 같은 날짜가 이미 있으면 409
#[post("")]
pub async fn create_holiday(
    payload: web::Json<CreateHolidayRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = HolidayService::instance();
    let holiday = service.create_holiday(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(holiday))
}

/// `GET /api/v1/holidays?year=2026`
#[get("")]
pub async fn list_holidays(
    query: web::Query<HolidayQuery>,
) -> Result<HttpResponse, AppError> {
    let service = HolidayService::instance();
    let holidays = service.list_holidays(query.year).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(holidays)))
}

#[delete("/{id}")]
pub async fn delete_holiday(
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = HolidayService::instance();
    service.delete_holiday(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
