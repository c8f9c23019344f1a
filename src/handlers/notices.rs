//! # Notice / Translation HTTP Handlers
//!
//! 전 매장 공지(`target_store` 없음)는 본사 관리자만 작성, 수정할 수 있고,
//! 매장 공지는 해당 매장 매니저도 다룰 수 있습니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::common::ListResponse;
use crate::domain::dto::notices::{
    CreateNoticeRequest, NoticeQuery, NoticeResponse, TranslateNoticeRequest, TranslateTextRequest,
    UpdateNoticeRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::handlers::{require_admin, scoped_store};
use crate::services::notices::NoticeService;
use crate::services::translation::TranslationService;

fn ensure_notice_access(user: &AuthenticatedUser, target_store: Option<&str>) -> Result<(), AppError> {
    match target_store {
        Some(store) => user.ensure_store_access(store),
        None => require_admin(user),
    }
}

async fn editable_notice(user: &AuthenticatedUser, id: &str) -> Result<NoticeResponse, AppError> {
    let notice = NoticeService::instance().get_notice(id).await?;
    ensure_notice_access(user, notice.target_store.as_deref())?;
    Ok(notice)
}

#[post("")]
pub async fn create_notice(
    user: AuthenticatedUser,
    payload: web::Json<CreateNoticeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    ensure_notice_access(&user, payload.target_store.as_deref())?;

    let service = NoticeService::instance();
    let notice = service.create_notice(payload.into_inner(), &user.name).await?;

    Ok(HttpResponse::Created().json(notice))
}

/// 매장을 지정하면 해당 매장 공지와 전 매장 공지를 고정 공지 우선, 최신순으로 돌려줍니다.
#[get("")]
pub async fn list_notices(
    user: AuthenticatedUser,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse, AppError> {
    let store = scoped_store(&user, query.into_inner().store)?;

    let service = NoticeService::instance();
    let notices = service.list_notices(store.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ListResponse::from(notices)))
}

#[get("/{id}")]
pub async fn get_notice(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = NoticeService::instance();
    let notice = service.get_notice(&id).await?;
    if let Some(store) = notice.target_store.as_deref() {
        user.ensure_store_access(store)?;
    }

    Ok(HttpResponse::Ok().json(notice))
}

/// 제목이나 본문이 바뀌면 저장된 번역본은 초기화됩니다.
#[patch("/{id}")]
pub async fn update_notice(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateNoticeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    editable_notice(&user, &id).await?;

    let service = NoticeService::instance();
    let notice = service.update_notice(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(notice))
}

#[delete("/{id}")]
pub async fn delete_notice(
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    editable_notice(&user, &id).await?;

    let service = NoticeService::instance();
    service.delete_notice(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// ```json
/// { "lang": "th" }
/// ```
#[post("/{id}/translate")]
pub async fn translate_notice(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<TranslateNoticeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    editable_notice(&user, &id).await?;

    let service = NoticeService::instance();
    let notice = service.translate_notice(&id, &payload.lang).await?;

    Ok(HttpResponse::Ok().json(notice))
}

/// `POST /api/v1/translate` - 임의 문장 번역
#[post("")]
pub async fn translate_text(
    payload: web::Json<TranslateTextRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = TranslationService::instance();
    let response = service.translate_text(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
