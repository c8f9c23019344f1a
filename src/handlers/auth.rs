//! 인증 사용자 정보 핸들러
//!
//! 토큰 발급은 외부 인증 시스템이 담당하므로, 이 서버는 검증된 토큰의 내용만 돌려줍니다.

use actix_web::{get, HttpResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// `GET /api/v1/me`
///
/// ```json
/// { "user_id": "u-7", "name": "김매니저", "store": "강남점", "roles": ["manager"] }
/// ```
#[get("")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}
