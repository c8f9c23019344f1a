//! # HTTP Request Handlers Module
//!
//! 도메인별 HTTP 엔드포인트입니다. 핸들러는 요청 DTO 검증, 매장 권한 확인,
//! 서비스 호출까지만 담당하고 업무 규칙은 서비스 계층에 둡니다.
//!
//! ```text
//! Handlers (이 모듈)   ← Web Layer: 검증, 권한, 직렬화
//!    │
//! Services            ← 업무 규칙, 계산
//!    │
//! Repositories        ← MongoDB / Redis
//! ```
//!
//! ## 공통 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_leave(
//!     user: AuthenticatedUser,
//!     payload: web::Json<CreateLeaveRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     user.ensure_store_access(&payload.store)?;
//!
//!     let service = LeaveService::instance();
//!     let response = service.create_leave(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! - 생성 201, 조회/상태 변경 200, 삭제 204
//! - 목록은 [`ListResponse`](crate::domain::dto::common::ListResponse)로 감싸 `{items, total}` 형태
//! - 결재자, 작성자 이름은 요청 본문이 아닌 토큰의 사용자 이름을 사용

pub mod auth;
pub mod employees;
pub mod attendance;
pub mod leave;
pub mod holidays;
pub mod payroll;
pub mod inventory;
pub mod pos;
pub mod notices;
pub mod visits;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 목록 조회의 매장 범위
///
/// 관리자는 요청한 매장(없으면 전체), 매니저는 소속 매장으로 고정됩니다.
pub(crate) fn scoped_store(user: &AuthenticatedUser, requested: Option<String>) -> Result<Option<String>, AppError> {
    if user.is_admin() {
        return Ok(requested);
    }

    match (requested, user.store.as_ref()) {
        (Some(store), _) => {
            user.ensure_store_access(&store)?;
            Ok(Some(store))
        }
        (None, Some(own)) => Ok(Some(own.clone())),
        (None, None) => Err(AppError::AuthorizationError("소속 매장이 없는 계정입니다".to_string())),
    }
}

/// 본사 관리자만 허용되는 작업 (쿠폰 발행, 정산 승인)
pub(crate) fn require_admin(user: &AuthenticatedUser) -> Result<(), AppError> {
    if user.is_admin() {
        return Ok(());
    }
    Err(AppError::AuthorizationError("본사 관리자만 처리할 수 있습니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roles;

    fn user(role: &str, store: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-1".to_string(),
            name: "테스터".to_string(),
            store: store.map(str::to_string),
            roles: vec![role.to_string()],
        }
    }

    #[test]
    fn test_manager_pinned_to_own_store() {
        let manager = user(roles::MANAGER, Some("강남점"));

        assert_eq!(scoped_store(&manager, None).unwrap().as_deref(), Some("강남점"));
        assert_eq!(scoped_store(&manager, Some("강남점".into())).unwrap().as_deref(), Some("강남점"));
        assert!(matches!(
            scoped_store(&manager, Some("홍대점".into())),
            Err(AppError::AuthorizationError(_))
        ));
        assert!(scoped_store(&user(roles::MANAGER, None), None).is_err());
    }

    #[test]
    fn test_admin_sees_requested_scope() {
        let admin = user(roles::ADMIN, None);

        assert_eq!(scoped_store(&admin, None).unwrap(), None);
        assert_eq!(scoped_store(&admin, Some("홍대점".into())).unwrap().as_deref(), Some("홍대점"));
        assert!(require_admin(&admin).is_ok());
        assert!(require_admin(&user(roles::MANAGER, Some("강남점"))).is_err());
    }
}
