//! 인증된 사용자 모델
//!
//! 미들웨어가 토큰 검증 후 Request Extensions에 넣어 두고,
//! 핸들러는 `AuthenticatedUser`를 추출자로 받아 결재자 이름 등에 사용합니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::roles;
use crate::errors::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// 결재/작성자 기록에 쓰이는 표시 이름
    pub name: String,
    /// 소속 매장 (본사 계정은 `None`)
    pub store: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(roles::ADMIN)
    }

    /// 관리자는 모든 매장, 매니저는 소속 매장만 다룰 수 있습니다.
    pub fn ensure_store_access(&self, store: &str) -> Result<(), AppError> {
        if self.is_admin() || self.store.as_deref() == Some(store) {
            return Ok(());
        }
        Err(AppError::AuthorizationError(format!("{} 매장에 대한 권한이 없습니다", store)))
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(store: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-1".to_string(),
            name: "김매니저".to_string(),
            store: Some(store.to_string()),
            roles: vec![roles::MANAGER.to_string()],
        }
    }

    #[test]
    fn test_manager_limited_to_own_store() {
        let user = manager("강남점");

        assert!(user.ensure_store_access("강남점").is_ok());
        assert!(matches!(
            user.ensure_store_access("홍대점"),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_admin_accesses_every_store() {
        let admin = AuthenticatedUser {
            store: None,
            roles: vec![roles::ADMIN.to_string()],
            ..manager("강남점")
        };

        assert!(admin.is_admin());
        assert!(admin.ensure_store_access("홍대점").is_ok());
        assert!(admin.has_any_role(&["admin", "manager"]));
    }
}
