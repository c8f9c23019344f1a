//! JWT 토큰 검증 서비스
//!
//! 토큰은 외부 인증 시스템이 같은 비밀키(HS256)로 발급합니다.
//! 이 서비스는 요청마다 토큰을 검증하고, 통합 테스트나 운영 도구를 위해 발급 기능도 제공합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::token::token::TokenClaims;
use crate::errors::errors::AppError;

#[service(name="token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자 정보로 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::instance().issue_token("u-1", "김매니저", Some("강남점"), &["manager"])?;
    /// ```
    pub fn issue_token(
        &self,
        user_id: &str,
        name: &str,
        store: Option<&str>,
        roles: &[&str],
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            name: name.to_string(),
            store: store.map(str::to_string),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_) => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// 검증된 토큰을 요청 컨텍스트용 사용자로 변환
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.verify_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            name: claims.name,
            store: claims.store,
            roles: claims.roles,
        })
    }

    /// "Bearer {token}" 형식에서 토큰 부분만 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip_claims() {
        let service = TokenService::instance();
        let token = service
            .issue_token("u-7", "박관리", Some("홍대점"), &["manager"])
            .unwrap();

        let user = service.authenticate(&token).unwrap();
        assert_eq!(user.user_id, "u-7");
        assert_eq!(user.name, "박관리");
        assert_eq!(user.store.as_deref(), Some("홍대점"));
        assert!(user.has_role("manager"));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = TokenService::instance();
        let token = service.issue_token("u-1", "관리자", None, &["admin"]).unwrap();
        let tampered = format!("{}x", token);

        assert!(matches!(
            service.verify_token(&tampered),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
