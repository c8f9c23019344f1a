//! # Authentication & Integration Configuration
//!
//! JWT 검증 키와 외부 번역 API 연동 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="shared-secret-with-identity-system"
//! export JWT_EXPIRATION_HOURS="12"
//!
//! export TRANSLATE_API_URL="https://translation.googleapis.com/language/translate/v2"
//! export TRANSLATE_API_KEY="..."
//! export TRANSLATE_TIMEOUT_SECONDS="10"
//! ```

use std::env;

/// 직원 역할
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MANAGER: &str = "manager";
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "erp-dev-secret".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .unwrap_or(12)
    }
}

pub struct TranslationConfig;

impl TranslationConfig {
    pub fn api_url() -> String {
        env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| "https://translation.googleapis.com/language/translate/v2".to_string())
    }

    /// 미설정 시 `None` - 번역 요청은 ExternalServiceError로 실패합니다.
    pub fn api_key() -> Option<String> {
        env::var("TRANSLATE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout_seconds() -> u64 {
        env::var("TRANSLATE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    }

    /// 번역 결과 캐시 TTL (30일)
    pub fn cache_ttl_seconds() -> usize {
        60 * 60 * 24 * 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 12);
        }
    }

    #[test]
    fn test_translation_defaults() {
        if env::var("TRANSLATE_API_URL").is_err() {
            assert!(TranslationConfig::api_url().ends_with("/language/translate/v2"));
        }
        assert_eq!(TranslationConfig::cache_ttl_seconds(), 2_592_000);
    }
}
