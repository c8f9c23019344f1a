//! JWT 클레임 모델

use serde::{Deserialize, Serialize};

/// 외부 인증 시스템이 발급하고 이 서비스가 검증하는 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}
