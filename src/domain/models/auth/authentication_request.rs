//! 인증 요구 수준 모델
//!
//! 라우트 스코프마다 [`AuthMode`]와 [`RequiredRole`]을 조합해
//! 미들웨어에 전달합니다.

/// 인증 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 토큰이 반드시 필요함
    Required,
    /// 토큰이 있으면 검증, 없어도 통과
    Optional,
}

/// 요구 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(String),
    /// 하나라도 가지고 있으면 허용 (OR)
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required_role) => user_roles.contains(required_role),
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("admin".to_string());

        assert!(required.is_satisfied(&["admin".to_string(), "manager".to_string()]));
        assert!(!required.is_satisfied(&["manager".to_string()]));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["admin".to_string(), "manager".to_string()]);

        assert!(required.is_satisfied(&["manager".to_string()]));
        assert!(!required.is_satisfied(&["staff".to_string()]));
        assert!(!required.is_satisfied(&[]));
    }
}
