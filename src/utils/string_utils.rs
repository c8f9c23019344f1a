//! # 문자열 유틸리티
//!
//! 요청 DTO 정리와 검증에 쓰이는 공통 함수들입니다.
//! 매장명, 직원명처럼 문자열 일치로 연결되는 필드는 반드시 여기서 공백을 정리한 뒤 저장합니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열 검증 후 앞뒤 공백을 제거해 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백뿐인 선택 문자열은 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 쿠폰 코드 정규화: 공백 제거 + 대문자
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("강남점", "store").unwrap(), "강남점");
        assert_eq!(validate_required_string("  홍길동  ", "name").unwrap(), "홍길동");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("메모".to_string())), Some("메모".to_string()));
        assert_eq!(clean_optional_string(Some("  메모  ".to_string())), Some("메모".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  welcome10 "), "WELCOME10");
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            note: Option<String>,
        }

        let result: Payload = serde_json::from_str(r#"{"note": "  지각 사유  "}"#).unwrap();
        assert_eq!(result.note, Some("지각 사유".to_string()));

        let result: Payload = serde_json::from_str(r#"{"note": "  "}"#).unwrap();
        assert_eq!(result.note, None);

        let result: Payload = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(result.note, None);

        let result: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.note, None);
    }
}
