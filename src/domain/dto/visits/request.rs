use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckItemRequest {
    #[validate(length(min = 1, message = "점검 분류는 필수입니다"))]
    pub category: String,
    #[validate(length(min = 1, message = "점검 항목은 필수입니다"))]
    pub question: String,
    pub passed: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCheckRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    pub visit_date: NaiveDate,
    #[validate(length(min = 1, message = "점검 항목이 최소 1개 필요합니다"))]
    #[validate(nested)]
    pub items: Vec<CheckItemRequest>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckQuery {
    pub store: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComplaintRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    pub received_date: NaiveDate,
    #[validate(length(min = 1, max = 30, message = "접수 채널은 필수입니다"))]
    pub channel: String,
    #[validate(length(min = 1, max = 30, message = "불만 분류는 필수입니다"))]
    pub category: String,
    #[validate(length(min = 1, max = 2000, message = "불만 내용을 입력해주세요"))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveComplaintRequest {
    #[validate(length(min = 1, max = 2000, message = "처리 내용을 입력해주세요"))]
    pub resolution: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintQuery {
    pub store: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(items: Vec<CheckItemRequest>) -> CreateCheckRequest {
        CreateCheckRequest {
            store: "강남점".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2026, 10, 7).unwrap(),
            items,
            comment: None,
        }
    }

    #[test]
    fn test_check_needs_valid_items() {
        let item = CheckItemRequest {
            category: "위생".to_string(),
            question: "냉장고 온도 기록".to_string(),
            passed: true,
            note: None,
        };
        assert!(check(vec![item.clone()]).validate().is_ok());
        assert!(check(Vec::new()).validate().is_err());

        let blank = CheckItemRequest { question: String::new(), ..item };
        assert!(check(vec![blank]).validate().is_err());
    }
}
