use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,
    #[validate(length(min = 1, max = 10000, message = "본문을 입력해주세요"))]
    pub body: String,
    /// 생략 시 전 매장 공지
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub target_store: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNoticeRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 10000, message = "본문을 입력해주세요"))]
    pub body: Option<String>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeQuery {
    pub store: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateNoticeRequest {
    /// ISO 639-1 언어 코드 (`th`, `en`, `my`...)
    #[validate(length(min = 2, max = 10, message = "언어 코드가 올바르지 않습니다"))]
    pub lang: String,
}

/// 임의 문장 번역
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateTextRequest {
    #[validate(length(max = 5000, message = "번역할 문장은 5000자 이하여야 합니다"))]
    pub text: String,
    #[validate(length(min = 2, max = 10, message = "언어 코드가 올바르지 않습니다"))]
    pub target: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub source: Option<String>,
}
