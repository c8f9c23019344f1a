//! # 번역 서비스
//!
//! Google Cloud Translation v2 REST API를 호출하고 결과를 Redis에 30일간 캐시합니다.
//! 캐시 키는 `translation:{sha256(target + "\n" + text)}` 입니다.
//!
//! 캐시 장애는 번역 자체를 막지 않습니다. 경고 로그만 남기고 API를 직접 호출합니다.
//!
//! ```bash
//! TRANSLATE_API_KEY=...            # 필수
//! TRANSLATE_API_URL=...            # 기본: https://translation.googleapis.com/language/translate/v2
//! TRANSLATE_TIMEOUT_SECONDS=10
//! ```

use std::{sync::Arc, time::Duration};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use singleton_macro::service;
use crate::{
    caching::redis::RedisClient,
    config::TranslationConfig,
    domain::dto::notices::{TranslateTextRequest, TranslateTextResponse},
    errors::errors::AppError,
};

#[derive(Debug, Serialize)]
struct TranslateApiRequest<'a> {
    q: Vec<&'a str>,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateApiResponse {
    data: TranslateApiData,
}

#[derive(Debug, Deserialize)]
struct TranslateApiData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

#[service(name = "translation")]
pub struct TranslationService {
    redis: Arc<RedisClient>,
}

impl TranslationService {
    pub async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse, AppError> {
        let translated = self
            .translate(&request.text, &request.target, request.source.as_deref())
            .await?;

        Ok(TranslateTextResponse {
            text: request.text,
            translated,
            target: request.target,
        })
    }

    /// 한 문장을 `target` 언어로 번역합니다.
    ///
    /// 빈 문장은 API를 호출하지 않고 그대로 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - API 키 미설정, 호출 실패, 응답 형식 오류
    pub async fn translate(&self, text: &str, target: &str, source: Option<&str>) -> Result<String, AppError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let target = target.trim().to_lowercase();
        let source = source.map(|lang| lang.trim().to_lowercase()).filter(|lang| !lang.is_empty());
        let key = cache_key(&target, source.as_deref(), text);

        match self.redis.get::<String>(&key).await {
            Ok(Some(cached)) => {
                log::debug!("번역 캐시 히트: {}", key);
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => log::warn!("번역 캐시 조회 실패 (API 직접 호출): {}", e),
        }

        let translated = self.request_translation(text, &target, source.as_deref()).await?;

        if let Err(e) = self.redis
            .set_with_expiry(&key, &translated, TranslationConfig::cache_ttl_seconds())
            .await
        {
            log::warn!("번역 캐시 저장 실패: {}", e);
        }

        Ok(translated)
    }

    async fn request_translation(&self, text: &str, target: &str, source: Option<&str>) -> Result<String, AppError> {
        let api_key = TranslationConfig::api_key()
            .ok_or_else(|| AppError::ExternalServiceError("번역 API 키가 설정되지 않았습니다".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TranslationConfig::timeout_seconds()))
            .build()
            .map_err(|e| AppError::ExternalServiceError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let body = TranslateApiRequest {
            q: vec![text],
            target,
            source,
            format: "text",
        };

        let response = client
            .post(TranslationConfig::api_url())
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("번역 API 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("번역 API 오류 {}: {}", status, error_text);
            return Err(AppError::ExternalServiceError(format!("번역 API 오류 ({})", status)));
        }

        let parsed = response
            .json::<TranslateApiResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("번역 응답 파싱 실패: {}", e)))?;

        parsed.data.translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| AppError::ExternalServiceError("번역 API 응답 없음".to_string()))
    }
}

/// 원문 언어를 자동 감지하면 source 자리는 빈 문자열입니다.
fn cache_key(target: &str, source: Option<&str>, text: &str) -> String {
    let digest = Sha256::digest(format!("{}\n{}\n{}", target, source.unwrap_or(""), text).as_bytes());
    format!("translation:{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_depends_on_target_and_text() {
        let th = cache_key("th", None, "오늘 재고 점검이 있습니다");
        let en = cache_key("en", None, "오늘 재고 점검이 있습니다");

        assert!(th.starts_with("translation:"));
        assert_eq!(th.len(), "translation:".len() + 64);
        assert_ne!(th, en);
        assert_eq!(th, cache_key("th", None, "오늘 재고 점검이 있습니다"));
    }

    #[test]
    fn test_cache_key_separates_explicit_source() {
        let detected = cache_key("th", None, "gift");
        let from_en = cache_key("th", Some("en"), "gift");
        let from_de = cache_key("th", Some("de"), "gift");

        assert_ne!(detected, from_en);
        assert_ne!(from_en, from_de);
        assert_eq!(from_en, cache_key("th", Some("en"), "gift"));
    }

    #[test]
    fn test_api_request_shape() {
        let body = TranslateApiRequest { q: vec!["안녕하세요"], target: "th", source: None, format: "text" };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["q"][0], "안녕하세요");
        assert_eq!(json["target"], "th");
        assert_eq!(json["format"], "text");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_api_response_parsing() {
        let raw = r#"{"data":{"translations":[{"translatedText":"สวัสดี","detectedSourceLanguage":"ko"}]}}"#;
        let parsed: TranslateApiResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.data.translations[0].translated_text, "สวัสดี");
    }
}
