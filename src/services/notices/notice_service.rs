//! # 공지사항 서비스
//!
//! 본사 공지를 작성하고 매장 직원이 읽을 언어로 번역본을 저장합니다.
//! 제목이나 본문을 수정하면 저장된 번역본은 모두 지워집니다.

use std::sync::Arc;
use mongodb::bson::{DateTime, Document};
use singleton_macro::service;
use crate::{
    domain::dto::notices::{CreateNoticeRequest, NoticeResponse, UpdateNoticeRequest},
    domain::entities::stores::{Notice, NoticeTranslation},
    errors::errors::AppError,
    repositories::stores::NoticeRepository,
    services::translation::TranslationService,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

/// 공지 본문의 원문 언어
const SOURCE_LANG: &str = "ko";

#[service(name = "notice")]
pub struct NoticeService {
    notice_repo: Arc<NoticeRepository>,
    translation_service: Arc<TranslationService>,
}

impl NoticeService {
    pub async fn create_notice(&self, request: CreateNoticeRequest, author: &str) -> Result<NoticeResponse, AppError> {
        let now = DateTime::now();
        let notice = Notice {
            id: None,
            title: validate_required_string(&request.title, "제목")?,
            body: validate_required_string(&request.body, "본문")?,
            target_store: clean_optional_string(request.target_store),
            author: author.to_string(),
            pinned: request.pinned,
            translations: Default::default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.notice_repo.create(notice).await?;
        log::info!(
            "공지 등록: {} (대상: {})",
            created.title,
            created.target_store.as_deref().unwrap_or("전 매장")
        );
        Ok(NoticeResponse::from(created))
    }

    pub async fn get_notice(&self, id: &str) -> Result<NoticeResponse, AppError> {
        self.find(id).await.map(NoticeResponse::from)
    }

    /// 매장을 지정하면 전 매장 공지와 해당 매장 공지만
    pub async fn list_notices(&self, store: Option<&str>) -> Result<Vec<NoticeResponse>, AppError> {
        let notices = self.notice_repo.find_for_store(store).await?;
        Ok(notices.into_iter().map(NoticeResponse::from).collect())
    }

    pub async fn update_notice(&self, id: &str, request: UpdateNoticeRequest) -> Result<NoticeResponse, AppError> {
        let (update_doc, content_changed) = notice_update_document(request)?;
        if update_doc.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }

        let updated = self.notice_repo
            .update(id, update_doc, content_changed)
            .await?
            .ok_or_else(|| AppError::NotFound("공지를 찾을 수 없습니다".to_string()))?;

        if content_changed {
            log::info!("공지 내용 변경, 번역본 초기화: {}", updated.title);
        }
        Ok(NoticeResponse::from(updated))
    }

    pub async fn delete_notice(&self, id: &str) -> Result<(), AppError> {
        if !self.notice_repo.delete(id).await? {
            return Err(AppError::NotFound("공지를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    /// 제목과 본문을 `lang`으로 번역해 공지에 저장합니다.
    ///
    /// 같은 언어의 기존 번역본은 덮어씁니다.
    pub async fn translate_notice(&self, id: &str, lang: &str) -> Result<NoticeResponse, AppError> {
        let lang = lang.trim().to_lowercase();
        if lang == SOURCE_LANG {
            return Err(AppError::ValidationError("원문과 같은 언어로는 번역할 수 없습니다".to_string()));
        }

        let notice = self.find(id).await?;

        let (title, body) = futures_util::try_join!(
            self.translation_service.translate(&notice.title, &lang, Some(SOURCE_LANG)),
            self.translation_service.translate(&notice.body, &lang, Some(SOURCE_LANG)),
        )?;

        let updated = self.notice_repo
            .set_translation(id, &lang, &NoticeTranslation { title, body })
            .await?
            .ok_or_else(|| AppError::NotFound("공지를 찾을 수 없습니다".to_string()))?;

        log::info!("공지 번역 저장: {} → {}", updated.title, lang);
        Ok(NoticeResponse::from(updated))
    }

    async fn find(&self, id: &str) -> Result<Notice, AppError> {
        self.notice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("공지를 찾을 수 없습니다".to_string()))
    }
}

/// `$set` 문서와 번역본 초기화 여부
fn notice_update_document(request: UpdateNoticeRequest) -> Result<(Document, bool), AppError> {
    let mut update_doc = Document::new();
    let mut content_changed = false;

    if let Some(title) = request.title {
        update_doc.insert("title", validate_required_string(&title, "제목")?);
        content_changed = true;
    }
    if let Some(body) = request.body {
        update_doc.insert("body", validate_required_string(&body, "본문")?);
        content_changed = true;
    }
    if let Some(pinned) = request.pinned {
        update_doc.insert("pinned", pinned);
    }

    Ok((update_doc, content_changed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_only_update_keeps_translations() {
        let (doc, changed) = notice_update_document(UpdateNoticeRequest {
            pinned: Some(true),
            ..Default::default()
        }).unwrap();

        assert!(!changed);
        assert_eq!(doc.get_bool("pinned").unwrap(), true);
    }

    #[test]
    fn test_body_update_clears_translations() {
        let (doc, changed) = notice_update_document(UpdateNoticeRequest {
            body: Some("  10월 위생 점검 일정 변경  ".to_string()),
            ..Default::default()
        }).unwrap();

        assert!(changed);
        assert_eq!(doc.get_str("body").unwrap(), "10월 위생 점검 일정 변경");
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = notice_update_document(UpdateNoticeRequest {
            title: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
