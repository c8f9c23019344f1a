//! 공지사항 리포지토리
//!
//! 매장 조회 시 전 매장 공지(`target_store` 없음)와 해당 매장 공지를 함께 돌려주고,
//! 고정 공지가 먼저 오도록 정렬합니다.

use std::sync::Arc;
use mongodb::{bson::{doc, to_bson, Document, DateTime}, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::stores::{Notice, NoticeTranslation},
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, parse_object_id},
};

#[repository(name = "notice", collection = "notices")]
pub struct NoticeRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl NoticeRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Notice>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Notice>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `store`가 없으면 전체 공지
    pub async fn find_for_store(&self, store: Option<&str>) -> Result<Vec<Notice>, AppError> {
        let filter = match store {
            Some(store) => doc! {
                "$or": [
                    { "target_store": null },
                    { "target_store": store },
                ]
            },
            None => Document::new(),
        };

        let cursor = self.collection::<Notice>()
            .find(filter)
            .sort(doc! { "pinned": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut notice: Notice) -> Result<Notice, AppError> {
        let result = self.collection::<Notice>()
            .insert_one(&notice)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        notice.id = Some(inserted_object_id(&result)?);
        Ok(notice)
    }

    /// 본문이 바뀌면 기존 번역은 더 이상 맞지 않으므로 호출 측에서 `clear_translations`를 전달합니다.
    pub async fn update(
        &self,
        id: &str,
        mut update_doc: Document,
        clear_translations: bool,
    ) -> Result<Option<Notice>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());
        if clear_translations {
            update_doc.insert("translations", Document::new());
        }

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Notice>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn set_translation(
        &self,
        id: &str,
        lang: &str,
        translation: &NoticeTranslation,
    ) -> Result<Option<Notice>, AppError> {
        let object_id = parse_object_id(id)?;
        let value = to_bson(translation)
            .map_err(|e| AppError::InternalError(format!("번역 직렬화 실패: {}", e)))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Notice>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    format!("translations.{}", lang): value,
                    "updated_at": DateTime::now(),
                }},
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<Notice>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let listing_index = IndexModel::builder()
            .keys(doc! { "target_store": 1, "pinned": -1, "created_at": -1 })
            .build();

        self.collection::<Notice>()
            .create_index(listing_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
