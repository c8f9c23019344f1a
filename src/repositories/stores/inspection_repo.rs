use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::{bson::{doc, Document}, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::stores::CheckResult,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, parse_object_id},
};

/// 매장 방문 점검 결과 리포지토리
#[repository(name = "inspection", collection = "check_results")]
pub struct InspectionRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl InspectionRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<CheckResult>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<CheckResult>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 방문일 최신순
    pub async fn find_by_store(
        &self,
        store: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<CheckResult>, AppError> {
        let mut filter = doc! { "store": store };
        let mut range = Document::new();
        if let Some(from) = from {
            range.insert("$gte", from.to_string());
        }
        if let Some(to) = to {
            range.insert("$lte", to.to_string());
        }
        if !range.is_empty() {
            filter.insert("visit_date", range);
        }

        let cursor = self.collection::<CheckResult>()
            .find(filter)
            .sort(doc! { "visit_date": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut result: CheckResult) -> Result<CheckResult, AppError> {
        let inserted = self.collection::<CheckResult>()
            .insert_one(&result)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result.id = Some(inserted_object_id(&inserted)?);
        Ok(result)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let store_date_index = IndexModel::builder()
            .keys(doc! { "store": 1, "visit_date": -1 })
            .build();

        self.collection::<CheckResult>()
            .create_index(store_date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
