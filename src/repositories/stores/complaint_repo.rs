use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::stores::ComplaintLog,
    domain::models::status::ComplaintStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, parse_object_id},
};

#[repository(name = "complaint", collection = "complaint_logs")]
pub struct ComplaintRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ComplaintRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<ComplaintLog>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<ComplaintLog>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(
        &self,
        store: Option<&str>,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<ComplaintLog>, AppError> {
        let mut filter = Document::new();
        if let Some(store) = store {
            filter.insert("store", store);
        }
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection::<ComplaintLog>()
            .find(filter)
            .sort(doc! { "received_date": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut complaint: ComplaintLog) -> Result<ComplaintLog, AppError> {
        let result = self.collection::<ComplaintLog>()
            .insert_one(&complaint)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        complaint.id = Some(inserted_object_id(&result)?);
        Ok(complaint)
    }

    /// 대기 → 처리완료. 이미 처리된 건은 `None`.
    pub async fn resolve(
        &self,
        id: &str,
        resolution: &str,
        resolved_by: &str,
    ) -> Result<Option<ComplaintLog>, AppError> {
        let object_id = parse_object_id(id)?;
        let now = DateTime::now();

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<ComplaintLog>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": ComplaintStatus::Pending.as_str() },
                doc! { "$set": {
                    "status": ComplaintStatus::Resolved.as_str(),
                    "resolution": resolution,
                    "resolved_by": resolved_by,
                    "resolved_at": now,
                    "updated_at": now,
                }},
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let index = IndexModel::builder()
            .keys(doc! { "store": 1, "status": 1, "received_date": -1 })
            .build();

        self.collection::<ComplaintLog>()
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
