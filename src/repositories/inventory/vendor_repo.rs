use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::inventory::Vendor,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

/// 거래처 리포지토리 - 이름은 전 매장 공통으로 유일
#[repository(name = "vendor", collection = "vendors")]
pub struct VendorRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl VendorRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Vendor>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Vendor>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Vendor>, AppError> {
        self.collection::<Vendor>()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(&self, category: Option<&str>) -> Result<Vec<Vendor>, AppError> {
        let mut filter = Document::new();
        if let Some(category) = category {
            filter.insert("category", category);
        }

        let cursor = self.collection::<Vendor>()
            .find(filter)
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut vendor: Vendor) -> Result<Vendor, AppError> {
        if self.find_by_name(&vendor.name).await?.is_some() {
            return Err(AppError::ConflictError(format!("이미 등록된 거래처입니다: {}", vendor.name)));
        }

        let result = self.collection::<Vendor>()
            .insert_one(&vendor)
            .await
            .map_err(|e| map_write_error(e, "이미 등록된 거래처입니다"))?;

        vendor.id = Some(inserted_object_id(&result)?);
        Ok(vendor)
    }

    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<Vendor>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Vendor>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<Vendor>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection::<Vendor>()
            .create_index(name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
