use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::inventory::PurchaseOrder,
    domain::models::status::OrderStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

/// 발주서 리포지토리 (`orders`)
#[repository(name = "order", collection = "orders")]
pub struct OrderRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl OrderRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<PurchaseOrder>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<PurchaseOrder>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 최신순
    pub async fn find_all(
        &self,
        store: Option<&str>,
        status: Option<OrderStatus>,
    ) -> Result<Vec<PurchaseOrder>, AppError> {
        let mut filter = Document::new();
        if let Some(store) = store {
            filter.insert("store", store);
        }
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection::<PurchaseOrder>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut order: PurchaseOrder) -> Result<PurchaseOrder, AppError> {
        let result = self.collection::<PurchaseOrder>()
            .insert_one(&order)
            .await
            .map_err(|e| map_write_error(e, "발주번호가 중복되었습니다. 다시 시도해주세요"))?;

        order.id = Some(inserted_object_id(&result)?);
        Ok(order)
    }

    /// `from` 상태일 때만 전이합니다. 상태가 다르면 `None`.
    pub async fn transition(
        &self,
        id: &str,
        from: OrderStatus,
        mut update_doc: Document,
    ) -> Result<Option<PurchaseOrder>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PurchaseOrder>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": from.as_str() },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<PurchaseOrder>();

        let order_no_index = IndexModel::builder()
            .keys(doc! { "order_no": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("order_no_unique".to_string())
                .build())
            .build();

        let store_index = IndexModel::builder()
            .keys(doc! { "store": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("store_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([order_no_index, store_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
