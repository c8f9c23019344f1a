//! # 재고 품목 리포지토리
//!
//! 재고 수량 변경은 읽고-쓰기 대신 `$inc` 단일 업데이트로 처리하여
//! 동시에 들어온 입고/조정이 서로를 덮어쓰지 않게 합니다.

use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::inventory::Item,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

#[repository(name = "item", collection = "items")]
pub struct ItemRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ItemRepository {
    fn after_update() -> mongodb::options::FindOneAndUpdateOptions {
        mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Item>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_name(&self, store: &str, name: &str) -> Result<Option<Item>, AppError> {
        self.collection::<Item>()
            .find_one(doc! { "store": store, "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_store(&self, store: &str, category: Option<&str>) -> Result<Vec<Item>, AppError> {
        let mut filter = doc! { "store": store };
        if let Some(category) = category {
            filter.insert("category", category);
        }

        let cursor = self.collection::<Item>()
            .find(filter)
            .sort(doc! { "category": 1, "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 재고가 안전재고 이하인 품목
    pub async fn find_low_stock(&self, store: &str) -> Result<Vec<Item>, AppError> {
        let cursor = self.collection::<Item>()
            .find(doc! {
                "store": store,
                "$expr": { "$lte": ["$stock_qty", "$safety_stock"] },
            })
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut item: Item) -> Result<Item, AppError> {
        if self.find_by_name(&item.store, &item.name).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "{} 매장에 이미 등록된 품목입니다: {}",
                item.store, item.name
            )));
        }

        let result = self.collection::<Item>()
            .insert_one(&item)
            .await
            .map_err(|e| map_write_error(e, "이미 등록된 품목입니다"))?;

        item.id = Some(inserted_object_id(&result)?);
        Ok(item)
    }

    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<Item>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        self.collection::<Item>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(Self::after_update())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 재고를 `delta`만큼 증감합니다.
    ///
    /// 결과가 음수가 되는 차감은 필터에서 걸러져 `None`을 반환합니다.
    pub async fn adjust_stock(&self, id: &str, delta: f64) -> Result<Option<Item>, AppError> {
        let object_id = parse_object_id(id)?;
        let mut filter = doc! { "_id": object_id };
        if delta < 0.0 {
            filter.insert("stock_qty", doc! { "$gte": -delta });
        }

        self.collection::<Item>()
            .find_one_and_update(
                filter,
                doc! {
                    "$inc": { "stock_qty": delta },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(Self::after_update())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 입고 처리: 매장 품목명 기준으로 재고 증가
    pub async fn receive_stock(&self, store: &str, name: &str, quantity: f64) -> Result<Option<Item>, AppError> {
        self.collection::<Item>()
            .find_one_and_update(
                doc! { "store": store, "name": name },
                doc! {
                    "$inc": { "stock_qty": quantity },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(Self::after_update())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<Item>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let store_name_index = IndexModel::builder()
            .keys(doc! { "store": 1, "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("store_name_unique".to_string())
                .build())
            .build();

        self.collection::<Item>()
            .create_index(store_name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
