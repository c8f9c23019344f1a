use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::pos::PosMenu,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

#[repository(name = "menu", collection = "pos_menus")]
pub struct MenuRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MenuRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<PosMenu>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<PosMenu>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_name(&self, store: &str, name: &str) -> Result<Option<PosMenu>, AppError> {
        self.collection::<PosMenu>()
            .find_one(doc! { "store": store, "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 표시 순서 → 이름 순
    pub async fn find_by_store(&self, store: &str, active_only: bool) -> Result<Vec<PosMenu>, AppError> {
        let mut filter = doc! { "store": store };
        if active_only {
            filter.insert("is_active", true);
        }

        let cursor = self.collection::<PosMenu>()
            .find(filter)
            .sort(doc! { "sort_order": 1, "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut menu: PosMenu) -> Result<PosMenu, AppError> {
        if self.find_by_name(&menu.store, &menu.name).await?.is_some() {
            return Err(AppError::ConflictError(format!("이미 등록된 메뉴입니다: {}", menu.name)));
        }

        let result = self.collection::<PosMenu>()
            .insert_one(&menu)
            .await
            .map_err(|e| map_write_error(e, "이미 등록된 메뉴입니다"))?;

        menu.id = Some(inserted_object_id(&result)?);
        Ok(menu)
    }

    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<PosMenu>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PosMenu>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, "이미 등록된 메뉴입니다"))
    }

    /// 판매 중/중지 전환 (파이프라인 업데이트)
    pub async fn toggle_active(&self, id: &str) -> Result<Option<PosMenu>, AppError> {
        let object_id = parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PosMenu>()
            .find_one_and_update(
                doc! { "_id": object_id },
                vec![doc! { "$set": {
                    "is_active": { "$not": ["$is_active"] },
                    "updated_at": DateTime::now(),
                }}],
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<PosMenu>()
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

        self.collection::<PosMenu>()
            .create_index(store_name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
