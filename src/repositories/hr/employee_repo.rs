//! # 직원 리포지토리
//!
//! 출퇴근, 휴가, 급여 계산이 모두 `(store, name)`으로 직원을 찾으므로
//! 이름 조회 결과를 Redis에 10분간 캐싱합니다.

use std::sync::Arc;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hr::employee::Employee,
    domain::models::status::EmployeeStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
    utils::date_utils::YearMonth,
};

const CACHE_TTL_SECONDS: usize = 600;

/// 직원 데이터 액세스 리포지토리
///
/// - **컬렉션**: `employees`
/// - **인덱스**: `(store, name)` unique, `status`
/// - **캐시 키**: `employee:{id}`, `employee:{store}:{name}`
#[repository(name = "employee", collection = "employees")]
pub struct EmployeeRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl EmployeeRepository {
    fn name_cache_key(store: &str, name: &str) -> String {
        format!("employee:{}:{}", store, name)
    }

    async fn invalidate_employee(&self, employee: &Employee) {
        if let Some(id) = employee.id_string() {
            let _ = self.invalidate_cache(&id).await;
        }
        if let Err(e) = self.redis.del(&Self::name_cache_key(&employee.store, &employee.name)).await {
            log::warn!("직원 캐시 삭제 실패 ({}/{}): {}", employee.store, employee.name, e);
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let object_id = parse_object_id(id)?;
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Employee>(&cache_key).await {
            return Ok(Some(cached));
        }

        let employee = self.collection::<Employee>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref employee) = employee {
            let _ = self.redis.set_with_expiry(&cache_key, employee, CACHE_TTL_SECONDS).await;
        }

        Ok(employee)
    }

    /// 매장 + 이름으로 조회 (캐시 우선)
    pub async fn find_by_name(&self, store: &str, name: &str) -> Result<Option<Employee>, AppError> {
        let cache_key = Self::name_cache_key(store, name);

        if let Ok(Some(cached)) = self.redis.get::<Employee>(&cache_key).await {
            log::debug!("직원 캐시 히트: {}", cache_key);
            return Ok(Some(cached));
        }

        let employee = self.collection::<Employee>()
            .find_one(doc! { "store": store, "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref employee) = employee {
            let _ = self.redis.set_with_expiry(&cache_key, employee, CACHE_TTL_SECONDS).await;
        }

        Ok(employee)
    }

    pub async fn find_all(
        &self,
        store: Option<&str>,
        status: Option<EmployeeStatus>,
    ) -> Result<Vec<Employee>, AppError> {
        let mut filter = Document::new();
        if let Some(store) = store {
            filter.insert("store", store);
        }
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection::<Employee>()
            .find(filter)
            .sort(doc! { "store": 1, "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 해당 월에 하루라도 재직한 매장 직원 (입사일 ≤ 말일, 퇴사일 없음 또는 ≥ 1일)
    pub async fn find_employed_during(&self, store: &str, month: YearMonth) -> Result<Vec<Employee>, AppError> {
        let filter = doc! {
            "store": store,
            "hire_date": { "$lte": month.last_day().to_string() },
            "$or": [
                { "resign_date": null },
                { "resign_date": { "$gte": month.first_day().to_string() } },
            ],
        };

        let cursor = self.collection::<Employee>()
            .find(filter)
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut employee: Employee) -> Result<Employee, AppError> {
        if self.find_by_name(&employee.store, &employee.name).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "{} 매장에 같은 이름의 직원이 이미 있습니다: {}",
                employee.store, employee.name
            )));
        }

        let result = self.collection::<Employee>()
            .insert_one(&employee)
            .await
            .map_err(|e| map_write_error(e, "같은 이름의 직원이 이미 있습니다"))?;

        employee.id = Some(inserted_object_id(&result)?);

        let _ = self.invalidate_collection_cache(None).await;

        Ok(employee)
    }

    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<Employee>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Employee>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref employee) = updated {
            self.invalidate_employee(employee).await;
        }

        Ok(updated)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Employee>();

        let store_name_index = IndexModel::builder()
            .keys(doc! { "store": 1, "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("store_name_unique".to_string())
                .build())
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(IndexOptions::builder()
                .name("status".to_string())
                .build())
            .build();

        collection
            .create_indexes([store_name_index, status_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
