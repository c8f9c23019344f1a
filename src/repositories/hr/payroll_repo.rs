//! 급여명세 리포지토리 (`payrolls`)

use std::sync::Arc;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hr::payslip::Payslip,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, map_write_error, parse_object_id},
    utils::date_utils::YearMonth,
};

#[repository(name = "payroll", collection = "payrolls")]
pub struct PayrollRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl PayrollRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Payslip>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Payslip>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_key(
        &self,
        store: &str,
        employee_name: &str,
        month: YearMonth,
    ) -> Result<Option<Payslip>, AppError> {
        self.collection::<Payslip>()
            .find_one(doc! { "store": store, "employee_name": employee_name, "month": month.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_month(&self, store: &str, month: YearMonth) -> Result<Vec<Payslip>, AppError> {
        let cursor = self.collection::<Payslip>()
            .find(doc! { "store": store, "month": month.to_string() })
            .sort(doc! { "employee_name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 대기 명세를 저장(있으면 교체)하고 저장된 문서를 반환합니다.
    ///
    /// 승인된 명세는 필터에서 제외되므로 덮어쓰지 않고, 그 경우 유니크 인덱스 위반이
    /// 발생해 `ConflictError`가 됩니다.
    pub async fn save_pending(&self, slip: &Payslip) -> Result<Payslip, AppError> {
        let filter = doc! {
            "store": &slip.store,
            "employee_name": &slip.employee_name,
            "month": slip.month.to_string(),
            "status": ApprovalStatus::Pending.as_str(),
        };

        self.collection::<Payslip>()
            .replace_one(filter, slip)
            .upsert(true)
            .await
            .map_err(|e| map_write_error(e, "이미 승인된 급여명세가 있습니다"))?;

        self.find_by_key(&slip.store, &slip.employee_name, slip.month)
            .await?
            .ok_or_else(|| AppError::InternalError("저장된 급여명세를 찾을 수 없습니다".to_string()))
    }

    /// 대기 → 승인. 이미 처리된 명세면 `None`.
    pub async fn approve(&self, id: &str, reviewer: &str) -> Result<Option<Payslip>, AppError> {
        let object_id = parse_object_id(id)?;
        let now = DateTime::now();

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Payslip>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": ApprovalStatus::Pending.as_str() },
                doc! { "$set": {
                    "status": ApprovalStatus::Approved.as_str(),
                    "reviewer": reviewer,
                    "approved_at": now,
                    "updated_at": now,
                }},
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let key_index = IndexModel::builder()
            .keys(doc! { "store": 1, "employee_name": 1, "month": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("store_employee_month_unique".to_string())
                .build())
            .build();

        self.collection::<Payslip>()
            .create_index(key_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
