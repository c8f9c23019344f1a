//! 출퇴근 기록 리포지토리
//!
//! 근무일 하루당 직원 한 건이며 `(store, employee_name, work_date)` 유니크 인덱스로 보장합니다.
//! 근태 기록은 매번 바뀌므로 캐싱하지 않습니다.

use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hr::attendance_log::AttendanceLog,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
    utils::date_utils::YearMonth,
};

#[repository(name = "attendance", collection = "attendance_logs")]
pub struct AttendanceRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl AttendanceRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<AttendanceLog>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<AttendanceLog>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_work_date(
        &self,
        store: &str,
        employee_name: &str,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceLog>, AppError> {
        self.collection::<AttendanceLog>()
            .find_one(doc! {
                "store": store,
                "employee_name": employee_name,
                "work_date": work_date.to_string(),
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 주어진 근무일들 중 퇴근하지 않은 가장 최근 기록
    pub async fn find_open(
        &self,
        store: &str,
        employee_name: &str,
        work_dates: &[NaiveDate],
    ) -> Result<Option<AttendanceLog>, AppError> {
        let dates: Vec<String> = work_dates.iter().map(|d| d.to_string()).collect();

        self.collection::<AttendanceLog>()
            .find_one(doc! {
                "store": store,
                "employee_name": employee_name,
                "work_date": { "$in": dates },
                "clock_out": null,
            })
            .sort(doc! { "work_date": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 기간 조회 (양 끝 포함), 근무일 → 직원명 순
    pub async fn find_range(
        &self,
        store: &str,
        from: NaiveDate,
        to: NaiveDate,
        employee_name: Option<&str>,
    ) -> Result<Vec<AttendanceLog>, AppError> {
        let mut filter = doc! {
            "store": store,
            "work_date": { "$gte": from.to_string(), "$lte": to.to_string() },
        };
        if let Some(name) = employee_name {
            filter.insert("employee_name", name);
        }

        let cursor = self.collection::<AttendanceLog>()
            .find(filter)
            .sort(doc! { "work_date": 1, "employee_name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn find_by_month(
        &self,
        store: &str,
        month: YearMonth,
        employee_name: Option<&str>,
    ) -> Result<Vec<AttendanceLog>, AppError> {
        self.find_range(store, month.first_day(), month.last_day(), employee_name).await
    }

    pub async fn create(&self, mut log: AttendanceLog) -> Result<AttendanceLog, AppError> {
        let result = self.collection::<AttendanceLog>()
            .insert_one(&log)
            .await
            .map_err(|e| map_write_error(e, "이미 해당 근무일의 출근 기록이 있습니다"))?;

        log.id = Some(inserted_object_id(&result)?);
        Ok(log)
    }

    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<AttendanceLog>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<AttendanceLog>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `expected` 상태일 때만 갱신합니다. 상태가 이미 바뀌었으면 `None`.
    pub async fn update_if_overtime_status(
        &self,
        id: &str,
        expected: &str,
        mut update_doc: Document,
    ) -> Result<Option<AttendanceLog>, AppError> {
        let object_id = parse_object_id(id)?;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<AttendanceLog>()
            .find_one_and_update(
                doc! { "_id": object_id, "overtime_status": expected },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<AttendanceLog>();

        let daily_index = IndexModel::builder()
            .keys(doc! { "store": 1, "employee_name": 1, "work_date": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("store_employee_date_unique".to_string())
                .build())
            .build();

        let store_date_index = IndexModel::builder()
            .keys(doc! { "store": 1, "work_date": 1 })
            .options(IndexOptions::builder()
                .name("store_work_date".to_string())
                .build())
            .build();

        collection
            .create_indexes([daily_index, store_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
