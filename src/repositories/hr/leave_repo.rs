//! 휴가 신청 리포지토리

use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::{bson::{doc, Document, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hr::leave_request::LeaveRequest,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, parse_object_id},
};

#[repository(name = "leave", collection = "leave_requests")]
pub struct LeaveRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl LeaveRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<LeaveRequest>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 최신 신청 순
    pub async fn find_all(
        &self,
        store: Option<&str>,
        employee_name: Option<&str>,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let mut filter = Document::new();
        if let Some(store) = store {
            filter.insert("store", store);
        }
        if let Some(name) = employee_name {
            filter.insert("employee_name", name);
        }
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection::<LeaveRequest>()
            .find(filter)
            .sort(doc! { "start_date": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 반려되지 않은(대기/승인) 직원의 휴가 중 기간이 겹치는 것
    pub async fn find_live_overlapping(
        &self,
        store: &str,
        employee_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let cursor = self.collection::<LeaveRequest>()
            .find(doc! {
                "store": store,
                "employee_name": employee_name,
                "status": { "$ne": ApprovalStatus::Rejected.as_str() },
                "start_date": { "$lte": to.to_string() },
                "end_date": { "$gte": from.to_string() },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 해당 연도에 시작하는 대기/승인 휴가 (잔여 연차 계산용)
    pub async fn find_live_in_year(
        &self,
        store: &str,
        employee_name: &str,
        year: i32,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let cursor = self.collection::<LeaveRequest>()
            .find(doc! {
                "store": store,
                "employee_name": employee_name,
                "status": { "$ne": ApprovalStatus::Rejected.as_str() },
                "start_date": { "$gte": format!("{:04}-01-01", year), "$lte": format!("{:04}-12-31", year) },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    /// 매장의 승인된 휴가 중 기간과 겹치는 것 (급여 계산용)
    pub async fn find_approved_overlapping(
        &self,
        store: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let cursor = self.collection::<LeaveRequest>()
            .find(doc! {
                "store": store,
                "status": ApprovalStatus::Approved.as_str(),
                "start_date": { "$lte": to.to_string() },
                "end_date": { "$gte": from.to_string() },
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut request: LeaveRequest) -> Result<LeaveRequest, AppError> {
        let result = self.collection::<LeaveRequest>()
            .insert_one(&request)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        request.id = Some(inserted_object_id(&result)?);
        Ok(request)
    }

    /// 대기 상태일 때만 결재 결과를 기록합니다. 이미 처리됐으면 `None`.
    pub async fn review(&self, id: &str, mut update_doc: Document) -> Result<Option<LeaveRequest>, AppError> {
        let object_id = parse_object_id(id)?;
        let now = DateTime::now();
        update_doc.insert("reviewed_at", now);
        update_doc.insert("updated_at", now);

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<LeaveRequest>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": ApprovalStatus::Pending.as_str() },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<LeaveRequest>();

        let employee_period_index = IndexModel::builder()
            .keys(doc! { "store": 1, "employee_name": 1, "start_date": 1 })
            .options(IndexOptions::builder()
                .name("store_employee_start".to_string())
                .build())
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("status_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([employee_period_index, status_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
