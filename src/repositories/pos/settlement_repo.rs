use std::sync::Arc;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::pos::PosSettlement,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
    utils::date_utils::YearMonth,
};

/// 일 마감 정산 리포지토리 - 매장·영업일당 1건
#[repository(name = "settlement", collection = "pos_settlements")]
pub struct SettlementRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl SettlementRepository {
    pub async fn find_by_id(&self, id: &str) -> Result<Option<PosSettlement>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<PosSettlement>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_month(&self, store: &str, month: YearMonth) -> Result<Vec<PosSettlement>, AppError> {
        let cursor = self.collection::<PosSettlement>()
            .find(doc! {
                "store": store,
                "business_date": {
                    "$gte": month.first_day().to_string(),
                    "$lte": month.last_day().to_string(),
                },
            })
            .sort(doc! { "business_date": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut settlement: PosSettlement) -> Result<PosSettlement, AppError> {
        let result = self.collection::<PosSettlement>()
            .insert_one(&settlement)
            .await
            .map_err(|e| map_write_error(e, "해당 영업일의 정산이 이미 제출되었습니다"))?;

        settlement.id = Some(inserted_object_id(&result)?);
        Ok(settlement)
    }

    /// 대기 → 승인. 이미 처리됐으면 `None`.
    pub async fn approve(&self, id: &str, reviewer: &str) -> Result<Option<PosSettlement>, AppError> {
        let object_id = parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PosSettlement>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": ApprovalStatus::Pending.as_str() },
                doc! { "$set": {
                    "status": ApprovalStatus::Approved.as_str(),
                    "reviewer": reviewer,
                    "updated_at": DateTime::now(),
                }},
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let daily_index = IndexModel::builder()
            .keys(doc! { "store": 1, "business_date": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("store_business_date_unique".to_string())
                .build())
            .build();

        self.collection::<PosSettlement>()
            .create_index(daily_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
