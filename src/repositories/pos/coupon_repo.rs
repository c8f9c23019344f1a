//! # 쿠폰 리포지토리
//!
//! 사용 처리(`redeem`)는 한도 검사와 증가를 하나의 `find_one_and_update`로 수행하여
//! 동시에 사용해도 `used_count`가 `usage_limit`을 넘지 않습니다.

use std::sync::Arc;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::pos::PosCoupon,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

#[repository(name = "coupon", collection = "pos_coupons")]
pub struct CouponRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl CouponRepository {
    pub async fn find_by_code(&self, code: &str) -> Result<Option<PosCoupon>, AppError> {
        self.collection::<PosCoupon>()
            .find_one(doc! { "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_all(&self, active_only: bool) -> Result<Vec<PosCoupon>, AppError> {
        let filter = if active_only { doc! { "is_active": true } } else { doc! {} };

        let cursor = self.collection::<PosCoupon>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect_cursor(cursor).await
    }

    pub async fn create(&self, mut coupon: PosCoupon) -> Result<PosCoupon, AppError> {
        if self.find_by_code(&coupon.code).await?.is_some() {
            return Err(AppError::ConflictError(format!("이미 존재하는 쿠폰 코드입니다: {}", coupon.code)));
        }

        let result = self.collection::<PosCoupon>()
            .insert_one(&coupon)
            .await
            .map_err(|e| map_write_error(e, "이미 존재하는 쿠폰 코드입니다"))?;

        coupon.id = Some(inserted_object_id(&result)?);
        Ok(coupon)
    }

    pub async fn deactivate(&self, id: &str) -> Result<Option<PosCoupon>, AppError> {
        let object_id = parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PosCoupon>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "is_active": false, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 활성 쿠폰이고 한도가 남아 있을 때만 `used_count`를 1 증가시킵니다.
    pub async fn redeem(&self, code: &str) -> Result<Option<PosCoupon>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<PosCoupon>()
            .find_one_and_update(
                doc! {
                    "code": code,
                    "is_active": true,
                    "$or": [
                        { "usage_limit": null },
                        { "$expr": { "$lt": ["$used_count", "$usage_limit"] } },
                    ],
                },
                doc! {
                    "$inc": { "used_count": 1_i64 },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("code_unique".to_string())
                .build())
            .build();

        self.collection::<PosCoupon>()
            .create_index(code_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
