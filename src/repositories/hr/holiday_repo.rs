//! # 공휴일 리포지토리
//!
//! 공휴일은 휴가 일수 계산, 근태 집계, 급여 계산에서 매번 읽히므로
//! 연도별 목록을 `holiday:{year}` 키로 하루 동안 캐싱합니다.

use std::sync::Arc;
use chrono::{Datelike, NaiveDate};
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hr::public_holiday::PublicHoliday,
    errors::errors::AppError,
    repositories::{collect_cursor, inserted_object_id, map_write_error, parse_object_id},
};

const CACHE_TTL_SECONDS: usize = 60 * 60 * 24;

#[repository(name = "holiday", collection = "public_holidays")]
pub struct HolidayRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl HolidayRepository {
    fn year_cache_key(year: i32) -> String {
        format!("holiday:{}", year)
    }

    async fn invalidate_year(&self, year: i32) {
        if let Err(e) = self.redis.del(&Self::year_cache_key(year)).await {
            log::warn!("공휴일 캐시 삭제 실패 ({}): {}", year, e);
        }
    }

    /// 연도별 공휴일 (날짜순, 캐시 우선)
    pub async fn find_by_year(&self, year: i32) -> Result<Vec<PublicHoliday>, AppError> {
        let cache_key = Self::year_cache_key(year);

        if let Ok(Some(cached)) = self.redis.get::<Vec<PublicHoliday>>(&cache_key).await {
            return Ok(cached);
        }

        let cursor = self.collection::<PublicHoliday>()
            .find(doc! {
                "date": { "$gte": format!("{:04}-01-01", year), "$lte": format!("{:04}-12-31", year) },
            })
            .sort(doc! { "date": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let holidays = collect_cursor(cursor).await?;

        if let Err(e) = self.redis.set_with_expiry(&cache_key, &holidays, CACHE_TTL_SECONDS).await {
            log::warn!("공휴일 캐시 저장 실패 ({}): {}", year, e);
        }

        Ok(holidays)
    }

    /// 기간(양 끝 포함)에 속한 공휴일 날짜
    pub async fn find_dates_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, AppError> {
        let mut dates = Vec::new();
        for year in from.year()..=to.year() {
            dates.extend(
                self.find_by_year(year)
                    .await?
                    .into_iter()
                    .map(|h| h.date)
                    .filter(|d| *d >= from && *d <= to),
            );
        }
        Ok(dates)
    }

    pub async fn create(&self, mut holiday: PublicHoliday) -> Result<PublicHoliday, AppError> {
        let result = self.collection::<PublicHoliday>()
            .insert_one(&holiday)
            .await
            .map_err(|e| map_write_error(e, "해당 날짜에 이미 공휴일이 등록되어 있습니다"))?;

        holiday.id = Some(inserted_object_id(&result)?);
        self.invalidate_year(holiday.date.year()).await;

        Ok(holiday)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let deleted = self.collection::<PublicHoliday>()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match deleted {
            Some(holiday) => {
                self.invalidate_year(holiday.date.year()).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("date_unique".to_string())
                .build())
            .build();

        self.collection::<PublicHoliday>()
            .create_index(date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
