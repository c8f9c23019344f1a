//! 공휴일 관리 서비스
//!
//! 전 매장 공통 공휴일을 관리하고, 휴가 일수 계산·근태 집계·급여 계산에
//! 날짜 집합을 제공합니다.

use std::collections::HashSet;
use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    domain::dto::holidays::{CreateHolidayRequest, HolidayResponse},
    domain::entities::hr::public_holiday::PublicHoliday,
    errors::errors::AppError,
    repositories::hr::HolidayRepository,
    utils::string_utils::validate_required_string,
};

#[service(name = "holiday")]
pub struct HolidayService {
    holiday_repo: Arc<HolidayRepository>,
}

impl HolidayService {
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 날짜의 공휴일이 이미 있음
    pub async fn create_holiday(&self, request: CreateHolidayRequest) -> Result<HolidayResponse, AppError> {
        let holiday = PublicHoliday {
            id: None,
            date: request.date,
            name: validate_required_string(&request.name, "공휴일 이름")?,
            created_at: DateTime::now(),
        };

        let created = self.holiday_repo.create(holiday).await?;
        log::info!("공휴일 등록: {} {}", created.date, created.name);

        Ok(HolidayResponse::from(created))
    }

    pub async fn list_holidays(&self, year: i32) -> Result<Vec<HolidayResponse>, AppError> {
        let holidays = self.holiday_repo.find_by_year(year).await?;
        Ok(holidays.into_iter().map(HolidayResponse::from).collect())
    }

    pub async fn delete_holiday(&self, id: &str) -> Result<(), AppError> {
        if !self.holiday_repo.delete(id).await? {
            return Err(AppError::NotFound("공휴일을 찾을 수 없습니다".to_string()));
        }
        log::info!("공휴일 삭제: {}", id);
        Ok(())
    }

    /// 기간 내 공휴일 날짜 집합 (양 끝 포함)
    pub async fn holiday_set(&self, from: NaiveDate, to: NaiveDate) -> Result<HashSet<NaiveDate>, AppError> {
        Ok(self.holiday_repo
            .find_dates_between(from, to)
            .await?
            .into_iter()
            .collect())
    }
}
