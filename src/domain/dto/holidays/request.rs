use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHolidayRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "공휴일 이름은 1-100자 사이여야 합니다"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayQuery {
    pub year: i32,
}
