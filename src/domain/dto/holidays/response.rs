use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::public_holiday::PublicHoliday;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
}

impl From<PublicHoliday> for HolidayResponse {
    fn from(holiday: PublicHoliday) -> Self {
        Self {
            id: holiday.id.map(|id| id.to_hex()).unwrap_or_default(),
            date: holiday.date,
            name: holiday.name,
        }
    }
}
