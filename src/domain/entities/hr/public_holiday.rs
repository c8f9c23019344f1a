//! Public Holiday Entity

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 공휴일 (전 매장 공통, 날짜당 1건)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicHoliday {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub date: NaiveDate,
    pub name: String,
    pub created_at: DateTime,
}
