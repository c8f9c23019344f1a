//! Complaint Log Entity

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::status::ComplaintStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub received_date: NaiveDate,
    /// 전화, 방문, 배달앱, SNS...
    pub channel: String,
    pub category: String,
    pub content: String,
    pub status: ComplaintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
