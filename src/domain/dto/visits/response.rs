use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::stores::{CheckItem, CheckResult, ComplaintLog};
use crate::domain::models::status::ComplaintStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResultResponse {
    pub id: String,
    pub store: String,
    pub visitor: String,
    pub visit_date: NaiveDate,
    pub items: Vec<CheckItem>,
    pub score: f64,
    pub grade: String,
    pub comment: Option<String>,
}

impl From<CheckResult> for CheckResultResponse {
    fn from(check: CheckResult) -> Self {
        Self {
            id: check.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: check.store,
            visitor: check.visitor,
            visit_date: check.visit_date,
            items: check.items,
            score: check.score,
            grade: check.grade,
            comment: check.comment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintResponse {
    pub id: String,
    pub store: String,
    pub received_date: NaiveDate,
    pub channel: String,
    pub category: String,
    pub content: String,
    pub status: ComplaintStatus,
    pub resolution: Option<String>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime>,
    pub created_at: DateTime,
}

impl From<ComplaintLog> for ComplaintResponse {
    fn from(log: ComplaintLog) -> Self {
        Self {
            id: log.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: log.store,
            received_date: log.received_date,
            channel: log.channel,
            category: log.category,
            content: log.content,
            status: log.status,
            resolution: log.resolution,
            resolved_by: log.resolved_by,
            resolved_at: log.resolved_at,
            created_at: log.created_at,
        }
    }
}
