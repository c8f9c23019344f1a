//! Store Check Result Entity
//!
//! 슈퍼바이저 매장 방문 점검 결과입니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    /// 위생, 서비스, 재고...
    pub category: String,
    pub question: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub visitor: String,
    pub visit_date: NaiveDate,
    pub items: Vec<CheckItem>,
    /// 통과 비율 (%, 소수 첫째 자리)
    pub score: f64,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime,
}
