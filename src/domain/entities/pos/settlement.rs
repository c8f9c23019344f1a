//! POS Daily Settlement Entity

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::status::ApprovalStatus;

/// 매장 일 마감 정산 (매장·영업일당 1건)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosSettlement {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub business_date: NaiveDate,
    pub total_sales: f64,
    pub discount_total: f64,
    pub net_sales: f64,
    pub card_sales: f64,
    pub cash_sales: f64,
    pub transfer_sales: f64,
    /// 마감 시 실제 세어 본 현금
    pub cash_counted: f64,
    /// 실사 현금 - 현금 매출 (음수면 부족)
    pub cash_difference: f64,
    pub status: ApprovalStatus,
    pub submitted_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
