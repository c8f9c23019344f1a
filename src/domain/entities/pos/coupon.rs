//! POS Coupon Entity

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 할인 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// 주문 금액의 n%
    Percent,
    /// 정액 할인
    Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosCoupon {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 대문자 정규화된 유일 코드
    pub code: String,
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    /// 정률 할인 상한
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    /// `None`이면 무제한
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    #[serde(default)]
    pub used_count: i64,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
