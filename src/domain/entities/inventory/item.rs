//! Inventory Item Entity

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 매장별 재고 품목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// 재고 단위 (kg, ea, box...)
    pub unit: String,
    pub unit_price: f64,
    pub stock_qty: f64,
    /// 이 수량 이하이면 발주 필요
    #[serde(default)]
    pub safety_stock: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Item {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_qty <= self.safety_stock
    }
}
