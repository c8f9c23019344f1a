//! POS Menu Entity

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosMenu {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

fn default_active() -> bool {
    true
}
