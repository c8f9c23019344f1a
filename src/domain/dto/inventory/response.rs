use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::inventory::{Item, OrderLine, PurchaseOrder, Vendor};
use crate::domain::models::status::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorResponse {
    pub id: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: String,
    pub memo: Option<String>,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: vendor.name,
            contact_name: vendor.contact_name,
            phone: vendor.phone,
            email: vendor.email,
            category: vendor.category,
            memo: vendor.memo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub store: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub unit_price: f64,
    pub stock_qty: f64,
    pub safety_stock: f64,
    pub vendor_name: Option<String>,
    pub low_stock: bool,
    pub updated_at: DateTime,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let low_stock = item.is_low_stock();
        Self {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: item.store,
            name: item.name,
            category: item.category,
            unit: item.unit,
            unit_price: item.unit_price,
            stock_qty: item.stock_qty,
            safety_stock: item.safety_stock,
            vendor_name: item.vendor_name,
            low_stock,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub order_no: String,
    pub store: String,
    pub vendor_name: String,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub requested_by: String,
    pub reviewer: Option<String>,
    pub note: Option<String>,
    pub received_at: Option<DateTime>,
    pub created_at: DateTime,
}

impl From<PurchaseOrder> for OrderResponse {
    fn from(order: PurchaseOrder) -> Self {
        Self {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            order_no: order.order_no,
            store: order.store,
            vendor_name: order.vendor_name,
            lines: order.lines,
            total_amount: order.total_amount,
            status: order.status,
            requested_by: order.requested_by,
            reviewer: order.reviewer,
            note: order.note,
            received_at: order.received_at,
            created_at: order.created_at,
        }
    }
}
