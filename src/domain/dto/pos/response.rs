use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::pos::{DiscountType, PosCoupon, PosMenu, PosSettlement};
use crate::domain::models::status::ApprovalStatus;
use crate::utils::date_utils::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub id: String,
    pub store: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<PosMenu> for MenuResponse {
    fn from(menu: PosMenu) -> Self {
        Self {
            id: menu.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: menu.store,
            name: menu.name,
            category: menu.category,
            price: menu.price,
            is_active: menu.is_active,
            sort_order: menu.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    pub max_discount: Option<f64>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub usage_limit: Option<i64>,
    pub used_count: i64,
    pub is_active: bool,
}

impl From<PosCoupon> for CouponResponse {
    fn from(coupon: PosCoupon) -> Self {
        Self {
            id: coupon.id.map(|id| id.to_hex()).unwrap_or_default(),
            code: coupon.code,
            name: coupon.name,
            discount_type: coupon.discount_type,
            discount_value: coupon.discount_value,
            min_order_amount: coupon.min_order_amount,
            max_discount: coupon.max_discount,
            valid_from: coupon.valid_from,
            valid_to: coupon.valid_to,
            usage_limit: coupon.usage_limit,
            used_count: coupon.used_count,
            is_active: coupon.is_active,
        }
    }
}

/// 쿠폰 적용 견적
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponQuote {
    pub code: String,
    pub order_amount: f64,
    pub discount: f64,
    pub payable: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    pub id: String,
    pub store: String,
    pub business_date: NaiveDate,
    pub total_sales: f64,
    pub discount_total: f64,
    pub net_sales: f64,
    pub card_sales: f64,
    pub cash_sales: f64,
    pub transfer_sales: f64,
    pub cash_counted: f64,
    pub cash_difference: f64,
    pub status: ApprovalStatus,
    pub submitted_by: String,
    pub reviewer: Option<String>,
    pub memo: Option<String>,
}

impl From<PosSettlement> for SettlementResponse {
    fn from(s: PosSettlement) -> Self {
        Self {
            id: s.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: s.store,
            business_date: s.business_date,
            total_sales: s.total_sales,
            discount_total: s.discount_total,
            net_sales: s.net_sales,
            card_sales: s.card_sales,
            cash_sales: s.cash_sales,
            transfer_sales: s.transfer_sales,
            cash_counted: s.cash_counted,
            cash_difference: s.cash_difference,
            status: s.status,
            submitted_by: s.submitted_by,
            reviewer: s.reviewer,
            memo: s.memo,
        }
    }
}

/// 매장 월간 정산 합계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementSummary {
    pub store: String,
    pub month: Option<YearMonth>,
    pub days: u32,
    pub total_sales: f64,
    pub discount_total: f64,
    pub net_sales: f64,
    pub card_sales: f64,
    pub cash_sales: f64,
    pub transfer_sales: f64,
    /// 누적 현금 과부족
    pub cash_difference: f64,
}
