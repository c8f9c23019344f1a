//! 거래처/재고/발주 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, max = 100, message = "거래처명은 1-100자 사이여야 합니다"))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVendorRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    #[validate(length(min = 1, max = 100, message = "품목명은 1-100자 사이여야 합니다"))]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(length(min = 1, max = 20, message = "단위는 1-20자 사이여야 합니다"))]
    pub unit: String,
    #[validate(range(min = 0.0, message = "단가는 0 이상이어야 합니다"))]
    pub unit_price: f64,
    #[validate(range(min = 0.0, message = "재고 수량은 0 이상이어야 합니다"))]
    pub stock_qty: Option<f64>,
    #[validate(range(min = 0.0, message = "안전재고는 0 이상이어야 합니다"))]
    pub safety_stock: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub vendor_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItemRequest {
    pub category: Option<String>,
    #[validate(length(min = 1, max = 20, message = "단위는 1-20자 사이여야 합니다"))]
    pub unit: Option<String>,
    #[validate(range(min = 0.0, message = "단가는 0 이상이어야 합니다"))]
    pub unit_price: Option<f64>,
    #[validate(range(min = 0.0, message = "안전재고는 0 이상이어야 합니다"))]
    pub safety_stock: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub vendor_name: Option<String>,
}

/// 재고 실사/폐기 등 수동 조정
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdjustStockRequest {
    pub delta: f64,
    #[validate(length(min = 1, max = 200, message = "조정 사유를 입력해주세요"))]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemQuery {
    pub store: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    #[validate(length(min = 1, message = "품목명은 필수입니다"))]
    pub item_name: String,
    pub quantity: f64,
    #[validate(range(min = 0.0, message = "단가는 0 이상이어야 합니다"))]
    pub unit_price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    #[validate(length(min = 1, message = "거래처명은 필수입니다"))]
    pub vendor_name: String,
    #[validate(length(min = 1, message = "발주 품목이 최소 1개 필요합니다"))]
    #[validate(nested)]
    pub lines: Vec<OrderLineRequest>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub store: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(lines: Vec<OrderLineRequest>) -> CreateOrderRequest {
        CreateOrderRequest {
            store: "강남점".to_string(),
            vendor_name: "한빛식자재".to_string(),
            lines,
            note: None,
        }
    }

    #[test]
    fn test_order_needs_valid_lines() {
        let onion = OrderLineRequest { item_name: "양파".to_string(), quantity: 10.0, unit_price: 1_200.0 };
        assert!(order(vec![onion.clone()]).validate().is_ok());
        assert!(order(Vec::new()).validate().is_err());

        let unnamed = OrderLineRequest { item_name: String::new(), ..onion };
        assert!(order(vec![unnamed]).validate().is_err());
    }
}
