//! POS 요청 DTO

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::pos::coupon::DiscountType;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    #[validate(length(min = 1, max = 100, message = "메뉴명은 1-100자 사이여야 합니다"))]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1, max = 100, message = "메뉴명은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: Option<f64>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuQuery {
    pub store: String,
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_coupon_terms"))]
pub struct CreateCouponRequest {
    #[validate(length(min = 3, max = 30, message = "쿠폰 코드는 3-30자 사이여야 합니다"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "쿠폰명은 1-100자 사이여야 합니다"))]
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[validate(range(min = 0.0, message = "최소 주문 금액은 0 이상이어야 합니다"))]
    pub min_order_amount: Option<f64>,
    #[validate(range(min = 0.0, message = "최대 할인 금액은 0 이상이어야 합니다"))]
    pub max_discount: Option<f64>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    #[validate(range(min = 1, message = "사용 한도는 1 이상이어야 합니다"))]
    pub usage_limit: Option<i64>,
}

fn validate_coupon_terms(req: &CreateCouponRequest) -> Result<(), ValidationError> {
    if !(req.discount_value > 0.0 && req.discount_value.is_finite()) {
        return Err(ValidationError::new("invalid_discount")
            .with_message("할인 값은 0보다 커야 합니다".into()));
    }
    if req.discount_type == DiscountType::Percent && req.discount_value > 100.0 {
        return Err(ValidationError::new("invalid_percent")
            .with_message("할인율은 100%를 넘을 수 없습니다".into()));
    }
    if req.valid_to < req.valid_from {
        return Err(ValidationError::new("invalid_period")
            .with_message("종료일은 시작일보다 빠를 수 없습니다".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteCouponRequest {
    #[validate(length(min = 1, message = "쿠폰 코드는 필수입니다"))]
    pub code: String,
    #[validate(range(min = 0.0, message = "주문 금액은 0 이상이어야 합니다"))]
    pub order_amount: f64,
    /// 기본값: 오늘
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitSettlementRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    pub business_date: NaiveDate,
    #[validate(range(min = 0.0, message = "총매출은 0 이상이어야 합니다"))]
    pub total_sales: f64,
    #[validate(range(min = 0.0, message = "할인 합계는 0 이상이어야 합니다"))]
    pub discount_total: f64,
    #[validate(range(min = 0.0, message = "카드 매출은 0 이상이어야 합니다"))]
    pub card_sales: f64,
    #[validate(range(min = 0.0, message = "현금 매출은 0 이상이어야 합니다"))]
    pub cash_sales: f64,
    #[validate(range(min = 0.0, message = "계좌이체 매출은 0 이상이어야 합니다"))]
    pub transfer_sales: f64,
    #[validate(range(min = 0.0, message = "실사 현금은 0 이상이어야 합니다"))]
    pub cash_counted: f64,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementQuery {
    pub store: String,
    pub month: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(discount_type: DiscountType, value: f64) -> CreateCouponRequest {
        CreateCouponRequest {
            code: "WELCOME10".to_string(),
            name: "신규 고객".to_string(),
            discount_type,
            discount_value: value,
            min_order_amount: None,
            max_discount: None,
            valid_from: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            valid_to: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
            usage_limit: Some(100),
        }
    }

    #[test]
    fn test_coupon_terms() {
        assert!(coupon(DiscountType::Percent, 10.0).validate().is_ok());
        assert!(coupon(DiscountType::Percent, 120.0).validate().is_err());
        assert!(coupon(DiscountType::Amount, 0.0).validate().is_err());

        let mut reversed = coupon(DiscountType::Amount, 50.0);
        reversed.valid_to = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        assert!(reversed.validate().is_err());
    }
}
