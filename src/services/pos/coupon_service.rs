//! # 쿠폰 서비스
//!
//! 견적(`quote`)은 상태를 바꾸지 않고 할인 금액만 계산하며,
//! 결제 확정 시 `redeem`이 사용 횟수를 원자적으로 증가시킵니다.
//!
//! - 정률: 주문 금액 × 할인율, `max_discount`가 있으면 그 금액까지
//! - 정액: 할인 금액
//! - 어느 쪽이든 할인은 주문 금액을 넘지 않습니다.

use std::sync::Arc;
use chrono::{Local, NaiveDate};
use mongodb::bson::DateTime;
use rust_decimal::Decimal;
use singleton_macro::service;
use crate::{
    domain::dto::pos::{CouponQuote, CouponResponse, CreateCouponRequest},
    domain::entities::pos::coupon::{DiscountType, PosCoupon},
    errors::errors::AppError,
    repositories::pos::CouponRepository,
    utils::money::{round_money, to_decimal, to_f64},
    utils::string_utils::{normalize_code, validate_required_string},
};

#[service(name = "coupon")]
pub struct CouponService {
    coupon_repo: Arc<CouponRepository>,
}

impl CouponService {
    pub async fn create_coupon(&self, request: CreateCouponRequest) -> Result<CouponResponse, AppError> {
        let code = normalize_code(&request.code);
        if code.is_empty() {
            return Err(AppError::ValidationError("쿠폰 코드는 필수입니다".to_string()));
        }

        let now = DateTime::now();
        let coupon = PosCoupon {
            id: None,
            code,
            name: validate_required_string(&request.name, "쿠폰명")?,
            discount_type: request.discount_type,
            discount_value: request.discount_value,
            min_order_amount: request.min_order_amount.unwrap_or(0.0),
            max_discount: request.max_discount,
            valid_from: request.valid_from,
            valid_to: request.valid_to,
            usage_limit: request.usage_limit,
            used_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let created = self.coupon_repo.create(coupon).await?;
        log::info!("쿠폰 등록: {} ({:?} {})", created.code, created.discount_type, created.discount_value);
        Ok(CouponResponse::from(created))
    }

    pub async fn list_coupons(&self, active_only: bool) -> Result<Vec<CouponResponse>, AppError> {
        let coupons = self.coupon_repo.find_all(active_only).await?;
        Ok(coupons.into_iter().map(CouponResponse::from).collect())
    }

    pub async fn deactivate_coupon(&self, id: &str) -> Result<CouponResponse, AppError> {
        let coupon = self.coupon_repo
            .deactivate(id)
            .await?
            .ok_or_else(|| AppError::NotFound("쿠폰을 찾을 수 없습니다".to_string()))?;

        log::info!("쿠폰 비활성화: {}", coupon.code);
        Ok(CouponResponse::from(coupon))
    }

    /// 할인 견적
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없는 코드
    /// * `AppError::ValidationError` - 비활성, 기간 외, 한도 소진, 최소 주문 금액 미달
    pub async fn quote(&self, code: &str, order_amount: f64, date: Option<NaiveDate>) -> Result<CouponQuote, AppError> {
        let coupon = self.find_by_code(code).await?;
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        quote_coupon(&coupon, order_amount, date)
    }

    /// 사용 처리
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용 한도 소진 또는 비활성 쿠폰
    pub async fn redeem(&self, code: &str) -> Result<CouponResponse, AppError> {
        let code = normalize_code(code);
        let coupon = self.find_by_code(&code).await?;

        let today = Local::now().date_naive();
        if today < coupon.valid_from || today > coupon.valid_to {
            return Err(AppError::ValidationError(format!("사용 기간이 아닌 쿠폰입니다: {}", coupon.code)));
        }

        let redeemed = self.coupon_repo
            .redeem(&code)
            .await?
            .ok_or_else(|| AppError::ConflictError(format!("사용할 수 없는 쿠폰입니다 (비활성 또는 한도 소진): {}", code)))?;

        log::info!(
            "쿠폰 사용: {} ({}/{})",
            redeemed.code,
            redeemed.used_count,
            redeemed.usage_limit.map(|l| l.to_string()).unwrap_or_else(|| "∞".to_string())
        );
        Ok(CouponResponse::from(redeemed))
    }

    async fn find_by_code(&self, code: &str) -> Result<PosCoupon, AppError> {
        let code = normalize_code(code);
        self.coupon_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("쿠폰을 찾을 수 없습니다: {}", code)))
    }
}

pub fn quote_coupon(coupon: &PosCoupon, order_amount: f64, date: NaiveDate) -> Result<CouponQuote, AppError> {
    if !(order_amount.is_finite() && order_amount >= 0.0) {
        return Err(AppError::ValidationError("주문 금액은 0 이상이어야 합니다".to_string()));
    }
    if !coupon.is_active {
        return Err(AppError::ValidationError(format!("비활성화된 쿠폰입니다: {}", coupon.code)));
    }
    if date < coupon.valid_from || date > coupon.valid_to {
        return Err(AppError::ValidationError(format!(
            "사용 기간이 아닙니다 ({} ~ {})",
            coupon.valid_from, coupon.valid_to
        )));
    }
    if let Some(limit) = coupon.usage_limit {
        if coupon.used_count >= limit {
            return Err(AppError::ValidationError(format!("사용 한도가 소진된 쿠폰입니다: {}", coupon.code)));
        }
    }

    let amount = to_decimal(order_amount);
    if amount < to_decimal(coupon.min_order_amount) {
        return Err(AppError::ValidationError(format!(
            "최소 주문 금액 {} 이상부터 사용할 수 있습니다",
            coupon.min_order_amount
        )));
    }

    let discount = match coupon.discount_type {
        DiscountType::Percent => {
            let raw = round_money(amount * to_decimal(coupon.discount_value) / Decimal::from(100));
            match coupon.max_discount {
                Some(cap) => raw.min(to_decimal(cap)),
                None => raw,
            }
        }
        DiscountType::Amount => to_decimal(coupon.discount_value),
    }
    .min(amount);

    Ok(CouponQuote {
        code: coupon.code.clone(),
        order_amount,
        discount: to_f64(discount),
        payable: to_f64(amount - discount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn coupon(discount_type: DiscountType, value: f64) -> PosCoupon {
        let now = DateTime::now();
        PosCoupon {
            id: None,
            code: "AUTUMN".to_string(),
            name: "가을 할인".to_string(),
            discount_type,
            discount_value: value,
            min_order_amount: 200.0,
            max_discount: None,
            valid_from: date(1),
            valid_to: date(31),
            usage_limit: Some(10),
            used_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_percent_discount_with_cap() {
        let mut c = coupon(DiscountType::Percent, 15.0);
        let quote = quote_coupon(&c, 1_000.0, date(10)).unwrap();
        assert_eq!(quote.discount, 150.0);
        assert_eq!(quote.payable, 850.0);

        c.max_discount = Some(100.0);
        let capped = quote_coupon(&c, 1_000.0, date(10)).unwrap();
        assert_eq!(capped.discount, 100.0);
        assert_eq!(capped.payable, 900.0);
    }

    #[test]
    fn test_amount_discount_never_exceeds_order() {
        let c = coupon(DiscountType::Amount, 500.0);
        let quote = quote_coupon(&c, 300.0, date(10)).unwrap();

        assert_eq!(quote.discount, 300.0);
        assert_eq!(quote.payable, 0.0);
    }

    #[test]
    fn test_rejections() {
        let base = coupon(DiscountType::Amount, 50.0);

        // 최소 주문 금액 미달
        assert!(quote_coupon(&base, 199.0, date(10)).is_err());
        // 기간 외
        assert!(quote_coupon(&base, 1_000.0, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()).is_err());

        let exhausted = PosCoupon { used_count: 10, ..base.clone() };
        assert!(quote_coupon(&exhausted, 1_000.0, date(10)).is_err());

        let inactive = PosCoupon { is_active: false, ..base };
        assert!(matches!(
            quote_coupon(&inactive, 1_000.0, date(10)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unlimited_coupon_ignores_used_count() {
        let c = PosCoupon {
            usage_limit: None,
            used_count: 9_999,
            ..coupon(DiscountType::Amount, 50.0)
        };
        assert!(quote_coupon(&c, 1_000.0, date(10)).is_ok());
    }
}
