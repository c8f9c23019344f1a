//! 금액 계산 유틸리티
//!
//! 문서에는 `f64`로 저장하고, 계산은 모두 `rust_decimal::Decimal`로 수행합니다.
//! 저장 직전에 소수 둘째 자리(반올림, 0에서 먼 쪽)로 맞춥니다.

use rust_decimal::prelude::*;

/// 소수 자릿수 (바트 / 사탕)
const DECIMAL_PLACES: u32 = 2;

/// 금액 비교 허용 오차 (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// 저장값(f64) → 계산값(Decimal)
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// 계산값 → 저장값, 소수 둘째 자리 반올림
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// 소수 둘째 자리 반올림
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// 정수 바트 반올림 (사회보험 기여금)
#[inline]
pub fn round_baht(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// 두 금액이 허용 오차 이내인지
#[inline]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= MONEY_TOLERANCE
}

/// 유한한 0 이상 금액인지 검증합니다.
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_f64_rounds_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::from_str("10.005").unwrap()), 10.01);
        assert_eq!(to_f64(Decimal::from_str("-10.005").unwrap()), -10.01);
        assert_eq!(to_f64(Decimal::from_str("62.5").unwrap()), 62.5);
    }

    #[test]
    fn test_round_baht() {
        assert_eq!(round_baht(Decimal::from_str("82.5").unwrap()), Decimal::from(83));
        assert_eq!(round_baht(Decimal::from_str("82.49").unwrap()), Decimal::from(82));
    }

    #[test]
    fn test_money_eq_tolerance() {
        let a = Decimal::from_str("100.00").unwrap();
        assert!(money_eq(a, Decimal::from_str("100.01").unwrap()));
        assert!(!money_eq(a, Decimal::from_str("100.02").unwrap()));
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(is_valid_amount(0.0));
        assert!(is_valid_amount(120.5));
        assert!(!is_valid_amount(-1.0));
        assert!(!is_valid_amount(f64::NAN));
    }
}
