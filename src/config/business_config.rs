//! # Business Rules Configuration
//!
//! 근태 판정과 급여 계산에 쓰이는 규칙 값들입니다.
//! 계산 함수는 환경 변수를 직접 읽지 않고 [`AttendanceRules`] / [`PayrollRules`]를
//! 인자로 받으므로, 테스트에서는 `Default` 값을 그대로 사용합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! LATE_GRACE_MINUTES=0            # 지각 유예 (분)
//! OVERTIME_UNIT_MINUTES=30        # 연장근무 인정 단위 (분, 내림)
//! BREAK_MINUTES=60                # 휴게시간 (분)
//! BREAK_THRESHOLD_MINUTES=300     # 휴게시간 차감 기준 체류시간 (분)
//! OVERTIME_MULTIPLIER=1.5
//! HOLIDAY_OVERTIME_MULTIPLIER=3.0
//! SSO_RATE_PERCENT=5
//! SSO_WAGE_FLOOR=1650
//! ```
//!
//! ## 사회보험(SSO) 상한 테이블
//!
//! | 적용 시작 | 임금 상한 (THB) | 최대 기여금 (5%) |
//! |-----------|-----------------|------------------|
//! | 2024-01   | 15,000          | 750              |
//! | 2026-01   | 17,500          | 875              |
//! | 2029-01   | 20,000          | 1,000            |
//! | 2032-01   | 23,000          | 1,150            |

use std::env;
use std::str::FromStr;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use crate::utils::date_utils::YearMonth;

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패: '{}'. 기본값 사용", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// 근태 판정 규칙
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRules {
    pub late_grace_minutes: i64,
    pub overtime_unit_minutes: i64,
    pub break_minutes: i64,
    pub break_threshold_minutes: i64,
}

impl Default for AttendanceRules {
    fn default() -> Self {
        Self {
            late_grace_minutes: 0,
            overtime_unit_minutes: 30,
            break_minutes: 60,
            break_threshold_minutes: 300,
        }
    }
}

impl AttendanceRules {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            late_grace_minutes: env_parse("LATE_GRACE_MINUTES", defaults.late_grace_minutes).max(0),
            overtime_unit_minutes: env_parse("OVERTIME_UNIT_MINUTES", defaults.overtime_unit_minutes).max(1),
            break_minutes: env_parse("BREAK_MINUTES", defaults.break_minutes).max(0),
            break_threshold_minutes: env_parse("BREAK_THRESHOLD_MINUTES", defaults.break_threshold_minutes).max(0),
        }
    }
}

/// 사회보험 임금 상한 구간
#[derive(Debug, Clone, PartialEq)]
pub struct SsoCeiling {
    pub effective_from: NaiveDate,
    pub wage_ceiling: Decimal,
}

/// 급여 계산 규칙
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRules {
    pub standard_days_per_month: Decimal,
    pub standard_hours_per_day: Decimal,
    pub overtime_multiplier: Decimal,
    pub holiday_overtime_multiplier: Decimal,
    /// 월급제 공휴일 근무 가산 배율 (기본급에 이미 1일분 포함)
    pub monthly_holiday_multiplier: Decimal,
    /// 시급제 공휴일 근무 배율
    pub hourly_holiday_multiplier: Decimal,
    pub sso_rate_percent: Decimal,
    pub sso_wage_floor: Decimal,
    /// 적용 시작일 오름차순
    pub sso_ceilings: Vec<SsoCeiling>,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            standard_days_per_month: Decimal::from(30),
            standard_hours_per_day: Decimal::from(8),
            overtime_multiplier: Decimal::new(15, 1),
            holiday_overtime_multiplier: Decimal::from(3),
            monthly_holiday_multiplier: Decimal::ONE,
            hourly_holiday_multiplier: Decimal::from(2),
            sso_rate_percent: Decimal::from(5),
            sso_wage_floor: Decimal::from(1650),
            sso_ceilings: default_sso_ceilings(),
        }
    }
}

fn default_sso_ceilings() -> Vec<SsoCeiling> {
    [(2024, 15_000), (2026, 17_500), (2029, 20_000), (2032, 23_000)]
        .into_iter()
        .filter_map(|(year, ceiling)| {
            NaiveDate::from_ymd_opt(year, 1, 1).map(|effective_from| SsoCeiling {
                effective_from,
                wage_ceiling: Decimal::from(ceiling),
            })
        })
        .collect()
}

impl PayrollRules {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            overtime_multiplier: env_parse("OVERTIME_MULTIPLIER", defaults.overtime_multiplier),
            holiday_overtime_multiplier: env_parse("HOLIDAY_OVERTIME_MULTIPLIER", defaults.holiday_overtime_multiplier),
            sso_rate_percent: env_parse("SSO_RATE_PERCENT", defaults.sso_rate_percent),
            sso_wage_floor: env_parse("SSO_WAGE_FLOOR", defaults.sso_wage_floor),
            ..defaults
        }
    }

    /// 해당 월 1일 기준으로 적용되는 임금 상한
    ///
    /// 테이블 첫 구간 이전의 월은 첫 구간 값을 사용합니다.
    pub fn sso_ceiling_for(&self, month: YearMonth) -> Decimal {
        let first_day = month.first_day();
        self.sso_ceilings
            .iter()
            .rev()
            .find(|c| c.effective_from <= first_day)
            .or_else(|| self.sso_ceilings.first())
            .map(|c| c.wage_ceiling)
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sso_ceiling_lookup_by_month() {
        let rules = PayrollRules::default();

        assert_eq!(rules.sso_ceiling_for(YearMonth::parse("2025-12").unwrap()), Decimal::from(15_000));
        assert_eq!(rules.sso_ceiling_for(YearMonth::parse("2026-01").unwrap()), Decimal::from(17_500));
        assert_eq!(rules.sso_ceiling_for(YearMonth::parse("2031-06").unwrap()), Decimal::from(20_000));
        assert_eq!(rules.sso_ceiling_for(YearMonth::parse("2040-01").unwrap()), Decimal::from(23_000));
    }

    #[test]
    fn test_sso_ceiling_before_table_uses_first_entry() {
        let rules = PayrollRules::default();
        assert_eq!(rules.sso_ceiling_for(YearMonth::parse("2020-05").unwrap()), Decimal::from(15_000));
    }

    #[test]
    fn test_attendance_rules_defaults() {
        let rules = AttendanceRules::default();
        assert_eq!(rules.overtime_unit_minutes, 30);
        assert_eq!(rules.break_minutes, 60);
    }
}
