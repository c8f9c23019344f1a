//! 급여 계산기
//!
//! 직원 조건, 월간 근태 집계, 무급휴가 일수만으로 명세를 계산하는 순수 함수입니다.
//! 모든 계산은 `Decimal`로 하고 항목별로 소수 둘째 자리에서 반올림한 뒤 합산합니다.
//!
//! ```text
//! 시급   = 월급 / 30 / 8          (시급제는 계약 시급)
//! 분급   = 시급 / 60
//! 일급   = 월급 / 30
//!
//! 기본급 = 월급 × 재직일 / 해당 월 일수        (시급제: 공휴일 외 정규 근무 분 × 분급)
//! 연장   = 공휴일 외 승인 연장 분 × 분급 × 1.5
//! 휴일   = 공휴일 정규 근무 분 × 분급 × (월급제 1.0 / 시급제 2.0)
//!        + 공휴일 승인 연장 분 × 분급 × 3.0
//! 수당   = 고정 수당 × 재직일 / 해당 월 일수
//!
//! 공제 (월급제만) = 지각 분 × 분급 + 조퇴 분 × 분급 + 무급휴가 일수 × 일급
//! 사회보험 = clamp(총지급 - 근태공제, 하한, 상한(월)) × 5%, 바트 단위 반올림
//! 실지급 = max(0, 총지급 - 공제 - 사회보험)
//! ```

use std::collections::HashSet;
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use rust_decimal::Decimal;
use crate::config::PayrollRules;
use crate::domain::dto::attendance::AttendanceSummary;
use crate::domain::entities::hr::employee::{Employee, EmploymentType};
use crate::domain::entities::hr::leave_request::{LeaveRequest, LeaveType};
use crate::domain::entities::hr::payslip::{Deductions, Earnings, Payslip, WorkFigures};
use crate::domain::models::status::ApprovalStatus;
use crate::errors::errors::AppError;
use crate::utils::date_utils::{dates_between, YearMonth};
use crate::utils::money::{round_baht, round_money, to_decimal, to_f64};

pub struct PayrollInput<'a> {
    pub employee: &'a Employee,
    pub month: YearMonth,
    pub attendance: &'a AttendanceSummary,
    /// 해당 월에 걸친 승인된 무급휴가 일수 (공휴일 제외)
    pub unpaid_leave_days: u32,
}

/// 계산에 쓰이는 단가
#[derive(Debug, Clone, PartialEq)]
pub struct PayRates {
    pub hourly: Decimal,
    pub daily: Decimal,
}

impl PayRates {
    pub fn for_employee(employee: &Employee, rules: &PayrollRules) -> Self {
        match employee.employment_type {
            EmploymentType::Monthly => {
                let salary = to_decimal(employee.monthly_salary);
                Self {
                    hourly: salary / (rules.standard_days_per_month * rules.standard_hours_per_day),
                    daily: salary / rules.standard_days_per_month,
                }
            }
            EmploymentType::Hourly => {
                let hourly = to_decimal(employee.hourly_rate);
                Self {
                    hourly,
                    daily: hourly * rules.standard_hours_per_day,
                }
            }
        }
    }

    /// `minutes × 시급 × 배율 / 60`, 소수 둘째 자리 반올림
    pub fn minutes_pay(&self, minutes: i64, multiplier: Decimal) -> Decimal {
        round_money(Decimal::from(minutes.max(0)) * self.hourly * multiplier / Decimal::from(60))
    }
}

pub fn calculate(input: &PayrollInput<'_>, rules: &PayrollRules) -> Result<Payslip, AppError> {
    let employee = input.employee;
    employee.validate_terms()?;

    let rates = PayRates::for_employee(employee, rules);
    let summary = input.attendance;
    let employed_days = employee.employed_days_in(input.month);
    let employed_ratio = Decimal::from(employed_days) / Decimal::from(input.month.days());

    let base_pay = match employee.employment_type {
        EmploymentType::Monthly => round_money(to_decimal(employee.monthly_salary) * employed_ratio),
        EmploymentType::Hourly => rates.minutes_pay(summary.regular_minutes, Decimal::ONE),
    };

    let overtime_pay = rates.minutes_pay(summary.approved_overtime_minutes, rules.overtime_multiplier);

    let holiday_multiplier = match employee.employment_type {
        EmploymentType::Monthly => rules.monthly_holiday_multiplier,
        EmploymentType::Hourly => rules.hourly_holiday_multiplier,
    };
    let holiday_pay = rates.minutes_pay(summary.holiday_regular_minutes, holiday_multiplier)
        + rates.minutes_pay(summary.holiday_overtime_minutes, rules.holiday_overtime_multiplier);

    let allowance = round_money(to_decimal(employee.allowance) * employed_ratio);

    let gross = base_pay + overtime_pay + holiday_pay + allowance;

    let (late_deduction, early_leave_deduction, unpaid_leave_deduction) = if employee.is_monthly() {
        (
            rates.minutes_pay(summary.late_minutes, Decimal::ONE),
            rates.minutes_pay(summary.early_leave_minutes, Decimal::ONE),
            round_money(Decimal::from(input.unpaid_leave_days) * rates.daily),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };
    let attendance_deductions = late_deduction + early_leave_deduction + unpaid_leave_deduction;

    let social_security = if employee.sso_enrolled {
        social_security_contribution(gross - attendance_deductions, input.month, rules)
    } else {
        Decimal::ZERO
    };

    let total_deductions = attendance_deductions + social_security;
    let net = (gross - total_deductions).max(Decimal::ZERO);

    let now = DateTime::now();
    Ok(Payslip {
        id: None,
        store: employee.store.clone(),
        employee_name: employee.name.clone(),
        month: input.month,
        employment_type: employee.employment_type,
        hourly_rate: to_f64(rates.hourly),
        earnings: Earnings {
            base_pay: to_f64(base_pay),
            overtime_pay: to_f64(overtime_pay),
            holiday_pay: to_f64(holiday_pay),
            allowance: to_f64(allowance),
        },
        deductions: Deductions {
            late_deduction: to_f64(late_deduction),
            early_leave_deduction: to_f64(early_leave_deduction),
            unpaid_leave_deduction: to_f64(unpaid_leave_deduction),
            social_security: to_f64(social_security),
        },
        figures: WorkFigures {
            employed_days,
            work_days: summary.work_days,
            worked_minutes: summary.worked_minutes,
            regular_minutes: summary.regular_minutes,
            late_minutes: summary.late_minutes,
            early_leave_minutes: summary.early_leave_minutes,
            overtime_minutes: summary.approved_overtime_minutes,
            holiday_worked_minutes: summary.holiday_worked_minutes,
            holiday_regular_minutes: summary.holiday_regular_minutes,
            holiday_overtime_minutes: summary.holiday_overtime_minutes,
            unpaid_leave_days: f64::from(input.unpaid_leave_days),
        },
        gross_pay: to_f64(gross),
        total_deductions: to_f64(total_deductions),
        net_pay: to_f64(net),
        status: ApprovalStatus::Pending,
        reviewer: None,
        approved_at: None,
        created_at: now,
        updated_at: now,
    })
}

/// 사회보험 기여금
///
/// 임금 기준액이 0 이하(재직일 없음, 전액 공제)면 기여금도 0입니다.
pub fn social_security_contribution(wage_base: Decimal, month: YearMonth, rules: &PayrollRules) -> Decimal {
    if wage_base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let ceiling = rules.sso_ceiling_for(month);
    let insured_wage = wage_base.max(rules.sso_wage_floor).min(ceiling);
    round_baht(insured_wage * rules.sso_rate_percent / Decimal::from(100))
}

/// 해당 월에 걸친 승인된 무급휴가의 공휴일 제외 일수
pub fn unpaid_leave_days_in(
    leaves: &[LeaveRequest],
    month: YearMonth,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    let mut days: HashSet<NaiveDate> = HashSet::new();

    for leave in leaves
        .iter()
        .filter(|l| l.leave_type == LeaveType::Unpaid && l.status == ApprovalStatus::Approved)
    {
        let from = leave.start_date.max(month.first_day());
        let to = leave.end_date.min(month.last_day());
        if to < from {
            continue;
        }
        days.extend(dates_between(from, to).filter(|d| !holidays.contains(d)));
    }

    days.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hr::employee::fixtures::{hourly, monthly};

    fn october() -> YearMonth {
        YearMonth::parse("2026-10").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn compute(employee: &Employee, attendance: &AttendanceSummary, unpaid_leave_days: u32) -> Payslip {
        let input = PayrollInput {
            employee,
            month: october(),
            attendance,
            unpaid_leave_days,
        };
        calculate(&input, &PayrollRules::default()).unwrap()
    }

    #[test]
    fn test_monthly_rates() {
        let rates = PayRates::for_employee(&monthly("홍길동"), &PayrollRules::default());
        assert_eq!(rates.hourly, Decimal::from(125));
        assert_eq!(rates.daily, Decimal::from(1000));
    }

    #[test]
    fn test_monthly_full_month_with_overtime_holiday_and_late() {
        let employee = monthly("홍길동");
        let attendance = AttendanceSummary {
            late_minutes: 20,
            approved_overtime_minutes: 60,
            holiday_regular_minutes: 480,
            holiday_overtime_minutes: 60,
            ..Default::default()
        };

        let slip = compute(&employee, &attendance, 0);

        assert_eq!(slip.earnings.base_pay, 30_000.0);
        assert_eq!(slip.earnings.overtime_pay, 187.5);
        // 480분 × 1.0 + 60분 × 3.0
        assert_eq!(slip.earnings.holiday_pay, 1_375.0);
        assert_eq!(slip.gross_pay, 31_562.5);
        assert_eq!(slip.deductions.late_deduction, 41.67);
        // 2026년 상한 17,500 × 5%
        assert_eq!(slip.deductions.social_security, 875.0);
        assert_eq!(slip.total_deductions, 916.67);
        assert_eq!(slip.net_pay, 30_645.83);
        assert_eq!(slip.status, ApprovalStatus::Pending);
    }

    #[test]
    fn test_mid_month_hire_is_prorated() {
        let mut employee = monthly("신입");
        employee.hire_date = date(2026, 10, 16);
        employee.allowance = 3_100.0;

        let slip = compute(&employee, &AttendanceSummary::default(), 0);

        assert_eq!(slip.figures.employed_days, 16);
        assert_eq!(slip.earnings.base_pay, 15_483.87);
        assert_eq!(slip.earnings.allowance, 1_600.0);
        // (15,483.87 + 1,600) × 5% = 854.19
        assert_eq!(slip.deductions.social_security, 854.0);
    }

    #[test]
    fn test_unpaid_leave_deducts_daily_rate() {
        let slip = compute(&monthly("홍길동"), &AttendanceSummary::default(), 2);

        assert_eq!(slip.deductions.unpaid_leave_deduction, 2_000.0);
        // 28,000 → 상한 17,500
        assert_eq!(slip.deductions.social_security, 875.0);
        assert_eq!(slip.net_pay, 27_125.0);
    }

    #[test]
    fn test_hourly_paid_for_worked_time_only() {
        let employee = hourly("이영희");
        let attendance = AttendanceSummary {
            regular_minutes: 1_200,
            holiday_regular_minutes: 300,
            late_minutes: 30,
            early_leave_minutes: 15,
            ..Default::default()
        };

        let slip = compute(&employee, &attendance, 1);

        assert_eq!(slip.earnings.base_pay, 1_200.0);
        assert_eq!(slip.earnings.holiday_pay, 600.0);
        assert_eq!(slip.deductions.late_deduction, 0.0);
        assert_eq!(slip.deductions.early_leave_deduction, 0.0);
        assert_eq!(slip.deductions.unpaid_leave_deduction, 0.0);
        assert_eq!(slip.deductions.social_security, 90.0);
        assert_eq!(slip.net_pay, 1_710.0);
    }

    #[test]
    fn test_sso_floor_applies_to_small_wages() {
        let attendance = AttendanceSummary {
            regular_minutes: 1_000,
            ..Default::default()
        };

        let slip = compute(&hourly("이영희"), &attendance, 0);

        assert_eq!(slip.gross_pay, 1_000.0);
        // 하한 1,650 × 5% = 82.5 → 83
        assert_eq!(slip.deductions.social_security, 83.0);
        assert_eq!(slip.net_pay, 917.0);
    }

    #[test]
    fn test_net_pay_never_negative() {
        let mut employee = monthly("퇴사자");
        employee.resign_date = Some(date(2026, 10, 1));
        let attendance = AttendanceSummary {
            late_minutes: 600,
            ..Default::default()
        };

        let slip = compute(&employee, &attendance, 0);

        assert_eq!(slip.earnings.base_pay, 967.74);
        assert_eq!(slip.deductions.late_deduction, 1_250.0);
        assert_eq!(slip.deductions.social_security, 0.0);
        assert_eq!(slip.net_pay, 0.0);
    }

    #[test]
    fn test_not_enrolled_skips_sso() {
        let mut employee = monthly("홍길동");
        employee.sso_enrolled = false;

        let slip = compute(&employee, &AttendanceSummary::default(), 0);
        assert_eq!(slip.deductions.social_security, 0.0);
        assert_eq!(slip.net_pay, 30_000.0);
    }

    #[test]
    fn test_unpaid_leave_days_clip_to_month_and_skip_holidays() {
        let now = DateTime::now();
        let leave = |start: NaiveDate, end: NaiveDate, leave_type: LeaveType, status: ApprovalStatus| LeaveRequest {
            id: None,
            employee_name: "홍길동".to_string(),
            store: "강남점".to_string(),
            leave_type,
            start_date: start,
            end_date: end,
            days: 0.0,
            reason: String::new(),
            status,
            reviewer: None,
            reviewed_at: None,
            reject_reason: None,
            created_at: now,
            updated_at: now,
        };

        let leaves = vec![
            leave(date(2026, 9, 29), date(2026, 10, 2), LeaveType::Unpaid, ApprovalStatus::Approved),
            leave(date(2026, 10, 13), date(2026, 10, 14), LeaveType::Unpaid, ApprovalStatus::Approved),
            leave(date(2026, 10, 20), date(2026, 10, 21), LeaveType::Unpaid, ApprovalStatus::Pending),
            leave(date(2026, 10, 27), date(2026, 10, 27), LeaveType::Annual, ApprovalStatus::Approved),
        ];
        let holidays: HashSet<NaiveDate> = [date(2026, 10, 13)].into_iter().collect();

        assert_eq!(unpaid_leave_days_in(&leaves, october(), &holidays), 3);
    }

    #[test]
    fn test_invalid_terms_fail_calculation() {
        let mut employee = monthly("홍길동");
        employee.monthly_salary = 0.0;
        let attendance = AttendanceSummary::default();
        let input = PayrollInput {
            employee: &employee,
            month: october(),
            attendance: &attendance,
            unpaid_leave_days: 0,
        };

        assert!(matches!(
            calculate(&input, &PayrollRules::default()),
            Err(AppError::ValidationError(_))
        ));
    }
}
