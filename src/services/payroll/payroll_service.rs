//! # 급여 서비스
//!
//! 매장 월 급여 일괄 계산은 다음 순서로 진행됩니다.
//!
//! ```text
//! run(store, month)
//!  ├─ try_join!: 재직 직원 / 월 근태 기록 / 승인 휴가 / 공휴일 / 기존 명세
//!  ├─ 직원별
//!  │   ├─ 승인된 명세가 있으면 건너뜀 (skipped_approved)
//!  │   ├─ 근태 집계 → 무급휴가 일수 → 계산
//!  │   └─ 대기 명세 upsert (실패는 failures에 기록하고 계속)
//!  └─ PayrollRunResponse
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use chrono::NaiveDate;
use singleton_macro::service;
use crate::{
    config::PayrollRules,
    domain::dto::payroll::{PayrollFailure, PayrollRunResponse, PayslipResponse},
    domain::entities::hr::attendance_log::AttendanceLog,
    domain::entities::hr::employee::Employee,
    domain::entities::hr::leave_request::LeaveRequest,
    domain::entities::hr::payslip::Payslip,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::hr::{AttendanceRepository, EmployeeRepository, HolidayRepository, LeaveRepository, PayrollRepository},
    services::attendance::calculator::summarize,
    services::payroll::calculator::{calculate, unpaid_leave_days_in, PayrollInput},
    utils::date_utils::YearMonth,
    utils::money::{to_decimal, to_f64},
};

#[service(name = "payroll")]
pub struct PayrollService {
    payroll_repo: Arc<PayrollRepository>,
    employee_repo: Arc<EmployeeRepository>,
    attendance_repo: Arc<AttendanceRepository>,
    leave_repo: Arc<LeaveRepository>,
    holiday_repo: Arc<HolidayRepository>,
}

impl PayrollService {
    /// 저장하지 않고 한 직원의 명세를 계산합니다.
    pub async fn preview(&self, store: &str, employee_name: &str, month: YearMonth) -> Result<PayslipResponse, AppError> {
        let employee = self.employee_repo
            .find_by_name(store, employee_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", employee_name)))?;

        if employee.employed_days_in(month) == 0 {
            return Err(AppError::ValidationError(format!("{}월 재직 기간이 없는 직원입니다", month)));
        }

        let (logs, leaves, holidays) = futures_util::try_join!(
            self.attendance_repo.find_by_month(store, month, Some(employee_name)),
            self.leave_repo.find_approved_overlapping(store, month.first_day(), month.last_day()),
            self.holiday_repo.find_dates_between(month.first_day(), month.last_day()),
        )?;

        let holidays: HashSet<NaiveDate> = holidays.into_iter().collect();
        let leaves: Vec<LeaveRequest> = leaves.into_iter().filter(|l| l.employee_name == employee.name).collect();
        let slip = compute_slip(&employee, month, &logs, &leaves, &holidays, &PayrollRules::from_env())?;

        Ok(PayslipResponse::from(slip))
    }

    /// 매장 월 급여 일괄 계산
    ///
    /// 직원별 계산/저장 실패는 전체를 중단하지 않고 `failures`로 보고합니다.
    pub async fn run(&self, store: &str, month: YearMonth) -> Result<PayrollRunResponse, AppError> {
        let start_time = std::time::Instant::now();

        let (employees, logs, leaves, holidays, existing) = futures_util::try_join!(
            self.employee_repo.find_employed_during(store, month),
            self.attendance_repo.find_by_month(store, month, None),
            self.leave_repo.find_approved_overlapping(store, month.first_day(), month.last_day()),
            self.holiday_repo.find_dates_between(month.first_day(), month.last_day()),
            self.payroll_repo.find_by_month(store, month),
        )?;

        let holidays: HashSet<NaiveDate> = holidays.into_iter().collect();
        let logs_by_employee = group_by_employee(logs, |log| &log.employee_name);
        let leaves_by_employee = group_by_employee(leaves, |leave| &leave.employee_name);
        let approved: HashSet<String> = existing
            .into_iter()
            .filter(|slip| slip.status == ApprovalStatus::Approved)
            .map(|slip| slip.employee_name)
            .collect();

        let rules = PayrollRules::from_env();
        let mut computed = Vec::new();
        let mut skipped_approved = Vec::new();
        let mut failures = Vec::new();

        for employee in &employees {
            if approved.contains(&employee.name) {
                log::debug!("승인된 명세가 있어 건너뜀: {} / {}", store, employee.name);
                skipped_approved.push(employee.name.clone());
                continue;
            }

            let employee_logs = logs_by_employee.get(&employee.name).map(Vec::as_slice).unwrap_or(&[]);
            let employee_leaves = leaves_by_employee.get(&employee.name).map(Vec::as_slice).unwrap_or(&[]);

            let result = match compute_slip(employee, month, employee_logs, employee_leaves, &holidays, &rules) {
                Ok(slip) => self.payroll_repo.save_pending(&slip).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(saved) => computed.push(PayslipResponse::from(saved)),
                Err(e) => {
                    log::warn!("급여 계산 실패: {} / {} - {}", store, employee.name, e);
                    failures.push(PayrollFailure {
                        employee_name: employee.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let total_net_pay = to_f64(computed.iter().map(|slip| to_decimal(slip.net_pay)).sum());

        log::info!(
            "급여 일괄 계산 {} {}: 계산 {}명, 승인 유지 {}명, 실패 {}명, 실지급 합계 {} ({:?})",
            store, month, computed.len(), skipped_approved.len(), failures.len(),
            total_net_pay, start_time.elapsed()
        );

        Ok(PayrollRunResponse {
            store: store.to_string(),
            month,
            computed,
            skipped_approved,
            failures,
            total_net_pay,
        })
    }

    pub async fn list(&self, store: &str, month: YearMonth) -> Result<Vec<PayslipResponse>, AppError> {
        let slips = self.payroll_repo.find_by_month(store, month).await?;
        Ok(slips.into_iter().map(PayslipResponse::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<PayslipResponse, AppError> {
        let slip = self.find_slip(id).await?;
        Ok(PayslipResponse::from(slip))
    }

    /// 대기 → 승인. 승인된 명세는 이후 일괄 계산에서 덮어쓰지 않습니다.
    pub async fn approve(&self, id: &str, reviewer: &str) -> Result<PayslipResponse, AppError> {
        let current = self.find_slip(id).await?;
        current.status.ensure_pending()?;

        let approved = self.payroll_repo
            .approve(id, reviewer)
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 급여명세입니다".to_string()))?;

        log::info!(
            "급여명세 승인: {} / {} {} 실지급 {} (결재자 {})",
            approved.store, approved.employee_name, approved.month, approved.net_pay, reviewer
        );

        Ok(PayslipResponse::from(approved))
    }

    async fn find_slip(&self, id: &str) -> Result<Payslip, AppError> {
        self.payroll_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("급여명세를 찾을 수 없습니다".to_string()))
    }
}

fn compute_slip(
    employee: &Employee,
    month: YearMonth,
    logs: &[AttendanceLog],
    leaves: &[LeaveRequest],
    holidays: &HashSet<NaiveDate>,
    rules: &PayrollRules,
) -> Result<Payslip, AppError> {
    let attendance = summarize(&employee.store, &employee.name, Some(month), logs, holidays);
    let input = PayrollInput {
        employee,
        month,
        attendance: &attendance,
        unpaid_leave_days: unpaid_leave_days_in(leaves, month, holidays),
    };
    calculate(&input, rules)
}

fn group_by_employee<T, F>(items: Vec<T>, key: F) -> HashMap<String, Vec<T>>
where
    F: Fn(&T) -> &String,
{
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key(&item).clone()).or_default().push(item);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hr::employee::fixtures::{hourly, monthly};
    use crate::domain::models::status::OvertimeStatus;
    use crate::services::attendance::calculator::fixtures::{at, closed_log};

    #[test]
    fn test_group_by_employee() {
        let logs = vec![
            closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::None),
            closed_log(2, at(2, 9, 0), at(2, 18, 0), OvertimeStatus::None),
        ];

        let grouped = group_by_employee(logs, |log| &log.employee_name);
        assert_eq!(grouped.get("홍길동").map(Vec::len), Some(2));
    }

    #[test]
    fn test_compute_slip_uses_only_given_logs() {
        let month = YearMonth::parse("2026-10").unwrap();
        let logs = vec![
            // 지각 30분
            closed_log(5, at(5, 9, 30), at(5, 18, 0), OvertimeStatus::None),
            // 승인된 연장 60분
            closed_log(6, at(6, 9, 0), at(6, 19, 0), OvertimeStatus::Approved),
        ];

        let slip = compute_slip(&monthly("홍길동"), month, &logs, &[], &HashSet::new(), &PayrollRules::default()).unwrap();

        assert_eq!(slip.figures.work_days, 2);
        assert_eq!(slip.figures.late_minutes, 30);
        assert_eq!(slip.earnings.overtime_pay, 187.5);
        assert_eq!(slip.deductions.late_deduction, 62.5);
    }

    #[test]
    fn test_compute_slip_for_part_timer_pays_regular_minutes() {
        let month = YearMonth::parse("2026-10").unwrap();
        let mut employee = hourly("홍길동");
        employee.work_start = "09:00".to_string();
        employee.work_end = "18:00".to_string();

        // 09:00-18:00, 휴게 차감 후 480분 = 8시간 × 60
        let logs = vec![closed_log(5, at(5, 9, 0), at(5, 18, 0), OvertimeStatus::None)];
        let slip = compute_slip(&employee, month, &logs, &[], &HashSet::new(), &PayrollRules::default()).unwrap();

        assert_eq!(slip.figures.regular_minutes, 480);
        assert_eq!(slip.earnings.base_pay, 480.0);
    }
}
