//! # 휴가 서비스
//!
//! 휴가 일수는 기간 내 달력일에서 공휴일을 뺀 값이며 반차는 0.5일입니다.
//! 연차/반차는 연간 부여일수 안에서, 병가는 연 30일 안에서만 신청할 수 있고
//! 잔여일수에는 승인분과 대기분이 모두 반영됩니다.
//! 해를 넘는 휴가는 시작일이 속한 해로 집계합니다.

use std::collections::HashSet;
use std::sync::Arc;
use chrono::{Datelike, NaiveDate};
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::leave::{CreateLeaveRequest, LeaveBalance, LeaveQuery, LeaveRequestResponse},
    domain::entities::hr::employee::Employee,
    domain::entities::hr::leave_request::{LeaveRequest, LeaveType, MAX_LEAVE_SPAN_DAYS},
    domain::models::auth::AuthenticatedUser,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::hr::{EmployeeRepository, HolidayRepository, LeaveRepository},
    utils::date_utils::{dates_between, span_days},
    utils::string_utils::clean_optional_string,
};

/// 연간 유급 병가 한도
pub const SICK_LEAVE_LIMIT_DAYS: f64 = 30.0;

#[service(name = "leave")]
pub struct LeaveService {
    leave_repo: Arc<LeaveRepository>,
    employee_repo: Arc<EmployeeRepository>,
    holiday_repo: Arc<HolidayRepository>,
}

impl LeaveService {
    /// 휴가 신청
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용일수 0, 잔여 연차/병가 한도 초과
    /// * `AppError::ConflictError` - 대기/승인된 다른 휴가와 기간이 겹침
    pub async fn create_leave(&self, request: CreateLeaveRequest) -> Result<LeaveRequestResponse, AppError> {
        let employee = self.employee_repo
            .find_by_name(&request.store, &request.employee_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", request.employee_name)))?;

        let (holidays, overlapping) = futures_util::try_join!(
            self.holiday_repo.find_dates_between(request.start_date, request.end_date),
            self.leave_repo.find_live_overlapping(&employee.store, &employee.name, request.start_date, request.end_date),
        )?;

        if let Some(existing) = overlapping.first() {
            return Err(AppError::ConflictError(format!(
                "{} ~ {} 기간에 이미 신청된 휴가({})가 있습니다",
                existing.start_date, existing.end_date, existing.leave_type.as_str()
            )));
        }

        let holidays: HashSet<NaiveDate> = holidays.into_iter().collect();
        let days = count_leave_days(request.leave_type, request.start_date, request.end_date, &holidays)?;

        let year = request.start_date.year();
        let year_requests = self.leave_repo
            .find_live_in_year(&employee.store, &employee.name, year)
            .await?;
        let balance = compute_balance(&employee, year, &year_requests);
        ensure_within_balance(request.leave_type, days, &balance)?;

        let now = DateTime::now();
        let leave = LeaveRequest {
            id: None,
            employee_name: employee.name.clone(),
            store: employee.store.clone(),
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            days,
            reason: clean_optional_string(request.reason).unwrap_or_default(),
            status: ApprovalStatus::Pending,
            reviewer: None,
            reviewed_at: None,
            reject_reason: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.leave_repo.create(leave).await?;
        log::info!(
            "휴가 신청: {} / {} {} {}~{} ({}일)",
            created.store, created.employee_name, created.leave_type.as_str(),
            created.start_date, created.end_date, created.days
        );

        Ok(LeaveRequestResponse::from(created))
    }

    /// 휴가 승인. 매니저는 소속 매장 신청만 결재할 수 있습니다.
    pub async fn approve_leave(&self, id: &str, reviewer: &AuthenticatedUser) -> Result<LeaveRequestResponse, AppError> {
        self.review(id, ApprovalStatus::Approved, reviewer, None).await
    }

    pub async fn reject_leave(&self, id: &str, reviewer: &AuthenticatedUser, reason: &str) -> Result<LeaveRequestResponse, AppError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::ValidationError("반려 사유를 입력해주세요".to_string()));
        }
        self.review(id, ApprovalStatus::Rejected, reviewer, Some(reason)).await
    }

    async fn review(
        &self,
        id: &str,
        next: ApprovalStatus,
        reviewer: &AuthenticatedUser,
        reject_reason: Option<&str>,
    ) -> Result<LeaveRequestResponse, AppError> {
        let current = self.leave_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("휴가 신청을 찾을 수 없습니다".to_string()))?;
        ensure_reviewable(&current, reviewer)?;

        let mut update_doc = doc! { "status": next.as_str(), "reviewer": &reviewer.name };
        if let Some(reason) = reject_reason {
            update_doc.insert("reject_reason", reason);
        }

        let updated = self.leave_repo
            .review(id, update_doc)
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 휴가 신청입니다".to_string()))?;

        log::info!(
            "휴가 {}: {} / {} {}~{} (결재자 {})",
            next.as_str(), updated.store, updated.employee_name,
            updated.start_date, updated.end_date, reviewer.name
        );

        Ok(LeaveRequestResponse::from(updated))
    }

    pub async fn list_leaves(&self, query: LeaveQuery) -> Result<Vec<LeaveRequestResponse>, AppError> {
        let status = query.status.as_deref().map(ApprovalStatus::parse).transpose()?;
        let store = clean_optional_string(query.store);
        let employee_name = clean_optional_string(query.employee_name);

        let leaves = self.leave_repo
            .find_all(store.as_deref(), employee_name.as_deref(), status)
            .await?;

        Ok(leaves.into_iter().map(LeaveRequestResponse::from).collect())
    }

    pub async fn balance(&self, store: &str, employee_name: &str, year: i32) -> Result<LeaveBalance, AppError> {
        let employee = self.employee_repo
            .find_by_name(store, employee_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", employee_name)))?;

        let requests = self.leave_repo.find_live_in_year(store, employee_name, year).await?;
        Ok(compute_balance(&employee, year, &requests))
    }
}

/// 결재 가능 여부: 매장 권한, 대기 상태
fn ensure_reviewable(current: &LeaveRequest, reviewer: &AuthenticatedUser) -> Result<(), AppError> {
    reviewer.ensure_store_access(&current.store)?;
    current.status.ensure_pending()
}

/// 사용일수 계산
///
/// 반차는 0.5일, 그 외는 양 끝 포함 달력일에서 공휴일을 뺍니다.
pub fn count_leave_days(
    leave_type: LeaveType,
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HashSet<NaiveDate>,
) -> Result<f64, AppError> {
    if end < start {
        return Err(AppError::ValidationError("종료일은 시작일보다 빠를 수 없습니다".to_string()));
    }
    if span_days(start, end) > MAX_LEAVE_SPAN_DAYS {
        return Err(AppError::ValidationError("휴가는 한 번에 366일까지 신청할 수 있습니다".to_string()));
    }

    let working_days = dates_between(start, end)
        .filter(|d| !holidays.contains(d))
        .count();

    let days = match leave_type {
        LeaveType::HalfDay if start != end => {
            return Err(AppError::ValidationError("반차는 하루만 신청할 수 있습니다".to_string()));
        }
        LeaveType::HalfDay if working_days == 0 => 0.0,
        LeaveType::HalfDay => 0.5,
        _ => working_days as f64,
    };

    if days <= 0.0 {
        return Err(AppError::ValidationError("신청 기간이 모두 공휴일입니다".to_string()));
    }
    Ok(days)
}

/// 반려를 제외한 그 해 신청으로 잔여 현황 계산
pub fn compute_balance(employee: &Employee, year: i32, requests: &[LeaveRequest]) -> LeaveBalance {
    let mut used = 0.0;
    let mut pending = 0.0;
    let mut sick_used = 0.0;

    for request in requests.iter().filter(|r| r.is_live()) {
        match request.leave_type {
            t if t.uses_annual_balance() => match request.status {
                ApprovalStatus::Approved => used += request.days,
                _ => pending += request.days,
            },
            LeaveType::Sick => sick_used += request.days,
            _ => {}
        }
    }

    LeaveBalance {
        store: employee.store.clone(),
        employee_name: employee.name.clone(),
        year,
        entitlement: employee.annual_leave_days,
        used,
        pending,
        remaining: employee.annual_leave_days - used - pending,
        sick_used,
        sick_limit: SICK_LEAVE_LIMIT_DAYS,
    }
}

fn ensure_within_balance(leave_type: LeaveType, days: f64, balance: &LeaveBalance) -> Result<(), AppError> {
    if leave_type.uses_annual_balance() && days > balance.remaining {
        return Err(AppError::ValidationError(format!(
            "연차 잔여일수가 부족합니다 (잔여 {}일, 신청 {}일)",
            balance.remaining, days
        )));
    }
    if leave_type == LeaveType::Sick && balance.sick_used + days > balance.sick_limit {
        return Err(AppError::ValidationError(format!(
            "연간 병가 한도 {}일을 초과합니다 (사용 {}일, 신청 {}일)",
            balance.sick_limit, balance.sick_used, days
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hr::employee::fixtures::monthly;
    use crate::config::roles;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(leave_type: LeaveType, days: f64, status: ApprovalStatus) -> LeaveRequest {
        let now = DateTime::now();
        LeaveRequest {
            id: None,
            employee_name: "홍길동".to_string(),
            store: "강남점".to_string(),
            leave_type,
            start_date: date(2026, 3, 2),
            end_date: date(2026, 3, 2),
            days,
            reason: String::new(),
            status,
            reviewer: None,
            reviewed_at: None,
            reject_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn reviewer(role: &str, store: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-2".to_string(),
            name: "결재자".to_string(),
            store: store.map(str::to_string),
            roles: vec![role.to_string()],
        }
    }

    #[test]
    fn test_manager_reviews_only_own_store_leave() {
        let pending = leave(LeaveType::Annual, 1.0, ApprovalStatus::Pending);

        assert!(ensure_reviewable(&pending, &reviewer(roles::MANAGER, Some("강남점"))).is_ok());
        assert!(ensure_reviewable(&pending, &reviewer(roles::ADMIN, None)).is_ok());
        assert!(matches!(
            ensure_reviewable(&pending, &reviewer(roles::MANAGER, Some("홍대점"))),
            Err(AppError::AuthorizationError(_))
        ));

        let approved = leave(LeaveType::Annual, 1.0, ApprovalStatus::Approved);
        assert!(matches!(
            ensure_reviewable(&approved, &reviewer(roles::MANAGER, Some("강남점"))),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_days_exclude_public_holidays() {
        let holidays: HashSet<NaiveDate> = [date(2026, 10, 13)].into_iter().collect();

        let days = count_leave_days(LeaveType::Annual, date(2026, 10, 12), date(2026, 10, 15), &holidays).unwrap();
        assert_eq!(days, 3.0);
    }

    #[test]
    fn test_half_day_counts_half() {
        let days = count_leave_days(LeaveType::HalfDay, date(2026, 10, 12), date(2026, 10, 12), &HashSet::new()).unwrap();
        assert_eq!(days, 0.5);
    }

    #[test]
    fn test_period_of_only_holidays_rejected() {
        let holidays: HashSet<NaiveDate> = [date(2026, 10, 13)].into_iter().collect();

        assert!(matches!(
            count_leave_days(LeaveType::Unpaid, date(2026, 10, 13), date(2026, 10, 13), &holidays),
            Err(AppError::ValidationError(_))
        ));
        assert!(count_leave_days(LeaveType::HalfDay, date(2026, 10, 13), date(2026, 10, 13), &holidays).is_err());
    }

    #[test]
    fn test_unpaid_span_capped_at_a_year() {
        let holidays = HashSet::new();
        assert_eq!(
            count_leave_days(LeaveType::Unpaid, date(2028, 1, 1), date(2028, 12, 31), &holidays).unwrap(),
            366.0
        );
        assert!(matches!(
            count_leave_days(LeaveType::Unpaid, date(2026, 10, 1), date(30000, 12, 31), &holidays),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_balance_counts_approved_and_pending_but_not_rejected() {
        let employee = monthly("홍길동");
        let requests = vec![
            leave(LeaveType::Annual, 2.0, ApprovalStatus::Approved),
            leave(LeaveType::HalfDay, 0.5, ApprovalStatus::Pending),
            leave(LeaveType::Annual, 3.0, ApprovalStatus::Rejected),
            leave(LeaveType::Sick, 4.0, ApprovalStatus::Approved),
            leave(LeaveType::Unpaid, 5.0, ApprovalStatus::Approved),
        ];

        let balance = compute_balance(&employee, 2026, &requests);

        assert_eq!(balance.entitlement, 6.0);
        assert_eq!(balance.used, 2.0);
        assert_eq!(balance.pending, 0.5);
        assert_eq!(balance.remaining, 3.5);
        assert_eq!(balance.sick_used, 4.0);
    }

    #[test]
    fn test_annual_request_over_remaining_rejected() {
        let employee = monthly("홍길동");
        let balance = compute_balance(&employee, 2026, &[leave(LeaveType::Annual, 5.0, ApprovalStatus::Approved)]);

        assert!(ensure_within_balance(LeaveType::Annual, 1.0, &balance).is_ok());
        assert!(ensure_within_balance(LeaveType::Annual, 1.5, &balance).is_err());
        // 무급휴가는 잔여 연차와 무관
        assert!(ensure_within_balance(LeaveType::Unpaid, 10.0, &balance).is_ok());
    }

    #[test]
    fn test_sick_leave_capped_per_year() {
        let employee = monthly("홍길동");
        let balance = compute_balance(&employee, 2026, &[leave(LeaveType::Sick, 28.0, ApprovalStatus::Approved)]);

        assert!(ensure_within_balance(LeaveType::Sick, 2.0, &balance).is_ok());
        assert!(ensure_within_balance(LeaveType::Sick, 3.0, &balance).is_err());
    }
}
