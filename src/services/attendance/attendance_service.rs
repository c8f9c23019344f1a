//! # 출퇴근 서비스
//!
//! 출근 시 직원 스케줄을 기록에 복사하고 지각을 판정합니다.
//! 퇴근 시 같은 근무일(야간 스케줄은 전날 포함)의 열린 기록을 닫고
//! 실근무·조퇴·연장근무를 판정합니다. 연장근무는 결재 후에만 급여에 반영됩니다.

use std::sync::Arc;
use chrono::NaiveDateTime;
use mongodb::bson::{doc, to_bson, DateTime};
use singleton_macro::service;
use crate::{
    config::AttendanceRules,
    domain::dto::attendance::{AttendanceLogResponse, AttendanceQuery, AttendanceSummary, ClockRequest},
    domain::entities::hr::attendance_log::AttendanceLog,
    domain::models::auth::AuthenticatedUser,
    domain::models::status::OvertimeStatus,
    errors::errors::AppError,
    repositories::hr::{AttendanceRepository, EmployeeRepository, HolidayRepository},
    services::attendance::calculator::{candidate_work_dates, judge_clock_in, judge_clock_out, summarize},
    utils::date_utils::YearMonth,
    utils::string_utils::clean_optional_string,
};

#[service(name = "attendance")]
pub struct AttendanceService {
    attendance_repo: Arc<AttendanceRepository>,
    employee_repo: Arc<EmployeeRepository>,
    holiday_repo: Arc<HolidayRepository>,
}

impl AttendanceService {
    /// 출근 기록
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 직원 없음
    /// * `AppError::ValidationError` - 퇴사한 직원
    /// * `AppError::ConflictError` - 같은 근무일 기록이 이미 있음
    pub async fn clock_in(&self, request: ClockRequest) -> Result<AttendanceLogResponse, AppError> {
        let at = request.at.unwrap_or_else(local_now);
        let employee = self.employee_repo
            .find_by_name(&request.store, &request.employee_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", request.employee_name)))?;

        if !employee.is_active() {
            return Err(AppError::ValidationError(format!("퇴사한 직원입니다: {}", employee.name)));
        }

        let rules = AttendanceRules::from_env();
        let judged = judge_clock_in(at, employee.schedule()?, &rules);

        if self.attendance_repo
            .find_by_work_date(&employee.store, &employee.name, judged.work_date)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "{}의 {} 출근 기록이 이미 있습니다",
                employee.name, judged.work_date
            )));
        }

        let now = DateTime::now();
        let log = AttendanceLog {
            id: None,
            employee_name: employee.name.clone(),
            store: employee.store.clone(),
            work_date: judged.work_date,
            clock_in: at,
            clock_out: None,
            scheduled_start: judged.scheduled_start,
            scheduled_end: judged.scheduled_end,
            late_minutes: judged.late_minutes,
            early_leave_minutes: 0,
            worked_minutes: 0,
            overtime_minutes: 0,
            overtime_status: OvertimeStatus::None,
            overtime_reviewer: None,
            note: clean_optional_string(request.note),
            created_at: now,
            updated_at: now,
        };

        let created = self.attendance_repo.create(log).await?;
        log::info!(
            "출근: {} / {} {} (지각 {}분)",
            created.store, created.employee_name, created.clock_in, created.late_minutes
        );

        Ok(AttendanceLogResponse::from(created))
    }

    /// 퇴근 기록
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 열린 출근 기록 없음
    /// * `AppError::ValidationError` - 퇴근 시각이 출근 시각보다 빠름
    pub async fn clock_out(&self, request: ClockRequest) -> Result<AttendanceLogResponse, AppError> {
        let at = request.at.unwrap_or_else(local_now);
        let employee = self.employee_repo
            .find_by_name(&request.store, &request.employee_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", request.employee_name)))?;

        let candidates = candidate_work_dates(at, employee.schedule()?);
        let open_log = self.attendance_repo
            .find_open(&employee.store, &employee.name, &candidates)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}의 열린 출근 기록이 없습니다", employee.name)))?;

        let rules = AttendanceRules::from_env();
        let judged = judge_clock_out(&open_log, at, &rules)?;

        let id = open_log.id_string()
            .ok_or_else(|| AppError::InternalError("출근 기록 ID가 없습니다".to_string()))?;

        let clock_out = to_bson(&at)
            .map_err(|e| AppError::InternalError(format!("퇴근 시각 직렬화 실패: {}", e)))?;

        let mut update_doc = doc! {
            "clock_out": clock_out,
            "worked_minutes": judged.worked_minutes,
            "early_leave_minutes": judged.early_leave_minutes,
            "overtime_minutes": judged.overtime_minutes,
            "overtime_status": judged.overtime_status.as_str(),
        };
        if let Some(note) = clean_optional_string(request.note) {
            update_doc.insert("note", note);
        }

        let updated = self.attendance_repo
            .update(&id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("출근 기록을 찾을 수 없습니다".to_string()))?;

        log::info!(
            "퇴근: {} / {} 근무 {}분, 조퇴 {}분, 연장 {}분",
            updated.store, updated.employee_name,
            updated.worked_minutes, updated.early_leave_minutes, updated.overtime_minutes
        );

        Ok(AttendanceLogResponse::from(updated))
    }

    /// 연장근무 승인/반려 (대기 상태, 소속 매장 기록만)
    pub async fn review_overtime(&self, id: &str, approve: bool, reviewer: &AuthenticatedUser) -> Result<AttendanceLogResponse, AppError> {
        let log = self.attendance_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("출근 기록을 찾을 수 없습니다".to_string()))?;

        ensure_overtime_reviewable(&log, reviewer)?;

        let next = if approve { OvertimeStatus::Approved } else { OvertimeStatus::Rejected };
        let updated = self.attendance_repo
            .update_if_overtime_status(
                id,
                OvertimeStatus::Pending.as_str(),
                doc! { "overtime_status": next.as_str(), "overtime_reviewer": &reviewer.name },
            )
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 연장근무입니다".to_string()))?;

        log::info!(
            "연장근무 {}: {} / {} {} ({}분, 결재자 {})",
            next.as_str(), updated.store, updated.employee_name, updated.work_date,
            updated.overtime_minutes, reviewer.name
        );

        Ok(AttendanceLogResponse::from(updated))
    }

    pub async fn list_logs(&self, query: AttendanceQuery) -> Result<Vec<AttendanceLogResponse>, AppError> {
        if query.to < query.from {
            return Err(AppError::ValidationError("조회 종료일이 시작일보다 빠릅니다".to_string()));
        }

        let employee_name = clean_optional_string(query.employee_name);
        let logs = self.attendance_repo
            .find_range(&query.store, query.from, query.to, employee_name.as_deref())
            .await?;

        Ok(logs.into_iter().map(AttendanceLogResponse::from).collect())
    }

    /// 직원 월간 근태 집계
    pub async fn monthly_summary(&self, store: &str, employee_name: &str, month: YearMonth) -> Result<AttendanceSummary, AppError> {
        let (logs, holidays) = futures_util::try_join!(
            self.attendance_repo.find_by_month(store, month, Some(employee_name)),
            self.holiday_repo.find_dates_between(month.first_day(), month.last_day()),
        )?;

        let holidays = holidays.into_iter().collect();
        Ok(summarize(store, employee_name, Some(month), &logs, &holidays))
    }
}

/// 매장 현지 시각
fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn ensure_overtime_reviewable(log: &AttendanceLog, reviewer: &AuthenticatedUser) -> Result<(), AppError> {
    reviewer.ensure_store_access(&log.store)?;
    if log.overtime_status != OvertimeStatus::Pending {
        return Err(AppError::ConflictError(format!(
            "결재 대기 중인 연장근무가 아닙니다 (현재 상태: {})",
            log.overtime_status.as_str()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roles;
    use crate::services::attendance::calculator::fixtures::{at, closed_log};

    fn manager(store: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-3".to_string(),
            name: "김매니저".to_string(),
            store: Some(store.to_string()),
            roles: vec![roles::MANAGER.to_string()],
        }
    }

    #[test]
    fn test_overtime_review_limited_to_own_store() {
        // 강남점 기록, 연장 60분 대기
        let log = closed_log(1, at(1, 9, 0), at(1, 19, 0), OvertimeStatus::Pending);
        assert_eq!(log.overtime_status, OvertimeStatus::Pending);

        assert!(ensure_overtime_reviewable(&log, &manager("강남점")).is_ok());
        assert!(matches!(
            ensure_overtime_reviewable(&log, &manager("홍대점")),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_overtime_without_pending_request_conflicts() {
        let log = closed_log(1, at(1, 9, 0), at(1, 18, 0), OvertimeStatus::Pending);
        assert_eq!(log.overtime_status, OvertimeStatus::None);

        assert!(matches!(
            ensure_overtime_reviewable(&log, &manager("강남점")),
            Err(AppError::ConflictError(_))
        ));
    }
}
