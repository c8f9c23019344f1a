use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::attendance_log::AttendanceLog;
use crate::domain::models::status::OvertimeStatus;
use crate::utils::date_utils::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLogResponse {
    pub id: String,
    pub employee_name: String,
    pub store: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub late_minutes: i64,
    pub early_leave_minutes: i64,
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
    pub overtime_status: OvertimeStatus,
    pub overtime_reviewer: Option<String>,
    pub note: Option<String>,
}

impl From<AttendanceLog> for AttendanceLogResponse {
    fn from(log: AttendanceLog) -> Self {
        Self {
            id: log.id.map(|id| id.to_hex()).unwrap_or_default(),
            employee_name: log.employee_name,
            store: log.store,
            work_date: log.work_date,
            clock_in: log.clock_in,
            clock_out: log.clock_out,
            scheduled_start: log.scheduled_start,
            scheduled_end: log.scheduled_end,
            late_minutes: log.late_minutes,
            early_leave_minutes: log.early_leave_minutes,
            worked_minutes: log.worked_minutes,
            overtime_minutes: log.overtime_minutes,
            overtime_status: log.overtime_status,
            overtime_reviewer: log.overtime_reviewer,
            note: log.note,
        }
    }
}

/// 직원 월간 근태 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub store: String,
    pub employee_name: String,
    pub month: Option<YearMonth>,
    /// 출근 기록이 있는 일수
    pub work_days: u32,
    /// 퇴근까지 완료된 일수
    pub completed_days: u32,
    /// 퇴근 기록이 없는 일수
    pub missing_clock_out: u32,
    pub late_count: u32,
    pub late_minutes: i64,
    pub early_leave_minutes: i64,
    /// 공휴일 포함 전체 실근무 분
    pub worked_minutes: i64,
    /// 그 중 공휴일 근무 분
    pub holiday_worked_minutes: i64,
    /// 공휴일 외 근무 분에서 기록된 연장근무 분을 뺀 정규 근무 분
    pub regular_minutes: i64,
    /// 공휴일 근무 분에서 기록된 연장근무 분을 뺀 정규 근무 분
    pub holiday_regular_minutes: i64,
    /// 공휴일 외 승인된 연장근무 분
    pub approved_overtime_minutes: i64,
    pub pending_overtime_minutes: i64,
    /// 공휴일에 승인된 연장근무 분
    pub holiday_overtime_minutes: i64,
}
