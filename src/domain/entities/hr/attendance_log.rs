//! Attendance Log Entity
//!
//! 출퇴근 기록 한 건 = 직원 한 명의 근무일 하루입니다.
//! 지각/조퇴/연장근무 분은 출퇴근 시점에 판정되어 함께 저장되고,
//! 급여 계산은 저장된 값을 합산만 합니다.

use chrono::{NaiveDate, NaiveDateTime};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::status::OvertimeStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_name: String,
    pub store: String,
    /// 근무일 (자정을 넘는 근무는 출근일 기준)
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<NaiveDateTime>,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    #[serde(default)]
    pub late_minutes: i64,
    #[serde(default)]
    pub early_leave_minutes: i64,
    /// 휴게시간 차감 후 실근무 분
    #[serde(default)]
    pub worked_minutes: i64,
    /// 인정 단위로 내림한 연장근무 분
    #[serde(default)]
    pub overtime_minutes: i64,
    pub overtime_status: OvertimeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_reviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl AttendanceLog {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// 급여에 반영되는 연장근무 분 (승인분만)
    pub fn approved_overtime_minutes(&self) -> i64 {
        if self.overtime_status == OvertimeStatus::Approved {
            self.overtime_minutes
        } else {
            0
        }
    }
}
