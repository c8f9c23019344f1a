//! Leave Request Entity

use chrono::{Datelike, NaiveDate};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::status::ApprovalStatus;
use crate::errors::errors::AppError;

/// 한 번에 신청할 수 있는 최대 기간 (달력일)
pub const MAX_LEAVE_SPAN_DAYS: i64 = 366;

/// 휴가 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    /// 연차 (유급)
    #[serde(rename = "연차")]
    Annual,
    /// 반차 - 연차 0.5일 차감
    #[serde(rename = "반차")]
    HalfDay,
    /// 병가 (연 30일까지 유급)
    #[serde(rename = "병가")]
    Sick,
    /// 무급휴가 - 월급제 급여에서 일할 공제
    #[serde(rename = "무급")]
    Unpaid,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "연차",
            LeaveType::HalfDay => "반차",
            LeaveType::Sick => "병가",
            LeaveType::Unpaid => "무급",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "연차" => Ok(LeaveType::Annual),
            "반차" => Ok(LeaveType::HalfDay),
            "병가" => Ok(LeaveType::Sick),
            "무급" => Ok(LeaveType::Unpaid),
            other => Err(AppError::ValidationError(format!("알 수 없는 휴가 종류입니다: {}", other))),
        }
    }

    /// 연차 잔여일수에서 차감되는 종류인지
    pub fn uses_annual_balance(&self) -> bool {
        matches!(self, LeaveType::Annual | LeaveType::HalfDay)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_name: String,
    pub store: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 공휴일 제외 사용일수 (반차 0.5)
    pub days: f64,
    #[serde(default)]
    pub reason: String,
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl LeaveRequest {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 반려되지 않은 요청은 기간 중복 검사 대상
    pub fn is_live(&self) -> bool {
        self.status != ApprovalStatus::Rejected
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}
