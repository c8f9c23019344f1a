use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::leave_request::{LeaveRequest, LeaveType};
use crate::domain::models::status::ApprovalStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: String,
    pub employee_name: String,
    pub store: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: f64,
    pub reason: String,
    pub status: ApprovalStatus,
    pub reviewer: Option<String>,
    pub reviewed_at: Option<DateTime>,
    pub reject_reason: Option<String>,
    pub created_at: DateTime,
}

impl From<LeaveRequest> for LeaveRequestResponse {
    fn from(request: LeaveRequest) -> Self {
        Self {
            id: request.id.map(|id| id.to_hex()).unwrap_or_default(),
            employee_name: request.employee_name,
            store: request.store,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            days: request.days,
            reason: request.reason,
            status: request.status,
            reviewer: request.reviewer,
            reviewed_at: request.reviewed_at,
            reject_reason: request.reject_reason,
            created_at: request.created_at,
        }
    }
}

/// 연간 휴가 잔여 현황
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub store: String,
    pub employee_name: String,
    pub year: i32,
    pub entitlement: f64,
    /// 승인된 연차/반차 일수
    pub used: f64,
    /// 대기중인 연차/반차 일수
    pub pending: f64,
    /// entitlement - used - pending
    pub remaining: f64,
    /// 승인 + 대기 병가 일수
    pub sick_used: f64,
    pub sick_limit: f64,
}
