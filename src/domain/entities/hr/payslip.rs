//! Payslip Entity
//!
//! 월별 급여명세 (`payrolls` 컬렉션). `(store, employee_name, month)` 당 1건이며
//! 승인된 명세는 재계산으로 덮어쓰지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::employee::EmploymentType;
use crate::domain::models::status::ApprovalStatus;
use crate::utils::date_utils::YearMonth;

/// 지급 항목
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Earnings {
    pub base_pay: f64,
    pub overtime_pay: f64,
    pub holiday_pay: f64,
    pub allowance: f64,
}

/// 공제 항목
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub late_deduction: f64,
    pub early_leave_deduction: f64,
    pub unpaid_leave_deduction: f64,
    pub social_security: f64,
}

/// 계산 근거가 된 근태 수치
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkFigures {
    pub employed_days: u32,
    pub work_days: u32,
    pub worked_minutes: i64,
    /// 시급 지급 기준이 되는 공휴일 외 정규 근무 분
    pub regular_minutes: i64,
    pub late_minutes: i64,
    pub early_leave_minutes: i64,
    pub overtime_minutes: i64,
    pub holiday_worked_minutes: i64,
    pub holiday_regular_minutes: i64,
    pub holiday_overtime_minutes: i64,
    pub unpaid_leave_days: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub store: String,
    pub employee_name: String,
    pub month: YearMonth,
    pub employment_type: EmploymentType,
    pub hourly_rate: f64,
    pub earnings: Earnings,
    pub deductions: Deductions,
    pub figures: WorkFigures,
    pub gross_pay: f64,
    pub total_deductions: f64,
    pub net_pay: f64,
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Payslip {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
