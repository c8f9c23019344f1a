use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::employee::EmploymentType;
use crate::domain::entities::hr::payslip::{Deductions, Earnings, Payslip, WorkFigures};
use crate::domain::models::status::ApprovalStatus;
use crate::utils::date_utils::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// 미리보기(저장 전)는 빈 문자열
    pub id: String,
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
    pub reviewer: Option<String>,
    pub approved_at: Option<DateTime>,
}

impl From<Payslip> for PayslipResponse {
    fn from(slip: Payslip) -> Self {
        Self {
            id: slip.id.map(|id| id.to_hex()).unwrap_or_default(),
            store: slip.store,
            employee_name: slip.employee_name,
            month: slip.month,
            employment_type: slip.employment_type,
            hourly_rate: slip.hourly_rate,
            earnings: slip.earnings,
            deductions: slip.deductions,
            figures: slip.figures,
            gross_pay: slip.gross_pay,
            total_deductions: slip.total_deductions,
            net_pay: slip.net_pay,
            status: slip.status,
            reviewer: slip.reviewer,
            approved_at: slip.approved_at,
        }
    }
}

/// 계산에 실패한 직원
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollFailure {
    pub employee_name: String,
    pub error: String,
}

/// 매장 월 급여 일괄 계산 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    pub store: String,
    pub month: YearMonth,
    /// 새로 계산되어 대기 상태로 저장된 명세
    pub computed: Vec<PayslipResponse>,
    /// 이미 승인되어 다시 계산하지 않은 직원
    pub skipped_approved: Vec<String>,
    pub failures: Vec<PayrollFailure>,
    pub total_net_pay: f64,
}
