//! 출퇴근 요청 DTO

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 출근/퇴근 공통 요청
///
/// `at`이 없으면 서버 현지 시각을 사용합니다. 태블릿 오프라인 기록 동기화 시에만 지정합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClockRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,

    #[validate(length(min = 1, message = "직원명은 필수입니다"))]
    pub employee_name: String,

    pub at: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "메모는 200자 이하여야 합니다"))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewOvertimeRequest {
    pub approve: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    pub store: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlySummaryQuery {
    pub store: String,
    pub employee_name: String,
    /// `YYYY-MM`
    pub month: String,
}
