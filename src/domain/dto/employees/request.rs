//! 직원 관리 요청 DTO

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::hr::employee::EmploymentType;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "매장명은 1-50자 사이여야 합니다"))]
    pub store: String,

    #[validate(length(min = 1, max = 30, message = "직책은 1-30자 사이여야 합니다"))]
    pub position: String,

    pub employment_type: EmploymentType,

    #[validate(range(min = 0.0, message = "월급은 0 이상이어야 합니다"))]
    pub monthly_salary: Option<f64>,

    #[validate(range(min = 0.0, message = "시급은 0 이상이어야 합니다"))]
    pub hourly_rate: Option<f64>,

    #[validate(range(min = 0.0, message = "수당은 0 이상이어야 합니다"))]
    pub allowance: Option<f64>,

    pub work_start: String,
    pub work_end: String,
    pub hire_date: NaiveDate,

    pub sso_enrolled: Option<bool>,

    #[validate(range(min = 0.0, max = 30.0, message = "연차 일수는 0-30일 사이여야 합니다"))]
    pub annual_leave_days: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bank_account: Option<String>,
}

/// 부분 수정. 이름/매장은 다른 컬렉션의 참조 키이므로 변경할 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 30, message = "직책은 1-30자 사이여야 합니다"))]
    pub position: Option<String>,
    pub employment_type: Option<EmploymentType>,
    #[validate(range(min = 0.0, message = "월급은 0 이상이어야 합니다"))]
    pub monthly_salary: Option<f64>,
    #[validate(range(min = 0.0, message = "시급은 0 이상이어야 합니다"))]
    pub hourly_rate: Option<f64>,
    #[validate(range(min = 0.0, message = "수당은 0 이상이어야 합니다"))]
    pub allowance: Option<f64>,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub sso_enrolled: Option<bool>,
    #[validate(range(min = 0.0, max = 30.0, message = "연차 일수는 0-30일 사이여야 합니다"))]
    pub annual_leave_days: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bank_account: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResignEmployeeRequest {
    pub resign_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeQuery {
    pub store: Option<String>,
    /// `재직` | `퇴사`
    pub status: Option<String>,
}
