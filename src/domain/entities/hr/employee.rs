//! Employee Entity
//!
//! 매장 직원(인사 기본정보 + 급여 조건 + 근무 스케줄) 문서입니다.
//! 다른 컬렉션은 `(store, name)` 문자열로 직원을 참조하므로
//! 같은 매장 안에서 이름은 유일해야 합니다.

use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::status::EmployeeStatus;
use crate::errors::errors::AppError;
use crate::utils::date_utils::{parse_hhmm, YearMonth};

/// 급여 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    /// 월급제 (정규직)
    Monthly,
    /// 시급제 (파트타임)
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub store: String,
    pub position: String,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub monthly_salary: f64,
    #[serde(default)]
    pub hourly_rate: f64,
    /// 고정 월 수당 (직책수당 등)
    #[serde(default)]
    pub allowance: f64,
    /// 예정 출근 시간 `HH:MM`
    pub work_start: String,
    /// 예정 퇴근 시간 `HH:MM` - 출근보다 이르면 익일 퇴근
    pub work_end: String,
    pub hire_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resign_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    #[serde(default = "default_true")]
    pub sso_enrolled: bool,
    #[serde(default = "default_annual_leave_days")]
    pub annual_leave_days: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

fn default_true() -> bool {
    true
}

pub fn default_annual_leave_days() -> f64 {
    6.0
}

impl Employee {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    pub fn is_monthly(&self) -> bool {
        self.employment_type == EmploymentType::Monthly
    }

    /// 파싱된 예정 출퇴근 시간
    pub fn schedule(&self) -> Result<(NaiveTime, NaiveTime), AppError> {
        Ok((parse_hhmm(&self.work_start)?, parse_hhmm(&self.work_end)?))
    }

    /// 급여 조건과 스케줄의 일관성 검증
    pub fn validate_terms(&self) -> Result<(), AppError> {
        match self.employment_type {
            EmploymentType::Monthly if !(self.monthly_salary > 0.0 && self.monthly_salary.is_finite()) => {
                return Err(AppError::ValidationError("월급제 직원은 월급이 0보다 커야 합니다".to_string()));
            }
            EmploymentType::Hourly if !(self.hourly_rate > 0.0 && self.hourly_rate.is_finite()) => {
                return Err(AppError::ValidationError("시급제 직원은 시급이 0보다 커야 합니다".to_string()));
            }
            _ => {}
        }

        if !(self.allowance >= 0.0 && self.allowance.is_finite()) {
            return Err(AppError::ValidationError("수당은 0 이상이어야 합니다".to_string()));
        }

        let (start, end) = self.schedule()?;
        if start == end {
            return Err(AppError::ValidationError("출근 시간과 퇴근 시간이 같을 수 없습니다".to_string()));
        }

        if let Some(resign_date) = self.resign_date {
            if resign_date < self.hire_date {
                return Err(AppError::ValidationError("퇴사일은 입사일보다 빠를 수 없습니다".to_string()));
            }
        }

        Ok(())
    }

    /// 해당 월 재직 일수 (입사/퇴사 월은 일할)
    pub fn employed_days_in(&self, month: YearMonth) -> u32 {
        let from = self.hire_date.max(month.first_day());
        let to = match self.resign_date {
            Some(resign_date) => resign_date.min(month.last_day()),
            None => month.last_day(),
        };

        if to < from {
            0
        } else {
            ((to - from).num_days() + 1) as u32
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// 강남점 월급 30,000 THB, 09:00-18:00
    pub fn monthly(name: &str) -> Employee {
        let now = DateTime::now();
        Employee {
            id: None,
            name: name.to_string(),
            store: "강남점".to_string(),
            position: "주방".to_string(),
            employment_type: EmploymentType::Monthly,
            monthly_salary: 30_000.0,
            hourly_rate: 0.0,
            allowance: 0.0,
            work_start: "09:00".to_string(),
            work_end: "18:00".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            resign_date: None,
            status: EmployeeStatus::Active,
            sso_enrolled: true,
            annual_leave_days: 6.0,
            phone: None,
            bank_account: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 시급 60 THB 파트타이머, 17:00-22:00
    pub fn hourly(name: &str) -> Employee {
        Employee {
            employment_type: EmploymentType::Hourly,
            monthly_salary: 0.0,
            hourly_rate: 60.0,
            work_start: "17:00".to_string(),
            work_end: "22:00".to_string(),
            position: "홀".to_string(),
            ..monthly(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_terms_requires_pay() {
        let mut employee = monthly("홍길동");
        assert!(employee.validate_terms().is_ok());

        employee.monthly_salary = 0.0;
        assert!(employee.validate_terms().is_err());

        let mut part_timer = hourly("이영희");
        part_timer.hourly_rate = -1.0;
        assert!(part_timer.validate_terms().is_err());
    }

    #[test]
    fn test_validate_terms_rejects_same_start_end() {
        let mut employee = monthly("홍길동");
        employee.work_end = "09:00".to_string();
        assert!(employee.validate_terms().is_err());
    }

    #[test]
    fn test_employed_days_prorates_hire_and_resign() {
        let month = YearMonth::parse("2026-10").unwrap();
        let mut employee = monthly("홍길동");
        assert_eq!(employee.employed_days_in(month), 31);

        employee.hire_date = date(2026, 10, 11);
        assert_eq!(employee.employed_days_in(month), 21);

        employee.resign_date = Some(date(2026, 10, 20));
        assert_eq!(employee.employed_days_in(month), 10);

        employee.hire_date = date(2026, 11, 1);
        employee.resign_date = None;
        assert_eq!(employee.employed_days_in(month), 0);
    }

    #[test]
    fn test_employment_type_serde() {
        assert_eq!(serde_json::to_string(&EmploymentType::Hourly).unwrap(), "\"hourly\"");
    }
}
