//! # 직원 관리 서비스
//!
//! 직원 등록, 조건 변경, 퇴사 처리를 담당합니다.
//! 이름과 매장은 근태/휴가/급여 문서가 참조하는 키이므로 등록 후 변경하지 않습니다.

use std::sync::Arc;
use mongodb::bson::{doc, to_document, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::employees::{CreateEmployeeRequest, EmployeeQuery, EmployeeResponse, UpdateEmployeeRequest},
    domain::entities::hr::employee::{default_annual_leave_days, Employee, EmploymentType},
    domain::models::status::EmployeeStatus,
    errors::errors::AppError,
    repositories::hr::EmployeeRepository,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

#[service(name = "employee")]
pub struct EmployeeService {
    employee_repo: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// 직원 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 급여 조건 누락, 스케줄 형식 오류
    /// * `AppError::ConflictError` - 같은 매장에 같은 이름의 직원이 있음
    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<EmployeeResponse, AppError> {
        let now = DateTime::now();
        let employee = Employee {
            id: None,
            name: validate_required_string(&request.name, "이름")?,
            store: validate_required_string(&request.store, "매장명")?,
            position: validate_required_string(&request.position, "직책")?,
            employment_type: request.employment_type,
            monthly_salary: match request.employment_type {
                EmploymentType::Monthly => request.monthly_salary.unwrap_or(0.0),
                EmploymentType::Hourly => 0.0,
            },
            hourly_rate: match request.employment_type {
                EmploymentType::Hourly => request.hourly_rate.unwrap_or(0.0),
                EmploymentType::Monthly => 0.0,
            },
            allowance: request.allowance.unwrap_or(0.0),
            work_start: request.work_start.trim().to_string(),
            work_end: request.work_end.trim().to_string(),
            hire_date: request.hire_date,
            resign_date: None,
            status: EmployeeStatus::Active,
            sso_enrolled: request.sso_enrolled.unwrap_or(true),
            annual_leave_days: request.annual_leave_days.unwrap_or_else(default_annual_leave_days),
            phone: clean_optional_string(request.phone),
            bank_account: clean_optional_string(request.bank_account),
            created_at: now,
            updated_at: now,
        };

        employee.validate_terms()?;

        let created = self.employee_repo.create(employee).await?;
        log::info!("직원 등록: {} / {} ({:?})", created.store, created.name, created.employment_type);

        Ok(EmployeeResponse::from(created))
    }

    pub async fn get_employee(&self, id: &str) -> Result<EmployeeResponse, AppError> {
        let employee = self.find_employee(id).await?;
        Ok(EmployeeResponse::from(employee))
    }

    pub async fn list_employees(&self, query: EmployeeQuery) -> Result<Vec<EmployeeResponse>, AppError> {
        let status = query.status.as_deref().map(EmployeeStatus::parse).transpose()?;
        let store = clean_optional_string(query.store);

        let employees = self.employee_repo.find_all(store.as_deref(), status).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// 부분 수정 후 급여 조건·스케줄을 다시 검증합니다.
    pub async fn update_employee(&self, id: &str, request: UpdateEmployeeRequest) -> Result<EmployeeResponse, AppError> {
        let mut employee = self.find_employee(id).await?;
        apply_update(&mut employee, request)?;
        employee.validate_terms()?;

        let mut update_doc = to_document(&employee)
            .map_err(|e| AppError::InternalError(format!("직원 문서 직렬화 실패: {}", e)))?;
        for key in ["_id", "name", "store", "created_at", "updated_at"] {
            update_doc.remove(key);
        }

        let updated = self.employee_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;

        log::info!("직원 정보 수정: {} / {}", updated.store, updated.name);
        Ok(EmployeeResponse::from(updated))
    }

    /// 퇴사 처리
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 퇴사한 직원
    /// * `AppError::ValidationError` - 퇴사일이 입사일보다 빠름
    pub async fn resign_employee(&self, id: &str, resign_date: chrono::NaiveDate) -> Result<EmployeeResponse, AppError> {
        let employee = self.find_employee(id).await?;

        if employee.status == EmployeeStatus::Resigned {
            return Err(AppError::ConflictError(format!("이미 퇴사 처리된 직원입니다: {}", employee.name)));
        }
        if resign_date < employee.hire_date {
            return Err(AppError::ValidationError("퇴사일은 입사일보다 빠를 수 없습니다".to_string()));
        }

        let updated = self.employee_repo
            .update(id, doc! {
                "status": EmployeeStatus::Resigned.as_str(),
                "resign_date": resign_date.to_string(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;

        log::info!("직원 퇴사 처리: {} / {} ({})", updated.store, updated.name, resign_date);
        Ok(EmployeeResponse::from(updated))
    }

    async fn find_employee(&self, id: &str) -> Result<Employee, AppError> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))
    }
}

/// 요청에 있는 필드만 덮어씁니다. 급여 형태가 바뀌면 반대쪽 단가는 0으로 둡니다.
fn apply_update(employee: &mut Employee, request: UpdateEmployeeRequest) -> Result<(), AppError> {
    if let Some(position) = request.position {
        employee.position = validate_required_string(&position, "직책")?;
    }
    if let Some(employment_type) = request.employment_type {
        employee.employment_type = employment_type;
    }
    if let Some(salary) = request.monthly_salary {
        employee.monthly_salary = salary;
    }
    if let Some(rate) = request.hourly_rate {
        employee.hourly_rate = rate;
    }
    match employee.employment_type {
        EmploymentType::Monthly => employee.hourly_rate = 0.0,
        EmploymentType::Hourly => employee.monthly_salary = 0.0,
    }
    if let Some(allowance) = request.allowance {
        employee.allowance = allowance;
    }
    if let Some(start) = request.work_start {
        employee.work_start = start.trim().to_string();
    }
    if let Some(end) = request.work_end {
        employee.work_end = end.trim().to_string();
    }
    if let Some(enrolled) = request.sso_enrolled {
        employee.sso_enrolled = enrolled;
    }
    if let Some(days) = request.annual_leave_days {
        employee.annual_leave_days = days;
    }
    if request.phone.is_some() {
        employee.phone = clean_optional_string(request.phone);
    }
    if request.bank_account.is_some() {
        employee.bank_account = clean_optional_string(request.bank_account);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hr::employee::fixtures::monthly;

    #[test]
    fn test_switching_to_hourly_clears_salary() {
        let mut employee = monthly("홍길동");
        let request = UpdateEmployeeRequest {
            employment_type: Some(EmploymentType::Hourly),
            hourly_rate: Some(70.0),
            ..Default::default()
        };

        apply_update(&mut employee, request).unwrap();

        assert_eq!(employee.employment_type, EmploymentType::Hourly);
        assert_eq!(employee.monthly_salary, 0.0);
        assert_eq!(employee.hourly_rate, 70.0);
        assert!(employee.validate_terms().is_ok());
    }

    #[test]
    fn test_switching_without_rate_fails_validation() {
        let mut employee = monthly("홍길동");
        let request = UpdateEmployeeRequest {
            employment_type: Some(EmploymentType::Hourly),
            ..Default::default()
        };

        apply_update(&mut employee, request).unwrap();
        assert!(matches!(employee.validate_terms(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_blank_position_rejected() {
        let mut employee = monthly("홍길동");
        let request = UpdateEmployeeRequest {
            position: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(apply_update(&mut employee, request).is_err());
    }
}
