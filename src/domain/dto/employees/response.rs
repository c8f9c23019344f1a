use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::hr::employee::{Employee, EmploymentType};
use crate::domain::models::status::EmployeeStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub store: String,
    pub position: String,
    pub employment_type: EmploymentType,
    pub monthly_salary: f64,
    pub hourly_rate: f64,
    pub allowance: f64,
    pub work_start: String,
    pub work_end: String,
    pub hire_date: NaiveDate,
    pub resign_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub sso_enrolled: bool,
    pub annual_leave_days: f64,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: employee.name,
            store: employee.store,
            position: employee.position,
            employment_type: employee.employment_type,
            monthly_salary: employee.monthly_salary,
            hourly_rate: employee.hourly_rate,
            allowance: employee.allowance,
            work_start: employee.work_start,
            work_end: employee.work_end,
            hire_date: employee.hire_date,
            resign_date: employee.resign_date,
            status: employee.status,
            sso_enrolled: employee.sso_enrolled,
            annual_leave_days: employee.annual_leave_days,
            phone: employee.phone,
            bank_account: employee.bank_account,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
