//! 휴가 요청 DTO

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::hr::leave_request::{LeaveType, MAX_LEAVE_SPAN_DAYS};
use crate::utils::date_utils::span_days;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_leave_period"))]
pub struct CreateLeaveRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,

    #[validate(length(min = 1, message = "직원명은 필수입니다"))]
    pub employee_name: String,

    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "사유는 500자 이하여야 합니다"))]
    pub reason: Option<String>,
}

fn validate_leave_period(req: &CreateLeaveRequest) -> Result<(), ValidationError> {
    if req.end_date < req.start_date {
        return Err(ValidationError::new("invalid_period")
            .with_message("종료일은 시작일보다 빠를 수 없습니다".into()));
    }
    if span_days(req.start_date, req.end_date) > MAX_LEAVE_SPAN_DAYS {
        return Err(ValidationError::new("period_too_long")
            .with_message("휴가는 한 번에 366일까지 신청할 수 있습니다".into()));
    }
    if req.leave_type == LeaveType::HalfDay && req.start_date != req.end_date {
        return Err(ValidationError::new("half_day_single_date")
            .with_message("반차는 하루만 신청할 수 있습니다".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RejectLeaveRequest {
    #[validate(length(min = 1, max = 500, message = "반려 사유를 입력해주세요"))]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveQuery {
    pub store: Option<String>,
    pub employee_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaveBalanceQuery {
    pub store: String,
    pub employee_name: String,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(leave_type: LeaveType, start: (i32, u32, u32), end: (i32, u32, u32)) -> CreateLeaveRequest {
        CreateLeaveRequest {
            store: "강남점".to_string(),
            employee_name: "홍길동".to_string(),
            leave_type,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            reason: None,
        }
    }

    #[test]
    fn test_end_before_start_rejected() {
        let req = request(LeaveType::Annual, (2026, 10, 5), (2026, 10, 3));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_period_longer_than_a_year_rejected() {
        assert!(request(LeaveType::Unpaid, (2026, 1, 1), (2026, 12, 31)).validate().is_ok());
        assert!(request(LeaveType::Unpaid, (2026, 1, 1), (2027, 1, 2)).validate().is_err());
        assert!(request(LeaveType::Unpaid, (2026, 10, 1), (30000, 12, 31)).validate().is_err());
    }

    #[test]
    fn test_half_day_must_be_single_date() {
        assert!(request(LeaveType::HalfDay, (2026, 10, 5), (2026, 10, 5)).validate().is_ok());
        assert!(request(LeaveType::HalfDay, (2026, 10, 5), (2026, 10, 6)).validate().is_err());
    }
}
