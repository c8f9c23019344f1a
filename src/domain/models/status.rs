//! 상태 값 모델
//!
//! 문서에는 기존 운영 데이터와 같은 한글 상태 문자열
//! (`"대기"`, `"승인"`, `"반려"`, ...)로 저장되고, 코드에서는 열거형으로 다룹니다.
//! 쿼리 필터에는 `as_str()` 값을 사용합니다.

use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 결재 상태: 휴가, 급여명세, 정산
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[serde(rename = "대기")]
    Pending,
    #[serde(rename = "승인")]
    Approved,
    #[serde(rename = "반려")]
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "대기",
            ApprovalStatus::Approved => "승인",
            ApprovalStatus::Rejected => "반려",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "대기" => Ok(ApprovalStatus::Pending),
            "승인" => Ok(ApprovalStatus::Approved),
            "반려" => Ok(ApprovalStatus::Rejected),
            other => Err(AppError::ValidationError(format!("알 수 없는 상태입니다: {}", other))),
        }
    }

    /// 대기 상태에서만 결재할 수 있습니다.
    pub fn ensure_pending(&self) -> Result<(), AppError> {
        if *self != ApprovalStatus::Pending {
            return Err(AppError::ConflictError(format!(
                "이미 처리된 요청입니다 (현재 상태: {})",
                self.as_str()
            )));
        }
        Ok(())
    }
}

/// 연장근무 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvertimeStatus {
    #[serde(rename = "없음")]
    None,
    #[serde(rename = "대기")]
    Pending,
    #[serde(rename = "승인")]
    Approved,
    #[serde(rename = "반려")]
    Rejected,
}

impl OvertimeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeStatus::None => "없음",
            OvertimeStatus::Pending => "대기",
            OvertimeStatus::Approved => "승인",
            OvertimeStatus::Rejected => "반려",
        }
    }
}

/// 발주 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "대기")]
    Pending,
    #[serde(rename = "승인")]
    Approved,
    #[serde(rename = "반려")]
    Rejected,
    #[serde(rename = "입고완료")]
    Received,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "대기",
            OrderStatus::Approved => "승인",
            OrderStatus::Rejected => "반려",
            OrderStatus::Received => "입고완료",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "대기" => Ok(OrderStatus::Pending),
            "승인" => Ok(OrderStatus::Approved),
            "반려" => Ok(OrderStatus::Rejected),
            "입고완료" => Ok(OrderStatus::Received),
            other => Err(AppError::ValidationError(format!("알 수 없는 발주 상태입니다: {}", other))),
        }
    }
}

/// 직원 재직 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "재직")]
    Active,
    #[serde(rename = "퇴사")]
    Resigned,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "재직",
            EmployeeStatus::Resigned => "퇴사",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "재직" => Ok(EmployeeStatus::Active),
            "퇴사" => Ok(EmployeeStatus::Resigned),
            other => Err(AppError::ValidationError(format!("알 수 없는 재직 상태입니다: {}", other))),
        }
    }
}

/// 고객 불만 처리 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[serde(rename = "대기")]
    Pending,
    #[serde(rename = "처리완료")]
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "대기",
            ComplaintStatus::Resolved => "처리완료",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "대기" => Ok(ComplaintStatus::Pending),
            "처리완료" => Ok(ComplaintStatus::Resolved),
            other => Err(AppError::ValidationError(format!("알 수 없는 처리 상태입니다: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_status_serializes_korean() {
        assert_eq!(serde_json::to_string(&ApprovalStatus::Pending).unwrap(), "\"대기\"");
        let parsed: ApprovalStatus = serde_json::from_str("\"반려\"").unwrap();
        assert_eq!(parsed, ApprovalStatus::Rejected);
    }

    #[test]
    fn test_ensure_pending() {
        assert!(ApprovalStatus::Pending.ensure_pending().is_ok());
        assert!(matches!(
            ApprovalStatus::Approved.ensure_pending(),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for status in [OrderStatus::Pending, OrderStatus::Approved, OrderStatus::Rejected, OrderStatus::Received] {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(EmployeeStatus::parse("휴직").is_err());
    }
}
