//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, 조회가 잦은 직원/공휴일은 Redis로 캐싱합니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |-----------|--------|------|
//! | `EmployeeRepository` | `employees` | `employee:{id}`, `employee:{store}:{name}` 10분 |
//! | `AttendanceRepository` | `attendance_logs` | - |
//! | `LeaveRepository` | `leave_requests` | - |
//! | `HolidayRepository` | `public_holidays` | `holiday:{year}` 1일 |
//! | `PayrollRepository` | `payrolls` | - |
//! | `VendorRepository` | `vendors` | - |
//! | `ItemRepository` | `items` | - |
//! | `OrderRepository` | `orders` | - |
//! | `MenuRepository` | `pos_menus` | - |
//! | `CouponRepository` | `pos_coupons` | - |
//! | `SettlementRepository` | `pos_settlements` | - |
//! | `NoticeRepository` | `notices` | - |
//! | `InspectionRepository` | `check_results` | - |
//! | `ComplaintRepository` | `complaint_logs` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::hr::EmployeeRepository;
//!
//! let employee_repo = EmployeeRepository::instance();
//! let employee = employee_repo.find_by_name("강남점", "홍길동").await?;
//! ```

pub mod hr;
pub mod inventory;
pub mod pos;
pub mod stores;

use futures_util::StreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Cursor;
use serde::de::DeserializeOwned;
use crate::errors::errors::AppError;

/// 16진수 문자열 ID를 `ObjectId`로 변환합니다.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 커서를 끝까지 읽어 벡터로 모읍니다.
pub(crate) async fn collect_cursor<T>(mut cursor: Cursor<T>) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let mut items = Vec::new();
    while let Some(item) = cursor.next().await {
        items.push(item.map_err(|e| AppError::DatabaseError(e.to_string()))?);
    }
    Ok(items)
}

/// 삽입 결과에서 생성된 `ObjectId`를 꺼냅니다.
pub(crate) fn inserted_object_id(result: &mongodb::results::InsertOneResult) -> Result<ObjectId, AppError> {
    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError("삽입된 문서 ID를 확인할 수 없습니다".to_string()))
}

/// 유니크 인덱스 위반(E11000)은 409로, 나머지는 DB 에러로 변환합니다.
pub(crate) fn map_write_error(e: mongodb::error::Error, conflict_message: &str) -> AppError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000 => {
            AppError::ConflictError(conflict_message.to_string())
        }
        _ => AppError::DatabaseError(e.to_string()),
    }
}

/// 기동 시 모든 컬렉션 인덱스를 생성합니다. 이미 있는 인덱스는 그대로 둡니다.
pub async fn ensure_indexes() -> Result<(), AppError> {
    hr::EmployeeRepository::instance().create_indexes().await?;
    hr::AttendanceRepository::instance().create_indexes().await?;
    hr::LeaveRepository::instance().create_indexes().await?;
    hr::HolidayRepository::instance().create_indexes().await?;
    hr::PayrollRepository::instance().create_indexes().await?;
    inventory::VendorRepository::instance().create_indexes().await?;
    inventory::ItemRepository::instance().create_indexes().await?;
    inventory::OrderRepository::instance().create_indexes().await?;
    pos::MenuRepository::instance().create_indexes().await?;
    pos::CouponRepository::instance().create_indexes().await?;
    pos::SettlementRepository::instance().create_indexes().await?;
    stores::NoticeRepository::instance().create_indexes().await?;
    stores::InspectionRepository::instance().create_indexes().await?;
    stores::ComplaintRepository::instance().create_indexes().await?;

    log::info!("✅ MongoDB 인덱스 확인 완료");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
