//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 문서 구조체들입니다.
//!
//! | 모듈 | 컬렉션 |
//! |------|--------|
//! | [`hr`] | `employees`, `attendance_logs`, `leave_requests`, `public_holidays`, `payrolls` |
//! | [`inventory`] | `vendors`, `items`, `orders` |
//! | [`pos`] | `pos_menus`, `pos_coupons`, `pos_settlements` |
//! | [`stores`] | `notices`, `check_results`, `complaint_logs` |
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며 (삽입 전 `None`),
//! 엔티티 간 관계는 매장명/직원명 문자열로 연결됩니다.
//! 날짜는 `YYYY-MM-DD` 문자열로 저장되어 범위 쿼리에 그대로 사용됩니다.

pub mod hr;
pub mod inventory;
pub mod pos;
pub mod stores;
