//! # Domain Layer Module
//!
//! 매장 ERP의 도메인 계층입니다. 서비스와 리포지토리는 이 모듈의 타입만 주고받습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서 (직원, 근태, 휴가, 급여명세, 재고, POS, 매장 운영)
//! ├── dto        - HTTP 요청/응답 (validator 검증 포함)
//! └── models     - 값 객체 (상태 열거형, 인증 사용자, JWT 클레임)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 문자열 참조
//!
//! 컬렉션 간 관계는 외래 키가 아닌 매장명/직원명 문자열 일치로 연결됩니다.
//! 따라서 `(store, name)` 유일성은 서비스가 생성 시점에 검사하고, 이름과 매장은
//! 생성 후 변경하지 않습니다.
//!
//! ## 상태 문자열
//!
//! 결재성 문서의 상태는 `"대기"` → `"승인"` | `"반려"` 로만 전이하며,
//! 이미 처리된 문서를 다시 결재하면 `AppError::ConflictError`(409)를 반환합니다.
//! 발주는 `"승인"` → `"입고완료"`, 고객 불만은 `"대기"` → `"처리완료"`가 추가됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::*;
