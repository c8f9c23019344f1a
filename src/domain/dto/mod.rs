//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator::Validate`로 형식을 검증하고, 업무 규칙 검증
//! (중복, 잔여 연차, 상태 전이)은 서비스 계층에서 수행합니다.
//! 응답 DTO는 엔티티에서 `From`으로 변환하며 `_id`를 16진수 문자열 `id`로 노출합니다.
//!
//! ```text
//! dto/
//! ├── common          목록 래퍼, 메시지, 공통 쿼리
//! ├── employees       직원
//! ├── attendance      출퇴근, 월간 근태 집계
//! ├── leave           휴가 신청, 잔여 연차
//! ├── holidays        공휴일
//! ├── payroll         급여 미리보기/일괄 계산/명세
//! ├── inventory       거래처, 재고, 발주
//! ├── pos             메뉴, 쿠폰, 일 마감 정산
//! ├── notices         공지, 번역
//! └── visits          매장 점검, 고객 불만
//! ```

pub mod common;
pub mod employees;
pub mod attendance;
pub mod leave;
pub mod holidays;
pub mod payroll;
pub mod inventory;
pub mod pos;
pub mod notices;
pub mod visits;
