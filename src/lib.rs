//! 매장 ERP 백엔드
//!
//! 외식 프랜차이즈 본사와 매장이 함께 쓰는 ERP API 서버입니다.
//!
//! # Features
//!
//! - **인사/근태**: 직원 관리, 출퇴근 판정(지각/조퇴/연장근무), 휴가와 잔여 연차
//! - **급여**: 월급제/시급제 급여 계산, 공휴일 수당, 태국 사회보험(SSO) 공제, 월 일괄 계산
//! - **재고/발주**: 거래처, 매장 재고, 발주 결재와 입고
//! - **POS**: 메뉴, 쿠폰 할인, 일 마감 정산
//! - **매장 운영**: 공지와 번역, 방문 점검, 고객 불만
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 스코프별 JWT 역할 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 매장 권한
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 업무 규칙, 순수 계산 함수
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use store_erp_backend::services::attendance::AttendanceService;
//!
//! let attendance = AttendanceService::instance();
//! let summary = attendance.monthly_summary("강남점", "홍길동", YearMonth::parse("2026-10")?).await?;
//! println!("지각 {}분", summary.late_minutes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
