//! 근태 서비스 모듈
//!
//! - [`calculator`] - 출퇴근 판정과 집계 (순수 함수)
//! - [`attendance_service`] - 출퇴근 기록, 연장근무 결재, 월간 집계

pub mod calculator;
pub mod attendance_service;

pub use attendance_service::*;
