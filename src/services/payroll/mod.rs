//! 급여 서비스 모듈
//!
//! - [`calculator`] - 명세 계산 (순수 함수)
//! - [`payroll_service`] - 미리보기, 매장 일괄 계산, 승인

pub mod calculator;
pub mod payroll_service;

pub use payroll_service::*;
