//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리 유틸리티
//! - [`date_utils`] - 급여월, 근무 스케줄, 기간 계산
//! - [`money`] - `Decimal` 기반 금액 계산과 반올림
//! - [`display_terminal`] - 기동 로그 포맷팅

pub mod string_utils;
pub mod date_utils;
pub mod money;
pub mod display_terminal;
