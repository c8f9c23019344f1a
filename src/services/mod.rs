//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 등록되며, `Arc<...Repository>` / `Arc<...Service>`
//! 필드는 `ServiceLocator`가 자동으로 주입합니다.
//!
//! 규칙 계산(근태 판정, 급여, 휴가 일수, 쿠폰 할인...)은 DB에 의존하지 않는 순수 함수로 분리해
//! 각 모듈의 `#[cfg(test)]`에서 직접 검증합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::payroll::PayrollService;
//!
//! let payroll = PayrollService::instance();
//! let slips = payroll.run("강남점", YearMonth::parse("2026-10")?).await?;
//! ```

pub mod auth;
pub mod employees;
pub mod attendance;
pub mod leave;
pub mod holidays;
pub mod payroll;
pub mod inventory;
pub mod pos;
pub mod translation;
pub mod notices;
pub mod visits;
