//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 `dotenv`로 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS
//! - [`auth_config`] - JWT 검증, 번역 API 연동
//! - [`business_config`] - 근태 판정 / 급여 계산 규칙, 사회보험 상한 테이블
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{PayrollRules, ServerConfig};
//!
//! let rules = PayrollRules::from_env();
//! let bind = ServerConfig::bind_address();
//! ```

pub mod data_config;
pub mod auth_config;
pub mod business_config;

pub use data_config::*;
pub use auth_config::*;
pub use business_config::*;
