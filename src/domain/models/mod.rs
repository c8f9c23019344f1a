//! # Domain Models
//!
//! 엔티티가 아닌 값 객체들입니다.
//!
//! - [`status`] - 한글 상태 문자열과 매핑되는 상태 열거형
//! - [`auth`] - 인증된 사용자, 인증 모드/역할 요구사항
//! - [`token`] - JWT 클레임

pub mod status;
pub mod auth;
pub mod token;
