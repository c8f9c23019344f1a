//! 에러 타입 모듈
//!
//! [`errors::AppError`]를 중심으로 모든 계층이 공유하는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::AppError;
