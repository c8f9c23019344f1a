//! 번역 서비스 모듈 (Google Cloud Translation v2)

pub mod translation_service;

pub use translation_service::*;
