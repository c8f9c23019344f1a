//! 공지사항 서비스 모듈

pub mod notice_service;

pub use notice_service::*;
