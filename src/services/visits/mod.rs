//! 매장 방문 점검과 고객 불만 처리

pub mod visit_service;

pub use visit_service::*;
