//! POS 서비스 모듈: 메뉴, 쿠폰, 일 마감 정산

pub mod menu_service;
pub mod coupon_service;
pub mod settlement_service;

pub use menu_service::*;
pub use coupon_service::*;
pub use settlement_service::*;
