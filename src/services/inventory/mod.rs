//! 거래처 / 재고 / 발주 서비스 모듈

pub mod vendor_service;
pub mod item_service;
pub mod order_service;

pub use vendor_service::*;
pub use item_service::*;
pub use order_service::*;
