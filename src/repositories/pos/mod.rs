//! POS 리포지토리

pub mod menu_repo;
pub mod coupon_repo;
pub mod settlement_repo;

pub use menu_repo::MenuRepository;
pub use coupon_repo::CouponRepository;
pub use settlement_repo::SettlementRepository;
