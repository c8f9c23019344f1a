//! POS 엔티티

pub mod menu;
pub mod coupon;
pub mod settlement;

pub use menu::PosMenu;
pub use coupon::{DiscountType, PosCoupon};
pub use settlement::PosSettlement;
