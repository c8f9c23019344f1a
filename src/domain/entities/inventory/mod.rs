//! 재고/발주 엔티티

pub mod vendor;
pub mod item;
pub mod purchase_order;

pub use vendor::Vendor;
pub use item::Item;
pub use purchase_order::{OrderLine, PurchaseOrder};
