//! 거래처/재고/발주 리포지토리

pub mod vendor_repo;
pub mod item_repo;
pub mod order_repo;

pub use vendor_repo::VendorRepository;
pub use item_repo::ItemRepository;
pub use order_repo::OrderRepository;
