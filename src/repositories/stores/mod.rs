//! 매장 운영 리포지토리

pub mod notice_repo;
pub mod inspection_repo;
pub mod complaint_repo;

pub use notice_repo::NoticeRepository;
pub use inspection_repo::InspectionRepository;
pub use complaint_repo::ComplaintRepository;
