//! 매장 운영 엔티티: 공지, 방문 점검, 고객 불만

pub mod notice;
pub mod check_result;
pub mod complaint_log;

pub use notice::{Notice, NoticeTranslation};
pub use check_result::{CheckItem, CheckResult};
pub use complaint_log::ComplaintLog;
