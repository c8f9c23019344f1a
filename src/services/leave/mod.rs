pub mod leave_service;

pub use leave_service::*;
