//! 인사/근태/급여 엔티티

pub mod employee;
pub mod attendance_log;
pub mod leave_request;
pub mod public_holiday;
pub mod payslip;

pub use employee::{Employee, EmploymentType};
pub use attendance_log::AttendanceLog;
pub use leave_request::{LeaveRequest, LeaveType};
pub use public_holiday::PublicHoliday;
pub use payslip::{Deductions, Earnings, Payslip, WorkFigures};
