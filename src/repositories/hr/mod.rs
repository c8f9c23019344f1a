//! 인사/근태/급여 리포지토리

pub mod employee_repo;
pub mod attendance_repo;
pub mod leave_repo;
pub mod holiday_repo;
pub mod payroll_repo;

pub use employee_repo::EmployeeRepository;
pub use attendance_repo::AttendanceRepository;
pub use leave_repo::LeaveRepository;
pub use holiday_repo::HolidayRepository;
pub use payroll_repo::PayrollRepository;
