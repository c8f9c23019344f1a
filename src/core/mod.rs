//! # Core Framework Module
//!
//! ERP 백엔드를 구성하는 핵심 프레임워크 기능입니다.
//!
//! - [`registry`] - `ServiceLocator` 기반 싱글톤 의존성 주입 컨테이너
//! - 에러 타입은 [`crate::errors`]를 재노출하여 `crate::core::AppError`로도 접근할 수 있습니다.
//!
//! ```rust,ignore
//! #[repository(name = "employee", collection = "employees")]
//! pub struct EmployeeRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "employee")]
//! pub struct EmployeeService {
//!     employee_repo: Arc<EmployeeRepository>,  // 자동 주입
//! }
//! ```

pub mod registry;

pub use registry::*;
pub use crate::errors::errors::AppError;
