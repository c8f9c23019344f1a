//! 미들웨어 모듈
//!
//! 라우트 스코프마다 JWT 인증과 역할 검사를 붙입니다.
//!
//! ```rust,ignore
//! use crate::config::roles;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/payroll")
//!     .wrap(AuthMiddleware::required_with_role(roles::ADMIN))
//!     .service(run_payroll);
//!
//! web::scope("/api/v1/attendance")
//!     .wrap(AuthMiddleware::required_with_roles(vec![roles::ADMIN, roles::MANAGER]))
//!     .service(clock_in);
//! ```
//!
//! 매장 단위 권한(매니저는 소속 매장만)은 역할 검사 이후 핸들러에서
//! [`AuthenticatedUser::ensure_store_access`](crate::domain::models::auth::AuthenticatedUser::ensure_store_access)로 확인합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
