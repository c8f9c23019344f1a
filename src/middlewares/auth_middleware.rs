//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! Request Extensions에 넣습니다. 실패 시 401, 역할 부족 시 403을 바로 응답합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    /// 역할 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: &str) -> Self {
        Self::new_with_role(
            AuthMode::Required,
            RequiredRole::Single(role.to_string())
        )
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_role(
            AuthMode::Required,
            RequiredRole::Any(role_strings)
        )
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use crate::config::roles;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use super::*;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.name)
    }

    #[get("/open")]
    async fn open(req: actix_web::HttpRequest) -> HttpResponse {
        use actix_web::HttpMessage;
        let name = req.extensions()
            .get::<AuthenticatedUser>()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "guest".to_string());
        HttpResponse::Ok().body(name)
    }

    fn bearer(name: &str, role: &str) -> (&'static str, String) {
        let token = TokenService::instance()
            .issue_token("u-1", name, Some("강남점"), &[role])
            .unwrap();
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role(roles::ADMIN))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get().uri("/admin/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_role_requirement() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role(roles::ADMIN))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/admin/whoami")
            .insert_header(bearer("김매니저", roles::MANAGER))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/admin/whoami")
            .insert_header(bearer("본사관리자", roles::ADMIN))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "본사관리자".as_bytes());
    }

    #[actix_web::test]
    async fn test_any_of_roles() {
        let app = test::init_service(
            App::new().service(
                web::scope("/ops")
                    .wrap(AuthMiddleware::required_with_roles(vec![roles::ADMIN, roles::MANAGER]))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/ops/whoami")
            .insert_header(bearer("김매니저", roles::MANAGER))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/ops/whoami")
            .insert_header(bearer("아르바이트", "staff"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_optional_mode_lets_anonymous_through() {
        let app = test::init_service(
            App::new().service(
                web::scope("/public")
                    .wrap(AuthMiddleware::optional())
                    .service(open),
            ),
        ).await;

        let req = test::TestRequest::get().uri("/public/open").to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "guest".as_bytes());

        let req = test::TestRequest::get()
            .uri("/public/open")
            .insert_header(bearer("김매니저", roles::MANAGER))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "김매니저".as_bytes());
    }
}
