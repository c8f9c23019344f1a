//! API 라우트 설정 모듈
//!
//! 도메인별 스코프에 인증 미들웨어를 붙여 등록합니다.
//!
//! | 스코프 | 필요 역할 |
//! |--------|-----------|
//! | `/health` | 없음 |
//! | `/api/v1/me` | admin, manager |
//! | `/api/v1/employees`, `/api/v1/payroll`, `/api/v1/holidays` | admin |
//! | `/api/v1/attendance`, `/api/v1/leave` | admin, manager |
//! | `/api/v1/vendors`, `/api/v1/items`, `/api/v1/orders` | admin, manager |
//! | `/api/v1/menus`, `/api/v1/coupons`, `/api/v1/settlements` | admin, manager |
//! | `/api/v1/notices`, `/api/v1/translate` | admin, manager |
//! | `/api/v1/checks`, `/api/v1/complaints` | admin, manager |
//!
//! 매니저의 매장 범위 제한은 핸들러에서 확인합니다.
//!
//! `/{id}` 패턴보다 고정 경로(`/summary`, `/low-stock`, `/balance` ...)를 먼저 등록해야 합니다.

use crate::config::roles;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1/me")
            .wrap(store_staff())
            .service(handlers::auth::get_current_user)
    );

    configure_hr_routes(cfg);
    configure_inventory_routes(cfg);
    configure_pos_routes(cfg);
    configure_store_ops_routes(cfg);
}

fn headquarters() -> AuthMiddleware {
    AuthMiddleware::required_with_role(roles::ADMIN)
}

fn store_staff() -> AuthMiddleware {
    AuthMiddleware::required_with_roles(vec![roles::ADMIN, roles::MANAGER])
}

fn configure_hr_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .wrap(headquarters())
            .service(handlers::employees::create_employee)
            .service(handlers::employees::list_employees)
            .service(handlers::employees::get_employee)
            .service(handlers::employees::update_employee)
            .service(handlers::employees::resign_employee)
    );

    cfg.service(
        web::scope("/api/v1/holidays")
            .wrap(headquarters())
            .service(handlers::holidays::create_holiday)
            .service(handlers::holidays::list_holidays)
            .service(handlers::holidays::delete_holiday)
    );

    cfg.service(
        web::scope("/api/v1/payroll")
            .wrap(headquarters())
            .service(handlers::payroll::preview_payslip)
            .service(handlers::payroll::run_payroll)
            .service(handlers::payroll::list_payslips)
            .service(handlers::payroll::get_payslip)
            .service(handlers::payroll::approve_payslip)
    );

    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(store_staff())
            .service(handlers::attendance::clock_in)
            .service(handlers::attendance::clock_out)
            .service(handlers::attendance::monthly_summary)
            .service(handlers::attendance::list_logs)
            .service(handlers::attendance::review_overtime)
    );

    cfg.service(
        web::scope("/api/v1/leave")
            .wrap(store_staff())
            .service(handlers::leave::create_leave)
            .service(handlers::leave::leave_balance)
            .service(handlers::leave::list_leaves)
            .service(handlers::leave::approve_leave)
            .service(handlers::leave::reject_leave)
    );
}

fn configure_inventory_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/vendors")
            .wrap(store_staff())
            .service(handlers::inventory::create_vendor)
            .service(handlers::inventory::list_vendors)
            .service(handlers::inventory::get_vendor)
            .service(handlers::inventory::update_vendor)
            .service(handlers::inventory::delete_vendor)
    );

    cfg.service(
        web::scope("/api/v1/items")
            .wrap(store_staff())
            .service(handlers::inventory::create_item)
            .service(handlers::inventory::low_stock_items)
            .service(handlers::inventory::list_items)
            .service(handlers::inventory::get_item)
            .service(handlers::inventory::update_item)
            .service(handlers::inventory::adjust_stock)
            .service(handlers::inventory::delete_item)
    );

    cfg.service(
        web::scope("/api/v1/orders")
            .wrap(store_staff())
            .service(handlers::inventory::create_order)
            .service(handlers::inventory::list_orders)
            .service(handlers::inventory::get_order)
            .service(handlers::inventory::approve_order)
            .service(handlers::inventory::reject_order)
            .service(handlers::inventory::receive_order)
    );
}

fn configure_pos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/menus")
            .wrap(store_staff())
            .service(handlers::pos::create_menu)
            .service(handlers::pos::list_menus)
            .service(handlers::pos::update_menu)
            .service(handlers::pos::toggle_menu)
            .service(handlers::pos::delete_menu)
    );

    cfg.service(
        web::scope("/api/v1/coupons")
            .wrap(store_staff())
            .service(handlers::pos::quote_coupon)
            .service(handlers::pos::create_coupon)
            .service(handlers::pos::list_coupons)
            .service(handlers::pos::redeem_coupon)
            .service(handlers::pos::deactivate_coupon)
    );

    cfg.service(
        web::scope("/api/v1/settlements")
            .wrap(store_staff())
            .service(handlers::pos::submit_settlement)
            .service(handlers::pos::settlement_summary)
            .service(handlers::pos::list_settlements)
            .service(handlers::pos::approve_settlement)
    );
}

fn configure_store_ops_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notices")
            .wrap(store_staff())
            .service(handlers::notices::create_notice)
            .service(handlers::notices::list_notices)
            .service(handlers::notices::get_notice)
            .service(handlers::notices::update_notice)
            .service(handlers::notices::delete_notice)
            .service(handlers::notices::translate_notice)
    );

    cfg.service(
        web::scope("/api/v1/translate")
            .wrap(store_staff())
            .service(handlers::notices::translate_text)
    );

    cfg.service(
        web::scope("/api/v1/checks")
            .wrap(store_staff())
            .service(handlers::visits::create_check)
            .service(handlers::visits::list_checks)
            .service(handlers::visits::get_check)
    );

    cfg.service(
        web::scope("/api/v1/complaints")
            .wrap(store_staff())
            .service(handlers::visits::create_complaint)
            .service(handlers::visits::list_complaints)
            .service(handlers::visits::resolve_complaint)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "store_erp_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::services::auth::token_service::TokenService;

    #[actix_web::test]
    async fn test_health_is_public() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_api_requires_token() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        for uri in ["/api/v1/me", "/api/v1/payroll", "/api/v1/notices"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_review_routes_reject_non_store_roles() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let token = TokenService::instance()
            .issue_token("u-9", "아르바이트", Some("강남점"), &["staff"])
            .unwrap();

        for uri in [
            "/api/v1/leave/6700000000000000000000aa/approve",
            "/api/v1/leave/6700000000000000000000aa/reject",
            "/api/v1/attendance/6700000000000000000000aa/overtime",
            "/api/v1/complaints/6700000000000000000000aa/resolve",
        ] {
            let req = test::TestRequest::post()
                .uri(uri)
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", uri);
        }
    }
}
