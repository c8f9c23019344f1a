//! # 발주 서비스
//!
//! ```text
//! 대기 ──approve──▶ 승인 ──receive──▶ 입고완료
//!   └───reject───▶ 반려
//! ```
//!
//! 입고 시 발주 품목마다 해당 매장 재고를 증가시킵니다.
//! 매장에 없는 품목이 있으면 상태를 바꾸기 전에 404로 실패합니다.
//! 입고 도중 품목이 삭제되면 이미 늘린 재고를 되돌리고 발주를 승인 상태로 되돌린 뒤 404입니다.

use std::sync::Arc;
use chrono::Local;
use mongodb::bson::{doc, Bson, DateTime};
use rust_decimal::Decimal;
use singleton_macro::service;
use crate::{
    domain::dto::inventory::{CreateOrderRequest, OrderLineRequest, OrderQuery, OrderResponse},
    domain::entities::inventory::{OrderLine, PurchaseOrder},
    domain::models::status::OrderStatus,
    errors::errors::AppError,
    repositories::inventory::{ItemRepository, OrderRepository, VendorRepository},
    utils::money::{to_decimal, to_f64, is_valid_amount},
    utils::string_utils::{clean_optional_string, validate_required_string},
};

#[service(name = "order")]
pub struct OrderService {
    order_repo: Arc<OrderRepository>,
    vendor_repo: Arc<VendorRepository>,
    item_repo: Arc<ItemRepository>,
}

impl OrderService {
    /// 발주 등록
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 거래처 없음
    /// * `AppError::ValidationError` - 품목 없음, 수량 0 이하
    pub async fn create_order(&self, request: CreateOrderRequest, requested_by: &str) -> Result<OrderResponse, AppError> {
        let vendor = self.vendor_repo
            .find_by_name(request.vendor_name.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("거래처를 찾을 수 없습니다: {}", request.vendor_name)))?;

        let (lines, total_amount) = build_lines(&request.lines)?;

        let now = DateTime::now();
        let order = PurchaseOrder {
            id: None,
            order_no: generate_order_no(),
            store: validate_required_string(&request.store, "매장명")?,
            vendor_name: vendor.name,
            lines,
            total_amount,
            status: OrderStatus::Pending,
            requested_by: requested_by.to_string(),
            reviewer: None,
            note: clean_optional_string(request.note),
            received_at: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.order_repo.create(order).await?;
        log::info!(
            "발주 등록: {} {} → {} ({}건, {})",
            created.order_no, created.store, created.vendor_name, created.lines.len(), created.total_amount
        );

        Ok(OrderResponse::from(created))
    }

    pub async fn get_order(&self, id: &str) -> Result<PurchaseOrder, AppError> {
        self.order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("발주를 찾을 수 없습니다".to_string()))
    }

    pub async fn list_orders(&self, query: OrderQuery) -> Result<Vec<OrderResponse>, AppError> {
        let status = query.status.as_deref().map(OrderStatus::parse).transpose()?;
        let store = clean_optional_string(query.store);

        let orders = self.order_repo.find_all(store.as_deref(), status).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn approve_order(&self, id: &str, reviewer: &str) -> Result<OrderResponse, AppError> {
        self.transition(id, OrderStatus::Pending, OrderStatus::Approved, reviewer).await
    }

    pub async fn reject_order(&self, id: &str, reviewer: &str) -> Result<OrderResponse, AppError> {
        self.transition(id, OrderStatus::Pending, OrderStatus::Rejected, reviewer).await
    }

    /// 입고 처리 (승인된 발주만)
    pub async fn receive_order(&self, id: &str, receiver: &str) -> Result<OrderResponse, AppError> {
        let order = self.get_order(id).await?;
        ensure_status(&order, OrderStatus::Approved)?;

        for line in &order.lines {
            if self.item_repo.find_by_name(&order.store, &line.item_name).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "{} 매장에 등록되지 않은 품목입니다: {}",
                    order.store, line.item_name
                )));
            }
        }

        let received = self.order_repo
            .transition(id, OrderStatus::Approved, doc! {
                "status": OrderStatus::Received.as_str(),
                "received_at": DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 발주입니다".to_string()))?;

        let mut stocked = 0;
        for line in &received.lines {
            match self.item_repo
                .receive_stock(&received.store, &line.item_name, line.quantity)
                .await
            {
                Ok(Some(item)) => {
                    log::debug!("입고: {} / {} +{} → {}", item.store, item.name, line.quantity, item.stock_qty);
                    stocked += 1;
                }
                Ok(None) => {
                    self.undo_receive(id, &received, stocked).await;
                    return Err(AppError::NotFound(format!(
                        "{} 매장에 등록되지 않은 품목입니다: {}",
                        received.store, line.item_name
                    )));
                }
                Err(e) => {
                    self.undo_receive(id, &received, stocked).await;
                    return Err(e);
                }
            }
        }

        log::info!("발주 입고 완료: {} ({}, 처리자 {})", received.order_no, received.store, receiver);
        Ok(OrderResponse::from(received))
    }

    /// 입고 실패 시 늘린 재고를 빼고 발주를 승인 상태로 되돌립니다.
    async fn undo_receive(&self, id: &str, order: &PurchaseOrder, stocked: usize) {
        for (item_name, delta) in compensating_deltas(&order.lines, stocked) {
            if let Err(e) = self.item_repo.receive_stock(&order.store, &item_name, delta).await {
                log::error!("입고 취소 재고 복구 실패: {} / {} ({})", order.store, item_name, e);
            }
        }

        let reverted = self.order_repo
            .transition(id, OrderStatus::Received, doc! {
                "status": OrderStatus::Approved.as_str(),
                "received_at": Bson::Null,
            })
            .await;
        match reverted {
            Ok(Some(_)) => log::warn!("발주 입고 취소: {} ({})", order.order_no, order.store),
            Ok(None) => log::error!("발주 상태 복구 실패: {} 입고완료 상태가 아님", order.order_no),
            Err(e) => log::error!("발주 상태 복구 실패: {} ({})", order.order_no, e),
        }
    }

    async fn transition(
        &self,
        id: &str,
        from: OrderStatus,
        to: OrderStatus,
        reviewer: &str,
    ) -> Result<OrderResponse, AppError> {
        let order = self.get_order(id).await?;
        ensure_status(&order, from)?;

        let updated = self.order_repo
            .transition(id, from, doc! { "status": to.as_str(), "reviewer": reviewer })
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 발주입니다".to_string()))?;

        log::info!("발주 {}: {} (결재자 {})", to.as_str(), updated.order_no, reviewer);
        Ok(OrderResponse::from(updated))
    }
}

fn ensure_status(order: &PurchaseOrder, expected: OrderStatus) -> Result<(), AppError> {
    if order.status != expected {
        return Err(AppError::ConflictError(format!(
            "{} 상태의 발주만 처리할 수 있습니다 (현재 상태: {})",
            expected.as_str(),
            order.status.as_str()
        )));
    }
    Ok(())
}

/// 품목별 금액(수량 × 단가)과 합계
fn build_lines(requests: &[OrderLineRequest]) -> Result<(Vec<OrderLine>, f64), AppError> {
    if requests.is_empty() {
        return Err(AppError::ValidationError("발주 품목이 최소 1개 필요합니다".to_string()));
    }

    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(requests.len());

    for request in requests {
        if !(request.quantity.is_finite() && request.quantity > 0.0) {
            return Err(AppError::ValidationError(format!("수량은 0보다 커야 합니다: {}", request.item_name)));
        }
        if !is_valid_amount(request.unit_price) {
            return Err(AppError::ValidationError(format!("단가는 0 이상이어야 합니다: {}", request.item_name)));
        }

        let amount = to_decimal(request.quantity) * to_decimal(request.unit_price);
        total += amount;

        lines.push(OrderLine {
            item_name: validate_required_string(&request.item_name, "품목명")?,
            quantity: request.quantity,
            unit_price: request.unit_price,
            amount: to_f64(amount),
        });
    }

    Ok((lines, to_f64(total)))
}

/// `PO-YYYYMMDD-XXXXXXXX`
fn generate_order_no() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("PO-{}-{}", Local::now().format("%Y%m%d"), suffix)
}

/// 앞에서부터 `stocked`개 품목의 입고 수량을 되돌리는 증감
fn compensating_deltas(lines: &[OrderLine], stocked: usize) -> Vec<(String, f64)> {
    lines
        .iter()
        .take(stocked)
        .map(|line| (line.item_name.clone(), -line.quantity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: f64, unit_price: f64) -> OrderLineRequest {
        OrderLineRequest {
            item_name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_lines_and_total() {
        let (lines, total) = build_lines(&[line("양파", 2.5, 1_200.0), line("대파", 3.0, 0.1)]).unwrap();

        assert_eq!(lines[0].amount, 3_000.0);
        assert_eq!(lines[1].amount, 0.3);
        assert_eq!(total, 3_000.3);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        assert!(build_lines(&[line("양파", 0.0, 1_200.0)]).is_err());
        assert!(build_lines(&[line("양파", -1.0, 1_200.0)]).is_err());
        assert!(build_lines(&[]).is_err());
    }

    #[test]
    fn test_failed_receive_undoes_only_stocked_lines() {
        let (lines, _) = build_lines(&[
            line("양파", 2.5, 1_200.0),
            line("대파", 3.0, 800.0),
            line("마늘", 1.0, 5_000.0),
        ]).unwrap();

        assert_eq!(
            compensating_deltas(&lines, 2),
            vec![("양파".to_string(), -2.5), ("대파".to_string(), -3.0)]
        );
        assert!(compensating_deltas(&lines, 0).is_empty());
    }

    #[test]
    fn test_order_no_format() {
        let order_no = generate_order_no();
        let parts: Vec<&str> = order_no.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "PO");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
