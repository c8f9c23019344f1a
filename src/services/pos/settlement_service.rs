//! # 일 마감 정산 서비스
//!
//! 결제수단 합계(카드 + 현금 + 계좌이체)는 순매출(총매출 - 할인)과
//! 0.01 이내로 일치해야 하며, 현금 과부족은 실사 현금 - 현금 매출입니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use rust_decimal::Decimal;
use singleton_macro::service;
use crate::{
    domain::dto::pos::{SettlementResponse, SettlementSummary, SubmitSettlementRequest},
    domain::entities::pos::PosSettlement,
    domain::models::status::ApprovalStatus,
    errors::errors::AppError,
    repositories::pos::SettlementRepository,
    utils::date_utils::YearMonth,
    utils::money::{money_eq, to_decimal, to_f64},
    utils::string_utils::{clean_optional_string, validate_required_string},
};

#[service(name = "settlement")]
pub struct SettlementService {
    settlement_repo: Arc<SettlementRepository>,
}

impl SettlementService {
    /// 정산 제출
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 결제수단 합계 불일치, 할인이 총매출 초과
    /// * `AppError::ConflictError` - 같은 영업일 정산이 이미 있음
    pub async fn submit(&self, request: SubmitSettlementRequest, submitted_by: &str) -> Result<SettlementResponse, AppError> {
        let settlement = build_settlement(request, submitted_by)?;
        let created = self.settlement_repo.create(settlement).await?;

        log::info!(
            "정산 제출: {} {} 순매출 {} 현금 과부족 {}",
            created.store, created.business_date, created.net_sales, created.cash_difference
        );
        Ok(SettlementResponse::from(created))
    }

    pub async fn approve(&self, id: &str, reviewer: &str) -> Result<SettlementResponse, AppError> {
        let current = self.settlement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("정산을 찾을 수 없습니다".to_string()))?;
        current.status.ensure_pending()?;

        let approved = self.settlement_repo
            .approve(id, reviewer)
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 정산입니다".to_string()))?;

        log::info!("정산 승인: {} {} (결재자 {})", approved.store, approved.business_date, reviewer);
        Ok(SettlementResponse::from(approved))
    }

    pub async fn list(&self, store: &str, month: YearMonth) -> Result<Vec<SettlementResponse>, AppError> {
        let settlements = self.settlement_repo.find_by_month(store, month).await?;
        Ok(settlements.into_iter().map(SettlementResponse::from).collect())
    }

    pub async fn monthly_summary(&self, store: &str, month: YearMonth) -> Result<SettlementSummary, AppError> {
        let settlements = self.settlement_repo.find_by_month(store, month).await?;
        Ok(summarize(store, month, &settlements))
    }
}

fn build_settlement(request: SubmitSettlementRequest, submitted_by: &str) -> Result<PosSettlement, AppError> {
    let total = to_decimal(request.total_sales);
    let discount = to_decimal(request.discount_total);
    if discount > total {
        return Err(AppError::ValidationError("할인 합계가 총매출보다 클 수 없습니다".to_string()));
    }

    let net = total - discount;
    let tendered = to_decimal(request.card_sales) + to_decimal(request.cash_sales) + to_decimal(request.transfer_sales);
    if !money_eq(tendered, net) {
        return Err(AppError::ValidationError(format!(
            "결제수단 합계({})가 순매출({})과 일치하지 않습니다",
            to_f64(tendered),
            to_f64(net)
        )));
    }

    let cash_difference = to_decimal(request.cash_counted) - to_decimal(request.cash_sales);

    let now = DateTime::now();
    Ok(PosSettlement {
        id: None,
        store: validate_required_string(&request.store, "매장명")?,
        business_date: request.business_date,
        total_sales: request.total_sales,
        discount_total: request.discount_total,
        net_sales: to_f64(net),
        card_sales: request.card_sales,
        cash_sales: request.cash_sales,
        transfer_sales: request.transfer_sales,
        cash_counted: request.cash_counted,
        cash_difference: to_f64(cash_difference),
        status: ApprovalStatus::Pending,
        submitted_by: submitted_by.to_string(),
        reviewer: None,
        memo: clean_optional_string(request.memo),
        created_at: now,
        updated_at: now,
    })
}

fn summarize(store: &str, month: YearMonth, settlements: &[PosSettlement]) -> SettlementSummary {
    let sum = |f: fn(&PosSettlement) -> f64| -> f64 {
        to_f64(settlements.iter().map(|s| to_decimal(f(s))).sum::<Decimal>())
    };

    SettlementSummary {
        store: store.to_string(),
        month: Some(month),
        days: settlements.len() as u32,
        total_sales: sum(|s| s.total_sales),
        discount_total: sum(|s| s.discount_total),
        net_sales: sum(|s| s.net_sales),
        card_sales: sum(|s| s.card_sales),
        cash_sales: sum(|s| s.cash_sales),
        transfer_sales: sum(|s| s.transfer_sales),
        cash_difference: sum(|s| s.cash_difference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(card: f64, cash: f64, transfer: f64, counted: f64) -> SubmitSettlementRequest {
        SubmitSettlementRequest {
            store: "강남점".to_string(),
            business_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            total_sales: 10_000.0,
            discount_total: 500.0,
            card_sales: card,
            cash_sales: cash,
            transfer_sales: transfer,
            cash_counted: counted,
            memo: None,
        }
    }

    #[test]
    fn test_tenders_must_match_net_sales() {
        let settlement = build_settlement(request(6_000.0, 2_500.0, 1_000.0, 2_480.0), "김매니저").unwrap();

        assert_eq!(settlement.net_sales, 9_500.0);
        assert_eq!(settlement.cash_difference, -20.0);
        assert_eq!(settlement.status, ApprovalStatus::Pending);

        assert!(matches!(
            build_settlement(request(6_000.0, 2_500.0, 900.0, 2_500.0), "김매니저"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_tolerance_of_one_satang() {
        assert!(build_settlement(request(6_000.0, 2_500.01, 1_000.0, 2_500.0), "김매니저").is_ok());
        assert!(build_settlement(request(6_000.0, 2_500.02, 1_000.0, 2_500.0), "김매니저").is_err());
    }

    #[test]
    fn test_monthly_summary_totals() {
        let first = build_settlement(request(6_000.0, 2_500.0, 1_000.0, 2_480.0), "김매니저").unwrap();
        let second = PosSettlement {
            business_date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
            cash_counted: 2_510.0,
            cash_difference: 10.0,
            ..first.clone()
        };

        let summary = summarize("강남점", YearMonth::parse("2026-10").unwrap(), &[first, second]);

        assert_eq!(summary.days, 2);
        assert_eq!(summary.total_sales, 20_000.0);
        assert_eq!(summary.net_sales, 19_000.0);
        assert_eq!(summary.cash_difference, -10.0);
    }
}
