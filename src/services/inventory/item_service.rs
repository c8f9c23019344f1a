//! 재고 품목 서비스
//!
//! 재고 수량은 발주 입고와 수동 조정으로만 바뀌며 0 미만이 될 수 없습니다.

use std::sync::Arc;
use mongodb::bson::{DateTime, Document};
use singleton_macro::service;
use crate::{
    domain::dto::inventory::{AdjustStockRequest, CreateItemRequest, ItemResponse, UpdateItemRequest},
    domain::entities::inventory::Item,
    errors::errors::AppError,
    repositories::inventory::ItemRepository,
    utils::money::is_valid_amount,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

#[service(name = "item")]
pub struct ItemService {
    item_repo: Arc<ItemRepository>,
}

impl ItemService {
    pub async fn create_item(&self, request: CreateItemRequest) -> Result<ItemResponse, AppError> {
        let stock_qty = request.stock_qty.unwrap_or(0.0);
        let safety_stock = request.safety_stock.unwrap_or(0.0);
        if !is_valid_amount(request.unit_price) || !is_valid_amount(stock_qty) || !is_valid_amount(safety_stock) {
            return Err(AppError::ValidationError("단가와 수량은 0 이상이어야 합니다".to_string()));
        }

        let now = DateTime::now();
        let item = Item {
            id: None,
            store: validate_required_string(&request.store, "매장명")?,
            name: validate_required_string(&request.name, "품목명")?,
            category: clean_optional_string(request.category).unwrap_or_default(),
            unit: validate_required_string(&request.unit, "단위")?,
            unit_price: request.unit_price,
            stock_qty,
            safety_stock,
            vendor_name: clean_optional_string(request.vendor_name),
            created_at: now,
            updated_at: now,
        };

        let created = self.item_repo.create(item).await?;
        log::info!("품목 등록: {} / {} ({}{})", created.store, created.name, created.stock_qty, created.unit);
        Ok(ItemResponse::from(created))
    }

    pub async fn get_item(&self, id: &str) -> Result<Item, AppError> {
        self.item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("품목을 찾을 수 없습니다".to_string()))
    }

    pub async fn list_items(&self, store: &str, category: Option<String>) -> Result<Vec<ItemResponse>, AppError> {
        let category = clean_optional_string(category);
        let items = self.item_repo.find_by_store(store, category.as_deref()).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn low_stock(&self, store: &str) -> Result<Vec<ItemResponse>, AppError> {
        let items = self.item_repo.find_low_stock(store).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn update_item(&self, id: &str, request: UpdateItemRequest) -> Result<ItemResponse, AppError> {
        let mut update_doc = Document::new();
        if let Some(category) = clean_optional_string(request.category) {
            update_doc.insert("category", category);
        }
        if let Some(unit) = request.unit {
            update_doc.insert("unit", validate_required_string(&unit, "단위")?);
        }
        if let Some(price) = request.unit_price {
            if !is_valid_amount(price) {
                return Err(AppError::ValidationError("단가는 0 이상이어야 합니다".to_string()));
            }
            update_doc.insert("unit_price", price);
        }
        if let Some(safety_stock) = request.safety_stock {
            if !is_valid_amount(safety_stock) {
                return Err(AppError::ValidationError("안전재고는 0 이상이어야 합니다".to_string()));
            }
            update_doc.insert("safety_stock", safety_stock);
        }
        if let Some(vendor_name) = clean_optional_string(request.vendor_name) {
            update_doc.insert("vendor_name", vendor_name);
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }

        self.item_repo
            .update(id, update_doc)
            .await?
            .map(ItemResponse::from)
            .ok_or_else(|| AppError::NotFound("품목을 찾을 수 없습니다".to_string()))
    }

    /// 수동 재고 조정
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 조정 결과가 음수
    pub async fn adjust_stock(&self, id: &str, request: AdjustStockRequest) -> Result<ItemResponse, AppError> {
        if !request.delta.is_finite() || request.delta == 0.0 {
            return Err(AppError::ValidationError("조정 수량은 0이 아닌 숫자여야 합니다".to_string()));
        }

        let item = self.get_item(id).await?;
        let adjusted = self.item_repo
            .adjust_stock(id, request.delta)
            .await?
            .ok_or_else(|| AppError::ValidationError(format!(
                "재고가 부족합니다: {} (현재 {}{}, 조정 {})",
                item.name, item.stock_qty, item.unit, request.delta
            )))?;

        log::info!(
            "재고 조정: {} / {} {:+} → {} ({})",
            adjusted.store, adjusted.name, request.delta, adjusted.stock_qty, request.reason.trim()
        );

        Ok(ItemResponse::from(adjusted))
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), AppError> {
        if !self.item_repo.delete(id).await? {
            return Err(AppError::NotFound("품목을 찾을 수 없습니다".to_string()));
        }
        log::info!("품목 삭제: {}", id);
        Ok(())
    }
}
