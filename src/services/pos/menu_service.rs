use std::sync::Arc;
use mongodb::bson::{DateTime, Document};
use singleton_macro::service;
use crate::{
    domain::dto::pos::{CreateMenuRequest, MenuResponse, UpdateMenuRequest},
    domain::entities::pos::PosMenu,
    errors::errors::AppError,
    repositories::pos::MenuRepository,
    utils::money::is_valid_amount,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

/// POS 메뉴 관리 서비스
#[service(name = "menu")]
pub struct MenuService {
    menu_repo: Arc<MenuRepository>,
}

impl MenuService {
    pub async fn create_menu(&self, request: CreateMenuRequest) -> Result<MenuResponse, AppError> {
        if !is_valid_amount(request.price) {
            return Err(AppError::ValidationError("가격은 0 이상이어야 합니다".to_string()));
        }

        let now = DateTime::now();
        let menu = PosMenu {
            id: None,
            store: validate_required_string(&request.store, "매장명")?,
            name: validate_required_string(&request.name, "메뉴명")?,
            category: clean_optional_string(request.category).unwrap_or_default(),
            price: request.price,
            is_active: true,
            sort_order: request.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        let created = self.menu_repo.create(menu).await?;
        log::info!("메뉴 등록: {} / {} ({})", created.store, created.name, created.price);
        Ok(MenuResponse::from(created))
    }

    pub async fn get_menu(&self, id: &str) -> Result<PosMenu, AppError> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))
    }

    pub async fn list_menus(&self, store: &str, active_only: bool) -> Result<Vec<MenuResponse>, AppError> {
        let menus = self.menu_repo.find_by_store(store, active_only).await?;
        Ok(menus.into_iter().map(MenuResponse::from).collect())
    }

    pub async fn update_menu(&self, id: &str, request: UpdateMenuRequest) -> Result<MenuResponse, AppError> {
        let mut update_doc = Document::new();
        if let Some(name) = request.name {
            update_doc.insert("name", validate_required_string(&name, "메뉴명")?);
        }
        if let Some(category) = clean_optional_string(request.category) {
            update_doc.insert("category", category);
        }
        if let Some(price) = request.price {
            if !is_valid_amount(price) {
                return Err(AppError::ValidationError("가격은 0 이상이어야 합니다".to_string()));
            }
            update_doc.insert("price", price);
        }
        if let Some(sort_order) = request.sort_order {
            update_doc.insert("sort_order", sort_order);
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }

        self.menu_repo
            .update(id, update_doc)
            .await?
            .map(MenuResponse::from)
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))
    }

    /// 판매 중 ↔ 판매 중지
    pub async fn toggle_menu(&self, id: &str) -> Result<MenuResponse, AppError> {
        let toggled = self.menu_repo
            .toggle_active(id)
            .await?
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))?;

        log::info!(
            "메뉴 {}: {} / {}",
            if toggled.is_active { "판매 재개" } else { "판매 중지" },
            toggled.store, toggled.name
        );
        Ok(MenuResponse::from(toggled))
    }

    pub async fn delete_menu(&self, id: &str) -> Result<(), AppError> {
        if !self.menu_repo.delete(id).await? {
            return Err(AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }
}
