use std::sync::Arc;
use mongodb::bson::{DateTime, Document};
use singleton_macro::service;
use crate::{
    domain::dto::inventory::{CreateVendorRequest, UpdateVendorRequest, VendorResponse},
    domain::entities::inventory::Vendor,
    errors::errors::AppError,
    repositories::inventory::VendorRepository,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

/// 거래처 관리 서비스
#[service(name = "vendor")]
pub struct VendorService {
    vendor_repo: Arc<VendorRepository>,
}

impl VendorService {
    pub async fn create_vendor(&self, request: CreateVendorRequest) -> Result<VendorResponse, AppError> {
        let now = DateTime::now();
        let vendor = Vendor {
            id: None,
            name: validate_required_string(&request.name, "거래처명")?,
            contact_name: clean_optional_string(request.contact_name),
            phone: clean_optional_string(request.phone),
            email: clean_optional_string(request.email),
            category: clean_optional_string(request.category).unwrap_or_default(),
            memo: clean_optional_string(request.memo),
            created_at: now,
            updated_at: now,
        };

        let created = self.vendor_repo.create(vendor).await?;
        log::info!("거래처 등록: {}", created.name);
        Ok(VendorResponse::from(created))
    }

    pub async fn get_vendor(&self, id: &str) -> Result<VendorResponse, AppError> {
        self.vendor_repo
            .find_by_id(id)
            .await?
            .map(VendorResponse::from)
            .ok_or_else(|| AppError::NotFound("거래처를 찾을 수 없습니다".to_string()))
    }

    pub async fn list_vendors(&self, category: Option<String>) -> Result<Vec<VendorResponse>, AppError> {
        let category = clean_optional_string(category);
        let vendors = self.vendor_repo.find_all(category.as_deref()).await?;
        Ok(vendors.into_iter().map(VendorResponse::from).collect())
    }

    pub async fn update_vendor(&self, id: &str, request: UpdateVendorRequest) -> Result<VendorResponse, AppError> {
        let mut update_doc = Document::new();
        if let Some(contact_name) = clean_optional_string(request.contact_name) {
            update_doc.insert("contact_name", contact_name);
        }
        if let Some(phone) = clean_optional_string(request.phone) {
            update_doc.insert("phone", phone);
        }
        if let Some(email) = clean_optional_string(request.email) {
            update_doc.insert("email", email);
        }
        if let Some(category) = clean_optional_string(request.category) {
            update_doc.insert("category", category);
        }
        if let Some(memo) = clean_optional_string(request.memo) {
            update_doc.insert("memo", memo);
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }

        self.vendor_repo
            .update(id, update_doc)
            .await?
            .map(VendorResponse::from)
            .ok_or_else(|| AppError::NotFound("거래처를 찾을 수 없습니다".to_string()))
    }

    pub async fn delete_vendor(&self, id: &str) -> Result<(), AppError> {
        if !self.vendor_repo.delete(id).await? {
            return Err(AppError::NotFound("거래처를 찾을 수 없습니다".to_string()));
        }
        log::info!("거래처 삭제: {}", id);
        Ok(())
    }
}
