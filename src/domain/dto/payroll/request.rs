use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PayrollRunRequest {
    #[validate(length(min = 1, message = "매장명은 필수입니다"))]
    pub store: String,
    /// `YYYY-MM`
    #[validate(length(equal = 7, message = "월 형식은 YYYY-MM 이어야 합니다"))]
    pub month: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPreviewQuery {
    pub store: String,
    pub employee_name: String,
    pub month: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayrollListQuery {
    pub store: String,
    pub month: String,
}
