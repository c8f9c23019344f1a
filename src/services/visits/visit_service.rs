//! # 방문 점검 / 고객 불만 서비스
//!
//! 점검 점수는 통과 항목 비율(%)을 소수 첫째 자리로 반올림한 값이며,
//! 등급은 90 이상 A, 80 이상 B, 70 이상 C, 그 외 D 입니다.

use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    domain::dto::visits::{
        CheckItemRequest, CheckResultResponse, ComplaintQuery, ComplaintResponse,
        CreateCheckRequest, CreateComplaintRequest,
    },
    domain::entities::stores::{CheckItem, CheckResult, ComplaintLog},
    domain::models::auth::AuthenticatedUser,
    domain::models::status::ComplaintStatus,
    errors::errors::AppError,
    repositories::stores::{ComplaintRepository, InspectionRepository},
    utils::string_utils::{clean_optional_string, validate_required_string},
};

#[service(name = "visit")]
pub struct VisitService {
    inspection_repo: Arc<InspectionRepository>,
    complaint_repo: Arc<ComplaintRepository>,
}

impl VisitService {
    pub async fn create_check(&self, request: CreateCheckRequest, visitor: &str) -> Result<CheckResultResponse, AppError> {
        let items = build_items(request.items)?;
        let score = score_of(&items);

        let check = CheckResult {
            id: None,
            store: validate_required_string(&request.store, "매장명")?,
            visitor: visitor.to_string(),
            visit_date: request.visit_date,
            items,
            score,
            grade: grade_of(score).to_string(),
            comment: clean_optional_string(request.comment),
            created_at: DateTime::now(),
        };

        let created = self.inspection_repo.create(check).await?;
        log::info!(
            "방문 점검 등록: {} {} 점수 {} ({})",
            created.store, created.visit_date, created.score, created.grade
        );
        Ok(CheckResultResponse::from(created))
    }

    pub async fn get_check(&self, id: &str) -> Result<CheckResultResponse, AppError> {
        self.inspection_repo
            .find_by_id(id)
            .await?
            .map(CheckResultResponse::from)
            .ok_or_else(|| AppError::NotFound("점검 결과를 찾을 수 없습니다".to_string()))
    }

    pub async fn list_checks(
        &self,
        store: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<CheckResultResponse>, AppError> {
        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                return Err(AppError::ValidationError("종료일은 시작일보다 빠를 수 없습니다".to_string()));
            }
        }

        let checks = self.inspection_repo.find_by_store(store, from, to).await?;
        Ok(checks.into_iter().map(CheckResultResponse::from).collect())
    }

    pub async fn create_complaint(&self, request: CreateComplaintRequest) -> Result<ComplaintResponse, AppError> {
        let now = DateTime::now();
        let complaint = ComplaintLog {
            id: None,
            store: validate_required_string(&request.store, "매장명")?,
            received_date: request.received_date,
            channel: validate_required_string(&request.channel, "접수 채널")?,
            category: validate_required_string(&request.category, "불만 분류")?,
            content: validate_required_string(&request.content, "불만 내용")?,
            status: ComplaintStatus::Pending,
            resolution: None,
            resolved_by: None,
            resolved_at: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.complaint_repo.create(complaint).await?;
        log::info!("고객 불만 접수: {} [{}] {}", created.store, created.channel, created.category);
        Ok(ComplaintResponse::from(created))
    }

    pub async fn list_complaints(&self, query: ComplaintQuery) -> Result<Vec<ComplaintResponse>, AppError> {
        let status = query.status.as_deref().map(ComplaintStatus::parse).transpose()?;
        let complaints = self.complaint_repo
            .find_all(query.store.as_deref(), status)
            .await?;
        Ok(complaints.into_iter().map(ComplaintResponse::from).collect())
    }

    /// 대기 → 처리완료
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없는 불만 건
    /// * `AppError::AuthorizationError` - 다른 매장 건
    /// * `AppError::ConflictError` - 이미 처리된 건
    pub async fn resolve_complaint(&self, id: &str, resolution: &str, resolved_by: &AuthenticatedUser) -> Result<ComplaintResponse, AppError> {
        let resolution = validate_required_string(resolution, "처리 내용")?;

        let current = self.complaint_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("불만 건을 찾을 수 없습니다".to_string()))?;
        ensure_resolvable(&current, resolved_by)?;

        let resolved = self.complaint_repo
            .resolve(id, &resolution, &resolved_by.name)
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 처리된 불만 건입니다".to_string()))?;

        log::info!("고객 불만 처리완료: {} ({})", resolved.store, resolved_by.name);
        Ok(ComplaintResponse::from(resolved))
    }
}

fn ensure_resolvable(current: &ComplaintLog, user: &AuthenticatedUser) -> Result<(), AppError> {
    user.ensure_store_access(&current.store)?;
    if current.status != ComplaintStatus::Pending {
        return Err(AppError::ConflictError("이미 처리된 불만 건입니다".to_string()));
    }
    Ok(())
}

fn build_items(requests: Vec<CheckItemRequest>) -> Result<Vec<CheckItem>, AppError> {
    if requests.is_empty() {
        return Err(AppError::ValidationError("점검 항목이 최소 1개 필요합니다".to_string()));
    }

    requests
        .into_iter()
        .map(|item| {
            Ok(CheckItem {
                category: validate_required_string(&item.category, "점검 분류")?,
                question: validate_required_string(&item.question, "점검 항목")?,
                passed: item.passed,
                note: clean_optional_string(item.note),
            })
        })
        .collect()
}

fn score_of(items: &[CheckItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let passed = items.iter().filter(|item| item.passed).count() as f64;
    (passed / items.len() as f64 * 1000.0).round() / 10.0
}

fn grade_of(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "A",
        s if s >= 80.0 => "B",
        s if s >= 70.0 => "C",
        _ => "D",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roles;

    fn items(passed: usize, failed: usize) -> Vec<CheckItem> {
        (0..passed + failed)
            .map(|i| CheckItem {
                category: "위생".to_string(),
                question: format!("항목 {}", i + 1),
                passed: i < passed,
                note: None,
            })
            .collect()
    }

    #[test]
    fn test_score_rounds_to_one_decimal() {
        assert_eq!(score_of(&items(2, 1)), 66.7);
        assert_eq!(score_of(&items(9, 1)), 90.0);
        assert_eq!(score_of(&items(0, 3)), 0.0);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_of(90.0), "A");
        assert_eq!(grade_of(89.9), "B");
        assert_eq!(grade_of(80.0), "B");
        assert_eq!(grade_of(70.0), "C");
        assert_eq!(grade_of(66.7), "D");
    }

    fn complaint(status: ComplaintStatus) -> ComplaintLog {
        let now = DateTime::now();
        ComplaintLog {
            id: None,
            store: "강남점".to_string(),
            received_date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
            channel: "전화".to_string(),
            category: "서비스".to_string(),
            content: "응대가 늦었습니다".to_string(),
            status,
            resolution: None,
            resolved_by: None,
            resolved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn user(role: &str, store: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-4".to_string(),
            name: "처리자".to_string(),
            store: store.map(str::to_string),
            roles: vec![role.to_string()],
        }
    }

    #[test]
    fn test_complaint_resolved_only_by_its_store() {
        let pending = complaint(ComplaintStatus::Pending);

        assert!(ensure_resolvable(&pending, &user(roles::MANAGER, Some("강남점"))).is_ok());
        assert!(ensure_resolvable(&pending, &user(roles::ADMIN, None)).is_ok());
        assert!(matches!(
            ensure_resolvable(&pending, &user(roles::MANAGER, Some("홍대점"))),
            Err(AppError::AuthorizationError(_))
        ));
        assert!(matches!(
            ensure_resolvable(&complaint(ComplaintStatus::Resolved), &user(roles::ADMIN, None)),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_empty_check_rejected() {
        assert!(matches!(build_items(Vec::new()), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_items_trimmed() {
        let built = build_items(vec![CheckItemRequest {
            category: " 서비스 ".to_string(),
            question: "인사 응대".to_string(),
            passed: true,
            note: Some("  ".to_string()),
        }]).unwrap();

        assert_eq!(built[0].category, "서비스");
        assert_eq!(built[0].note, None);
    }
}
