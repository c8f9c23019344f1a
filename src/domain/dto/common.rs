//! 공통 요청/응답 DTO

use serde::{Deserialize, Serialize};

/// 목록 응답 래퍼
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

impl<T> ListResponse<T> {
    /// 엔티티 목록을 응답 DTO 목록으로 변환합니다.
    pub fn from_entities<E>(entities: Vec<E>) -> Self
    where
        T: From<E>,
    {
        entities.into_iter().map(T::from).collect::<Vec<_>>().into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// `?store=강남점`
#[derive(Debug, Clone, Deserialize)]
pub struct StoreQuery {
    pub store: String,
}

/// 반려 사유 등 선택적 메모가 붙는 결재 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_counts_items() {
        let list: ListResponse<i32> = vec![1, 2, 3].into();
        assert_eq!(list.total, 3);

        let mapped: ListResponse<String> = ListResponse::from_entities(vec!["a", "b"]);
        assert_eq!(mapped.items, vec!["a".to_string(), "b".to_string()]);
    }
}
