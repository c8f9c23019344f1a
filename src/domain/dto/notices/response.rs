use std::collections::BTreeMap;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::stores::{Notice, NoticeTranslation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub target_store: Option<String>,
    pub author: String,
    pub pinned: bool,
    pub translations: BTreeMap<String, NoticeTranslation>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: notice.title,
            body: notice.body,
            target_store: notice.target_store,
            author: notice.author,
            pinned: notice.pinned,
            translations: notice.translations,
            created_at: notice.created_at,
            updated_at: notice.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateTextResponse {
    pub text: String,
    pub translated: String,
    pub target: String,
}
