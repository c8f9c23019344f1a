//! Notice Entity

use std::collections::BTreeMap;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeTranslation {
    pub title: String,
    pub body: String,
}

/// 공지사항. `target_store`가 없으면 전 매장 공지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_store: Option<String>,
    pub author: String,
    #[serde(default)]
    pub pinned: bool,
    /// 언어 코드(`th`, `en`, ...) → 번역본
    #[serde(default)]
    pub translations: BTreeMap<String, NoticeTranslation>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Notice {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
