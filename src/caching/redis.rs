//! # Redis 캐시 클라이언트
//!
//! 직원 조회, 공휴일 목록, 번역 결과처럼 자주 읽히고 드물게 바뀌는 값을
//! JSON으로 직렬화해 보관합니다. 캐시는 보조 수단이므로 호출부는
//! 실패 시 경고만 남기고 원본 저장소로 진행합니다.
//!
//! 연결은 멀티플렉싱 비동기 연결을 사용합니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

fn serde_error(action: &'static str, e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, action, e.to_string()))
}

impl RedisClient {
    /// `REDIS_URL` (기본값 `redis://localhost:6379`)로 연결하고 PING으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| serde_error("Deserialization failed", e)))
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serde_error("Serialization failed", e))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }

    /// 패턴에 맞는 키를 모두 삭제하고 삭제 개수를 반환합니다.
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<usize, redis::RedisError> {
        let keys = self.keys(pattern).await?;
        let count = keys.len();
        self.del_multiple(&keys).await?;
        Ok(count)
    }
}
