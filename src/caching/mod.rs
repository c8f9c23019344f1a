//! 캐싱 계층 모듈
//!
//! Redis 기반 JSON 캐시를 제공합니다.
//!
//! # 키 규칙
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `employee:{store}:{name}` | 직원 문서 | 10분 |
//! | `holiday:{year}` | 해당 연도 공휴일 목록 | 1일 |
//! | `translation:{sha256}` | 번역 결과 | 30일 |
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
