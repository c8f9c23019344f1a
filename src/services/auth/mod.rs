//! 인증 서비스 모듈
//!
//! HMAC-SHA256 JWT 발급/검증만 담당합니다. 사용자 계정과 로그인 화면은 외부 시스템 몫이며,
//! 이 서버는 토큰에 실린 이름, 소속 매장, 역할을 신뢰합니다.

pub mod token_service;

pub use token_service::*;
