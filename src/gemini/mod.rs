//! Gemini API 연동 모듈
//!
//! 호스팅된 생성 모델(generateContent)을 직접 호출하여 성분 분석을 수행합니다.
//! 요청 조립과 응답 파싱은 순수 함수로 분리되어 네트워크 없이 테스트됩니다.

pub mod client;
pub mod types;

pub use client::GeminiClient;
