//! Mukawinat Error Types
//!
//! 애플리케이션 전역 에러 타입 정의

use serde::Serialize;
use thiserror::Error;

/// 앱 내부 에러 (DB/직렬화)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 분석 경로 에러 (Gemini 호출 및 입력 검증)
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// GEMINI_API_KEY 미설정 — 네트워크 요청 전에 즉시 실패
    #[error("GEMINI_API_KEY is not set. Please configure it in .env.local")]
    MissingApiKey,

    /// 텍스트/이미지 둘 다 없는 제출
    #[error("No input (text or image) provided for analysis")]
    EmptyInput,

    /// 모델 응답이 JSON으로 보이지 않음 (`[` / `{` 로 시작하지 않음)
    #[error("Model did not return a valid JSON response")]
    MalformedResponse,

    /// JSON 구조 파싱 실패
    #[error("Failed to parse model response as JSON: {0}")]
    ParseFailure(String),

    /// 전송/백엔드 에러
    #[error("Analysis request failed: {0}")]
    ServiceFailure(String),

    /// 이미지 페이로드 검증 실패 (base64/MIME/크기)
    #[error("Invalid image payload: {0}")]
    InvalidImage(String),
}

/// Tauri 명령 응답용 직렬화 가능한 에러
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        let code = match &error {
            AppError::Database(_) => "DB_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        };

        CommandError {
            code: code.to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

impl From<AnalysisError> for CommandError {
    fn from(error: AnalysisError) -> Self {
        let code = match &error {
            AnalysisError::MissingApiKey => "API_KEY_MISSING",
            AnalysisError::EmptyInput => "EMPTY_INPUT",
            AnalysisError::MalformedResponse => "MALFORMED_RESPONSE",
            AnalysisError::ParseFailure(_) => "PARSE_FAILURE",
            AnalysisError::ServiceFailure(_) => "SERVICE_FAILURE",
            AnalysisError::InvalidImage(_) => "INVALID_IMAGE",
        };

        CommandError {
            code: code.to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

/// Tauri 명령 결과 타입
pub type CommandResult<T> = Result<T, CommandError>;
