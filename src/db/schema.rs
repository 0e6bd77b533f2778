//! Database Schema
//!
//! SQLite 테이블 스키마 정의

/// 스키마 버전. 포맷 변경 시 마이그레이션 판별용 (user_version).
pub const SCHEMA_VERSION: i32 = 1;

/// 데이터베이스 스키마 생성 SQL
pub const CREATE_SCHEMA: &str = r#"
-- 분석 히스토리 테이블 (append 전용, 수정/삭제 없음)
CREATE TABLE IF NOT EXISTS analysis_history (
    id TEXT PRIMARY KEY,
    timestamp INTEGER NOT NULL,
    input_type TEXT NOT NULL CHECK (input_type IN ('text', 'image')),
    input_text TEXT,
    input_image_base64 TEXT,
    input_image_mime_type TEXT,
    summary TEXT NOT NULL,
    results_json TEXT
);

-- 최신순 조회 인덱스
CREATE INDEX IF NOT EXISTS idx_history_timestamp ON analysis_history(timestamp DESC);
"#;
