//! Database Module
//!
//! SQLite 기반 분석 히스토리 저장소. 히스토리 컬렉션의 유일한 writer 입니다.

mod schema;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::error::AppError;
use crate::models::{AnalysisInputType, HistoryEntry, IngredientFinding};

/// 데이터베이스 상태 (Tauri 앱 상태로 관리)
pub struct DbState(pub Mutex<Database>);

/// 데이터베이스 래퍼
pub struct Database {
    conn: Connection,
}

impl Database {
    /// 새 데이터베이스 연결 생성
    pub fn new(path: &Path) -> Result<Self, AppError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// 테스트용 인메모리 데이터베이스
    pub fn new_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// 데이터베이스 스키마 초기화
    pub fn initialize(&self) -> Result<(), AppError> {
        self.conn.execute_batch(schema::CREATE_SCHEMA)?;
        self.conn
            .pragma_update(None, "user_version", schema::SCHEMA_VERSION)?;
        Ok(())
    }

    /// 열기 + 초기화. 파일이 손상되어 있으면 비우고 새로 시작합니다.
    ///
    /// 손상은 치명적 에러로 올리지 않고 빈 히스토리로 복구합니다
    /// (가용성 우선 — 사용자에게 에러로 노출되지 않음).
    pub fn open_or_reset(path: &Path) -> Result<Self, AppError> {
        match Self::new(path).and_then(|db| {
            db.initialize()?;
            Ok(db)
        }) {
            Ok(db) => Ok(db),
            Err(e) => {
                eprintln!("[DB] Corrupt database, resetting: {}", e);
                let _ = std::fs::remove_file(path);
                let db = Self::new(path)?;
                db.initialize()?;
                Ok(db)
            }
        }
    }

    /// 히스토리 1건 추가 (항목은 생성 후 불변)
    pub fn append_history(&self, entry: &HistoryEntry) -> Result<(), AppError> {
        let input_type = match entry.input_type {
            AnalysisInputType::Text => "text",
            AnalysisInputType::Image => "image",
        };

        let results_json = entry
            .full_analysis_results
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn.execute(
            "INSERT INTO analysis_history
                (id, timestamp, input_type, input_text, input_image_base64, input_image_mime_type, summary, results_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                &entry.id,
                entry.timestamp,
                input_type,
                &entry.input_text,
                &entry.input_image_base64,
                &entry.input_image_mime_type,
                &entry.analysis_summary,
                &results_json,
            ),
        )?;
        Ok(())
    }

    /// 히스토리 전체 로드 (최신순)
    ///
    /// 저장소가 없거나 손상되었으면 빈 컬렉션을 반환합니다 — 에러는 로그만 남기고
    /// 호출자에게 올리지 않습니다. results_json 이 깨진 행은 results 없이 반환됩니다.
    pub fn load_history(&self) -> Vec<HistoryEntry> {
        match self.query_history() {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("[DB] Failed to load history, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn query_history(&self) -> Result<Vec<HistoryEntry>, AppError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, input_type, input_text, input_image_base64, input_image_mime_type, summary, results_json
             FROM analysis_history ORDER BY timestamp DESC, rowid DESC",
        )?;

        let iter = stmt.query_map([], |row| {
            let input_type: String = row.get(2)?;
            let results_json: Option<String> = row.get(7)?;

            Ok(HistoryEntry {
                id: row.get(0)?,
                timestamp: row.get(1)?,
                input_type: if input_type == "image" {
                    AnalysisInputType::Image
                } else {
                    AnalysisInputType::Text
                },
                input_text: row.get(3)?,
                input_image_base64: row.get(4)?,
                input_image_mime_type: row.get(5)?,
                analysis_summary: row.get(6)?,
                // 깨진 결과 JSON은 행 전체를 버리지 않고 results 없음으로 강등
                full_analysis_results: results_json
                    .as_deref()
                    .and_then(|s| serde_json::from_str::<Vec<IngredientFinding>>(s).ok()),
            })
        })?;

        let mut entries = Vec::new();
        for entry in iter {
            entries.push(entry?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use tempfile::tempdir;

    fn entry(id: &str, timestamp: i64) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            timestamp,
            input_type: AnalysisInputType::Text,
            input_text: Some("سكر، ملح".to_string()),
            input_image_base64: None,
            input_image_mime_type: None,
            analysis_summary: "تحليل ناجح لـ 2 مكونات، لا توجد مخاطر عالية.".to_string(),
            full_analysis_results: Some(vec![IngredientFinding {
                ingredient_name: "سكر".to_string(),
                risk_level: RiskLevel::Low,
                warnings: vec![],
                details: "محلٍ".to_string(),
            }]),
        }
    }

    #[test]
    fn test_append_orders_newest_first() {
        let db = Database::new_in_memory().unwrap();
        db.initialize().unwrap();

        for i in 0..5 {
            db.append_history(&entry(&format!("id-{}", i), 1000 + i)).unwrap();
        }

        let history = db.load_history();
        assert_eq!(history.len(), 5);
        // 가장 최근 항목이 항상 0번 위치
        assert_eq!(history[0].id, "id-4");
        for pair in history.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_persist_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mukawinat.db");

        let original = vec![entry("a", 2000), entry("b", 1000)];
        {
            let db = Database::new(&path).unwrap();
            db.initialize().unwrap();
            // 오래된 것부터 넣어도 로드는 최신순
            db.append_history(&original[1]).unwrap();
            db.append_history(&original[0]).unwrap();
        }

        let db = Database::new(&path).unwrap();
        let reloaded = db.load_history();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_corrupt_file_resets_to_empty_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mukawinat.db");
        std::fs::write(&path, b"this is not a sqlite database, definitely").unwrap();

        let db = Database::open_or_reset(&path).unwrap();
        assert!(db.load_history().is_empty());

        // 복구된 DB는 정상 동작해야 함
        db.append_history(&entry("after-reset", 1)).unwrap();
        assert_eq!(db.load_history().len(), 1);
    }

    #[test]
    fn test_corrupt_results_json_degrades_to_none() {
        let db = Database::new_in_memory().unwrap();
        db.initialize().unwrap();

        db.conn
            .execute(
                "INSERT INTO analysis_history
                    (id, timestamp, input_type, input_text, summary, results_json)
                 VALUES ('bad', 1, 'text', 'x', 'ملخص', '{broken json')",
                [],
            )
            .unwrap();

        let history = db.load_history();
        assert_eq!(history.len(), 1);
        assert!(history[0].full_analysis_results.is_none());
        assert_eq!(history[0].analysis_summary, "ملخص");
    }

    #[test]
    fn test_entry_without_results_round_trips_as_none() {
        let db = Database::new_in_memory().unwrap();
        db.initialize().unwrap();

        let mut e = entry("no-results", 1);
        e.full_analysis_results = None;
        db.append_history(&e).unwrap();

        let history = db.load_history();
        assert!(history[0].full_analysis_results.is_none());
    }
}
