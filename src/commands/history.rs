//! History Commands
//!
//! 저장된 과거 분석의 조회 및 상대 시간 표기.

use serde::Deserialize;
use tauri::State;

use crate::db::DbState;
use crate::error::{CommandError, CommandResult};
use crate::models::HistoryEntry;
use crate::utils::format_time_ago_from_now;

/// 히스토리 전체 조회 (최신순)
///
/// 저장소가 손상되어 있어도 실패하지 않고 빈 목록을 반환합니다.
#[tauri::command]
pub fn list_history(db_state: State<DbState>) -> CommandResult<Vec<HistoryEntry>> {
    let db = db_state.0.lock().map_err(|e| CommandError {
        code: "LOCK_ERROR".to_string(),
        message: format!("Failed to acquire database lock: {}", e),
        details: None,
    })?;

    Ok(db.load_history())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRelativeTimeArgs {
    pub timestamp: i64,
}

/// epoch millis → 아랍어 상대 시간 문자열
#[tauri::command]
pub fn format_relative_time(args: FormatRelativeTimeArgs) -> CommandResult<String> {
    Ok(format_time_ago_from_now(args.timestamp))
}
