//! Ingredient Guide Commands
//!
//! 정적 성분 카탈로그 검색 API

use serde::Deserialize;

use crate::error::CommandResult;
use crate::guide;
use crate::models::GuideIngredient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGuideArgs {
    pub term: Option<String>,
}

/// 성분 가이드 검색. 빈 검색어는 카탈로그 전체를 반환합니다.
#[tauri::command]
pub fn search_guide(args: SearchGuideArgs) -> CommandResult<Vec<GuideIngredient>> {
    Ok(guide::search(args.term.as_deref().unwrap_or_default()))
}
