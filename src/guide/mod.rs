//! Ingredient Guide Module
//!
//! 정적 성분 카탈로그에 대한 오프라인 조회/검색. 네트워크 호출 없음.

mod catalog;

pub use catalog::GUIDE_CATALOG;

use crate::models::GuideIngredient;

/// 성분 가이드 검색 (순수, 동기, 실패 없음)
///
/// 이름/E-번호/설명에 대해 대소문자 무시 부분 일치. 빈 검색어는 카탈로그
/// 전체를 원래 순서 그대로 반환합니다.
pub fn search(term: &str) -> Vec<GuideIngredient> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return GUIDE_CATALOG.clone();
    }

    GUIDE_CATALOG
        .iter()
        .filter(|ingredient| {
            ingredient.name.to_lowercase().contains(&term)
                || ingredient
                    .e_number
                    .map(|e| e.to_lowercase().contains(&term))
                    .unwrap_or(false)
                || ingredient.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_full_catalog_in_order() {
        let all = search("");
        assert_eq!(all.len(), GUIDE_CATALOG.len());
        let ids: Vec<_> = all.iter().map(|i| i.id).collect();
        let expected: Vec<_> = GUIDE_CATALOG.iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);

        // 공백뿐인 검색어도 동일
        assert_eq!(search("   ").len(), GUIDE_CATALOG.len());
    }

    #[test]
    fn test_search_matches_e_number_case_insensitively() {
        let results = search("e1");
        assert!(!results.is_empty());
        for ingredient in &results {
            let in_e_number = ingredient
                .e_number
                .map(|e| e.to_lowercase().contains("e1"))
                .unwrap_or(false);
            let in_name = ingredient.name.to_lowercase().contains("e1");
            let in_description = ingredient.description.to_lowercase().contains("e1");
            assert!(in_e_number || in_name || in_description);
        }

        // 대문자 검색어도 동일한 결과
        assert_eq!(search("E1").len(), results.len());
    }

    #[test]
    fn test_search_matches_arabic_name_substring() {
        let results = search("الجيلاتين");
        assert!(results.iter().any(|i| i.id == "gelatin"));
    }

    #[test]
    fn test_search_unmatched_term_returns_empty() {
        assert!(search("zzzzzz").is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<_> = GUIDE_CATALOG.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GUIDE_CATALOG.len());
    }
}
