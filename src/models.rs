//! Mukawinat Data Models
//!
//! 프론트엔드 TypeScript 타입과 매핑되는 Rust 데이터 모델

use serde::{Deserialize, Serialize};

/// 모델이 반환하는 위험도 등급
///
/// 자유 텍스트는 아랍어지만, 이 값만은 프론트 처리 편의를 위해 영어 문자열로 고정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Informational,
}

/// 성분 1개에 대한 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientFinding {
    #[serde(rename = "ingredientName")]
    pub ingredient_name: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub details: String,
}

/// 입력 모드 (텍스트 / 이미지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisInputType {
    Text,
    Image,
}

/// base64 인코딩된 이미지 페이로드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// base64 본문 (data URL 접두사 제거 후)
    pub data: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// 사용자가 제출한 분석 입력
///
/// 제출 시점에는 둘 중 하나 이상이 반드시 존재해야 하며, 둘 다 있으면
/// 이미지 + 보조 텍스트로 하나의 요청에 병합된다.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    pub text: Option<String>,
    pub image: Option<ImagePayload>,
}

impl AnalysisInput {
    /// 공백뿐인 텍스트는 "없음"으로 취급
    pub fn is_empty(&self) -> bool {
        let has_text = self
            .text
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false);
        !has_text && self.image.is_none()
    }
}

/// 저장된 과거 분석 1건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// 생성 시각 (epoch millis)
    pub timestamp: i64,
    #[serde(rename = "inputType")]
    pub input_type: AnalysisInputType,
    #[serde(rename = "inputText")]
    pub input_text: Option<String>,
    #[serde(rename = "inputImageBase64")]
    pub input_image_base64: Option<String>,
    #[serde(rename = "inputImageMimeType")]
    pub input_image_mime_type: Option<String>,
    #[serde(rename = "analysisSummary")]
    pub analysis_summary: String,
    #[serde(rename = "fullAnalysisResults")]
    pub full_analysis_results: Option<Vec<IngredientFinding>>,
}

/// 성분 가이드 정적 레코드
#[derive(Debug, Clone, Serialize)]
pub struct GuideIngredient {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "eNumber")]
    pub e_number: Option<&'static str>,
    pub description: &'static str,
    pub usage: &'static str,
    #[serde(rename = "potentialRisks")]
    pub potential_risks: &'static [&'static str],
    #[serde(rename = "isHalal")]
    pub is_halal: bool,
}
