//! Gemini API 타입 정의
//!
//! generateContent 요청/응답 JSON 구조

use serde::{Deserialize, Serialize};

/// generateContent 요청 본문
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// 시스템 인스트럭션 (페르소나 + 출력 언어 제약)
#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// 사용자 콘텐츠 (파트 배열)
#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// 콘텐츠 파트: 텍스트 또는 인라인 바이너리 중 하나
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }

    pub fn is_inline_data(&self) -> bool {
        self.inline_data.is_some()
    }
}

/// 인라인 바이너리 (base64 + MIME)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// 생성 설정: JSON 강제 + 출력 스키마
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

/// 응답 스키마: IngredientFinding 4개 필드가 모두 필수인 객체 배열
pub fn finding_array_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "ingredientName": { "type": "STRING" },
                "riskLevel": {
                    "type": "STRING",
                    "enum": ["Low", "Medium", "High", "Informational"]
                },
                "warnings": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "details": { "type": "STRING" }
            },
            "required": ["ingredientName", "riskLevel", "warnings", "details"],
            "propertyOrdering": ["ingredientName", "riskLevel", "warnings", "details"]
        }
    })
}

/// generateContent 응답 본문 (필요한 필드만)
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// 모든 후보 파트의 텍스트를 이어붙여 반환
    pub fn text(&self) -> String {
        self.candidates
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|c| c.content.as_ref())
            .filter_map(|c| c.parts.as_deref())
            .flatten()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}
