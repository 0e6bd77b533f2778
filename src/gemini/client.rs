//! Gemini REST API 클라이언트
//!
//! 성분 분석 요청을 조립하고, 스키마가 강제된 JSON 응답을 타입으로 파싱합니다.
//! 재시도 정책 없음 — 호출당 1회 시도.

use crate::error::AnalysisError;
use crate::gemini::types::*;
use crate::models::{AnalysisInput, IngredientFinding};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL_NAME: &str = "gemini-2.5-flash";

/// 요청 데드라인 기본값 (초). GEMINI_TIMEOUT_SECS 로 재정의 가능.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 시스템 인스트럭션: 식품 안전/영양 전문가 페르소나.
/// 자유 텍스트 출력은 아랍어, riskLevel 값만 영어로 고정.
const SYSTEM_INSTRUCTION: &str = "أنت مساعد خبير في سلامة الأغذية والتغذية. مهمتك هي تحليل المكونات الغذائية. سيقدم المستخدم إما قائمة بالمكونات كنص أو صورة تحتوي على مكونات (مثل ملصق المنتج).

**يجب أن تكون جميع مخرجاتك النصية باللغة العربية فقط.**

إذا تم توفير صورة، قم أولاً باستخراج جميع المكونات المميزة من الصورة. ثم، لكل مكون محدد (سواء من النص أو الصورة)، حدد مخاطره المحتملة، والحساسية الشائعة المرتبطة به، وأي تحذيرات عامة أو اعتبارات للاستهلاك.

استجب **فقط** بمصفوفة JSON حيث يمثل كل كائن في المصفوفة مكونًا وتحليله. يجب أن يحتوي كل كائن على الخصائص التالية:
- 'ingredientName': (سلسلة نصية) الاسم الدقيق للمكون كما تم توفيره أو اسم شائع معروف. يجب أن يكون هذا باللغة العربية.
- 'riskLevel': (سلسلة نصية) صنف مستوى الخطر كـ \"Low\" أو \"Medium\" أو \"High\" أو \"Informational\".
- 'warnings': (مصفوفة من سلاسل نصية) قائمة بالتحذيرات المحددة أو الحساسيات أو المخاوف المتعلقة بهذا المكون. كن موجزًا وقابلًا للتنفيذ. يجب أن تكون هذه باللغة العربية.
- 'details': (سلسلة نصية) شرح موجز لسبب وجود المخاطر أو التحذيرات المحددة لهذا المكون. يجب أن تكون هذه باللغة العربية.

إذا كان المكون آمنًا بشكل عام ويستخدم عادة، يمكنك ذكر غرضه (مثل \"مستحلب\") في 'details' وتعيين 'riskLevel' على أنه \"Informational\" أو \"Low\" بدون تحذيرات. إذا لم يتم العثور على مخاطر كبيرة، يمكن أن تكون مصفوفة 'warnings' فارغة.";

/// 이미지가 있을 때 붙는 추출+분석 지시문
const IMAGE_PROMPT: &str =
    "استخرج وحلل جميع المكونات الغذائية الظاهرة في هذه الصورة، ثم قم بتحليل كل مكون بناءً على إرشادات النظام.";

/// Gemini REST API 클라이언트
pub struct GeminiClient {
    /// API 키
    api_key: String,
    /// HTTP 클라이언트 (데드라인 포함)
    http: reqwest::Client,
}

impl GeminiClient {
    /// 환경 변수에서 클라이언트 생성
    ///
    /// 우선순위: GEMINI_API_KEY > API_KEY. 둘 다 없으면 네트워크 요청 없이
    /// MissingApiKey 로 즉시 실패합니다.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = read_api_key().ok_or(AnalysisError::MissingApiKey)?;

        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(api_key, timeout_secs)
    }

    pub fn new(api_key: String, timeout_secs: u64) -> Result<Self, AnalysisError> {
        if api_key.trim().is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalysisError::ServiceFailure(e.to_string()))?;

        Ok(Self { api_key, http })
    }

    /// 성분 분석 호출
    ///
    /// 단일 시도로 요청을 보내고, 파싱된 결과를 모델이 준 순서 그대로 반환합니다.
    /// 중복 제거/재정렬/의미 검증은 하지 않습니다.
    pub async fn analyze(
        &self,
        input: &AnalysisInput,
    ) -> Result<Vec<IngredientFinding>, AnalysisError> {
        let parts = build_user_parts(input)?;

        let request_body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(SYSTEM_INSTRUCTION)],
            },
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: finding_array_schema(),
            },
        };

        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, MODEL_NAME);

        println!("[Gemini] Analyzing ingredients (model: {})", MODEL_NAME);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalysisError::ServiceFailure(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::ServiceFailure(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AnalysisError::ServiceFailure(format!(
                "Request failed with status {}: {}",
                status, body
            )));
        }

        let api_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::ServiceFailure(format!("Failed to parse response envelope: {}", e)))?;

        parse_findings(&api_response.text())
    }
}

fn read_api_key() -> Option<String> {
    for key in ["GEMINI_API_KEY", "API_KEY"] {
        if let Ok(v) = std::env::var(key) {
            if !v.trim().is_empty() {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

/// 입력을 요청 파트 배열로 조립 (순수 함수)
///
/// - 이미지가 있으면: 인라인 바이너리 파트 + 추출 지시문. 텍스트가 함께 오면
///   같은 지시문 파트에 보조 성분 목록으로 병합.
/// - 텍스트만 있으면: 해당 텍스트만 분석하라는 단독 지시문.
/// - 둘 다 없으면: EmptyInput (요청은 전송되지 않음).
pub fn build_user_parts(input: &AnalysisInput) -> Result<Vec<Part>, AnalysisError> {
    if input.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut parts: Vec<Part> = Vec::new();
    let text = input.text.as_deref().map(str::trim).filter(|t| !t.is_empty());

    if let Some(image) = &input.image {
        parts.push(Part::inline_data(
            image.mime_type.clone(),
            image.data.clone(),
        ));

        let instruction = match text {
            Some(t) => format!(
                "بالإضافة إلى المكونات الموجودة في الصورة، يرجى تحليل المكونات التالية أيضاً: {}. ثم قم بتحليل كل مكون بناءً على إرشادات النظام.",
                t
            ),
            None => IMAGE_PROMPT.to_string(),
        };
        parts.push(Part::text(instruction));
    } else if let Some(t) = text {
        parts.push(Part::text(format!("حلل المكونات التالية: {}", t)));
    }

    Ok(parts)
}

/// 모델 응답 텍스트를 결과 배열로 파싱 (순수 함수)
///
/// trim 후 `[` 또는 `{` 로 시작하지 않으면 파싱 시도 없이 MalformedResponse.
pub fn parse_findings(raw: &str) -> Result<Vec<IngredientFinding>, AnalysisError> {
    let json = raw.trim();

    if !json.starts_with('[') && !json.starts_with('{') {
        return Err(AnalysisError::MalformedResponse);
    }

    serde_json::from_str::<Vec<IngredientFinding>>(json)
        .map_err(|e| AnalysisError::ParseFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImagePayload, RiskLevel};

    fn image_payload() -> ImagePayload {
        ImagePayload {
            data: "aGVsbG8=".to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn test_empty_input_fails_before_any_request() {
        let input = AnalysisInput::default();
        assert!(matches!(
            build_user_parts(&input),
            Err(AnalysisError::EmptyInput)
        ));

        // 공백뿐인 텍스트도 빈 입력으로 취급
        let input = AnalysisInput {
            text: Some("   ".to_string()),
            image: None,
        };
        assert!(matches!(
            build_user_parts(&input),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn test_text_only_builds_single_instruction_part() {
        let input = AnalysisInput {
            text: Some("sugar, salt".to_string()),
            image: None,
        };

        let parts = build_user_parts(&input).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(!parts[0].is_inline_data());

        let text = parts[0].text.as_deref().unwrap();
        assert!(text.contains("حلل المكونات التالية: sugar, salt"));
    }

    #[test]
    fn test_image_only_builds_inline_part_then_instruction() {
        let input = AnalysisInput {
            text: None,
            image: Some(image_payload()),
        };

        let parts = build_user_parts(&input).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].is_inline_data());
        assert_eq!(
            parts[0].inline_data.as_ref().unwrap().mime_type,
            "image/jpeg"
        );
        assert_eq!(parts[1].text.as_deref(), Some(IMAGE_PROMPT));
    }

    #[test]
    fn test_image_and_text_merge_into_one_instruction() {
        let input = AnalysisInput {
            text: Some("e621".to_string()),
            image: Some(image_payload()),
        };

        let parts = build_user_parts(&input).unwrap();
        // 인라인 바이너리 파트는 정확히 1개
        assert_eq!(parts.iter().filter(|p| p.is_inline_data()).count(), 1);
        assert_eq!(parts.len(), 2);

        let instruction = parts[1].text.as_deref().unwrap();
        assert!(instruction.contains("بالإضافة إلى المكونات الموجودة في الصورة"));
        assert!(instruction.contains("e621"));
    }

    #[test]
    fn test_parse_findings_valid_array() {
        let raw = r#"[{"ingredientName":"Sugar","riskLevel":"Low","warnings":[],"details":"Sweetener"}]"#;

        let findings = parse_findings(raw).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].ingredient_name, "Sugar");
        assert_eq!(findings[0].risk_level, RiskLevel::Low);
        assert!(findings[0].warnings.is_empty());
    }

    #[test]
    fn test_parse_findings_tolerates_surrounding_whitespace() {
        let raw = "\n  [] \n";
        assert!(parse_findings(raw).unwrap().is_empty());
    }

    #[test]
    fn test_parse_findings_rejects_non_json() {
        assert!(matches!(
            parse_findings("not json"),
            Err(AnalysisError::MalformedResponse)
        ));
    }

    #[test]
    fn test_parse_findings_rejects_wrong_shape() {
        // JSON처럼 시작하지만 스키마와 다른 구조
        let raw = r#"[{"ingredientName":"Sugar"}]"#;
        assert!(matches!(
            parse_findings(raw),
            Err(AnalysisError::ParseFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_input_without_network() {
        let client = GeminiClient::new("test-key".to_string(), 1).unwrap();

        // 빈 입력은 요청 조립 단계에서 실패 — 네트워크에 닿지 않음
        let result = client.analyze(&AnalysisInput::default()).await;
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn test_client_rejects_blank_api_key() {
        assert!(matches!(
            GeminiClient::new("  ".to_string(), 1),
            Err(AnalysisError::MissingApiKey)
        ));
    }

    #[test]
    fn test_response_envelope_text_concatenation() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "[{\"ingredientName\":\"ملح\",\"riskLevel\":\"Low\",\"warnings\":[],\"details\":\"ملح طعام\"}]" } ] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let findings = parse_findings(&response.text()).unwrap();
        assert_eq!(findings[0].ingredient_name, "ملح");
    }
}
