//! Analysis Commands
//!
//! 제출 검증 → Gemini 호출 → 결과/에러 반영 → 히스토리 기록의 전체 사이클.

use tauri::State;

use crate::db::DbState;
use crate::error::{AnalysisError, CommandError, CommandResult};
use crate::gemini::GeminiClient;
use crate::models::{AnalysisInput, AnalysisInputType, HistoryEntry, IngredientFinding, RiskLevel};
use crate::session::{SessionSnapshot, SessionState};

/// 일반 실패 시 사용자에게 보여줄 문구 (원인은 로그로만)
const GENERIC_FAILURE_MESSAGE: &str = "حدث خطأ غير متوقع أثناء التحليل. يرجى المحاولة مرة أخرى.";

/// 성분 분석 제출
///
/// 활성 모드의 입력을 검증해 Gemini 에 보내고, 성공 시 일시 결과 갱신과
/// 히스토리 추가를 모두 수행합니다. 실패 시 히스토리는 기록되지 않습니다.
/// 진행 중 재제출은 BUSY 로 거부됩니다.
#[tauri::command]
pub async fn analyze_ingredients(
    session_state: State<'_, SessionState>,
    db_state: State<'_, DbState>,
) -> CommandResult<SessionSnapshot> {
    let pending = {
        let mut session = session_state.0.lock().map_err(|e| CommandError {
            code: "LOCK_ERROR".to_string(),
            message: format!("Failed to acquire session lock: {}", e),
            details: None,
        })?;
        session.begin_submit()?
    };

    let outcome = run_analysis(&pending.input).await;

    let mut session = session_state.0.lock().map_err(|e| CommandError {
        code: "LOCK_ERROR".to_string(),
        message: format!("Failed to acquire session lock: {}", e),
        details: None,
    })?;

    match outcome {
        Ok(results) => {
            let applied = session.complete_submit(pending.generation, Ok(results.clone()));

            // 이탈/재제출로 무시된 완료는 히스토리에도 남기지 않음
            if applied {
                append_to_history(&db_state, &pending.input, &results);
            }
        }
        Err(e) => {
            eprintln!("[Analysis] Failed: {}", e);
            session.complete_submit(pending.generation, Err(user_message(&e)));
        }
    }

    Ok(session.snapshot())
}

async fn run_analysis(input: &AnalysisInput) -> Result<Vec<IngredientFinding>, AnalysisError> {
    let client = GeminiClient::from_env()?;
    client.analyze(input).await
}

/// 에러 분류별 사용자 노출 문구
///
/// 설정 에러는 그대로 노출, 모델/전송 계열은 일반 문구로 뭉개고 원인은 로그만.
fn user_message(error: &AnalysisError) -> String {
    match error {
        AnalysisError::MissingApiKey => error.to_string(),
        AnalysisError::EmptyInput => "الرجاء إدخال بعض المكونات لتحليلها.".to_string(),
        AnalysisError::InvalidImage(_) => "الرجاء تحديد صورة صالحة لتحليلها.".to_string(),
        AnalysisError::MalformedResponse
        | AnalysisError::ParseFailure(_)
        | AnalysisError::ServiceFailure(_) => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

/// 성공한 분석을 히스토리에 기록. 쓰기 실패는 로그만 남기고 무시합니다
/// (로컬 저장은 best-effort — 분석 결과 표시를 막지 않음).
fn append_to_history(db_state: &DbState, input: &AnalysisInput, results: &[IngredientFinding]) {
    let entry = build_history_entry(input, results);

    match db_state.0.lock() {
        Ok(db) => {
            if let Err(e) = db.append_history(&entry) {
                eprintln!("[History] Failed to persist entry: {}", e);
            }
        }
        Err(e) => eprintln!("[History] Failed to acquire database lock: {}", e),
    }
}

fn build_history_entry(input: &AnalysisInput, results: &[IngredientFinding]) -> HistoryEntry {
    let (input_type, image_base64, image_mime) = match &input.image {
        Some(image) => (
            AnalysisInputType::Image,
            Some(image.data.clone()),
            Some(image.mime_type.clone()),
        ),
        None => (AnalysisInputType::Text, None, None),
    };

    HistoryEntry {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        input_type,
        input_text: input.text.clone(),
        input_image_base64: image_base64,
        input_image_mime_type: image_mime,
        analysis_summary: summarize_findings(Some(results)),
        full_analysis_results: Some(results.to_vec()),
    }
}

/// 결과 목록 → 한 줄 요약 (append 시점에 파생)
///
/// High 가 있으면 High 개수, 아니면 Medium 개수, 아니면 전체 개수 기준.
pub fn summarize_findings(results: Option<&[IngredientFinding]>) -> String {
    let results = match results {
        Some(r) if !r.is_empty() => r,
        _ => return "لم يتم العثور على تحليل للمكونات المدخلة.".to_string(),
    };

    let high_count = results
        .iter()
        .filter(|f| f.risk_level == RiskLevel::High)
        .count();
    if high_count > 0 {
        return format!("يحتوي على {} مكونات ذات خطر مرتفع.", high_count);
    }

    let medium_count = results
        .iter()
        .filter(|f| f.risk_level == RiskLevel::Medium)
        .count();
    if medium_count > 0 {
        return format!("يحتوي على {} مكونات ذات خطر متوسط.", medium_count);
    }

    format!(
        "تحليل ناجح لـ {} مكونات، لا توجد مخاطر عالية.",
        results.len()
    )
}
