//! Session Commands
//!
//! 페이지 전환/입력 버퍼/카메라 서브 플로우를 세션 상태 머신에 중계합니다.
//! 모든 명령은 갱신된 세션 스냅샷을 돌려줘 프론트가 그대로 렌더링합니다.

use serde::Deserialize;
use tauri::State;

use crate::error::{CommandError, CommandResult};
use crate::media;
use crate::models::AnalysisInputType;
use crate::session::{Session, SessionSnapshot, SessionState};

fn with_session<F>(state: &SessionState, f: F) -> CommandResult<SessionSnapshot>
where
    F: FnOnce(&mut Session) -> CommandResult<()>,
{
    let mut session = state.0.lock().map_err(|e| CommandError {
        code: "LOCK_ERROR".to_string(),
        message: format!("Failed to acquire session lock: {}", e),
        details: None,
    })?;

    f(&mut session)?;
    Ok(session.snapshot())
}

/// 현재 세션 스냅샷 조회
#[tauri::command]
pub fn get_session(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |_| Ok(()))
}

/// 홈으로 이동 (직전 분석 상태 초기화)
#[tauri::command]
pub fn navigate_home(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.navigate_home();
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAnalysisArgs {
    pub input_type: AnalysisInputType,
}

/// 분석 입력 화면으로 이동 (텍스트/이미지 모드)
#[tauri::command]
pub fn open_analysis(
    args: OpenAnalysisArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.open_analysis(args.input_type);
        Ok(())
    })
}

/// 히스토리 목록으로 이동
#[tauri::command]
pub fn open_history(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.open_history();
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHistoryDetailArgs {
    pub entry_id: String,
}

/// 히스토리 상세로 이동
#[tauri::command]
pub fn open_history_detail(
    args: OpenHistoryDetailArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.open_history_detail(args.entry_id);
        Ok(())
    })
}

/// 성분 가이드로 이동
#[tauri::command]
pub fn open_guide(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.open_guide();
        Ok(())
    })
}

/// 이미지 모드 → 텍스트 모드 전환 (선택 이미지 폐기)
#[tauri::command]
pub fn back_to_text_mode(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.back_to_text_mode();
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIngredientsTextArgs {
    pub text: String,
}

/// 성분 텍스트 입력 갱신
#[tauri::command]
pub fn set_ingredients_text(
    args: SetIngredientsTextArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.set_ingredients_text(args.text);
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectImageArgs {
    /// base64 본문 또는 data URL
    pub data: String,
    pub mime_type: Option<String>,
}

/// 파일 선택기에서 고른 이미지 등록 (base64/MIME 검증 포함)
#[tauri::command]
pub fn select_image(
    args: SelectImageArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    let payload = media::normalize_image(&args.data, args.mime_type.as_deref())?;
    with_session(&state, |s| {
        s.set_selected_image(payload);
        Ok(())
    })
}

/// 선택된 이미지 제거
#[tauri::command]
pub fn clear_selected_image(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.clear_selected_image();
        Ok(())
    })
}

/// 카메라 프리뷰 시작 (스트림 자체는 WebView 쪽에서 관리)
#[tauri::command]
pub fn activate_camera(state: State<SessionState>) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.activate_camera();
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraFailedArgs {
    pub message: String,
}

/// 카메라 접근 실패 보고: 피커 상태로 복귀하고 알림만 남깁니다
#[tauri::command]
pub fn camera_failed(
    args: CameraFailedArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    with_session(&state, |s| {
        s.camera_failed(args.message);
        Ok(())
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureFrameArgs {
    /// 캔버스에서 인코딩된 프레임 바이트
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// 캡처된 정지 프레임 등록 — 이후 파일 선택 이미지와 동일하게 취급됩니다
#[tauri::command]
pub fn capture_frame(
    args: CaptureFrameArgs,
    state: State<SessionState>,
) -> CommandResult<SessionSnapshot> {
    let payload = media::frame_to_payload(&args.bytes, &args.mime_type)?;
    with_session(&state, |s| {
        s.image_captured(payload);
        Ok(())
    })
}
