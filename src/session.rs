//! Application Session State
//!
//! 페이지 전환/입력 모드/진행 중 분석 상태를 담는 컨트롤러 상태 머신.
//! 모든 전환은 사용자 액션에 의해서만 일어납니다 (타이머/백그라운드 전환 없음).

use std::sync::Mutex;

use serde::Serialize;

use crate::error::CommandError;
use crate::models::{AnalysisInput, AnalysisInputType, ImagePayload, IngredientFinding};

/// 세션 상태 (Tauri 앱 상태로 관리)
pub struct SessionState(pub Mutex<Session>);

impl SessionState {
    pub fn new() -> Self {
        Self(Mutex::new(Session::new()))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// 화면(페이지) 식별자 — 프론트엔드 Page 타입과 동일한 문자열
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    IngredientAnalysis,
    History,
    HistoryDetail,
    IngredientGuide,
}

/// 이미지 모드 내부의 캡처 서브 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CaptureMode {
    /// 파일 선택기 대기
    Picker,
    /// 라이브 카메라 프리뷰 활성
    Camera,
}

/// 승인된 제출 1건 — 호출자는 완료 시 generation 을 되돌려줘야 합니다
#[derive(Debug)]
pub struct PendingSubmit {
    pub generation: u64,
    pub input: AnalysisInput,
}

/// 컨트롤러 상태
#[derive(Debug)]
pub struct Session {
    page: Page,
    input_type: AnalysisInputType,
    capture_mode: CaptureMode,
    ingredients_input: String,
    selected_image: Option<ImagePayload>,
    results: Option<Vec<IngredientFinding>>,
    loading: bool,
    error: Option<String>,
    camera_alert: Option<String>,
    selected_history_id: Option<String>,
    /// 제출 세대 카운터 — 뒤늦게 도착한 완료가 낡은 상태를 덮어쓰는 것을 방지
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            input_type: AnalysisInputType::Text,
            capture_mode: CaptureMode::Picker,
            ingredients_input: String::new(),
            selected_image: None,
            results: None,
            loading: false,
            error: None,
            camera_alert: None,
            selected_history_id: None,
            generation: 0,
        }
    }

    // ---- 네비게이션 ----

    /// 홈으로: 직전 분석 결과/에러/이미지 선택을 모두 비웁니다
    pub fn navigate_home(&mut self) {
        self.page = Page::Home;
        self.input_type = AnalysisInputType::Text;
        self.capture_mode = CaptureMode::Picker;
        self.results = None;
        self.error = None;
        self.selected_image = None;
        self.camera_alert = None;
        self.selected_history_id = None;
        // 진행 중이던 호출의 완료는 무시되도록 세대를 올림
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
    }

    /// 분석 입력 화면으로: 입력 버퍼와 일시 상태를 초기화합니다
    pub fn open_analysis(&mut self, input_type: AnalysisInputType) {
        self.page = Page::IngredientAnalysis;
        self.input_type = input_type;
        self.capture_mode = CaptureMode::Picker;
        self.ingredients_input.clear();
        self.selected_image = None;
        self.results = None;
        self.error = None;
        self.camera_alert = None;
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
    }

    pub fn open_history(&mut self) {
        self.page = Page::History;
        self.selected_history_id = None;
    }

    pub fn open_history_detail(&mut self, entry_id: String) {
        self.page = Page::HistoryDetail;
        self.selected_history_id = Some(entry_id);
    }

    pub fn open_guide(&mut self) {
        self.page = Page::IngredientGuide;
    }

    /// 이미지 모드 → 텍스트 모드: 선택된 이미지를 버리고 에러를 지웁니다
    pub fn back_to_text_mode(&mut self) {
        self.input_type = AnalysisInputType::Text;
        self.capture_mode = CaptureMode::Picker;
        self.selected_image = None;
        self.ingredients_input.clear();
        self.error = None;
    }

    // ---- 입력 버퍼 ----

    pub fn set_ingredients_text(&mut self, text: String) {
        self.ingredients_input = text;
        self.error = None;
    }

    pub fn set_selected_image(&mut self, image: ImagePayload) {
        self.selected_image = Some(image);
        self.error = None;
    }

    pub fn clear_selected_image(&mut self) {
        self.selected_image = None;
    }

    // ---- 카메라 서브 플로우 ----

    pub fn activate_camera(&mut self) {
        self.capture_mode = CaptureMode::Camera;
        self.camera_alert = None;
    }

    /// 카메라 접근 실패: 피커 상태로 복귀. 분석 상태는 건드리지 않습니다.
    pub fn camera_failed(&mut self, message: String) {
        self.capture_mode = CaptureMode::Picker;
        self.camera_alert = Some(message);
    }

    /// 캡처 완료: 이 시점부터 파일 선택 이미지와 구분되지 않습니다
    pub fn image_captured(&mut self, image: ImagePayload) {
        self.selected_image = Some(image);
        self.capture_mode = CaptureMode::Picker;
        self.error = None;
    }

    // ---- 제출 라이프사이클 ----

    /// 제출 시작: 활성 모드의 입력을 검증하고 로딩 플래그를 세웁니다
    ///
    /// 이미 진행 중이면 BUSY 로 거부합니다. 검증 실패 시 입력은 보존됩니다.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, CommandError> {
        if self.loading {
            return Err(CommandError {
                code: "BUSY".to_string(),
                message: "يوجد تحليل قيد التنفيذ بالفعل.".to_string(),
                details: None,
            });
        }

        let input = match self.input_type {
            AnalysisInputType::Text => {
                if self.ingredients_input.trim().is_empty() {
                    return Err(CommandError {
                        code: "EMPTY_INPUT".to_string(),
                        message: "الرجاء إدخال بعض المكونات لتحليلها.".to_string(),
                        details: None,
                    });
                }
                AnalysisInput {
                    text: Some(self.ingredients_input.clone()),
                    image: None,
                }
            }
            AnalysisInputType::Image => match &self.selected_image {
                Some(image) => AnalysisInput {
                    text: None,
                    image: Some(image.clone()),
                },
                None => {
                    return Err(CommandError {
                        code: "EMPTY_INPUT".to_string(),
                        message: "الرجاء تحديد صورة أو التقاط واحدة لتحليلها.".to_string(),
                        details: None,
                    });
                }
            },
        };

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error = None;
        self.results = None;

        Ok(PendingSubmit {
            generation: self.generation,
            input,
        })
    }

    /// 제출 완료 적용. 세대가 일치하지 않으면 (탐색 이탈/새 제출) 무시합니다.
    ///
    /// 반환값은 상태에 실제로 반영되었는지 여부.
    pub fn complete_submit(
        &mut self,
        generation: u64,
        outcome: Result<Vec<IngredientFinding>, String>,
    ) -> bool {
        if generation != self.generation || !self.loading {
            println!("[Session] Dropping stale analysis completion");
            return false;
        }

        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.error = None;
            }
            Err(message) => {
                self.results = None;
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    // ---- 조회 ----

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            page: self.page,
            input_type: self.input_type,
            capture_mode: self.capture_mode,
            ingredients_input: self.ingredients_input.clone(),
            selected_image: self.selected_image.clone(),
            results: self.results.clone(),
            loading: self.loading,
            error: self.error.clone(),
            camera_alert: self.camera_alert.clone(),
            selected_history_id: self.selected_history_id.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// 프론트엔드 렌더링용 세션 스냅샷
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub page: Page,
    pub input_type: AnalysisInputType,
    pub capture_mode: CaptureMode,
    pub ingredients_input: String,
    pub selected_image: Option<ImagePayload>,
    pub results: Option<Vec<IngredientFinding>>,
    pub loading: bool,
    pub error: Option<String>,
    pub camera_alert: Option<String>,
    pub selected_history_id: Option<String>,
}
