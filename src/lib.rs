//! Mukawinat - Tauri Backend Library
//!
//! 성분 분석(Gemini 호출), 히스토리 SQLite 저장, 세션 상태 머신을 담당하는
//! Rust 백엔드 라이브러리입니다. 화면 렌더링은 WebView 프론트엔드 소관.

pub mod commands;
pub mod db;
pub mod error;
pub mod gemini;
pub mod guide;
pub mod media;
pub mod models;
pub mod session;
pub mod utils;

use std::path::{Path, PathBuf};
use tauri::Manager;

fn is_valid_env_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    // ENV 키는 A-Z0-9_ 로 제한 (GEMINI_*, API_KEY 등)
    key.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn try_load_env_lenient(path: &Path) -> std::io::Result<usize> {
    let text = std::fs::read_to_string(path)?;
    let mut loaded = 0usize;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        // dotenvy는 "KEY=VALUE" 외 라인(주석/코드펜스 등)에서 실패할 수 있으므로
        // lenient 모드에서는 그런 라인을 건너뜁니다.
        if line.starts_with('#') || line.starts_with("```") {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line).trim();
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        let key = k.trim();
        if !is_valid_env_key(key) {
            continue;
        }
        // 이미 비어있지 않은 값이 설정돼 있으면 덮어쓰지 않음
        if let Ok(existing) = std::env::var(key) {
            if !existing.trim().is_empty() {
                continue;
            }
        }

        let mut value = v.trim().to_string();
        // 간단한 quote 제거 ("..." / '...')
        if (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''))
        {
            value = value[1..value.len().saturating_sub(1)].to_string();
        }

        std::env::set_var(key, value);
        loaded += 1;
    }

    Ok(loaded)
}

fn find_upwards(start: PathBuf, filename: &str, max_hops: usize) -> Option<PathBuf> {
    let mut cur = start;
    for _ in 0..=max_hops {
        let candidate = cur.join(filename);
        if candidate.exists() {
            return Some(candidate);
        }
        if !cur.pop() {
            break;
        }
    }
    None
}

/// Dev 환경에서 .env.local 을 로드 (GEMINI_API_KEY 는 프론트에 노출하지 않고
/// 백엔드에서만 사용)
fn load_env_for_tauri_dev() {
    // 1) 가장 단순한 케이스: CWD 기준
    if dotenvy::from_filename(".env.local").is_ok() {
        return;
    }

    // 2) CWD가 프로젝트 루트가 아닐 수 있으니, 상위로 올라가며 탐색
    let mut candidates: Vec<PathBuf> = vec![];
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(p) = find_upwards(cwd, ".env.local", 6) {
            candidates.push(p);
        }
    }

    // 3) 실행 파일 위치 기준으로도 탐색 (cargo run/tauri dev 환경 대응)
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if let Some(p) = find_upwards(dir.to_path_buf(), ".env.local", 8) {
                candidates.push(p);
            }
        }
    }

    for p in candidates {
        // strict 파서 우선, 실패하면 lenient 로더로 보강
        if dotenvy::from_path(&p).is_ok() {
            return;
        }
        if let Ok(loaded) = try_load_env_lenient(&p) {
            if loaded > 0 {
                return;
            }
        }
    }
}

/// Tauri 앱 실행
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // production에서는 .env 파일이 없을 수 있으므로 실패해도 무시
            load_env_for_tauri_dev();
            let _ = dotenvy::dotenv();

            // 히스토리 데이터베이스 초기화
            let app_handle = app.handle();
            let db_path = app_handle
                .path()
                .app_data_dir()
                .expect("Failed to get app data dir")
                .join("mukawinat.db");

            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // 손상된 저장소는 조용히 빈 히스토리로 복구됨
            let database = db::Database::open_or_reset(&db_path)?;
            app.manage(db::DbState(std::sync::Mutex::new(database)));

            // 세션 상태 머신 (홈 화면에서 시작)
            app.manage(session::SessionState::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::session::get_session,
            commands::session::navigate_home,
            commands::session::open_analysis,
            commands::session::open_history,
            commands::session::open_history_detail,
            commands::session::open_guide,
            commands::session::back_to_text_mode,
            commands::session::set_ingredients_text,
            commands::session::select_image,
            commands::session::clear_selected_image,
            commands::session::activate_camera,
            commands::session::camera_failed,
            commands::session::capture_frame,
            commands::analysis::analyze_ingredients,
            commands::history::list_history,
            commands::history::format_relative_time,
            commands::guide::search_guide,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
