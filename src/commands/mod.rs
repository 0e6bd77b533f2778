//! Tauri Commands Module
//!
//! 프론트엔드에서 호출 가능한 Tauri 명령어 정의

pub mod analysis;
pub mod guide;
pub mod history;
pub mod session;
