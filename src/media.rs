//! Media Payload Handling
//!
//! 카메라 캡처/파일 선택으로 들어온 이미지를 공통 ImagePayload 로 정규화합니다.
//! 이 지점 이후로 카메라 출신과 파일 출신 이미지는 구분되지 않습니다.
//! 하드웨어 스트림 제어는 프론트엔드(WebView) 소관이며, 여기는 순수 변환만 담당.

use base64::Engine;

use crate::error::AnalysisError;
use crate::models::ImagePayload;

/// 이미지 최대 크기 (디코딩 기준 10MB)
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// 파일 선택기가 MIME을 보고하지 않을 때의 기본값
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

fn is_allowed_mime(mime: &str) -> bool {
    matches!(
        mime,
        "image/png" | "image/jpeg" | "image/jpg" | "image/webp" | "image/gif"
    )
}

/// base64 문자열(또는 data URL)을 검증하고 ImagePayload 로 정규화
///
/// - `data:image/png;base64,....` 형태면 접두사를 벗겨 본문만 취합니다.
/// - base64 디코딩에 실패하거나, MIME이 래스터 이미지가 아니거나,
///   디코딩 크기가 제한을 넘으면 InvalidImage 로 실패합니다.
pub fn normalize_image(data: &str, mime_type: Option<&str>) -> Result<ImagePayload, AnalysisError> {
    // data URL 접두사 제거. MIME이 명시되지 않았으면 URL에서 추출.
    let (body, url_mime) = match data.split_once(',') {
        Some((header, body)) if header.starts_with("data:") => {
            let mime = header
                .strip_prefix("data:")
                .and_then(|h| h.split(';').next())
                .filter(|m| !m.is_empty())
                .map(|m| m.to_string());
            (body, mime)
        }
        _ => (data, None),
    };

    let body = body.trim();
    if body.is_empty() {
        return Err(AnalysisError::InvalidImage("empty image data".to_string()));
    }

    let mime = mime_type
        .map(|m| m.to_string())
        .or(url_mime)
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

    if !is_allowed_mime(&mime) {
        return Err(AnalysisError::InvalidImage(format!(
            "unsupported image type: {}",
            mime
        )));
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(body)
        .map_err(|e| AnalysisError::InvalidImage(format!("invalid base64: {}", e)))?;

    if decoded.len() > MAX_IMAGE_SIZE {
        return Err(AnalysisError::InvalidImage(format!(
            "image too large: {}MB (max {}MB)",
            decoded.len() / (1024 * 1024),
            MAX_IMAGE_SIZE / (1024 * 1024)
        )));
    }

    Ok(ImagePayload {
        data: body.to_string(),
        mime_type: mime,
    })
}

/// 캡처된 픽셀 프레임(인코딩된 바이트)을 ImagePayload 로 변환
///
/// 프론트가 캔버스에서 뽑은 인코딩 결과를 바이트로 넘기는 경로. 변환 이후에는
/// 파일 선택 경로와 완전히 동일한 표현이 됩니다.
pub fn frame_to_payload(bytes: &[u8], mime_type: &str) -> Result<ImagePayload, AnalysisError> {
    if bytes.is_empty() {
        return Err(AnalysisError::InvalidImage("empty frame".to_string()));
    }
    if !is_allowed_mime(mime_type) {
        return Err(AnalysisError::InvalidImage(format!(
            "unsupported image type: {}",
            mime_type
        )));
    }
    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(AnalysisError::InvalidImage(format!(
            "image too large: {}MB (max {}MB)",
            bytes.len() / (1024 * 1024),
            MAX_IMAGE_SIZE / (1024 * 1024)
        )));
    }

    Ok(ImagePayload {
        data: base64::engine::general_purpose::STANDARD.encode(bytes),
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_base64() {
        let payload = normalize_image("aGVsbG8=", Some("image/png")).unwrap();
        assert_eq!(payload.data, "aGVsbG8=");
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn test_normalize_strips_data_url_prefix() {
        let payload = normalize_image("data:image/png;base64,aGVsbG8=", None).unwrap();
        assert_eq!(payload.data, "aGVsbG8=");
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn test_normalize_defaults_to_jpeg() {
        let payload = normalize_image("aGVsbG8=", None).unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_normalize_rejects_invalid_base64() {
        assert!(matches!(
            normalize_image("not base64!!!", Some("image/png")),
            Err(AnalysisError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_unsupported_mime() {
        assert!(matches!(
            normalize_image("aGVsbG8=", Some("application/pdf")),
            Err(AnalysisError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_frame_round_trips_through_same_representation() {
        let frame = frame_to_payload(b"fake-jpeg-bytes", "image/jpeg").unwrap();
        let normalized = normalize_image(&frame.data, Some(&frame.mime_type)).unwrap();
        assert_eq!(frame, normalized);
    }

    #[test]
    fn test_frame_rejects_empty() {
        assert!(matches!(
            frame_to_payload(&[], "image/jpeg"),
            Err(AnalysisError::InvalidImage(_))
        ));
    }
}
