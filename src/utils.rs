//! 공용 유틸리티
//!
//! 타임스탬프 → 아랍어 상대 시간 문자열 변환

/// epoch millis 타임스탬프를 "منذ N ..." 형태의 상대 시간으로 변환 (순수 함수)
///
/// 경계값은 초<60, 분<60, 시간<24, 일<30, 월<12 순서로 내려갑니다.
pub fn format_time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = ((now_ms - timestamp_ms) / 1000).max(0);
    if seconds < 60 {
        return format!("منذ {} ثواني تقريباً", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("منذ {} دقائق تقريباً", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("منذ {} ساعات تقريباً", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("منذ {} أيام تقريباً", days);
    }

    let months = days / 30;
    if months < 12 {
        return format!("منذ {} أشهر تقريباً", months);
    }

    let years = months / 12;
    format!("منذ {} سنوات تقريباً", years)
}

/// 현재 시각 기준 상대 시간
pub fn format_time_ago_from_now(timestamp_ms: i64) -> String {
    format_time_ago(timestamp_ms, chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = 1000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_seconds_bucket() {
        assert_eq!(format_time_ago(0, 45 * SECOND), "منذ 45 ثواني تقريباً");
    }

    #[test]
    fn test_minutes_bucket() {
        assert_eq!(format_time_ago(0, 5 * MINUTE), "منذ 5 دقائق تقريباً");
        // 59분까지는 분 단위
        assert_eq!(format_time_ago(0, 59 * MINUTE), "منذ 59 دقائق تقريباً");
    }

    #[test]
    fn test_hours_and_days_buckets() {
        assert_eq!(format_time_ago(0, 3 * HOUR), "منذ 3 ساعات تقريباً");
        assert_eq!(format_time_ago(0, 2 * DAY), "منذ 2 أيام تقريباً");
    }

    #[test]
    fn test_months_and_years_buckets() {
        assert_eq!(format_time_ago(0, 45 * DAY), "منذ 1 أشهر تقريباً");
        assert_eq!(format_time_ago(0, 400 * DAY), "منذ 1 سنوات تقريباً");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        assert_eq!(format_time_ago(10 * SECOND, 0), "منذ 0 ثواني تقريباً");
    }
}
