use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const MAX_POLL_ATTEMPTS: u32 = 30;

pub const CONFIG_DIR_NAME: &str = "panelscope";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LAST_QUERY_FILE_NAME: &str = "last_query.json";

/// Bucket label for null, missing or empty demographic values.
pub const UNKNOWN_LABEL: &str = "알 수 없음";

/// Fixed ordinal order for age-group buckets. Labels outside this list sort
/// after all known buckets, keeping their first-encountered order.
pub const AGE_BUCKET_ORDER: &[&str] = &[
    "10대", "20대", "30대", "40대", "50대", "60대", "70대", "80대", "90대", "100대",
];

pub const AREA_CHART_COLOR: &str = "#6366f1";

pub const GENDER_COLORS: &[&str] = &["#3b82f6", "#ec4899"];
pub const MARRIAGE_COLORS: &[&str] = &["#8b5cf6", "#f59e0b"];
pub const CAR_OWNED_COLORS: &[&str] = &["#10b981", "#06b6d4"];

/// Shown when the re-query endpoint fails and the server sent no detail.
pub const REQUERY_FALLBACK_MESSAGE: &str =
    "죄송합니다. 요청을 처리하지 못했습니다. 잠시 후 다시 시도해 주세요.";

pub const CSV_BOM: &str = "\u{FEFF}";

pub fn poll_interval(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
