use serde::Deserialize;

/// Error envelope TMDB returns alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbStatus {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl TmdbStatus {
    /// Best-effort human message from an error body.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<TmdbStatus>(body)
            .ok()
            .and_then(|s| s.status_message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}
