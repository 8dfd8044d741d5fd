use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::image;
use marquee_api::tmdb::TmdbClient;

/// State of a poster image for a given URL.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory cache mapping poster URLs to their download state.
///
/// Entries are never evicted; one session rarely visits more than a few
/// hundred pages.
#[derive(Debug, Default)]
pub struct PosterCache {
    states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.states.get(url)
    }

    /// Mark `url` as loading. Returns `false` if it was already requested.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => PosterState::Loaded(image::Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::debug!(%url, error = %e, "poster download failed");
                PosterState::Failed
            }
        };
        self.states.insert(url, state);
    }
}

/// Download poster bytes through the shared TMDB HTTP client.
pub async fn fetch_poster(client: Arc<TmdbClient>, url: String) -> Result<Vec<u8>, String> {
    client.fetch_image(&url).await.map_err(|e| e.to_string())
}
