//! Previous/Next pagination controls as plain data.

/// Hard ceiling TMDB enforces on `page` for list endpoints.
pub const MAX_API_PAGES: u32 = 500;

/// Page total shown in the footer.
///
/// Cosmetic only. Navigation is bounded by the real clamped total, never by
/// this number.
pub const DISPLAY_TOTAL_PAGES: u32 = 48_693;

/// Clamp an API-reported page count into `[1, MAX_API_PAGES]`.
///
/// Negative and oversized counts are accepted and clamped like any other.
pub fn clamp_total_pages(reported: Option<i64>) -> u32 {
    let clamped = reported.unwrap_or(1).clamp(1, i64::from(MAX_API_PAGES));
    u32::try_from(clamped).unwrap_or(MAX_API_PAGES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    pub page: u32,
    pub display_total: u32,
    pub real_total: u32,
}

impl PagerView {
    pub fn new(page: u32, display_total: u32, real_total: u32) -> Self {
        Self {
            page,
            display_total,
            real_total,
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page < self.real_total
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.display_total)
    }
}
