//! Display mapping for one movie in the results grid.

use marquee_api::Movie;

use crate::placeholder;

pub const UNTITLED: &str = "Untitled";

/// Shown in place of a missing rating or release date.
pub const MISSING: &str = "\u{2014}";

/// Where a card's artwork comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    /// Image service URL built from the movie's poster path.
    Remote(String),
    /// Generated SVG with the title drawn on it.
    Placeholder { label: String, svg: String },
}

impl Poster {
    pub fn placeholder(label: &str) -> Self {
        Self::Placeholder {
            label: label.to_string(),
            svg: placeholder::placeholder_svg(label),
        }
    }

    /// An image source usable as a URL (remote or `data:` URI).
    pub fn src(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Placeholder { label, .. } => placeholder::placeholder_data_uri(label),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Everything a card needs to draw, with defaults already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Stable identity for the grid.
    pub key: String,
    pub title: String,
    pub alt: String,
    pub poster: Poster,
    pub release: String,
    pub rating: String,
}

impl MovieCard {
    pub fn from_movie(movie: &Movie, image_base: &str) -> Self {
        let title = movie
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let poster = match movie.poster_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => Poster::Remote(poster_url(image_base, path)),
            None => Poster::placeholder(&title),
        };

        let release = movie
            .release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(MISSING)
            .to_string();

        let rating = movie
            .vote_average
            .map(format_rating)
            .unwrap_or_else(|| MISSING.to_string());

        Self {
            key: format!(
                "{}-{}-{}",
                movie.id,
                movie.release_date.as_deref().unwrap_or_default(),
                movie.title.as_deref().unwrap_or_default()
            ),
            alt: format!("{title} poster"),
            title,
            poster,
            release,
            rating,
        }
    }
}

/// Join the image base and a TMDB poster path (which starts with `/`).
pub fn poster_url(image_base: &str, path: &str) -> String {
    format!("{image_base}{path}")
}

/// Shortest plain rendering of a vote average: `8`, `7.5`, `6.25`.
pub fn format_rating(value: f64) -> String {
    format!("{value}")
}
