use serde::{Deserialize, Serialize};

/// Which list endpoint backs the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Popular movies, no text filter.
    #[default]
    Discover,
    /// Free-text search; only entered with a non-empty trimmed query.
    Search,
}

impl Mode {
    /// Mode implied by raw input text.
    pub fn for_text(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Discover
        } else {
            Self::Search
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discover => write!(f, "discover"),
            Self::Search => write!(f, "search"),
        }
    }
}

/// Client-side ordering of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep the order the API returned.
    #[default]
    None,
    ReleaseAsc,
    ReleaseDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    pub const ALL: &[SortKey] = &[
        Self::None,
        Self::ReleaseAsc,
        Self::ReleaseDesc,
        Self::RatingAsc,
        Self::RatingDesc,
    ];

    /// Stable identifier used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReleaseAsc => "release_asc",
            Self::ReleaseDesc => "release_desc",
            Self::RatingAsc => "rating_asc",
            Self::RatingDesc => "rating_desc",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Sort By"),
            Self::ReleaseAsc => write!(f, "Release Date (Asc)"),
            Self::ReleaseDesc => write!(f, "Release Date (Desc)"),
            Self::RatingAsc => write!(f, "Rating (Asc)"),
            Self::RatingDesc => write!(f, "Rating (Desc)"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "release_asc" => Ok(Self::ReleaseAsc),
            "release_desc" => Ok(Self::ReleaseDesc),
            "rating_asc" => Ok(Self::RatingAsc),
            "rating_desc" => Ok(Self::RatingDesc),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// What the user asked for, as last resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Raw search box contents, updated on every keystroke.
    pub text: String,
    pub mode: Mode,
    /// Trimmed text captured by the last resolution. Empty in discover mode.
    pub query: String,
    /// 1-based page number.
    pub page: u32,
    pub sort: SortKey,
}

impl QueryState {
    pub fn new(sort: SortKey) -> Self {
        Self {
            text: String::new(),
            mode: Mode::Discover,
            query: String::new(),
            page: 1,
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_text() {
        assert_eq!(Mode::for_text(""), Mode::Discover);
        assert_eq!(Mode::for_text("   \t"), Mode::Discover);
        assert_eq!(Mode::for_text(" dune "), Mode::Search);
    }

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), *key);
        }
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_matches_as_str() {
        #[derive(Deserialize)]
        struct Wrap {
            key: SortKey,
        }
        let w: Wrap = toml::from_str(r#"key = "release_desc""#).unwrap();
        assert_eq!(w.key, SortKey::ReleaseDesc);
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortKey::None.to_string(), "Sort By");
        assert_eq!(SortKey::RatingDesc.to_string(), "Rating (Desc)");
    }
}
