use url::Url;

/// The two list requests the browser issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovieRequest {
    /// Popular movies, unfiltered.
    Discover { page: u32 },
    /// Text search. `query` is already trimmed and non-empty.
    Search { query: String, page: u32 },
}

impl MovieRequest {
    pub fn page(&self) -> u32 {
        match self {
            Self::Discover { page } | Self::Search { page, .. } => *page,
        }
    }

    /// Endpoint path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Discover { .. } => "/discover/movie",
            Self::Search { .. } => "/search/movie",
        }
    }

    /// Build the full request URL, credential included.
    ///
    /// An empty `api_key` is sent as-is; upstream rejects it.
    pub fn to_url(&self, api_base: &str, api_key: &str, language: &str) -> Result<Url, url::ParseError> {
        let endpoint = format!("{}{}", api_base.trim_end_matches('/'), self.path());
        let page = self.page().to_string();
        match self {
            Self::Discover { .. } => Url::parse_with_params(
                &endpoint,
                &[
                    ("api_key", api_key),
                    ("language", language),
                    ("sort_by", "popularity.desc"),
                    ("include_adult", "false"),
                    ("include_video", "false"),
                    ("page", page.as_str()),
                ],
            ),
            Self::Search { query, .. } => Url::parse_with_params(
                &endpoint,
                &[
                    ("api_key", api_key),
                    ("query", query.as_str()),
                    ("page", page.as_str()),
                ],
            ),
        }
    }
}

impl std::fmt::Display for MovieRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discover { page } => write!(f, "discover p{page}"),
            Self::Search { query, page } => write!(f, "search {query:?} p{page}"),
        }
    }
}
