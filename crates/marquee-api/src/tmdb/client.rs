use reqwest::Client;

use super::error::TmdbError;
use super::types::TmdbStatus;
use crate::request::MovieRequest;
use crate::traits::{MovieCatalog, MoviePage};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// TMDB v3 REST client authenticated with an `api_key` query parameter.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    api_base: String,
    language: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different API root (mirrors, local fakes).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: TmdbStatus::message_from_body(&body),
            })
        }
    }

    /// Execute one list request and decode the page envelope.
    pub async fn fetch(&self, request: &MovieRequest) -> Result<MoviePage, TmdbError> {
        let url = request.to_url(&self.api_base, &self.api_key, &self.language)?;
        tracing::debug!(%request, "TMDB request");

        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        resp.json::<MoviePage>()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// Download raw image bytes (posters) from the image service.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, TmdbError> {
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

impl MovieCatalog for TmdbClient {
    type Error = TmdbError;

    async fn discover(&self, page: u32) -> Result<MoviePage, TmdbError> {
        self.fetch(&MovieRequest::Discover { page }).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<MoviePage, TmdbError> {
        self.fetch(&MovieRequest::Search {
            query: query.to_string(),
            page,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = TmdbClient::new(String::new());
        assert!(!client.has_api_key());
        assert_eq!(client.api_base, DEFAULT_API_BASE);
        assert_eq!(client.language, "en-US");

        let client = TmdbClient::new("abc".into())
            .with_api_base("http://localhost:9")
            .with_language("fr-FR");
        assert!(client.has_api_key());
        assert_eq!(client.api_base, "http://localhost:9");
        assert_eq!(client.language, "fr-FR");
    }

    #[tokio::test]
    async fn test_bad_base_fails_before_sending() {
        let client = TmdbClient::new("abc".into()).with_api_base("::nope::");
        let err = client.discover(1).await.unwrap_err();
        assert!(matches!(err, TmdbError::Url(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        // Port 9 (discard) on loopback is closed in test environments.
        let client = TmdbClient::new("abc".into()).with_api_base("http://127.0.0.1:9/3");
        let err = client.search("dune", 1).await.unwrap_err();
        assert!(matches!(err, TmdbError::Http(_)), "got {err:?}");
    }
}
