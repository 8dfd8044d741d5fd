//! Trait definitions for movie metadata catalogs.
//!
//! The browse controller only ever sees these types, so tests can swap the
//! TMDB client for an in-memory catalog.

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};

/// A read-only catalog of movies, paged the way TMDB pages its lists.
pub trait MovieCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// List popular movies, one page at a time.
    fn discover(&self, page: u32) -> impl Future<Output = Result<MoviePage, Self::Error>> + Send;

    /// Search movies by free text.
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<MoviePage, Self::Error>> + Send;
}

/// One movie record as returned by list endpoints.
///
/// Every field may be missing or null upstream; a missing `id` reads as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A page of results from a list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Movie>,
    /// Raw count as reported; may be out of range. See `clamp_total_pages`.
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Movie>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Movie>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON number, saturating fractional or huge values into `i64`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(|n| n as i64))
}
