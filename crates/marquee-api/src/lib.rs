//! Client for the movie metadata service backing Marquee.
//!
//! [`traits::MovieCatalog`] is the seam the view-state machine talks to;
//! [`tmdb::TmdbClient`] is the production implementation.

pub mod request;
pub mod tmdb;
pub mod traits;

pub use request::MovieRequest;
pub use traits::{Movie, MovieCatalog, MoviePage};
