//! Executes [`Effect`]s against a [`MovieCatalog`] on the tokio runtime.
//!
//! The GUI wraps [`run`] in an iced `Task`; tests drive it directly.

use std::sync::Arc;

use marquee_api::{MovieCatalog, MovieRequest};

use crate::browse::{Completion, Effect};

/// Perform one effect to completion.
///
/// Debounce timers sleep on the tokio clock, so paused-time tests control
/// them exactly. Catalog errors are flattened to strings for the controller.
pub async fn run<C: MovieCatalog>(catalog: Arc<C>, effect: Effect) -> Completion {
    match effect {
        Effect::Resolve { ticket, after } => {
            tokio::time::sleep(after).await;
            Completion::ResolveDue(ticket)
        }
        Effect::Fetch { ticket, request } => {
            let result = match &request {
                MovieRequest::Discover { page } => catalog.discover(*page).await,
                MovieRequest::Search { query, page } => catalog.search(query, *page).await,
            };
            Completion::Fetched {
                ticket,
                result: result.map_err(|e| e.to_string()),
            }
        }
    }
}
