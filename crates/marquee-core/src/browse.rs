//! The browse controller: query resolution, fetching, paging and sorting.
//!
//! [`Browser`] is a plain state container. It never sleeps or performs I/O;
//! instead each transition hands back an [`Effect`] for the host to run, and
//! the host reports the outcome with a [`Completion`]. Every effect carries
//! a [`Ticket`], and a completion whose ticket has been superseded is
//! discarded without touching state.

use std::time::Duration;

use marquee_api::{Movie, MoviePage, MovieRequest};

use crate::debounce::{Debouncer, DEBOUNCE_INTERVAL};
use crate::models::{Mode, QueryState, SortKey};
use crate::pager::{clamp_total_pages, PagerView, DISPLAY_TOTAL_PAGES};
use crate::sort;
use crate::ticket::{Ticket, TicketCounter};

/// Work the host must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wait `after`, then report [`Completion::ResolveDue`].
    Resolve { ticket: Ticket, after: Duration },
    /// Run `request`, then report [`Completion::Fetched`].
    Fetch { ticket: Ticket, request: MovieRequest },
}

/// Outcome of an [`Effect`], fed back through [`Browser::apply`].
#[derive(Debug, Clone)]
pub enum Completion {
    ResolveDue(Ticket),
    Fetched {
        ticket: Ticket,
        result: Result<MoviePage, String>,
    },
}

#[derive(Debug)]
pub struct Browser {
    state: QueryState,
    debounce: Debouncer,
    fetches: TicketCounter,
    in_flight: Option<Ticket>,
    /// Request behind the newest fetch ticket.
    requested: Option<MovieRequest>,
    results: Vec<Movie>,
    /// Display order of `results` under `state.sort`.
    order: Vec<usize>,
    real_total_pages: u32,
}

impl Browser {
    /// Start in discover mode on page 1 and request that page immediately.
    pub fn new(sort: SortKey) -> (Self, Effect) {
        Self::with_debounce(sort, DEBOUNCE_INTERVAL)
    }

    pub fn with_debounce(sort: SortKey, interval: Duration) -> (Self, Effect) {
        let mut browser = Self {
            state: QueryState::new(sort),
            debounce: Debouncer::new(interval),
            fetches: TicketCounter::new(),
            in_flight: None,
            requested: None,
            results: Vec::new(),
            order: Vec::new(),
            real_total_pages: 1,
        };
        let effect = browser.issue_fetch();
        (browser, effect)
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn sort(&self) -> SortKey {
        self.state.sort
    }

    /// Results of the last committed fetch, in API order.
    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    /// Results in display order.
    pub fn sorted(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.order.iter().map(|&i| &self.results[i])
    }

    pub fn real_total_pages(&self) -> u32 {
        self.real_total_pages
    }

    pub fn pager(&self) -> PagerView {
        PagerView::new(self.state.page, DISPLAY_TOTAL_PAGES, self.real_total_pages)
    }

    /// Whether the newest fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether an edit is waiting out the debounce window.
    pub fn is_resolve_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// The request the current state calls for.
    pub fn current_request(&self) -> MovieRequest {
        let page = self.state.page;
        match self.state.mode {
            Mode::Search if !self.state.query.is_empty() => MovieRequest::Search {
                query: self.state.query.clone(),
                page,
            },
            _ => MovieRequest::Discover { page },
        }
    }

    // ── Transitions ───────────────────────────────────────────────

    /// Record new search box text and restart the debounce window.
    pub fn set_query(&mut self, text: impl Into<String>) -> Effect {
        self.state.text = text.into();
        let ticket = self.debounce.schedule();
        tracing::debug!(%ticket, text = %self.state.text, "query changed, resolution scheduled");
        Effect::Resolve {
            ticket,
            after: self.debounce.interval(),
        }
    }

    /// Resolve the debounced text into a mode. Stale tickets are ignored.
    ///
    /// Page returns to 1 on every resolution, even if the mode is unchanged.
    pub fn resolve(&mut self, ticket: Ticket) -> Option<Effect> {
        if !self.debounce.fire(ticket) {
            tracing::debug!(%ticket, "stale resolution discarded");
            return None;
        }
        let trimmed = self.state.text.trim();
        self.state.mode = Mode::for_text(trimmed);
        self.state.query = trimmed.to_string();
        self.state.page = 1;
        tracing::debug!(mode = %self.state.mode, query = %self.state.query, "query resolved");
        self.fetch_if_changed()
    }

    /// Change the sort order. Never refetches.
    pub fn set_sort(&mut self, sort: SortKey) {
        if self.state.sort != sort {
            self.state.sort = sort;
            self.resort();
        }
    }

    pub fn prev_page(&mut self) -> Option<Effect> {
        if !self.pager().prev_enabled() {
            return None;
        }
        self.state.page = self.state.page.saturating_sub(1).max(1);
        self.fetch_if_changed()
    }

    pub fn next_page(&mut self) -> Option<Effect> {
        if !self.pager().next_enabled() {
            return None;
        }
        self.state.page = (self.state.page + 1).min(self.real_total_pages);
        self.fetch_if_changed()
    }

    /// Re-request the current page unconditionally.
    pub fn refresh(&mut self) -> Effect {
        self.issue_fetch()
    }

    /// Commit a fetch outcome if `ticket` is still the newest fetch.
    ///
    /// Any error (transport, status, decoding) empties the grid and bounds
    /// the pager to one page. Returns whether the outcome was applied.
    pub fn apply_page<E: std::fmt::Display>(
        &mut self,
        ticket: Ticket,
        result: Result<MoviePage, E>,
    ) -> bool {
        if !self.fetches.is_current(ticket) || self.in_flight != Some(ticket) {
            tracing::debug!(%ticket, "superseded fetch discarded");
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                self.real_total_pages = clamp_total_pages(page.total_pages);
                self.results = page.results;
                tracing::info!(
                    %ticket,
                    count = self.results.len(),
                    page = self.state.page,
                    real_total = self.real_total_pages,
                    "page committed"
                );
            }
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "fetch failed, clearing results");
                self.results.clear();
                self.real_total_pages = 1;
            }
        }
        self.resort();
        true
    }

    /// Feed back any completion; returns a follow-up effect if one is needed.
    pub fn apply(&mut self, completion: Completion) -> Option<Effect> {
        match completion {
            Completion::ResolveDue(ticket) => self.resolve(ticket),
            Completion::Fetched { ticket, result } => {
                self.apply_page(ticket, result);
                None
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────

    fn fetch_if_changed(&mut self) -> Option<Effect> {
        let request = self.current_request();
        if self.requested.as_ref() == Some(&request) {
            return None;
        }
        Some(self.issue_fetch())
    }

    fn issue_fetch(&mut self) -> Effect {
        let request = self.current_request();
        let ticket = self.fetches.issue();
        tracing::debug!(%ticket, %request, "fetch issued");
        self.in_flight = Some(ticket);
        self.requested = Some(request.clone());
        Effect::Fetch { ticket, request }
    }

    fn resort(&mut self) {
        self.order = sort::sorted_order(&self.results, self.state.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str, rating: Option<f64>) -> Movie {
        Movie {
            id,
            title: Some(title.into()),
            release_date: None,
            vote_average: rating,
            poster_path: None,
        }
    }

    fn page_of(movies: Vec<Movie>, total_pages: Option<i64>) -> MoviePage {
        MoviePage {
            page: Some(1),
            results: movies,
            total_pages,
            total_results: None,
        }
    }

    fn fetch_parts(effect: Effect) -> (Ticket, MovieRequest) {
        match effect {
            Effect::Fetch { ticket, request } => (ticket, request),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn resolve_ticket(effect: Effect) -> Ticket {
        match effect {
            Effect::Resolve { ticket, after } => {
                assert_eq!(after, DEBOUNCE_INTERVAL);
                ticket
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    /// Browser with the initial discover page committed.
    fn loaded(total_pages: i64) -> Browser {
        let (mut b, first) = Browser::new(SortKey::None);
        let (ticket, _) = fetch_parts(first);
        assert!(b.apply_page::<String>(ticket, Ok(page_of(vec![movie(1, "A", Some(5.0))], Some(total_pages)))));
        b
    }

    fn titles(b: &Browser) -> Vec<String> {
        b.sorted()
            .map(|m| m.title.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_initial_state_requests_discover_page_one() {
        let (b, first) = Browser::new(SortKey::RatingDesc);
        let (_, request) = fetch_parts(first);
        assert_eq!(request, MovieRequest::Discover { page: 1 });
        assert_eq!(b.mode(), Mode::Discover);
        assert_eq!(b.page(), 1);
        assert_eq!(b.sort(), SortKey::RatingDesc);
        assert_eq!(b.real_total_pages(), 1);
        assert!(b.is_loading());
    }

    #[test]
    fn test_resolution_enters_search_and_fetches() {
        let mut b = loaded(20);
        let ticket = resolve_ticket(b.set_query("  dune "));
        // Nothing changes until the window elapses.
        assert_eq!(b.mode(), Mode::Discover);

        let (_, request) = fetch_parts(b.resolve(ticket).expect("search fetch"));
        assert_eq!(b.mode(), Mode::Search);
        assert_eq!(b.state().query, "dune");
        assert_eq!(
            request,
            MovieRequest::Search {
                query: "dune".into(),
                page: 1
            }
        );
    }

    #[test]
    fn test_whitespace_query_resolves_to_discover() {
        let mut b = loaded(20);
        let t = resolve_ticket(b.set_query("   "));
        // Same (discover, page 1) as already requested: no refetch.
        assert!(b.resolve(t).is_none());
        assert_eq!(b.mode(), Mode::Discover);
    }

    #[test]
    fn test_only_last_edit_in_window_resolves() {
        let mut b = loaded(20);
        let t1 = resolve_ticket(b.set_query("d"));
        let t2 = resolve_ticket(b.set_query("du"));
        let t3 = resolve_ticket(b.set_query("dun"));
        assert!(b.is_resolve_pending());

        assert!(b.resolve(t1).is_none());
        assert!(b.resolve(t2).is_none());
        assert_eq!(b.mode(), Mode::Discover);
        assert!(b.is_resolve_pending());

        let (_, request) = fetch_parts(b.resolve(t3).unwrap());
        assert_eq!(
            request,
            MovieRequest::Search {
                query: "dun".into(),
                page: 1
            }
        );
        assert!(!b.is_resolve_pending());
        // The winning ticket cannot fire twice.
        assert!(b.resolve(t3).is_none());
    }

    #[test]
    fn test_resolution_resets_page_even_without_mode_change() {
        let mut b = loaded(20);
        let (t, _) = fetch_parts(b.next_page().unwrap());
        b.apply_page::<String>(t, Ok(page_of(vec![], Some(20))));
        let (t, _) = fetch_parts(b.next_page().unwrap());
        b.apply_page::<String>(t, Ok(page_of(vec![], Some(20))));
        assert_eq!(b.page(), 3);

        // Type and delete back to empty: still discover, but page goes to 1.
        b.set_query("x");
        let t = resolve_ticket(b.set_query(""));
        let (_, request) = fetch_parts(b.resolve(t).unwrap());
        assert_eq!(b.mode(), Mode::Discover);
        assert_eq!(b.page(), 1);
        assert_eq!(request, MovieRequest::Discover { page: 1 });
    }

    #[test]
    fn test_clamps_reported_total() {
        let b = loaded(10_000);
        assert_eq!(b.real_total_pages(), 500);

        let (mut b, first) = Browser::new(SortKey::None);
        let (t, _) = fetch_parts(first);
        b.apply_page::<String>(t, Ok(page_of(vec![], Some(0))));
        assert_eq!(b.real_total_pages(), 1);

        let (mut b, first) = Browser::new(SortKey::None);
        let (t, _) = fetch_parts(first);
        b.apply_page::<String>(t, Ok(page_of(vec![], None)));
        assert_eq!(b.real_total_pages(), 1);
    }

    #[test]
    fn test_out_of_range_total_keeps_results() {
        let b = loaded(-3);
        assert_eq!(b.real_total_pages(), 1);
        assert_eq!(titles(&b), ["A"]);

        let b = loaded(5_000_000_000);
        assert_eq!(b.real_total_pages(), 500);
        assert_eq!(titles(&b), ["A"]);
        assert!(b.pager().next_enabled());
    }

    #[test]
    fn test_failure_clears_results_and_total() {
        let mut b = loaded(42);
        assert_eq!(b.results().len(), 1);
        let t = b.refresh();
        let (t, _) = fetch_parts(t);
        assert!(b.apply_page(t, Err("HTTP 401")));
        assert!(b.results().is_empty());
        assert_eq!(b.real_total_pages(), 1);
        assert!(!b.is_loading());
        assert!(!b.pager().next_enabled());
    }

    #[test]
    fn test_superseded_fetch_never_overwrites() {
        let mut b = loaded(10);
        let (a, _) = fetch_parts(b.next_page().unwrap());
        let (c, request) = fetch_parts(b.next_page().unwrap());
        assert_eq!(request, MovieRequest::Discover { page: 3 });

        // Newer fetch lands first, older one straggles in afterwards.
        assert!(b.apply_page::<String>(c, Ok(page_of(vec![movie(3, "newest", None)], Some(10)))));
        assert!(!b.apply_page::<String>(a, Ok(page_of(vec![movie(2, "stale", None)], Some(99)))));
        assert_eq!(titles(&b), ["newest"]);
        assert_eq!(b.real_total_pages(), 10);

        // A superseded failure is equally inert.
        assert!(!b.apply_page(a, Err("timeout")));
        assert_eq!(titles(&b), ["newest"]);
    }

    #[test]
    fn test_stale_fetch_after_resolution_is_ignored() {
        let mut b = loaded(10);
        let (stale, _) = fetch_parts(b.refresh());
        let t = resolve_ticket(b.set_query("heat"));
        let (fresh, _) = fetch_parts(b.resolve(t).unwrap());

        assert!(!b.apply_page::<String>(stale, Ok(page_of(vec![movie(9, "popular", None)], Some(500)))));
        assert!(b.is_loading());
        assert!(b.apply_page::<String>(fresh, Ok(page_of(vec![movie(10, "Heat", None)], Some(2)))));
        assert_eq!(titles(&b), ["Heat"]);
        assert_eq!(b.real_total_pages(), 2);
    }

    #[test]
    fn test_paging_bounds() {
        let mut b = loaded(2);
        assert!(b.prev_page().is_none());
        assert_eq!(b.page(), 1);

        let (t, request) = fetch_parts(b.next_page().unwrap());
        assert_eq!(request, MovieRequest::Discover { page: 2 });
        b.apply_page::<String>(t, Ok(page_of(vec![], Some(2))));

        assert!(b.next_page().is_none());
        assert_eq!(b.page(), 2);
        assert!(!b.pager().next_enabled());

        let (_, request) = fetch_parts(b.prev_page().unwrap());
        assert_eq!(request, MovieRequest::Discover { page: 1 });
        assert!(!b.pager().prev_enabled());
    }

    #[test]
    fn test_search_paging_keeps_query() {
        let mut b = loaded(5);
        let t = resolve_ticket(b.set_query("alien"));
        let (f, _) = fetch_parts(b.resolve(t).unwrap());
        b.apply_page::<String>(f, Ok(page_of(vec![], Some(4))));

        // Editing the box without resolving must not leak into paging.
        b.set_query("aliens");
        let (_, request) = fetch_parts(b.next_page().unwrap());
        assert_eq!(
            request,
            MovieRequest::Search {
                query: "alien".into(),
                page: 2
            }
        );
    }

    #[test]
    fn test_pager_display_total_is_fixed() {
        let b = loaded(3);
        let pager = b.pager();
        assert_eq!(pager.display_total, DISPLAY_TOTAL_PAGES);
        assert_eq!(pager.real_total, 3);
        assert_eq!(pager.label(), "Page 1 of 48693");
    }

    #[test]
    fn test_sort_is_derived_and_does_not_refetch() {
        let (mut b, first) = Browser::new(SortKey::None);
        let (t, _) = fetch_parts(first);
        b.apply_page::<String>(
            t,
            Ok(page_of(
                vec![movie(1, "B", Some(5.0)), movie(2, "A", Some(8.0))],
                Some(1),
            )),
        );
        assert_eq!(titles(&b), ["B", "A"]);

        b.set_sort(SortKey::RatingDesc);
        assert_eq!(titles(&b), ["A", "B"]);
        // API order is preserved underneath.
        assert_eq!(b.results()[0].title.as_deref(), Some("B"));
        assert!(!b.is_loading());

        b.set_sort(SortKey::None);
        assert_eq!(titles(&b), ["B", "A"]);
    }

    #[test]
    fn test_new_results_are_sorted_with_current_key() {
        let (mut b, first) = Browser::new(SortKey::RatingAsc);
        let (t, _) = fetch_parts(first);
        b.apply_page::<String>(
            t,
            Ok(page_of(
                vec![
                    movie(1, "hi", Some(9.0)),
                    movie(2, "none", None),
                    movie(3, "mid", Some(6.0)),
                ],
                Some(1),
            )),
        );
        assert_eq!(titles(&b), ["none", "mid", "hi"]);
    }

    #[test]
    fn test_apply_routes_completions() {
        let (mut b, first) = Browser::new(SortKey::None);
        let (t, _) = fetch_parts(first);
        assert!(b
            .apply(Completion::Fetched {
                ticket: t,
                result: Ok(page_of(vec![movie(1, "A", None)], Some(3))),
            })
            .is_none());
        assert_eq!(b.real_total_pages(), 3);

        let r = resolve_ticket(b.set_query("ran"));
        let follow_up = b.apply(Completion::ResolveDue(r));
        assert!(matches!(follow_up, Some(Effect::Fetch { .. })));
    }
}
