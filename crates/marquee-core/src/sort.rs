//! Client-side ordering of one fetched page.
//!
//! Sorting never reorders the fetched results themselves; it produces a
//! permutation of indices that the view walks. All orderings are stable.

use std::cmp::Ordering;

use marquee_api::Movie;

use crate::models::SortKey;

/// Release date as a sort key. Missing dates compare as the empty string.
fn release_key(movie: &Movie) -> &str {
    movie.release_date.as_deref().unwrap_or("")
}

/// Rating as a sort key. Missing (or NaN) ratings count as zero.
fn rating_key(movie: &Movie) -> f64 {
    movie.vote_average.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

fn cmp_rating(a: &Movie, b: &Movie) -> Ordering {
    rating_key(a)
        .partial_cmp(&rating_key(b))
        .unwrap_or(Ordering::Equal)
}

/// Indices into `movies` in display order for `key`.
pub fn sorted_order(movies: &[Movie], key: SortKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..movies.len()).collect();
    match key {
        SortKey::None => {}
        SortKey::ReleaseAsc => {
            order.sort_by(|&a, &b| release_key(&movies[a]).cmp(release_key(&movies[b])));
        }
        SortKey::ReleaseDesc => {
            order.sort_by(|&a, &b| release_key(&movies[b]).cmp(release_key(&movies[a])));
        }
        SortKey::RatingAsc => {
            order.sort_by(|&a, &b| cmp_rating(&movies[a], &movies[b]));
        }
        SortKey::RatingDesc => {
            order.sort_by(|&a, &b| cmp_rating(&movies[b], &movies[a]));
        }
    }
    order
}

/// Borrowing convenience over [`sorted_order`].
pub fn sorted(movies: &[Movie], key: SortKey) -> Vec<&Movie> {
    sorted_order(movies, key)
        .into_iter()
        .map(|i| &movies[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str, date: Option<&str>, rating: Option<f64>) -> Movie {
        Movie {
            id,
            title: Some(title.into()),
            release_date: date.map(Into::into),
            vote_average: rating,
            poster_path: None,
        }
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies
            .iter()
            .map(|m| m.title.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_rating_desc_example() {
        let movies = vec![
            movie(1, "B", None, Some(5.0)),
            movie(2, "A", None, Some(8.0)),
        ];
        assert_eq!(titles(&sorted(&movies, SortKey::RatingDesc)), ["A", "B"]);
        assert_eq!(titles(&sorted(&movies, SortKey::RatingAsc)), ["B", "A"]);
    }

    #[test]
    fn test_none_is_identity() {
        let movies = vec![
            movie(1, "C", Some("2001-01-01"), Some(1.0)),
            movie(2, "A", Some("1999-01-01"), Some(9.0)),
            movie(3, "B", None, None),
        ];
        assert_eq!(sorted_order(&movies, SortKey::None), [0, 1, 2]);
    }

    #[test]
    fn test_release_order_with_missing_dates() {
        let movies = vec![
            movie(1, "mid", Some("2010-05-01"), None),
            movie(2, "none", None, None),
            movie(3, "new", Some("2024-02-27"), None),
            movie(4, "empty", Some(""), None),
            movie(5, "old", Some("1977-05-25"), None),
        ];
        assert_eq!(
            titles(&sorted(&movies, SortKey::ReleaseAsc)),
            ["none", "empty", "old", "mid", "new"]
        );
        assert_eq!(
            titles(&sorted(&movies, SortKey::ReleaseDesc)),
            ["new", "mid", "old", "none", "empty"]
        );
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let movies = vec![
            movie(1, "unrated", None, None),
            movie(2, "low", None, Some(-1.0)),
            movie(3, "nan", None, Some(f64::NAN)),
            movie(4, "high", None, Some(7.1)),
        ];
        assert_eq!(
            titles(&sorted(&movies, SortKey::RatingAsc)),
            ["low", "unrated", "nan", "high"]
        );
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let movies = vec![
            movie(1, "first", Some("2020-01-01"), Some(6.5)),
            movie(2, "x", Some("2021-01-01"), Some(9.0)),
            movie(3, "second", Some("2020-01-01"), Some(6.5)),
            movie(4, "third", Some("2020-01-01"), Some(6.5)),
        ];
        for key in [
            SortKey::ReleaseAsc,
            SortKey::ReleaseDesc,
            SortKey::RatingAsc,
            SortKey::RatingDesc,
        ] {
            let order = titles(&sorted(&movies, key));
            let ties: Vec<_> = order.iter().filter(|t| *t != "x").cloned().collect();
            assert_eq!(ties, ["first", "second", "third"], "key {key:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let movies = vec![
            movie(1, "a", Some("2003-01-01"), Some(3.0)),
            movie(2, "b", None, Some(8.0)),
            movie(3, "c", Some("1990-01-01"), None),
            movie(4, "d", Some("2003-01-01"), Some(8.0)),
        ];
        for key in SortKey::ALL {
            let once: Vec<Movie> = sorted(&movies, *key).into_iter().cloned().collect();
            let twice: Vec<Movie> = sorted(&once, *key).into_iter().cloned().collect();
            assert_eq!(once, twice, "key {key:?}");
        }
    }

    #[test]
    fn test_input_untouched() {
        let movies = vec![movie(1, "b", None, Some(1.0)), movie(2, "a", None, Some(2.0))];
        let before = movies.clone();
        let _ = sorted_order(&movies, SortKey::RatingDesc);
        assert_eq!(movies, before);
    }
}
