// SPDX-License-Identifier: Apache-2.0

use crate::aggregate::{actor_aggregates, director_aggregates};
use crate::filters::normalize_name_lookup;
use crate::format::{format_currency, format_percent};
use crate::query_error::{QueryError, QueryErrorCode};
use crate::reports::{actor_sentence, director_sentence, ActorReport, DirectorReport, MovieEntry};
use marquee_model::{ActorMovieReturn, CastCredit, CrewCredit, DirectorMovie, MovieId};
use marquee_store::FilmStore;
use std::collections::{HashMap, HashSet};

/// Director lookup: filter crew credits case-insensitively, inner-join the
/// matches to the director movie table, aggregate, and render.
pub fn director_report(store: &FilmStore, name: &str) -> Result<DirectorReport, QueryError> {
    let needle = normalize_name_lookup(name);
    let credits: Vec<&CrewCredit> = store
        .crew_credits()
        .iter()
        .filter(|c| normalize_name_lookup(&c.name) == needle)
        .collect();
    if credits.is_empty() {
        return Err(QueryError::new(
            QueryErrorCode::NotFound,
            format!("director not found: {name}"),
        ));
    }

    let mut movies_by_id: HashMap<MovieId, Vec<&DirectorMovie>> = HashMap::new();
    for movie in store.director_movies() {
        movies_by_id.entry(movie.id).or_default().push(movie);
    }

    // Inner join on movie_id, left order preserved; credits without movie
    // metadata drop silently.
    let mut joined: Vec<&DirectorMovie> = Vec::with_capacity(credits.len());
    for credit in &credits {
        if let Some(matches) = movies_by_id.get(&credit.movie_id) {
            joined.extend(matches.iter().copied());
        }
    }

    let aggregates = director_aggregates(&joined);
    let movies = joined
        .iter()
        .map(|m| MovieEntry {
            title: m.title.clone(),
            release_date: m.release_date.clone(),
            return_pct: format_percent(m.return_pct),
            budget: format_currency(m.budget),
            revenue: format_currency(m.revenue),
        })
        .collect();

    Ok(DirectorReport {
        name: name.to_string(),
        summary: director_sentence(name, &aggregates),
        movies,
        aggregates,
    })
}

/// Distinct crew names, original casing, first appearance wins.
#[must_use]
pub fn list_directors(store: &FilmStore) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for credit in store.crew_credits() {
        if seen.insert(credit.name.as_str()) {
            out.push(credit.name.clone());
        }
    }
    out
}

/// Actor lookup: filter cast credits case-insensitively, semi-join the
/// financial table by movie-id membership, aggregate, and render.
pub fn actor_report(store: &FilmStore, name: &str) -> Result<ActorReport, QueryError> {
    if name.trim().is_empty() {
        return Err(QueryError::new(
            QueryErrorCode::Validation,
            "actor name must not be empty",
        ));
    }

    let needle = normalize_name_lookup(name);
    let credits: Vec<&CastCredit> = store
        .cast_credits()
        .iter()
        .filter(|c| normalize_name_lookup(&c.name) == needle)
        .collect();
    if credits.is_empty() {
        return Err(QueryError::new(
            QueryErrorCode::NotFound,
            format!("actor not found: {name}"),
        ));
    }

    // Semi-join: membership test only. Duplicate cast credits for the same
    // movie never duplicate a financial row.
    let movie_ids: HashSet<MovieId> = credits.iter().map(|c| c.movie_id).collect();
    let rows: Vec<&ActorMovieReturn> = store
        .actor_returns()
        .iter()
        .filter(|r| movie_ids.contains(&r.id))
        .collect();

    let aggregates = actor_aggregates(&rows);
    Ok(ActorReport {
        name: name.to_string(),
        summary: actor_sentence(name, &aggregates),
        aggregates,
    })
}

/// Every actor-index name, lowercased, source order, no dedup.
#[must_use]
pub fn list_actors(store: &FilmStore) -> Vec<String> {
    store
        .actor_index()
        .iter()
        .map(|n| n.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{actor_report, director_report, list_actors, list_directors};
    use crate::query_error::QueryErrorCode;
    use marquee_model::{ActorMovieReturn, CastCredit, CrewCredit, DirectorMovie, MovieId};
    use marquee_store::FilmStore;

    fn crew(name: &str, id: i64) -> CrewCredit {
        CrewCredit {
            name: name.to_string(),
            movie_id: MovieId::new(id),
        }
    }

    fn cast(name: &str, id: i64) -> CastCredit {
        CastCredit {
            name: name.to_string(),
            movie_id: MovieId::new(id),
        }
    }

    fn movie(id: i64, title: &str, return_pct: f64, budget: f64, revenue: f64) -> DirectorMovie {
        DirectorMovie {
            id: MovieId::new(id),
            title: title.to_string(),
            release_date: "1995-10-30".to_string(),
            return_pct,
            budget,
            revenue,
        }
    }

    fn ret(id: i64, return_frac: f64) -> ActorMovieReturn {
        ActorMovieReturn {
            id: MovieId::new(id),
            return_frac,
        }
    }

    fn fixture_store() -> FilmStore {
        FilmStore::from_tables(
            vec![
                crew("John Lasseter", 862),
                crew("John Lasseter", 863),
                crew("Joe Johnston", 8844),
            ],
            vec![
                movie(862, "Toy Story", 10.0, 100.0, 200.0),
                movie(863, "A Bug's Life", 0.0, 50.0, 0.0),
            ],
            vec![
                cast("Tom Hanks", 862),
                cast("tom hanks", 862),
                cast("Tom Hanks", 863),
            ],
            vec![ret(862, 2.0), ret(863, 0.0), ret(9999, 7.0)],
            vec!["Tom Hanks".to_string(), "Robin Wright".to_string()],
        )
    }

    #[test]
    fn director_lookup_joins_and_aggregates() {
        let store = fixture_store();
        let report = director_report(&store, "john lasseter").expect("director report");

        assert_eq!(report.movies.len(), 2);
        assert_eq!(report.movies[0].title, "Toy Story");
        assert_eq!(report.movies[0].return_pct, "10.00%");
        assert_eq!(report.movies[0].budget, "$100.00");
        assert_eq!(report.movies[1].revenue, "$0.00");
        assert_eq!(report.aggregates.total_revenue, 200.0);
        assert_eq!(report.aggregates.average_return, 5.0);
        assert_eq!(report.aggregates.average_return_non_zero, 10.0);
        assert_eq!(report.aggregates.zero_return_count, 1);
    }

    #[test]
    fn director_lookup_is_case_insensitive_and_deterministic() {
        let store = fixture_store();
        let lower = director_report(&store, "john lasseter").expect("lowercase lookup");
        let mixed = director_report(&store, "JOHN Lasseter").expect("mixed-case lookup");

        assert_eq!(lower.aggregates, mixed.aggregates);
        assert_eq!(lower.movies, mixed.movies);

        let again = director_report(&store, "john lasseter").expect("repeat lookup");
        assert_eq!(lower.summary, again.summary);
    }

    #[test]
    fn unknown_director_is_not_found() {
        let store = fixture_store();
        let err = director_report(&store, "Nobody Here").expect_err("unknown director");
        assert_eq!(err.code, QueryErrorCode::NotFound);
    }

    #[test]
    fn director_credits_without_movie_metadata_drop_silently() {
        let store = FilmStore::from_tables(
            vec![crew("Jane Doe", 1), crew("Jane Doe", 2)],
            vec![movie(1, "Known", 4.0, 10.0, 40.0)],
            vec![],
            vec![],
            vec![],
        );
        let report = director_report(&store, "jane doe").expect("director report");

        assert_eq!(report.movies.len(), 1);
        assert_eq!(report.aggregates.movie_count, 1);
        assert_eq!(report.aggregates.total_revenue, 40.0);
    }

    #[test]
    fn list_directors_dedups_exact_names_in_first_seen_order() {
        let store = fixture_store();
        assert_eq!(list_directors(&store), vec!["John Lasseter", "Joe Johnston"]);
    }

    #[test]
    fn actor_semi_join_counts_each_financial_row_once() {
        let store = fixture_store();
        // Two cast credits for movie 862 still yield one financial row for it.
        let report = actor_report(&store, "Tom Hanks").expect("actor report");

        assert_eq!(report.aggregates.appearances, 2);
        assert_eq!(report.aggregates.total_return, 2.0);
        assert_eq!(report.aggregates.average_return_pct, 200.0);
        assert_eq!(report.aggregates.overall_return_pct, 100.0);
        assert_eq!(report.aggregates.zero_return_count, 1);
    }

    #[test]
    fn empty_actor_name_is_invalid_regardless_of_dataset() {
        let store = fixture_store();
        assert_eq!(
            actor_report(&store, "").expect_err("empty name").code,
            QueryErrorCode::Validation
        );
        assert_eq!(
            actor_report(&store, "   ").expect_err("blank name").code,
            QueryErrorCode::Validation
        );

        let empty = FilmStore::from_tables(vec![], vec![], vec![], vec![], vec![]);
        assert_eq!(
            actor_report(&empty, "").expect_err("empty name").code,
            QueryErrorCode::Validation
        );
    }

    #[test]
    fn unknown_actor_is_not_found() {
        let store = fixture_store();
        let err = actor_report(&store, "Nobody Here").expect_err("unknown actor");
        assert_eq!(err.code, QueryErrorCode::NotFound);
    }

    #[test]
    fn list_actors_lowercases_without_dedup() {
        let store = FilmStore::from_tables(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![
                "Tom Hanks".to_string(),
                "TOM HANKS".to_string(),
                "Robin Wright".to_string(),
            ],
        );
        let names = list_actors(&store);
        assert_eq!(names, vec!["tom hanks", "tom hanks", "robin wright"]);
        assert_eq!(names.len(), store.actor_index().len());
    }
}
