// SPDX-License-Identifier: Apache-2.0

use marquee_model::{ActorMovieReturn, CastCredit, CrewCredit, DirectorMovie, MovieId};
use marquee_query::{actor_report, director_report, QueryErrorCode};
use marquee_store::FilmStore;

fn movie(id: i64, return_pct: f64, budget: f64, revenue: f64) -> DirectorMovie {
    DirectorMovie {
        id: MovieId::new(id),
        title: format!("movie-{id}"),
        release_date: "2000-01-01".to_string(),
        return_pct,
        budget,
        revenue,
    }
}

#[test]
fn director_aggregate_contract_worked_example() {
    let store = FilmStore::from_tables(
        vec![
            CrewCredit {
                name: "Jane Doe".to_string(),
                movie_id: MovieId::new(1),
            },
            CrewCredit {
                name: "Jane Doe".to_string(),
                movie_id: MovieId::new(2),
            },
        ],
        vec![movie(1, 10.0, 100.0, 200.0), movie(2, 0.0, 50.0, 0.0)],
        vec![],
        vec![],
        vec![],
    );

    let report = director_report(&store, "jane doe").expect("director report");
    assert_eq!(report.aggregates.total_revenue, 200.0);
    assert_eq!(report.aggregates.average_return, 5.0);
    assert_eq!(report.aggregates.average_return_non_zero, 10.0);
    assert_eq!(report.aggregates.zero_return_count, 1);
    assert_eq!(report.movies.len(), 2);
}

#[test]
fn actor_duplicate_cast_credits_do_not_inflate_financial_rows() {
    let store = FilmStore::from_tables(
        vec![],
        vec![],
        vec![
            CastCredit {
                name: "Sam Lee".to_string(),
                movie_id: MovieId::new(7),
            },
            CastCredit {
                name: "Sam Lee".to_string(),
                movie_id: MovieId::new(7),
            },
            CastCredit {
                name: "Sam Lee".to_string(),
                movie_id: MovieId::new(8),
            },
        ],
        vec![
            ActorMovieReturn {
                id: MovieId::new(7),
                return_frac: 3.0,
            },
            ActorMovieReturn {
                id: MovieId::new(8),
                return_frac: 1.0,
            },
        ],
        vec![],
    );

    let report = actor_report(&store, "sam lee").expect("actor report");
    // Three cast credits, two distinct movies: the sentence counts the two
    // financial rows actually aggregated.
    assert_eq!(report.aggregates.appearances, 2);
    assert_eq!(report.aggregates.total_return, 4.0);
    assert!(report.summary.contains("ha actuado en 2 películas"));
}

#[test]
fn actor_with_cast_credits_but_no_financial_rows_reports_zeroes() {
    let store = FilmStore::from_tables(
        vec![],
        vec![],
        vec![CastCredit {
            name: "Ghost Role".to_string(),
            movie_id: MovieId::new(404),
        }],
        vec![],
        vec![],
    );

    let report = actor_report(&store, "ghost role").expect("actor report");
    assert_eq!(report.aggregates.appearances, 0);
    assert_eq!(report.aggregates.total_return, 0.0);
    assert_eq!(report.aggregates.average_return_pct, 0.0);
    assert_eq!(report.aggregates.overall_return_pct, 0.0);
    assert!(report.summary.contains("ha actuado en 0 películas"));
}

#[test]
fn not_found_and_validation_codes_are_distinct() {
    let store = FilmStore::from_tables(vec![], vec![], vec![], vec![], vec![]);
    assert_eq!(
        director_report(&store, "anyone").expect_err("no crew").code,
        QueryErrorCode::NotFound
    );
    assert_eq!(
        actor_report(&store, "anyone").expect_err("no cast").code,
        QueryErrorCode::NotFound
    );
    assert_eq!(
        actor_report(&store, "").expect_err("empty name").code,
        QueryErrorCode::Validation
    );
}
