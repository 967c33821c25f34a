// SPDX-License-Identifier: Apache-2.0

use crate::format::round2;
use marquee_model::{ActorMovieReturn, DirectorMovie};
use serde::{Deserialize, Serialize};

/// Aggregates over the inner-joined director rows. `return_pct` values are
/// pre-multiplied percentages and are summed and averaged as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorAggregates {
    pub movie_count: usize,
    pub total_revenue: f64,
    pub total_return: f64,
    pub average_return: f64,
    pub average_return_non_zero: f64,
    pub zero_return_count: usize,
}

#[must_use]
pub fn director_aggregates(rows: &[&DirectorMovie]) -> DirectorAggregates {
    let movie_count = rows.len();
    let total_revenue: f64 = rows.iter().map(|m| m.revenue).sum();
    let total_return: f64 = rows.iter().map(|m| m.return_pct).sum();
    let average_return = if movie_count > 0 {
        total_return / movie_count as f64
    } else {
        0.0
    };

    let mut non_zero_sum = 0.0;
    let mut non_zero_count = 0usize;
    let mut zero_return_count = 0usize;
    for movie in rows {
        if movie.return_pct > 0.0 {
            non_zero_sum += movie.return_pct;
            non_zero_count += 1;
        }
        if movie.return_pct == 0.0 {
            zero_return_count += 1;
        }
    }
    let average_return_non_zero = if non_zero_count > 0 {
        non_zero_sum / non_zero_count as f64
    } else {
        0.0
    };

    DirectorAggregates {
        movie_count,
        total_revenue,
        total_return,
        average_return,
        average_return_non_zero,
        zero_return_count,
    }
}

/// Aggregates over the semi-joined actor financial rows. `return_frac`
/// values are decimal fractions; percent figures here are already scaled
/// by 100 for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorAggregates {
    pub appearances: usize,
    pub total_return: f64,
    pub average_return_pct: f64,
    pub overall_return_pct: f64,
    pub zero_return_count: usize,
}

#[must_use]
pub fn actor_aggregates(rows: &[&ActorMovieReturn]) -> ActorAggregates {
    let appearances = rows.len();
    let total_return: f64 = rows.iter().map(|r| r.return_frac).sum();

    let mut positive_sum = 0.0;
    let mut positive_count = 0usize;
    let mut zero_return_count = 0usize;
    for row in rows {
        if row.return_frac > 0.0 {
            positive_sum += row.return_frac;
            positive_count += 1;
        }
        if row.return_frac == 0.0 {
            zero_return_count += 1;
        }
    }
    // The mean is rounded to hundredths before scaling to percent.
    let average_return_pct = if positive_count > 0 {
        round2(positive_sum / positive_count as f64) * 100.0
    } else {
        0.0
    };
    let overall_return_pct = if appearances > 0 {
        round2(total_return / appearances as f64 * 100.0)
    } else {
        0.0
    };

    ActorAggregates {
        appearances,
        total_return,
        average_return_pct,
        overall_return_pct,
        zero_return_count,
    }
}

#[cfg(test)]
mod tests {
    use super::{actor_aggregates, director_aggregates};
    use marquee_model::{ActorMovieReturn, DirectorMovie, MovieId};

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
    fn director_aggregates_match_worked_example() {
        let a = movie(1, 10.0, 100.0, 200.0);
        let b = movie(2, 0.0, 50.0, 0.0);
        let agg = director_aggregates(&[&a, &b]);

        assert_eq!(agg.movie_count, 2);
        assert_eq!(agg.total_revenue, 200.0);
        assert_eq!(agg.average_return, 5.0);
        assert_eq!(agg.average_return_non_zero, 10.0);
        assert_eq!(agg.zero_return_count, 1);
    }

    #[test]
    fn director_aggregates_over_empty_join_are_all_zero() {
        let agg = director_aggregates(&[]);
        assert_eq!(agg.movie_count, 0);
        assert_eq!(agg.total_revenue, 0.0);
        assert_eq!(agg.average_return, 0.0);
        assert_eq!(agg.average_return_non_zero, 0.0);
        assert_eq!(agg.zero_return_count, 0);
    }

    #[test]
    fn non_zero_average_excludes_zero_rows_from_both_sides() {
        let a = movie(1, 30.0, 1.0, 1.0);
        let b = movie(2, 0.0, 1.0, 1.0);
        let c = movie(3, 0.0, 1.0, 1.0);
        let agg = director_aggregates(&[&a, &b, &c]);

        assert_eq!(agg.average_return, 10.0);
        assert_eq!(agg.average_return_non_zero, 30.0);
        assert_eq!(agg.zero_return_count, 2);
    }

    #[test]
    fn actor_mean_rounds_before_scaling_to_percent() {
        let a = ActorMovieReturn {
            id: MovieId::new(1),
            return_frac: 1.23456,
        };
        let agg = actor_aggregates(&[&a]);

        // round(1.23456, 2) * 100, not round(123.456, 2)
        assert_eq!(agg.average_return_pct, 123.0);
        assert_eq!(agg.overall_return_pct, 123.46);
    }

    #[test]
    fn actor_aggregates_count_zero_returns_but_keep_them_in_overall() {
        let rows = [
            ActorMovieReturn {
                id: MovieId::new(1),
                return_frac: 2.0,
            },
            ActorMovieReturn {
                id: MovieId::new(2),
                return_frac: 0.0,
            },
        ];
        let refs: Vec<&ActorMovieReturn> = rows.iter().collect();
        let agg = actor_aggregates(&refs);

        assert_eq!(agg.appearances, 2);
        assert_eq!(agg.total_return, 2.0);
        assert_eq!(agg.average_return_pct, 200.0);
        assert_eq!(agg.overall_return_pct, 100.0);
        assert_eq!(agg.zero_return_count, 1);
    }
}
