// SPDX-License-Identifier: Apache-2.0

use crate::aggregate::{ActorAggregates, DirectorAggregates};
use crate::format::format_grouped;
use serde::{Deserialize, Serialize};

/// One joined row of the director lookup, with display-ready figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieEntry {
    pub title: String,
    pub release_date: String,
    pub return_pct: String,
    pub budget: String,
    pub revenue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorReport {
    pub name: String,
    pub summary: String,
    pub movies: Vec<MovieEntry>,
    pub aggregates: DirectorAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorReport {
    pub name: String,
    pub summary: String,
    pub aggregates: ActorAggregates,
}

// The report sentences are user-facing product copy; their wording and
// formatting are part of the service contract and stay as shipped.

#[must_use]
pub fn director_sentence(name: &str, agg: &DirectorAggregates) -> String {
    format!(
        "El director {name} ha obtenido una ganancia total de {total}, \
         con un retorno total promedio de {avg:.2}% en un total de {count} películas, \
         y con un retorno de {avg_nz:.2}% sin contar las {zeros} películas \
         que no tienen retorno en este dataset.",
        total = format_grouped(agg.total_revenue),
        avg = agg.average_return,
        count = agg.movie_count,
        avg_nz = agg.average_return_non_zero,
        zeros = agg.zero_return_count,
    )
}

#[must_use]
pub fn actor_sentence(name: &str, agg: &ActorAggregates) -> String {
    format!(
        "El actor {name} ha actuado en {count} películas, \
         con un retorno total de {total}%, \
         y un retorno promedio de {avg}%. \
         La cantidad de películas sin retorno en el dataset son {zeros}, \
         el retorno promedio contándolas es de {overall}%.",
        count = agg.appearances,
        total = format_grouped(agg.total_return * 100.0),
        avg = format_grouped(agg.average_return_pct),
        zeros = agg.zero_return_count,
        overall = format_grouped(agg.overall_return_pct),
    )
}
