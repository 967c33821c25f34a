// SPDX-License-Identifier: Apache-2.0

use crate::dto::{ActorResponseDto, DirectorResponseDto, MovieInfoDto};
use marquee_query::{ActorReport, DirectorReport, MovieEntry};

impl From<&MovieEntry> for MovieInfoDto {
    fn from(entry: &MovieEntry) -> Self {
        Self {
            title: entry.title.clone(),
            release_date: entry.release_date.clone(),
            return_pct: entry.return_pct.clone(),
            budget: entry.budget.clone(),
            revenue: entry.revenue.clone(),
        }
    }
}

impl From<&DirectorReport> for DirectorResponseDto {
    fn from(report: &DirectorReport) -> Self {
        Self {
            summary: report.summary.clone(),
            movies: report.movies.iter().map(MovieInfoDto::from).collect(),
        }
    }
}

impl From<&ActorReport> for ActorResponseDto {
    fn from(report: &ActorReport) -> Self {
        Self {
            summary: report.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::DirectorResponseDto;
    use marquee_query::{DirectorAggregates, DirectorReport, MovieEntry};

    #[test]
    fn director_dto_serializes_contract_field_names() {
        let report = DirectorReport {
            name: "Jane Doe".to_string(),
            summary: "El director Jane Doe ...".to_string(),
            movies: vec![MovieEntry {
                title: "Known".to_string(),
                release_date: "2000-01-01".to_string(),
                return_pct: "4.00%".to_string(),
                budget: "$10.00".to_string(),
                revenue: "$40.00".to_string(),
            }],
            aggregates: DirectorAggregates {
                movie_count: 1,
                total_revenue: 40.0,
                total_return: 4.0,
                average_return: 4.0,
                average_return_non_zero: 4.0,
                zero_return_count: 0,
            },
        };

        let value = serde_json::to_value(DirectorResponseDto::from(&report)).expect("serialize");
        assert!(value.get("resultado_texto").is_some());
        assert_eq!(value["movies"][0]["return_"], "4.00%");
        assert!(value["movies"][0].get("return_pct").is_none());
    }
}
