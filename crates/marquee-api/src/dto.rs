// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

// Wire field names (including the trailing underscore in `return_` and the
// Spanish keys) are the published API contract; Rust field names stay
// descriptive and map via serde renames.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInfoDto {
    pub title: String,
    pub release_date: String,
    #[serde(rename = "return_")]
    pub return_pct: String,
    pub budget: String,
    pub revenue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorResponseDto {
    #[serde(rename = "resultado_texto")]
    pub summary: String,
    pub movies: Vec<MovieInfoDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorResponseDto {
    #[serde(rename = "resultado")]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorsResponseDto {
    #[serde(rename = "actores")]
    pub names: Vec<String>,
}
