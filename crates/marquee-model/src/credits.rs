// SPDX-License-Identifier: Apache-2.0

use crate::movie::MovieId;
use serde::{Deserialize, Serialize};

/// Crew-to-movie association row. Names repeat across rows; the pair
/// (`name`, `movie_id`) is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrewCredit {
    pub name: String,
    pub movie_id: MovieId,
}

/// Cast-to-movie association row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CastCredit {
    pub name: String,
    pub movie_id: MovieId,
}
