// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Join key between the credit link tables and the per-movie metadata tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ParseError::Empty("movie_id"));
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ParseError::InvalidFormat("movie_id must be an integer"))
    }

    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One movie directed by somebody in the crew table.
///
/// `return_pct` is a pre-multiplied percentage (a value of `12.5` renders as
/// `12.50%`), unlike [`ActorMovieReturn::return_frac`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorMovie {
    pub id: MovieId,
    pub title: String,
    pub release_date: String,
    pub return_pct: f64,
    pub budget: f64,
    pub revenue: f64,
}

/// Per-movie financial return for the actor lookup path.
///
/// `return_frac` is a decimal fraction; it is scaled by 100 for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorMovieReturn {
    pub id: MovieId,
    pub return_frac: f64,
}

#[cfg(test)]
mod tests {
    use super::{MovieId, ParseError};

    #[test]
    fn movie_id_parses_integers_and_trims_whitespace() {
        assert_eq!(MovieId::parse("862").unwrap(), MovieId::new(862));
        assert_eq!(MovieId::parse(" 42 ").unwrap(), MovieId::new(42));
    }

    #[test]
    fn movie_id_rejects_empty_and_non_numeric() {
        assert_eq!(MovieId::parse("").unwrap_err(), ParseError::Empty("movie_id"));
        assert!(matches!(
            MovieId::parse("tt0137523").unwrap_err(),
            ParseError::InvalidFormat(_)
        ));
    }
}
