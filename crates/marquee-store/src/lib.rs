#![forbid(unsafe_code)]

//! In-memory film dataset store.
//!
//! All five tables load once at startup; a [`FilmStore`] is never mutated
//! afterwards and is shared by reference across request handlers.

mod paths;

use marquee_ingest::{
    parse_actor_index, parse_actor_returns, parse_cast_credits, parse_crew_credits,
    parse_director_movies,
};
use marquee_model::{ActorMovieReturn, CastCredit, CrewCredit, DirectorMovie};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::info;

pub use paths::{
    dataset_paths, DatasetPaths, ACTOR_INDEX_FILE, ACTOR_RETURNS_FILE, CAST_FILE, CREW_FILE,
    DIRECTOR_MOVIES_FILE,
};

pub const CRATE_NAME: &str = "marquee-store";

#[derive(Debug)]
pub struct StoreError(pub String);
impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for StoreError {}

impl From<marquee_ingest::IngestError> for StoreError {
    fn from(value: marquee_ingest::IngestError) -> Self {
        Self(value.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreStats {
    pub crew_credits: usize,
    pub director_movies: usize,
    pub cast_credits: usize,
    pub actor_returns: usize,
    pub actor_names: usize,
}

/// The five immutable tables. Load is all-or-nothing: any file that fails to
/// read, decode, or validate aborts the whole load.
#[derive(Debug, Clone)]
pub struct FilmStore {
    crew_credits: Vec<CrewCredit>,
    director_movies: Vec<DirectorMovie>,
    cast_credits: Vec<CastCredit>,
    actor_returns: Vec<ActorMovieReturn>,
    actor_index: Vec<String>,
}

impl FilmStore {
    pub fn load(root: &Path) -> Result<Self, StoreError> {
        let paths = dataset_paths(root);
        let store = Self {
            crew_credits: parse_crew_credits(&paths.crew)?,
            director_movies: parse_director_movies(&paths.director_movies)?,
            cast_credits: parse_cast_credits(&paths.cast)?,
            actor_returns: parse_actor_returns(&paths.actor_returns)?,
            actor_index: parse_actor_index(&paths.actor_index)?,
        };
        let stats = store.stats();
        info!(
            crew_credits = stats.crew_credits,
            director_movies = stats.director_movies,
            cast_credits = stats.cast_credits,
            actor_returns = stats.actor_returns,
            actor_names = stats.actor_names,
            "film store loaded"
        );
        Ok(store)
    }

    /// Build a store from already-parsed tables. Test fixtures use this to
    /// bypass the filesystem.
    #[must_use]
    pub fn from_tables(
        crew_credits: Vec<CrewCredit>,
        director_movies: Vec<DirectorMovie>,
        cast_credits: Vec<CastCredit>,
        actor_returns: Vec<ActorMovieReturn>,
        actor_index: Vec<String>,
    ) -> Self {
        Self {
            crew_credits,
            director_movies,
            cast_credits,
            actor_returns,
            actor_index,
        }
    }

    #[must_use]
    pub fn crew_credits(&self) -> &[CrewCredit] {
        &self.crew_credits
    }

    #[must_use]
    pub fn director_movies(&self) -> &[DirectorMovie] {
        &self.director_movies
    }

    #[must_use]
    pub fn cast_credits(&self) -> &[CastCredit] {
        &self.cast_credits
    }

    #[must_use]
    pub fn actor_returns(&self) -> &[ActorMovieReturn] {
        &self.actor_returns
    }

    #[must_use]
    pub fn actor_index(&self) -> &[String] {
        &self.actor_index
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            crew_credits: self.crew_credits.len(),
            director_movies: self.director_movies.len(),
            cast_credits: self.cast_credits.len(),
            actor_returns: self.actor_returns.len(),
            actor_names: self.actor_index.len(),
        }
    }
}
