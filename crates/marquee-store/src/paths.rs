// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

// Dataset file names are fixed by the export pipeline that produces them.
pub const CREW_FILE: &str = "resultado_crew.csv";
pub const DIRECTOR_MOVIES_FILE: &str = "FuncionDirector.csv";
pub const CAST_FILE: &str = "ResultadoCastActores.csv";
pub const ACTOR_RETURNS_FILE: &str = "FuncionActor.csv";
pub const ACTOR_INDEX_FILE: &str = "ListaActores.csv";

#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub crew: PathBuf,
    pub director_movies: PathBuf,
    pub cast: PathBuf,
    pub actor_returns: PathBuf,
    pub actor_index: PathBuf,
}

#[must_use]
pub fn dataset_paths(root: &Path) -> DatasetPaths {
    DatasetPaths {
        crew: root.join(CREW_FILE),
        director_movies: root.join(DIRECTOR_MOVIES_FILE),
        cast: root.join(CAST_FILE),
        actor_returns: root.join(ACTOR_RETURNS_FILE),
        actor_index: root.join(ACTOR_INDEX_FILE),
    }
}
