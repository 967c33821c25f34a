// SPDX-License-Identifier: Apache-2.0

use crate::decode::read_csv;
use crate::IngestError;
use marquee_model::{
    ActorMovieReturn, CastCredit, CrewCredit, DirectorMovie, MovieId, NAME_MAX_LEN,
};
use std::path::Path;

fn parse_movie_id(raw: &str, row_no: usize, path: &Path) -> Result<MovieId, IngestError> {
    MovieId::parse(raw)
        .map_err(|e| IngestError(format!("{}: row {row_no}: {e}", path.display())))
}

fn parse_float(
    raw: &str,
    column: &str,
    row_no: usize,
    path: &Path,
) -> Result<f64, IngestError> {
    raw.trim().parse::<f64>().map_err(|_| {
        IngestError(format!(
            "{}: row {row_no}: invalid {column} value '{raw}'",
            path.display()
        ))
    })
}

// Person names are lookup keys; an empty or absurdly long key can never be
// queried and indicates a broken export.
fn parse_person_name(raw: &str, row_no: usize, path: &Path) -> Result<String, IngestError> {
    if raw.is_empty() {
        return Err(IngestError(format!(
            "{}: row {row_no}: empty person name",
            path.display()
        )));
    }
    if raw.len() > NAME_MAX_LEN {
        return Err(IngestError(format!(
            "{}: row {row_no}: person name exceeds {NAME_MAX_LEN} bytes",
            path.display()
        )));
    }
    Ok(raw.to_string())
}

pub fn parse_crew_credits(path: &Path) -> Result<Vec<CrewCredit>, IngestError> {
    let file = read_csv(path)?;
    let name_col = file.column("name", path)?;
    let movie_col = file.column("movie_id", path)?;

    let mut out = Vec::with_capacity(file.rows.len());
    for (i, row) in file.rows.iter().enumerate() {
        let row_no = i + 2;
        out.push(CrewCredit {
            name: parse_person_name(file.field(row, row_no, name_col, path)?, row_no, path)?,
            movie_id: parse_movie_id(file.field(row, row_no, movie_col, path)?, row_no, path)?,
        });
    }
    Ok(out)
}

pub fn parse_cast_credits(path: &Path) -> Result<Vec<CastCredit>, IngestError> {
    let file = read_csv(path)?;
    let name_col = file.column("name", path)?;
    let movie_col = file.column("movie_id", path)?;

    let mut out = Vec::with_capacity(file.rows.len());
    for (i, row) in file.rows.iter().enumerate() {
        let row_no = i + 2;
        out.push(CastCredit {
            name: parse_person_name(file.field(row, row_no, name_col, path)?, row_no, path)?,
            movie_id: parse_movie_id(file.field(row, row_no, movie_col, path)?, row_no, path)?,
        });
    }
    Ok(out)
}

pub fn parse_director_movies(path: &Path) -> Result<Vec<DirectorMovie>, IngestError> {
    let file = read_csv(path)?;
    let id_col = file.column("id", path)?;
    let title_col = file.column("title", path)?;
    let date_col = file.column("release_date", path)?;
    let return_col = file.column("return", path)?;
    let budget_col = file.column("budget", path)?;
    let revenue_col = file.column("revenue", path)?;

    let mut out = Vec::with_capacity(file.rows.len());
    for (i, row) in file.rows.iter().enumerate() {
        let row_no = i + 2;
        out.push(DirectorMovie {
            id: parse_movie_id(file.field(row, row_no, id_col, path)?, row_no, path)?,
            title: file.field(row, row_no, title_col, path)?.to_string(),
            release_date: file.field(row, row_no, date_col, path)?.to_string(),
            return_pct: parse_float(
                file.field(row, row_no, return_col, path)?,
                "return",
                row_no,
                path,
            )?,
            budget: parse_float(
                file.field(row, row_no, budget_col, path)?,
                "budget",
                row_no,
                path,
            )?,
            revenue: parse_float(
                file.field(row, row_no, revenue_col, path)?,
                "revenue",
                row_no,
                path,
            )?,
        });
    }
    Ok(out)
}

pub fn parse_actor_returns(path: &Path) -> Result<Vec<ActorMovieReturn>, IngestError> {
    let file = read_csv(path)?;
    let id_col = file.column("id", path)?;
    let return_col = file.column("return", path)?;

    let mut out = Vec::with_capacity(file.rows.len());
    for (i, row) in file.rows.iter().enumerate() {
        let row_no = i + 2;
        out.push(ActorMovieReturn {
            id: parse_movie_id(file.field(row, row_no, id_col, path)?, row_no, path)?,
            return_frac: parse_float(
                file.field(row, row_no, return_col, path)?,
                "return",
                row_no,
                path,
            )?,
        });
    }
    Ok(out)
}

pub fn parse_actor_index(path: &Path) -> Result<Vec<String>, IngestError> {
    let file = read_csv(path)?;
    let name_col = file.column("name", path)?;

    let mut out = Vec::with_capacity(file.rows.len());
    for (i, row) in file.rows.iter().enumerate() {
        let row_no = i + 2;
        out.push(parse_person_name(
            file.field(row, row_no, name_col, path)?,
            row_no,
            path,
        )?);
    }
    Ok(out)
}
