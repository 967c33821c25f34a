// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod decode;
mod tables;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "marquee-ingest";

#[derive(Debug)]
pub struct IngestError(pub String);
impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for IngestError {}

pub use decode::{read_csv, CsvFile};
pub use tables::{
    parse_actor_index, parse_actor_returns, parse_cast_credits, parse_crew_credits,
    parse_director_movies,
};
