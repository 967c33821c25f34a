// SPDX-License-Identifier: Apache-2.0

use crate::IngestError;
use std::fs;
use std::path::Path;

/// A decoded CSV file: one header row plus zero or more data records.
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvFile {
    /// Index of a required column, by exact header name.
    pub fn column(&self, name: &str, path: &Path) -> Result<usize, IngestError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                IngestError(format!(
                    "{}: missing required column '{name}' (found: {})",
                    path.display(),
                    self.headers.join(", ")
                ))
            })
    }

    /// Field at `col` in `row`, erroring on short rows.
    pub fn field<'a>(
        &self,
        row: &'a [String],
        row_no: usize,
        col: usize,
        path: &Path,
    ) -> Result<&'a str, IngestError> {
        row.get(col).map(String::as_str).ok_or_else(|| {
            IngestError(format!(
                "{}: row {row_no} has {} fields, expected at least {}",
                path.display(),
                row.len(),
                col + 1
            ))
        })
    }
}

// Blank lines decode to a single empty field and are skipped, not treated
// as malformed records.
fn end_record(record: &mut Vec<String>, field: &mut String, records: &mut Vec<Vec<String>>) {
    record.push(std::mem::take(field));
    let done = std::mem::take(record);
    if done.len() == 1 && done[0].is_empty() {
        return;
    }
    records.push(done);
}

/// Read and decode a whole CSV file.
///
/// Fields may be double-quoted; quoted fields may contain commas, doubled
/// quotes, and line breaks. A trailing newline does not produce an empty
/// record. The first record is the header row.
pub fn read_csv(path: &Path) -> Result<CsvFile, IngestError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| IngestError(format!("{}: {e}", path.display())))?;

    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                end_record(&mut record, &mut field, &mut records);
            }
            '\n' => end_record(&mut record, &mut field, &mut records),
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(IngestError(format!(
            "{}: unterminated quoted field",
            path.display()
        )));
    }
    if !field.is_empty() || !record.is_empty() {
        end_record(&mut record, &mut field, &mut records);
    }

    let mut iter = records.into_iter();
    let headers = iter
        .next()
        .ok_or_else(|| IngestError(format!("{}: empty file", path.display())))?;
    Ok(CsvFile {
        headers,
        rows: iter.collect(),
    })
}
