use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use mealmix_shared::{Error, RawRow, Result};
use serde::Deserialize;

use crate::MealCatalog;

/// Header names of the three meal columns in the source file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Columns {
    #[serde(default = "default_breakfast_column")]
    pub breakfast: String,
    #[serde(default = "default_lunch_column")]
    pub lunch: String,
    #[serde(default = "default_dinner_column")]
    pub dinner: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            breakfast: default_breakfast_column(),
            lunch: default_lunch_column(),
            dinner: default_dinner_column(),
        }
    }
}

fn default_breakfast_column() -> String {
    "breakfast".to_string()
}

fn default_lunch_column() -> String {
    "lunch".to_string()
}

fn default_dinner_column() -> String {
    "dinner".to_string()
}

/// Loads a CSV meal table from `path` and builds the catalog.
///
/// A missing file, an unreadable record or a missing column is reported as
/// [`Error::SourceUnavailable`].
pub fn load(path: impl AsRef<Path>, columns: &Columns) -> Result<MealCatalog> {
    let path = path.as_ref();
    let unavailable = |reason: String| Error::SourceUnavailable {
        path: path.display().to_string(),
        reason,
    };

    if !path.exists() {
        return Err(unavailable("file not found".to_string()));
    }

    let file = std::fs::File::open(path).map_err(|e| unavailable(e.to_string()))?;
    let rows = read_rows(file, columns).map_err(unavailable)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "meal source loaded");

    MealCatalog::build(rows)
}

/// Same as [`load`] for an in-memory or already opened source.
pub fn load_from_reader<R: Read>(name: &str, reader: R, columns: &Columns) -> Result<MealCatalog> {
    let rows = read_rows(reader, columns).map_err(|reason| Error::SourceUnavailable {
        path: name.to_owned(),
        reason,
    })?;

    MealCatalog::build(rows)
}

fn read_rows<R: Read>(reader: R, columns: &Columns) -> std::result::Result<Vec<RawRow>, String> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| e.to_string())?.clone();
    let breakfast_idx = column_index(&headers, &columns.breakfast)?;
    let lunch_idx = column_index(&headers, &columns.lunch)?;
    let dinner_idx = column_index(&headers, &columns.dinner)?;

    let mut rows = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record =
            result.map_err(|e| format!("failed to read record at row {}: {}", row_index + 1, e))?;

        let cell = |idx: usize| record.get(idx).map(str::to_owned);
        rows.push(RawRow {
            breakfast: cell(breakfast_idx),
            lunch: cell(lunch_idx),
            dinner: cell(dinner_idx),
        });
    }

    Ok(rows)
}

fn column_index(headers: &StringRecord, name: &str) -> std::result::Result<usize, String> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| format!("column '{}' not found", name))
}
