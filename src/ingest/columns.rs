// src/ingest/columns.rs

use std::collections::HashMap;

use calamine::Data;

use super::cells::cell_to_text;

/// Maps header names to their index in a sheet row.
pub struct ColumnMap {
    indices: HashMap<String, usize>,
    headers: Vec<String>,
}

impl ColumnMap {
    /// Build a ColumnMap from the header row.
    ///
    /// Header names are kept verbatim; lookups use the trimmed form. On
    /// duplicates the first column wins.
    pub fn from_header_row(row: &[Data]) -> Self {
        let mut indices = HashMap::new();
        let mut headers = Vec::with_capacity(row.len());

        for (i, cell) in row.iter().enumerate() {
            let name = match cell {
                Data::String(s) => s.clone(),
                other => cell_to_text(other).unwrap_or_default(),
            };
            indices.entry(name.trim().to_string()).or_insert(i);
            headers.push(name);
        }

        ColumnMap { indices, headers }
    }

    /// Cell of a named column in `row`, if both exist.
    pub fn get<'a>(&self, row: &'a [Data], col: &str) -> Option<&'a Data> {
        self.indices.get(col).and_then(|&i| row.get(i))
    }

    pub fn has(&self, col: &str) -> bool {
        self.indices.contains_key(col)
    }

    /// All header names in sheet order, verbatim.
    pub fn all_headers(&self) -> &[String] {
        &self.headers
    }
}
