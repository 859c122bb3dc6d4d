//! Uploaded dataset representation and parsing

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A parsed tabular dataset: a header row plus data rows of equal width.
///
/// Cells are kept as text at upload time. Numeric interpretation happens when
/// the training pipeline assembles the feature matrix, so an upload with the
/// wrong columns or non-numeric cells still succeeds and only fails at train
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Parse comma-delimited text with a header row.
    ///
    /// Fails if the bytes are not UTF-8, the header is missing, or any data
    /// row has a different number of cells than the header.
    pub fn parse_csv(bytes: &[u8]) -> Result<Self, DomainError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| DomainError::malformed_input(format!("file is not valid UTF-8: {}", e)))?;

        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| DomainError::malformed_input("file contains no header row"))?;
        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        for (line_no, line) in lines.enumerate() {
            let cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
            if cells.len() != columns.len() {
                return Err(DomainError::malformed_input(format!(
                    "row {} has {} columns, expected {}",
                    line_no + 2,
                    cells.len(),
                    columns.len()
                )));
            }
            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}
