use serde::Serialize;

use crate::util::normalize_cell;

pub const DELIMITER: u8 = b',';

/// Ragged rows of trimmed statement cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rejoins cells with the delimiter and rows with newlines.
    ///
    /// A row holding a single empty cell becomes a blank line and is dropped
    /// when the text is tokenized again.
    pub fn to_csv_string(&self) -> String {
        let delimiter = char::from(DELIMITER).to_string();
        self.rows
            .iter()
            .map(|row| row.join(&delimiter))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid { rows }
    }
}

/// Splits statement text into a [`Grid`].
///
/// Lines end at `\n`, `\r` or `\r\n`, and blank lines are dropped. Every comma
/// starts a new cell; quotes have no special meaning. Rows keep however many
/// cells their line produced.
pub fn tokenize(text: &str) -> Grid {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_reader(text.as_bytes());

    // Reading UTF-8 text with flexible row lengths has no failure mode.
    let rows: Vec<Vec<String>> = reader
        .records()
        .filter_map(Result::ok)
        .map(|record| record.iter().map(normalize_cell).collect())
        .collect();

    tracing::debug!(rows = rows.len(), "Tokenized statement");
    Grid { rows }
}
