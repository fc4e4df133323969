use regex::Regex;
use reflect_core::{Attribute, FieldKind};
use serde::Serialize;
use std::collections::HashMap;

use crate::csv::Grid;

/// Position of the first cell a field pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub row: usize,
    pub column: usize,
}

/// One distinct value found in a field's column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub word: String,
    /// Rows, from the anchor down, holding exactly `word`.
    pub count: usize,
    pub parsed: Option<Attribute>,
}

impl Match {
    /// Whether `word` reads as a well-formed value of the field.
    pub fn is_valid(&self) -> bool {
        self.parsed.as_ref().is_some_and(Attribute::is_recognized)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub field: FieldKind,
    pub anchor: Option<Anchor>,
    pub matches: Vec<Match>,
    /// Total rows extracted, duplicates included.
    pub count: usize,
}

impl MatchResult {
    pub fn empty(field: FieldKind) -> Self {
        MatchResult {
            field,
            anchor: None,
            matches: Vec::new(),
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn unique(&self) -> usize {
        self.matches.len()
    }

    pub fn valid_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.is_valid())
            .map(|m| m.count)
            .sum()
    }

    pub fn get(&self, word: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.word == word)
    }
}

/// Compiles a user-typed pattern. Empty or malformed patterns yield `None`;
/// the pattern is live input and is expected to be invalid mid-edit.
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!("Ignoring invalid pattern {pattern:?}: {e}");
            None
        }
    }
}

/// Scans rows top to bottom and cells left to right for the first cell the
/// pattern matches anywhere inside.
pub fn locate(grid: &Grid, regex: &Regex) -> Option<Anchor> {
    grid.rows().iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|cell| regex.is_match(cell))
            .map(|column| Anchor { row, column })
    })
}

/// Collects the anchor column from the anchor row to the end. Rows too short
/// to have the column are skipped.
pub fn extract(grid: &Grid, anchor: Anchor) -> Vec<&str> {
    grid.rows()
        .iter()
        .skip(anchor.row)
        .filter_map(|cells| cells.get(anchor.column))
        .map(String::as_str)
        .collect()
}

/// Counts each distinct word, in order of first occurrence.
pub fn aggregate<S: AsRef<str>>(words: &[S]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for word in words {
        let word = word.as_ref();
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    counts
}

/// Runs locate → extract → aggregate → format for one field.
pub fn locate_and_extract(grid: &Grid, pattern: &str, field: FieldKind) -> MatchResult {
    let Some(regex) = compile_pattern(pattern) else {
        return MatchResult::empty(field);
    };
    let Some(anchor) = locate(grid, &regex) else {
        tracing::trace!(%field, "No cell matches pattern");
        return MatchResult::empty(field);
    };

    let words = extract(grid, anchor);
    let matches: Vec<Match> = aggregate(&words)
        .into_iter()
        .map(|(word, count)| {
            let parsed = Attribute::parse(field, &word);
            Match { word, count, parsed }
        })
        .collect();

    tracing::trace!(
        %field,
        row = anchor.row,
        column = anchor.column,
        count = words.len(),
        unique = matches.len(),
        "Matched field column"
    );

    MatchResult {
        field,
        anchor: Some(anchor),
        matches,
        count: words.len(),
    }
}
