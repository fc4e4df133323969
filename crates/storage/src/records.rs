use chrono::{DateTime, Utc};
use reflect_import::{Parser, Statement};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatementId(pub Uuid);

impl StatementId {
    fn new() -> Self {
        StatementId(Uuid::new_v4())
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("Statement is empty")]
    Blank,
    #[error("Statement was already imported")]
    Duplicate,
    #[error("Statement is not valid UTF-8 text")]
    Undecodable,
    #[error("Unsupported statement type: {0}")]
    Unsupported(String),
}

/// An import the store turned away, kept for the error list.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub name: String,
    pub extension: String,
    pub error: StatementError,
}

#[derive(Debug, Clone)]
pub struct ImportedStatement {
    pub id: StatementId,
    pub extension: String,
    pub imported_at: DateTime<Utc>,
    pub statement: Statement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    First,
    Previous,
    Next,
    Last,
}

/// Imported statements and the current selection.
#[derive(Debug, Default)]
pub struct Records {
    statements: Vec<ImportedStatement>,
    rejections: Vec<Rejection>,
    selected: Option<StatementId>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a statement read by the caller. `name` is the file stem and
    /// `extension` the file extension (empty for folders).
    pub fn import(
        &mut self,
        name: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StatementId, StatementError> {
        let name = title_case(name);
        let extension = if extension.is_empty() {
            "folder".to_string()
        } else {
            extension.to_lowercase()
        };

        match self.check(&name, &extension, bytes) {
            Ok(data) => {
                let id = StatementId::new();
                self.statements.push(ImportedStatement {
                    id,
                    extension,
                    imported_at: Utc::now(),
                    statement: Statement::new(&name, data, Parser::undefined()),
                });
                tracing::info!("Imported statement {name} ({id})");
                Ok(id)
            }
            Err(error) => {
                tracing::warn!("Rejected statement {name}.{extension}: {error}");
                self.rejections.push(Rejection {
                    name,
                    extension,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn check<'a>(
        &self,
        name: &str,
        extension: &str,
        bytes: &'a [u8],
    ) -> Result<&'a str, StatementError> {
        if extension != "csv" {
            return Err(StatementError::Unsupported(extension.to_string()));
        }
        let data = std::str::from_utf8(bytes).map_err(|_| StatementError::Undecodable)?;
        if data.is_empty() {
            return Err(StatementError::Blank);
        }
        let duplicate = self
            .statements
            .iter()
            .any(|s| s.statement.name == name && s.extension == extension);
        if duplicate {
            return Err(StatementError::Duplicate);
        }
        Ok(data)
    }

    pub fn remove(&mut self, id: StatementId) -> Option<ImportedStatement> {
        let index = self.position(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.statements.remove(index);
        tracing::info!("Removed statement {} ({id})", removed.statement.name);
        Some(removed)
    }

    /// Selects `id` if it is present; unknown ids leave the selection as is.
    pub fn select(&mut self, id: StatementId) {
        if self.position(id).is_some() {
            self.selected = Some(id);
        }
    }

    /// Moves the selection. Previous and next stop at the ends and do nothing
    /// when no statement is selected.
    pub fn select_target(&mut self, target: Target) -> Option<StatementId> {
        let last = self.statements.len().checked_sub(1);
        let index = match target {
            Target::First => (!self.statements.is_empty()).then_some(0),
            Target::Last => last,
            Target::Previous => self.selected_index().map(|i| i.saturating_sub(1)),
            Target::Next => self
                .selected_index()
                .zip(last)
                .map(|(i, last)| (i + 1).min(last)),
        };
        self.selected = index.map(|i| self.statements[i].id);
        self.selected
    }

    pub fn selected(&self) -> Option<&ImportedStatement> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut ImportedStatement> {
        let id = self.selected?;
        self.get_mut(id)
    }

    pub fn get(&self, id: StatementId) -> Option<&ImportedStatement> {
        self.statements.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: StatementId) -> Option<&mut ImportedStatement> {
        self.statements.iter_mut().find(|s| s.id == id)
    }

    pub fn statements(&self) -> &[ImportedStatement] {
        &self.statements
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn clear_rejections(&mut self) {
        self.rejections.clear();
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn position(&self, id: StatementId) -> Option<usize> {
        self.statements.iter().position(|s| s.id == id)
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.position(id))
    }
}

/// "bmo statement" → "Bmo Statement"; every whitespace character starts a word.
fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.extend(c.to_lowercase());
        }
        at_word_start = c.is_whitespace();
    }
    titled
}
