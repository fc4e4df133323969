use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of transaction fields a statement parser extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Account,
    Date,
    Amount,
    Description,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Account,
        FieldKind::Date,
        FieldKind::Amount,
        FieldKind::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Account => "account",
            FieldKind::Date => "date",
            FieldKind::Amount => "amount",
            FieldKind::Description => "description",
        }
    }

    /// Symbol name shown next to the field in the pattern editor.
    pub fn icon(self) -> &'static str {
        match self {
            FieldKind::Account => "creditcard",
            FieldKind::Date => "calendar",
            FieldKind::Amount => "dollarsign",
            FieldKind::Description => "square.and.pencil",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "account" => Ok(FieldKind::Account),
            "date" => Ok(FieldKind::Date),
            "amount" => Ok(FieldKind::Amount),
            "description" => Ok(FieldKind::Description),
            other => Err(format!("Unknown field: '{other}'")),
        }
    }
}
