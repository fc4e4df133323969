use reflect_core::FieldKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::csv::Grid;
use crate::match_engine::{locate_and_extract, MatchResult};

#[derive(Error, Debug)]
pub enum ParserConfigError {
    #[error("Failed to parse parser config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Per-field patterns for one statement layout. Patterns are kept as typed
/// and only compiled when a field is matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parser {
    pub name: String,
    pub account: String,
    pub date: String,
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
struct ParserConfig {
    #[serde(default)]
    parsers: Vec<Parser>,
}

impl Parser {
    pub fn new(name: &str) -> Self {
        Parser {
            name: name.to_string(),
            ..Parser::default()
        }
    }

    /// No patterns; every field matches nothing.
    pub fn undefined() -> Self {
        Parser::default()
    }

    /// Bank of Montreal credit card export.
    pub fn bmo() -> Self {
        Parser {
            name: "BMO".to_string(),
            account: r"^DEBIT|CREDIT".to_string(),
            date: r"^\d{8}".to_string(),
            amount: r"^-?\d+.\d{1,2}".to_string(),
            description: String::new(),
        }
    }

    /// Reads `[[parsers]]` tables. Missing patterns default to empty.
    pub fn from_toml(toml_content: &str) -> Result<Vec<Self>, ParserConfigError> {
        let config: ParserConfig = toml::from_str(toml_content)?;
        Ok(config.parsers)
    }

    pub fn pattern(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Account => &self.account,
            FieldKind::Date => &self.date,
            FieldKind::Amount => &self.amount,
            FieldKind::Description => &self.description,
        }
    }

    pub fn set_pattern(&mut self, field: FieldKind, pattern: &str) {
        let slot = match field {
            FieldKind::Account => &mut self.account,
            FieldKind::Date => &mut self.date,
            FieldKind::Amount => &mut self.amount,
            FieldKind::Description => &mut self.description,
        };
        *slot = pattern.to_string();
    }

    pub fn is_defined(&self) -> bool {
        FieldKind::ALL.iter().any(|&f| !self.pattern(f).is_empty())
    }

    /// Recomputed from `grid` and the current pattern on every call.
    pub fn matches(&self, grid: &Grid, field: FieldKind) -> MatchResult {
        locate_and_extract(grid, self.pattern(field), field)
    }

    pub fn match_all(&self, grid: &Grid) -> Vec<MatchResult> {
        FieldKind::ALL
            .iter()
            .map(|&field| self.matches(grid, field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::tokenize;

    const BMO_SAMPLE: &str = "\
Item #,Card #,Transaction Date,Posting Date,Transaction Amount,Description
1,'5191230000000000',20230104,20230105,12.50,TIM HORTONS #1234    TORONTO ON
2,'5191230000000000',20230106,20230109,-100.00,PAYMENT RECEIVED - THANK YOU
3,'5191230000000000',20230110,20230111,12.50,TIM HORTONS #1234    TORONTO ON
";

    #[test]
    fn undefined_matches_nothing() {
        let grid = tokenize(BMO_SAMPLE);
        let parser = Parser::undefined();
        assert!(!parser.is_defined());
        assert!(parser.match_all(&grid).iter().all(MatchResult::is_empty));
    }

    #[test]
    fn pattern_accessors() {
        let mut parser = Parser::new("test");
        parser.set_pattern(FieldKind::Amount, r"\d+\.\d{2}");
        assert_eq!(parser.pattern(FieldKind::Amount), r"\d+\.\d{2}");
        assert_eq!(parser.pattern(FieldKind::Date), "");
        assert!(parser.is_defined());
    }

    #[test]
    fn edit_is_reflected_on_next_match() {
        let grid = tokenize(BMO_SAMPLE);
        let mut parser = Parser::new("edit");
        parser.set_pattern(FieldKind::Date, "(");
        assert!(parser.matches(&grid, FieldKind::Date).is_empty());

        parser.set_pattern(FieldKind::Date, r"^\d{8}$");
        let result = parser.matches(&grid, FieldKind::Date);
        assert_eq!(result.count, 3);
        assert!(result.matches.iter().all(|m| m.is_valid()));
    }

    #[test]
    fn description_column_collapses_whitespace() {
        let grid = tokenize(BMO_SAMPLE);
        let mut parser = Parser::new("desc");
        parser.set_pattern(FieldKind::Description, "TIM HORTONS");
        let result = parser.matches(&grid, FieldKind::Description);
        let tims = result.get("TIM HORTONS #1234 TORONTO ON").unwrap();
        assert_eq!(tims.count, 2);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn match_all_is_in_field_order() {
        let grid = tokenize(BMO_SAMPLE);
        let fields: Vec<_> = Parser::bmo()
            .match_all(&grid)
            .into_iter()
            .map(|r| r.field)
            .collect();
        assert_eq!(fields, FieldKind::ALL.to_vec());
    }

    #[test]
    fn bmo_amount_column() {
        let grid = tokenize(BMO_SAMPLE);
        let result = Parser::bmo().matches(&grid, FieldKind::Amount);
        // The first cell shaped like an amount is the transaction date.
        assert_eq!(result.anchor.map(|a| a.column), Some(2));
    }

    #[test]
    fn from_toml_reads_parsers() {
        let toml = r#"
[[parsers]]
name = "BMO"
account = "^DEBIT|CREDIT"
date = '^\d{8}'

[[parsers]]
name = "Empty"
"#;
        let parsers = Parser::from_toml(toml).unwrap();
        assert_eq!(parsers.len(), 2);
        assert_eq!(parsers[0].pattern(FieldKind::Date), r"^\d{8}");
        assert_eq!(parsers[0].amount, "");
        assert!(!parsers[1].is_defined());
    }

    #[test]
    fn from_toml_keeps_invalid_patterns() {
        let parsers = Parser::from_toml("[[parsers]]\nname = \"x\"\namount = \"(\"\n").unwrap();
        assert_eq!(parsers[0].amount, "(");
    }

    #[test]
    fn from_toml_empty_document() {
        assert!(Parser::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn from_toml_malformed_errors() {
        assert!(matches!(
            Parser::from_toml("[[parsers]\nname ="),
            Err(ParserConfigError::Toml(_))
        ));
    }
}
