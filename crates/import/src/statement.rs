use reflect_core::FieldKind;

use crate::csv::{tokenize, Grid};
use crate::match_engine::MatchResult;
use crate::parser::Parser;

/// Raw statement text, its tokenized grid, and the parser being edited for it.
#[derive(Debug, Clone)]
pub struct Statement {
    pub name: String,
    data: String,
    grid: Grid,
    parser: Parser,
}

impl Statement {
    pub fn new(name: &str, data: &str, parser: Parser) -> Self {
        Statement {
            name: name.to_string(),
            data: data.to_string(),
            grid: tokenize(data),
            parser,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn parser_mut(&mut self) -> &mut Parser {
        &mut self.parser
    }

    pub fn set_parser(&mut self, parser: Parser) {
        self.parser = parser;
    }

    /// Replaces the text; the grid is rebuilt from scratch.
    pub fn set_data(&mut self, data: &str) {
        self.data = data.to_string();
        self.grid = tokenize(data);
    }

    pub fn matches(&self, field: FieldKind) -> MatchResult {
        self.parser.matches(&self.grid, field)
    }

    pub fn match_all(&self) -> Vec<MatchResult> {
        self.parser.match_all(&self.grid)
    }
}
