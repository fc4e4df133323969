pub mod csv;
pub mod match_engine;
pub mod parser;
pub mod statement;
pub(crate) mod util;

pub use crate::csv::{tokenize, Grid};
pub use match_engine::{Anchor, Match, MatchResult};
pub use parser::{Parser, ParserConfigError};
pub use reflect_core::FieldKind;
pub use statement::Statement;

pub mod import {
    use crate::*;

    pub fn tokenize(text: &str) -> Grid {
        crate::csv::tokenize(text)
    }

    pub fn locate_and_extract(grid: &Grid, pattern: &str, field: FieldKind) -> MatchResult {
        crate::match_engine::locate_and_extract(grid, pattern, field)
    }

    pub fn load_parsers(toml_content: &str) -> Result<Vec<Parser>, ParserConfigError> {
        Parser::from_toml(toml_content)
    }
}
