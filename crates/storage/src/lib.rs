pub mod records;

pub use records::{ImportedStatement, Records, Rejection, StatementError, StatementId, Target};
