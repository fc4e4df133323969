pub mod account;
pub mod attribute;
pub mod field;
pub mod money;

pub use account::{Account, AccountType};
pub use attribute::{Attribute, Description};
pub use field::FieldKind;
pub use money::Money;
