use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Debit,
    Credit,
    /// Sentinel for values that are not a known account token.
    Undefined,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Debit => "debit",
            AccountType::Credit => "credit",
            AccountType::Undefined => "undefined",
        }
    }

    /// Case-insensitive lookup; anything unknown maps to `Undefined`.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "debit" => AccountType::Debit,
            "credit" => AccountType::Credit,
            _ => AccountType::Undefined,
        }
    }

    pub fn is_defined(self) -> bool {
        self != AccountType::Undefined
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub account_type: AccountType,
    /// The raw statement value the type was read from.
    pub number: String,
}

impl Account {
    pub fn new(account_type: AccountType, number: &str) -> Self {
        Account {
            account_type,
            number: number.to_string(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        Account::new(AccountType::from_token(raw), raw.trim())
    }

    pub fn undefined() -> Self {
        Account::new(AccountType::Undefined, "")
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.account_type.as_str();
        if self.number.is_empty() || self.number.eq_ignore_ascii_case(label) {
            write!(f, "{label}")
        } else {
            write!(f, "{label} {}", self.number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_case_insensitive() {
        assert_eq!(AccountType::from_token("DEBIT"), AccountType::Debit);
        assert_eq!(AccountType::from_token("Credit"), AccountType::Credit);
        assert_eq!(AccountType::from_token(" debit "), AccountType::Debit);
    }

    #[test]
    fn unknown_token_is_undefined() {
        assert_eq!(AccountType::from_token("SAVINGS"), AccountType::Undefined);
        assert_eq!(AccountType::from_token(""), AccountType::Undefined);
        assert!(!AccountType::Undefined.is_defined());
    }

    #[test]
    fn parse_keeps_raw_number() {
        let account = Account::parse("CREDIT");
        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.number, "CREDIT");
    }

    #[test]
    fn display_omits_number_matching_label() {
        assert_eq!(Account::parse("DEBIT").to_string(), "debit");
        assert_eq!(Account::parse("4512-99").to_string(), "undefined 4512-99");
        assert_eq!(Account::undefined().to_string(), "undefined");
    }
}
