use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::Account;
use crate::field::FieldKind;
use crate::money::Money;

/// Free-form transaction text with whitespace runs collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
}

impl Description {
    pub fn new(text: &str) -> Self {
        Description {
            text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A statement value interpreted as one of the four transaction fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Attribute {
    Account(Account),
    Date(NaiveDate),
    Amount(Money),
    Description(Description),
}

impl Attribute {
    /// Best-effort interpretation of `raw` as a `kind` value.
    ///
    /// Never fails loudly: values that are not shaped like the field come
    /// back as `None`, except accounts, which fall back to the
    /// `AccountType::Undefined` sentinel.
    pub fn parse(kind: FieldKind, raw: &str) -> Option<Attribute> {
        match kind {
            FieldKind::Account => Some(Attribute::Account(Account::parse(raw))),
            FieldKind::Date => parse_compact_date(raw).map(Attribute::Date),
            FieldKind::Amount => Money::parse(raw).map(Attribute::Amount),
            FieldKind::Description => Some(Attribute::Description(Description::new(raw))),
        }
    }

    /// Placeholder value for a field, where one exists. Dates have none.
    pub fn undefined(kind: FieldKind) -> Option<Attribute> {
        match kind {
            FieldKind::Account => Some(Attribute::Account(Account::undefined())),
            FieldKind::Date => None,
            FieldKind::Amount => Some(Attribute::Amount(Money::zero())),
            FieldKind::Description => Some(Attribute::Description(Description::new(""))),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Attribute::Account(_) => FieldKind::Account,
            Attribute::Date(_) => FieldKind::Date,
            Attribute::Amount(_) => FieldKind::Amount,
            Attribute::Description(_) => FieldKind::Description,
        }
    }

    pub fn is_recognized(&self) -> bool {
        match self {
            Attribute::Account(account) => account.account_type.is_defined(),
            _ => true,
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            Attribute::Account(account) => account.to_string(),
            Attribute::Date(date) => date.format("%b %-d, %Y").to_string(),
            Attribute::Amount(money) => money.to_string(),
            Attribute::Description(description) => description.to_string(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// `YYYYMMDD`, exactly eight digits.
fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[0..4].parse::<i32>().ok()?;
    let month = s[4..6].parse::<u32>().ok()?;
    let day = s[6..8].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Account ───────────────────────────────────────────────────────────────

    #[test]
    fn account_recognized() {
        let parsed = Attribute::parse(FieldKind::Account, "DEBIT").unwrap();
        assert!(parsed.is_recognized());
        assert!(matches!(
            parsed,
            Attribute::Account(Account { account_type: AccountType::Debit, .. })
        ));
    }

    #[test]
    fn account_unknown_falls_back_to_sentinel() {
        let parsed = Attribute::parse(FieldKind::Account, "CHEQUING").unwrap();
        assert!(!parsed.is_recognized());
        assert_eq!(parsed.kind(), FieldKind::Account);
    }

    // ── Amount ────────────────────────────────────────────────────────────────

    #[test]
    fn amount_parses() {
        let parsed = Attribute::parse(FieldKind::Amount, "12.50").unwrap();
        assert_eq!(parsed.formatted(), "$12.50");
    }

    #[test]
    fn amount_zero_is_distinct_from_unparsed() {
        let zero = Attribute::parse(FieldKind::Amount, "0.00");
        assert_eq!(zero, Some(Attribute::Amount(Money::zero())));
        assert_eq!(Attribute::parse(FieldKind::Amount, "coffee"), None);
    }

    // ── Date ──────────────────────────────────────────────────────────────────

    #[test]
    fn date_compact_format() {
        assert_eq!(
            Attribute::parse(FieldKind::Date, "20230102"),
            Some(Attribute::Date(date(2023, 1, 2)))
        );
    }

    #[test]
    fn date_invalid_is_none_not_today() {
        assert_eq!(Attribute::parse(FieldKind::Date, "20231301"), None);
        assert_eq!(Attribute::parse(FieldKind::Date, "20230230"), None);
        assert_eq!(Attribute::parse(FieldKind::Date, "2023-01-02"), None);
        assert_eq!(Attribute::parse(FieldKind::Date, "2023010"), None);
        assert_eq!(Attribute::parse(FieldKind::Date, ""), None);
    }

    #[test]
    fn date_leap_day() {
        assert!(Attribute::parse(FieldKind::Date, "20240229").is_some());
        assert!(Attribute::parse(FieldKind::Date, "20230229").is_none());
    }

    #[test]
    fn date_formatted_abbreviated() {
        let parsed = Attribute::parse(FieldKind::Date, "20230105").unwrap();
        assert_eq!(parsed.formatted(), "Jan 5, 2023");
    }

    // ── Description ───────────────────────────────────────────────────────────

    #[test]
    fn description_always_succeeds() {
        let parsed = Attribute::parse(FieldKind::Description, "  COFFEE    SHOP  #12 ").unwrap();
        assert_eq!(parsed.formatted(), "COFFEE SHOP #12");
        assert!(Attribute::parse(FieldKind::Description, "").is_some());
    }

    // ── Sentinels ─────────────────────────────────────────────────────────────

    #[test]
    fn undefined_sentinels() {
        assert!(!Attribute::undefined(FieldKind::Account).unwrap().is_recognized());
        assert_eq!(
            Attribute::undefined(FieldKind::Amount),
            Some(Attribute::Amount(Money::zero()))
        );
        assert!(Attribute::undefined(FieldKind::Date).is_none());
    }

    #[test]
    fn kind_matches_parse_target() {
        for kind in [FieldKind::Account, FieldKind::Description] {
            assert_eq!(Attribute::parse(kind, "x").unwrap().kind(), kind);
        }
    }

    #[test]
    fn serializes_tagged() {
        let parsed = Attribute::parse(FieldKind::Date, "20230101").unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["kind"], "date");
        assert_eq!(json["value"], "2023-01-01");
    }
}
