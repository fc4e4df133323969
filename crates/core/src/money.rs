use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub fn from_decimal(decimal: Decimal) -> Self {
        Money(decimal.round_dp(2))
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Parses `[+-]?digits[.digits]`. Currency symbols, grouping separators
    /// and exponents are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let mut digits = 0usize;
        let mut separators = 0usize;
        for c in body.chars() {
            match c {
                '0'..='9' => digits += 1,
                '.' => separators += 1,
                _ => return None,
            }
        }
        if digits == 0 || separators > 1 {
            return None;
        }

        // rust_decimal does not accept a bare trailing or leading separator.
        let normalized = if body.starts_with('.') {
            format!("0{body}")
        } else {
            body.trim_end_matches('.').to_string()
        };
        let dec = Decimal::from_str(&normalized).ok()?;
        Some(Money::from_decimal(if negative { -dec } else { dec }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            write!(f, "-${:.2}", self.0.abs())
        } else {
            write!(f, "${:.2}", self.0.abs())
        }
    }
}
