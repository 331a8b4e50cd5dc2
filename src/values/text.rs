//! Length-bounded free text, e-mail addresses and phone numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::core::{ErrorCode, FieldError};

/// Free text whose character count lies in `MIN..=MAX`.
///
/// Surrounding whitespace is trimmed before counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedText<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedText<MIN, MAX> {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len < MIN || len > MAX {
            return Err(FieldError::new(
                ErrorCode::InvalidLength,
                "text",
                format!("{MIN} to {MAX} characters"),
                value,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl<const MIN: usize, const MAX: usize> fmt::Display for BoundedText<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MIN: usize, const MAX: usize> FromStr for BoundedText<MIN, MAX> {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const MIN: usize, const MAX: usize> TryFrom<String> for BoundedText<MIN, MAX> {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl<const MIN: usize, const MAX: usize> From<BoundedText<MIN, MAX>> for String {
    fn from(v: BoundedText<MIN, MAX>) -> String {
        v.0
    }
}

impl<const MIN: usize, const MAX: usize> ValueObject for BoundedText<MIN, MAX> {}

/// Person or company name.
pub type Name = BoundedText<1, 250>;
/// Item description.
pub type Description = BoundedText<1, 1000>;
/// Short label (doctor names, other-document descriptions, third parties).
pub type ShortText = BoundedText<1, 100>;
/// Other-document detail.
pub type Detail = BoundedText<1, 300>;
/// Contingency or invalidation reason.
pub type Reason = BoundedText<5, 500>;
/// Address complement (street, number, colony).
pub type AddressLine = BoundedText<1, 200>;
/// Issuer-assigned product or service code.
pub type ItemCode = BoundedText<1, 25>;
/// Reference to another document: a physical number or a generation code.
pub type DocumentReference = BoundedText<1, 36>;

/// E-mail address, 3 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let invalid = || FieldError::new(ErrorCode::InvalidEmail, "email", "local@domain.tld, 3 to 100 characters", value);
        if !(3..=100).contains(&value.chars().count()) || value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok {
            return Err(invalid());
        }
        Ok(Self(value.to_string()))
    }
}

text_value_object!(Email);

/// Telephone number, 8 to 30 characters of digits, spaces, `+`, `-` or parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
        if !(8..=30).contains(&value.len()) || !value.chars().all(allowed) {
            return Err(FieldError::new(
                ErrorCode::InvalidPhone,
                "phone",
                "8 to 30 digits, spaces, +, - or parentheses",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_value_object!(Phone);
