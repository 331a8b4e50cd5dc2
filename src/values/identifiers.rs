//! Tax identifiers and document identifiers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValueObject;
use super::codes::DteType;
use crate::core::{ErrorCode, FieldError};

static CONTROL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^DTE-(\d{2})-([A-Z0-9]{8})-(\d{15})$").expect("control number pattern compiles")
});

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// NIT: national tax identifier. 14 or 9 digits; hyphens are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nit(String);

impl Nit {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let digits: String = value.trim().chars().filter(|c| *c != '-').collect();
        if !all_digits(&digits) || !(digits.len() == 14 || digits.len() == 9) {
            return Err(FieldError::new(
                ErrorCode::InvalidNit,
                "nit",
                "14 or 9 digits",
                value,
            ));
        }
        Ok(Self(digits))
    }
}

text_value_object!(Nit);

/// NRC: tax registry number. 1 to 8 digits; hyphens are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nrc(String);

impl Nrc {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let digits: String = value.trim().chars().filter(|c| *c != '-').collect();
        if !all_digits(&digits) || digits.len() > 8 {
            return Err(FieldError::new(
                ErrorCode::InvalidNrc,
                "nrc",
                "1 to 8 digits",
                value,
            ));
        }
        Ok(Self(digits))
    }
}

text_value_object!(Nrc);

/// DUI: national identity document, `########-#`.
///
/// Nine bare digits are accepted and normalised to the hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dui(String);

impl Dui {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let normalised = match value.split_once('-') {
            Some((body, check)) if body.len() == 8 && check.len() == 1 => {
                (all_digits(body) && all_digits(check)).then(|| value.to_string())
            }
            None if value.len() == 9 && all_digits(value) => {
                Some(format!("{}-{}", &value[..8], &value[8..]))
            }
            _ => None,
        };
        normalised.map(Self).ok_or_else(|| {
            FieldError::new(ErrorCode::InvalidDui, "dui", "########-#", value)
        })
    }

    /// Whether `value` has the DUI shape, without building one.
    pub fn matches(value: &str) -> bool {
        Self::new(value).is_ok()
    }
}

text_value_object!(Dui);

/// Free-form identity document number (passport, residence card, other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let len = value.chars().count();
        if !(3..=20).contains(&len)
            || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(FieldError::new(
                ErrorCode::InvalidDocumentNumber,
                "document_number",
                "3 to 20 letters, digits or hyphens",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_value_object!(DocumentNumber);

bounded_integer! {
    /// Sequential part of a control number: at most 15 digits.
    ControlSequence(u64), field = "control_number.sequence", range = 0..=999_999_999_999_999
}

/// Control number: `DTE-NN-XXXXXXXX-NNNNNNNNNNNNNNN` (31 characters).
///
/// `NN` is the document type, the eight-character block the establishment
/// and point-of-sale codes, and the last block a 15-digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ControlNumber(String);

impl ControlNumber {
    pub const LENGTH: usize = 31;

    pub fn new(value: &str) -> Result<Self, FieldError> {
        if value.len() != Self::LENGTH || !CONTROL_NUMBER.is_match(value) {
            return Err(FieldError::new(
                ErrorCode::InvalidControlNumber,
                "control_number",
                "DTE-NN-XXXXXXXX-NNNNNNNNNNNNNNN",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Compose a control number from already-validated parts.
    pub fn compose(
        dte_type: DteType,
        establishment: &EstablishmentCode,
        point_of_sale: &PointOfSaleCode,
        sequence: ControlSequence,
    ) -> Self {
        Self(format!(
            "DTE-{}-{}{}-{:015}",
            dte_type.code(),
            establishment.value(),
            point_of_sale.value(),
            sequence.value()
        ))
    }

    /// Two-digit document type segment.
    pub fn type_segment(&self) -> &str {
        &self.0[4..6]
    }

    /// Establishment + point-of-sale segment.
    pub fn establishment_segment(&self) -> &str {
        &self.0[7..15]
    }

    /// Sequential part.
    pub fn sequence(&self) -> u64 {
        self.0[16..].parse().unwrap_or_default()
    }

    /// Document type encoded in the number, if it is a known type.
    pub fn dte_type(&self) -> Option<DteType> {
        DteType::from_code(self.type_segment())
    }
}

text_value_object!(ControlNumber);

/// Generation code: a UUID, always rendered upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GenerationCode(Uuid);

impl GenerationCode {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let invalid = || {
            FieldError::new(
                ErrorCode::InvalidGenerationCode,
                "generation_code",
                "a hyphenated UUID (8-4-4-4-12)",
                value,
            )
        };
        if value.len() != 36 {
            return Err(invalid());
        }
        Uuid::parse_str(value).map(Self).map_err(|_| invalid())
    }

    /// A fresh random (v4) generation code.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether `value` is a well-formed generation code.
    pub fn matches(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn value(&self) -> String {
        self.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Any UUID is a valid generation code.
impl From<Uuid> for GenerationCode {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for GenerationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.hyphenated().to_string().to_ascii_uppercase())
    }
}

impl FromStr for GenerationCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GenerationCode {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<GenerationCode> for String {
    fn from(v: GenerationCode) -> String {
        v.to_string()
    }
}

impl ValueObject for GenerationCode {}

fn four_char_code(value: &str, field: &'static str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.len() != 4
        || !value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return Err(FieldError::new(
            ErrorCode::InvalidFormat,
            field,
            "4 upper-case letters or digits",
            value,
        ));
    }
    Ok(value.to_string())
}

/// Establishment code assigned by the tax authority (e.g. "M001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EstablishmentCode(String);

impl EstablishmentCode {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        four_char_code(value, "establishment_code").map(Self)
    }
}

text_value_object!(EstablishmentCode);

/// Point-of-sale code (e.g. "P001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PointOfSaleCode(String);

impl PointOfSaleCode {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        four_char_code(value, "point_of_sale_code").map(Self)
    }
}

text_value_object!(PointOfSaleCode);

/// Economic activity code, 5 or 6 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityCode(String);

impl ActivityCode {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if !all_digits(value) || !(5..=6).contains(&value.len()) {
            return Err(FieldError::new(
                ErrorCode::InvalidFormat,
                "activity_code",
                "5 or 6 digits",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }
}

text_value_object!(ActivityCode);
