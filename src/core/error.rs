use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::messages::{EnglishCatalog, MessageCatalog, render};

/// Stable, machine-readable tag for every failure the crate can report.
///
/// Field codes are produced by value-object constructors, rule codes by
/// validation strategies. The human message is never stored alongside the
/// code; it is rendered on demand through a [`MessageCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    // Field validation
    InvalidFormat,
    InvalidLength,
    OutOfRange,
    InvalidDecimalPrecision,
    InvalidAmount,
    InvalidQuantity,
    InvalidDiscount,
    InvalidNit,
    InvalidNrc,
    InvalidDui,
    InvalidDocumentNumber,
    InvalidControlNumber,
    InvalidGenerationCode,
    InvalidDepartment,
    InvalidMunicipality,
    InvalidCatalogCode,
    InvalidDate,
    InvalidTime,
    InvalidEmail,
    InvalidPhone,

    // Structure
    MissingEntity,

    // Business rules
    RequiredField,
    FieldNotAllowed,
    MutuallyExclusiveFields,
    ExceededLimit,
    OutOfBounds,
    ReceiverDocumentMismatch,
    ContingencyTypeRequired,
    ContingencyReasonRequired,
    ContingencyNotAllowed,
    ReceiverNrcRequired,
    ExtensionRequired,
    DuplicateItemNumber,
    ModelTypeMismatch,
    CashPaymentOnCredit,
    CreditTermRequired,
    PaymentTotalMismatch,
    MixedDocumentTypes,
    FutureDate,
    FutureTime,
    InvalidRelatedDocumentNumber,
    UnknownTaxCode,
    ThirdPartyMixedItems,
    ControlNumberMismatch,
    TotalMismatch,
    MixedSaleCategories,
    SaleCategoryRequired,
    NonTaxedItemInvalid,
    UnknownRelatedDocument,
    RelatedDocumentTypeNotAllowed,
    RetentionAmountMismatch,
    ReplacementSameAsOriginal,

    /// Arithmetic overflow or another condition the caller cannot fix.
    Internal,
}

/// Coarse classification used by transport layers to pick a status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// A scalar value could not be constructed.
    InvalidInput,
    /// A collection exceeded its catalog limit.
    ExceededParameters,
    /// A required sub-entity is absent.
    Structure,
    /// A cross-field policy was violated.
    BusinessRule,
    /// Failure not attributable to the submitted data.
    ServerError,
}

impl ErrorCategory {
    /// Suggested HTTP status for this category.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExceededParameters => 413,
            Self::Structure | Self::BusinessRule => 422,
            Self::ServerError => 500,
        }
    }
}

impl ErrorCode {
    /// Stable snake_case key, usable as a message-catalog or i18n key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::InvalidLength => "invalid_length",
            Self::OutOfRange => "out_of_range",
            Self::InvalidDecimalPrecision => "invalid_decimal_precision",
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidQuantity => "invalid_quantity",
            Self::InvalidDiscount => "invalid_discount",
            Self::InvalidNit => "invalid_nit",
            Self::InvalidNrc => "invalid_nrc",
            Self::InvalidDui => "invalid_dui",
            Self::InvalidDocumentNumber => "invalid_document_number",
            Self::InvalidControlNumber => "invalid_control_number",
            Self::InvalidGenerationCode => "invalid_generation_code",
            Self::InvalidDepartment => "invalid_department",
            Self::InvalidMunicipality => "invalid_municipality",
            Self::InvalidCatalogCode => "invalid_catalog_code",
            Self::InvalidDate => "invalid_date",
            Self::InvalidTime => "invalid_time",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::MissingEntity => "missing_entity",
            Self::RequiredField => "required_field",
            Self::FieldNotAllowed => "field_not_allowed",
            Self::MutuallyExclusiveFields => "mutually_exclusive_fields",
            Self::ExceededLimit => "exceeded_limit",
            Self::OutOfBounds => "out_of_bounds",
            Self::ReceiverDocumentMismatch => "receiver_document_mismatch",
            Self::ContingencyTypeRequired => "contingency_type_required",
            Self::ContingencyReasonRequired => "contingency_reason_required",
            Self::ContingencyNotAllowed => "contingency_not_allowed",
            Self::ReceiverNrcRequired => "receiver_nrc_required",
            Self::ExtensionRequired => "extension_required",
            Self::DuplicateItemNumber => "duplicate_item_number",
            Self::ModelTypeMismatch => "model_type_mismatch",
            Self::CashPaymentOnCredit => "cash_payment_on_credit",
            Self::CreditTermRequired => "credit_term_required",
            Self::PaymentTotalMismatch => "payment_total_mismatch",
            Self::MixedDocumentTypes => "mixed_document_types",
            Self::FutureDate => "future_date",
            Self::FutureTime => "future_time",
            Self::InvalidRelatedDocumentNumber => "invalid_related_document_number",
            Self::UnknownTaxCode => "unknown_tax_code",
            Self::ThirdPartyMixedItems => "third_party_mixed_items",
            Self::ControlNumberMismatch => "control_number_mismatch",
            Self::TotalMismatch => "total_mismatch",
            Self::MixedSaleCategories => "mixed_sale_categories",
            Self::SaleCategoryRequired => "sale_category_required",
            Self::NonTaxedItemInvalid => "non_taxed_item_invalid",
            Self::UnknownRelatedDocument => "unknown_related_document",
            Self::RelatedDocumentTypeNotAllowed => "related_document_type_not_allowed",
            Self::RetentionAmountMismatch => "retention_amount_mismatch",
            Self::ReplacementSameAsOriginal => "replacement_same_as_original",
            Self::Internal => "internal",
        }
    }

    /// Category fixed at definition time, independent of any rendered text.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat
            | Self::InvalidLength
            | Self::OutOfRange
            | Self::InvalidDecimalPrecision
            | Self::InvalidAmount
            | Self::InvalidQuantity
            | Self::InvalidDiscount
            | Self::InvalidNit
            | Self::InvalidNrc
            | Self::InvalidDui
            | Self::InvalidDocumentNumber
            | Self::InvalidControlNumber
            | Self::InvalidGenerationCode
            | Self::InvalidDepartment
            | Self::InvalidMunicipality
            | Self::InvalidCatalogCode
            | Self::InvalidDate
            | Self::InvalidTime
            | Self::InvalidEmail
            | Self::InvalidPhone => ErrorCategory::InvalidInput,
            Self::MissingEntity => ErrorCategory::Structure,
            Self::ExceededLimit => ErrorCategory::ExceededParameters,
            Self::Internal => ErrorCategory::ServerError,
            _ => ErrorCategory::BusinessRule,
        }
    }
}

/// A scalar value could not be turned into a value object.
///
/// Carries the offending value and a hint of the expected format so the
/// caller can fix the field and resubmit. Never aggregated with siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Error kind.
    pub code: ErrorCode,
    /// Field name or dotted path (e.g. "issuer.nit", "items[2].quantity").
    pub field: String,
    /// Human hint of the accepted format or range.
    pub expected: String,
    /// The rejected input, rendered as text.
    pub value: String,
}

impl FieldError {
    pub fn new(
        code: ErrorCode,
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            code,
            field: field.into(),
            expected: expected.into(),
            value: value.to_string(),
        }
    }

    /// Re-tag the error with the path of the entity field it was set on.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.field = path.into();
        self
    }

    /// Positional parameters handed to the message catalog: field, value, expected.
    pub fn params(&self) -> [String; 3] {
        [self.field.clone(), self.value.clone(), self.expected.clone()]
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    pub fn render_with(&self, catalog: &dyn MessageCatalog) -> String {
        render(catalog, self.code, &self.params())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&EnglishCatalog))
    }
}

impl std::error::Error for FieldError {}

/// Required sub-entities absent from an otherwise assembled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    /// Names of the missing entities, in declaration order.
    pub missing: Vec<&'static str>,
}

impl StructuralError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::MissingEntity
    }

    pub fn render_with(&self, catalog: &dyn MessageCatalog) -> String {
        render(catalog, ErrorCode::MissingEntity, &[self.missing.join(", ")])
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&EnglishCatalog))
    }
}

impl std::error::Error for StructuralError {}

/// A business-rule violation, or an ordered collection of them.
///
/// Strategies return a `Simple` error for a single violation and a
/// `Composite` when several items or entries fail. The orchestrator always
/// hands back one flattened composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    Simple { code: ErrorCode, params: Vec<String> },
    Composite(Vec<RuleError>),
}

impl RuleError {
    pub fn new<I, P>(code: ErrorCode, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: ToString,
    {
        Self::Simple {
            code,
            params: params.into_iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Wrap errors in a single-level composite; nested composites are inlined.
    pub fn composite(errors: Vec<RuleError>) -> Self {
        let mut flat = Vec::with_capacity(errors.len());
        for err in errors {
            match err {
                Self::Composite(children) => {
                    flat.extend(Self::composite(children).into_children())
                }
                simple => flat.push(simple),
            }
        }
        Self::Composite(flat)
    }

    /// Zero violations yield `None`, one yields itself, more yield a composite.
    pub fn collect(mut errors: Vec<RuleError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::composite(errors)),
        }
    }

    /// Kind of the error; a composite reports its first child's kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Simple { code, .. } => *code,
            Self::Composite(children) => children
                .first()
                .map(RuleError::code)
                .unwrap_or(ErrorCode::Internal),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Leaf violations in evaluation order.
    pub fn violations(&self) -> Vec<&RuleError> {
        match self {
            Self::Simple { .. } => vec![self],
            Self::Composite(children) => children.iter().flat_map(|c| c.violations()).collect(),
        }
    }

    /// Whether any leaf violation carries `code`.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.violations().iter().any(|v| v.code() == code)
    }

    fn into_children(self) -> Vec<RuleError> {
        match self {
            Self::Composite(children) => children,
            simple => vec![simple],
        }
    }

    pub fn render_with(&self, catalog: &dyn MessageCatalog) -> String {
        match self {
            Self::Simple { code, params } => render(catalog, *code, params),
            Self::Composite(children) => children
                .iter()
                .map(|c| c.render_with(catalog))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&EnglishCatalog))
    }
}

impl std::error::Error for RuleError {}

/// Any failure produced while assembling or validating a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DteError {
    /// A scalar field is malformed; assembly stopped at that field.
    #[error("field validation failed: {0}")]
    Field(#[from] FieldError),

    /// A required sub-entity is absent.
    #[error("document incomplete: {0}")]
    Structure(#[from] StructuralError),

    /// One or more business rules failed.
    #[error("business rules violated: {0}")]
    Rules(#[from] RuleError),
}

impl DteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Field(e) => e.code,
            Self::Structure(e) => e.code(),
            Self::Rules(e) => e.code(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}
