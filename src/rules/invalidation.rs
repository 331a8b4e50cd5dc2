use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::HasInvalidation;
use crate::values::InvalidationType;

/// Replacement and reason requirements of each invalidation type.
///
/// Types 1 and 3 are voided in favour of a replacement document, which must
/// be a different one; type 2 rescinds the operation and names none. Type 3
/// also explains itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidationTypeStrategy;

impl<D> Strategy<D> for InvalidationTypeStrategy
where
    D: HasInvalidation,
{
    fn name(&self) -> &'static str {
        "invalidation_type"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let voided = doc.invalidated_document()?;
        let reason = doc.invalidation_reason()?;
        let kind = reason.invalidation_type();
        let mut errors = Vec::new();

        match voided.replacement_code() {
            None if kind.requires_replacement() => errors.push(RuleError::new(
                ErrorCode::RequiredField,
                ["invalidated_document.replacement_code"],
            )),
            Some(_) if !kind.requires_replacement() => errors.push(RuleError::new(
                ErrorCode::FieldNotAllowed,
                [
                    "invalidated_document.replacement_code".to_string(),
                    format!("the invalidation type is {kind}"),
                ],
            )),
            Some(code) if code == voided.generation_code() => errors.push(RuleError::new(
                ErrorCode::ReplacementSameAsOriginal,
                [code],
            )),
            _ => {}
        }

        if kind == InvalidationType::Other && reason.reason().is_none() {
            errors.push(RuleError::new(
                ErrorCode::RequiredField,
                ["invalidation_reason.reason"],
            ));
        }
        RuleError::collect(errors)
    }
}

/// The voided document is not dated in the future and its control number
/// belongs to its declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidatedDocumentStrategy;

impl<D> Strategy<D> for InvalidatedDocumentStrategy
where
    D: HasInvalidation,
{
    fn name(&self) -> &'static str {
        "invalidated_document"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let voided = doc.invalidated_document()?;
        let mut errors = Vec::new();

        if voided.emission_date().value() > ctx.now.date() {
            errors.push(RuleError::new(
                ErrorCode::FutureDate,
                [
                    "invalidated_document.emission_date".to_string(),
                    voided.emission_date().to_string(),
                ],
            ));
        }
        let control_number = voided.control_number();
        if control_number.type_segment() != voided.dte_type().code() {
            errors.push(RuleError::new(
                ErrorCode::ControlNumberMismatch,
                [control_number.value(), voided.dte_type().code()],
            ));
        }
        RuleError::collect(errors)
    }
}
