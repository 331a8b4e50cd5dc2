use std::collections::BTreeSet;

use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{Doctor, HasAppendix, HasOtherDocuments, HasRelatedDocuments, OtherDocument};
use crate::values::{AssociatedDocumentCode, GenerationCode, RelatedGenerationType};

fn exceeded(field: &str, max: usize, got: usize) -> RuleError {
    RuleError::new(
        ErrorCode::ExceededLimit,
        [field.to_string(), max.to_string(), got.to_string()],
    )
}

/// Related documents share one type, are not future-dated and carry a
/// number whose shape matches how they were generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelatedDocumentsStrategy;

impl<D> Strategy<D> for RelatedDocumentsStrategy
where
    D: HasRelatedDocuments,
{
    fn name(&self) -> &'static str {
        "related_documents"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let related = doc.related_documents();
        let max = ctx.config.max_related_documents;
        if related.len() > max {
            return Some(exceeded("related_documents", max, related.len()));
        }

        let mut errors = Vec::new();
        let types: BTreeSet<&str> = related.iter().map(|r| r.document_type().code()).collect();
        if types.len() > 1 {
            let listed: Vec<&str> = types.into_iter().collect();
            errors.push(RuleError::new(ErrorCode::MixedDocumentTypes, [listed.join(", ")]));
        }

        let today = ctx.now.date();
        let max_len = ctx.config.related_document_number_max_len;
        for (i, entry) in related.iter().enumerate() {
            if entry.emission_date().value() > today {
                errors.push(RuleError::new(
                    ErrorCode::FutureDate,
                    [
                        format!("related_documents[{i}].emission_date"),
                        entry.emission_date().to_string(),
                    ],
                ));
            }
            let number = entry.document_number().value();
            let expected = match entry.generation_type() {
                RelatedGenerationType::Electronic if !GenerationCode::matches(number) => {
                    Some("a generation code (UUID)".to_string())
                }
                RelatedGenerationType::Physical if number.chars().count() > max_len => {
                    Some(format!("at most {max_len} characters"))
                }
                _ => None,
            };
            if let Some(expected) = expected {
                errors.push(RuleError::new(
                    ErrorCode::InvalidRelatedDocumentNumber,
                    [i.to_string(), number.to_string(), expected],
                ));
            }
        }
        RuleError::collect(errors)
    }
}

/// Other-document entries: medical entries carry exactly one doctor
/// identifier and nothing else; all other entries carry a description and
/// detail and no doctor.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtherDocumentsStrategy;

impl<D> Strategy<D> for OtherDocumentsStrategy
where
    D: HasOtherDocuments,
{
    fn name(&self) -> &'static str {
        "other_documents"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let entries = doc.other_documents();
        let max = ctx.config.max_other_documents;
        if entries.len() > max {
            return Some(exceeded("other_documents", max, entries.len()));
        }

        let mut errors = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            check_other_document(i, entry, &mut errors);
        }
        RuleError::collect(errors)
    }
}

fn check_other_document(i: usize, entry: &OtherDocument, errors: &mut Vec<RuleError>) {
    let path = format!("other_documents[{i}]");
    if entry.associated_code() == AssociatedDocumentCode::Medical {
        let condition = "the associated code is 3 (medical)";
        if entry.description().is_some() {
            errors.push(RuleError::new(
                ErrorCode::FieldNotAllowed,
                [format!("{path}.description"), condition.to_string()],
            ));
        }
        if entry.detail().is_some() {
            errors.push(RuleError::new(
                ErrorCode::FieldNotAllowed,
                [format!("{path}.detail"), condition.to_string()],
            ));
        }
        match entry.doctor() {
            Some(doctor) => check_doctor(&path, doctor, errors),
            None => errors.push(RuleError::new(ErrorCode::RequiredField, [format!("{path}.doctor")])),
        }
    } else {
        if entry.description().is_none() {
            errors.push(RuleError::new(
                ErrorCode::RequiredField,
                [format!("{path}.description")],
            ));
        }
        if entry.detail().is_none() {
            errors.push(RuleError::new(ErrorCode::RequiredField, [format!("{path}.detail")]));
        }
        if entry.doctor().is_some() {
            errors.push(RuleError::new(
                ErrorCode::FieldNotAllowed,
                [
                    format!("{path}.doctor"),
                    format!("the associated code is {}", entry.associated_code()),
                ],
            ));
        }
    }
}

fn check_doctor(path: &str, doctor: &Doctor, errors: &mut Vec<RuleError>) {
    match (doctor.nit(), doctor.identification()) {
        (Some(_), Some(_)) => errors.push(RuleError::new(
            ErrorCode::MutuallyExclusiveFields,
            [format!("{path}.doctor.nit"), format!("{path}.doctor.identification")],
        )),
        (None, None) => errors.push(RuleError::new(
            ErrorCode::RequiredField,
            [format!("{path}.doctor.nit or {path}.doctor.identification")],
        )),
        _ => {}
    }
}

/// Appendix entry count.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendixStrategy;

impl<D> Strategy<D> for AppendixStrategy
where
    D: HasAppendix,
{
    fn name(&self) -> &'static str {
        "appendix"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let count = doc.appendix().len();
        let max = ctx.config.max_appendix_entries;
        (count > max).then(|| exceeded("appendix", max, count))
    }
}
