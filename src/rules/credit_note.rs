use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{HasItems, HasRelatedDocuments, ItemCapability, SaleCapability};
use crate::values::DteType;

/// Document types a credit note may adjust.
const ADJUSTABLE: [DteType; 2] = [DteType::Ccf, DteType::Retention];

/// Credit-note lines adjust listed documents and fall in exactly one sale
/// category.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditNoteStrategy;

impl<D> Strategy<D> for CreditNoteStrategy
where
    D: HasItems + HasRelatedDocuments,
    D::Item: SaleCapability,
{
    fn name(&self) -> &'static str {
        "credit_note"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let related = doc.related_documents();
        let mut errors = Vec::new();

        if related.is_empty() {
            errors.push(RuleError::new(ErrorCode::RequiredField, ["related_documents"]));
        }
        let allowed = ADJUSTABLE.map(|t| t.code()).join(" or ");
        for (i, entry) in related.iter().enumerate() {
            if !ADJUSTABLE.contains(&entry.document_type()) {
                errors.push(RuleError::new(
                    ErrorCode::RelatedDocumentTypeNotAllowed,
                    [i.to_string(), entry.document_type().to_string(), allowed.clone()],
                ));
            }
        }

        for (i, line) in doc.items().iter().enumerate() {
            let item = line.base();
            let number = item.number();

            match item.related_document() {
                None => errors.push(RuleError::new(
                    ErrorCode::RequiredField,
                    [format!("items[{i}].related_document")],
                )),
                Some(reference)
                    if !related
                        .iter()
                        .any(|r| r.document_number().value() == reference.value()) =>
                {
                    errors.push(RuleError::new(
                        ErrorCode::UnknownRelatedDocument,
                        [number.to_string(), reference.to_string()],
                    ))
                }
                Some(_) => {}
            }

            let sales = line.sale_amounts();
            let populated = sales.populated();
            match populated.len() {
                0 => errors.push(RuleError::new(ErrorCode::SaleCategoryRequired, [number])),
                1 => {}
                _ => errors.push(RuleError::new(
                    ErrorCode::MixedSaleCategories,
                    [number.to_string(), populated.join(", ")],
                )),
            }

            if !sales.non_taxed.is_zero() && (!item.unit_price().is_zero() || !item.taxes().is_empty()) {
                errors.push(RuleError::new(ErrorCode::NonTaxedItemInvalid, [number]));
            }
        }
        RuleError::collect(errors)
    }
}
