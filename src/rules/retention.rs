use rust_decimal_macros::dec;

use super::payments::checked_sum;
use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{
    HasItems, HasReceiver, HasSummary, ItemCapability, RetentionItem, RetentionSummary,
};
use crate::values::{ReceiverDocumentType, round_half_up};

/// IVA withheld per line matches its retention rate, and the summary adds
/// the lines up.
///
/// The receiver of a retention receipt is the retained party and must be
/// identified by NIT and NRC.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetentionStrategy;

impl<D> Strategy<D> for RetentionStrategy
where
    D: HasItems<Item = RetentionItem> + HasSummary<Summary = RetentionSummary> + HasReceiver,
{
    fn name(&self) -> &'static str {
        "retention"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let mut errors = Vec::new();

        if let Some(receiver) = doc.receiver() {
            if receiver.document_type() != Some(ReceiverDocumentType::Nit) {
                errors.push(RuleError::new(
                    ErrorCode::RequiredField,
                    ["receiver.document_type (NIT)"],
                ));
            }
            if receiver.nrc().is_none() {
                errors.push(RuleError::new(ErrorCode::RequiredField, ["receiver.nrc"]));
            }
        }

        let items = doc.items();
        for line in items {
            let Some(rate) = line.retention_code().rate() else {
                continue;
            };
            let expected = round_half_up(line.taxed_amount().value() * rate / dec!(100), 2);
            if line.iva_retained().value() != expected {
                errors.push(RuleError::new(
                    ErrorCode::RetentionAmountMismatch,
                    [
                        line.base().number().to_string(),
                        line.iva_retained().to_string(),
                        expected.to_string(),
                    ],
                ));
            }
        }

        if let Some(summary) = doc.summary() {
            let totals = [
                (
                    "total_taxed_subject",
                    summary.total_taxed_subject(),
                    checked_sum(items.iter().map(|l| l.taxed_amount().value())),
                ),
                (
                    "total_iva_retained",
                    summary.total_iva_retained(),
                    checked_sum(items.iter().map(|l| l.iva_retained().value())),
                ),
            ];
            for (field, actual, expected) in totals {
                match expected {
                    Ok(expected) if expected != actual.value() => errors.push(RuleError::new(
                        ErrorCode::TotalMismatch,
                        [format!("summary.{field}"), actual.to_string(), expected.to_string()],
                    )),
                    Ok(_) => {}
                    Err(err) => errors.push(err),
                }
            }
        }
        RuleError::collect(errors)
    }
}
