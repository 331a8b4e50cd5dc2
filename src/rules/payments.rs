use rust_decimal::Decimal;

use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{HasExtension, HasItems, HasSummary, SaleCapability, SummaryCapability};
use crate::values::{Amount, PaymentCondition, PaymentType, round_half_up};

/// Sum amounts without silently wrapping.
pub(super) fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, RuleError> {
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| RuleError::new(ErrorCode::Internal, ["amount overflow"]))
    })
}

/// Payment terms match the operation condition and the payments add up
/// to the total to pay, to the cent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentTotalStrategy;

impl<D> Strategy<D> for PaymentTotalStrategy
where
    D: HasSummary,
{
    fn name(&self) -> &'static str {
        "payment_total"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let summary = doc.summary()?.base();
        let payments = summary.payments();
        let mut errors = Vec::new();

        for (i, payment) in payments.iter().enumerate() {
            match summary.operation_condition() {
                PaymentCondition::Credit => {
                    if payment.code() == PaymentType::Cash {
                        errors.push(RuleError::new(
                            ErrorCode::CashPaymentOnCredit,
                            [i.to_string(), PaymentType::Cash.code().to_string()],
                        ));
                    }
                    if payment.term().is_none() || payment.period().is_none() {
                        errors.push(RuleError::new(ErrorCode::CreditTermRequired, [i]));
                    }
                }
                PaymentCondition::Cash => {
                    if payment.term().is_some() || payment.period().is_some() {
                        errors.push(RuleError::new(
                            ErrorCode::FieldNotAllowed,
                            [
                                format!("payments[{i}].term/period"),
                                "operation condition is cash".to_string(),
                            ],
                        ));
                    }
                }
                PaymentCondition::Other => {}
            }
        }

        match checked_sum(payments.iter().map(|p| p.amount().value())) {
            Ok(sum) if sum != summary.total_to_pay().value() => errors.push(RuleError::new(
                ErrorCode::PaymentTotalMismatch,
                [sum.to_string(), summary.total_to_pay().to_string()],
            )),
            Ok(_) => {}
            Err(err) => errors.push(err),
        }
        RuleError::collect(errors)
    }
}

/// Large operations carry an extension block.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionStrategy;

impl<D> Strategy<D> for ExtensionStrategy
where
    D: HasSummary + HasExtension,
{
    fn name(&self) -> &'static str {
        "extension"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let total = doc.summary()?.base().total_operation();
        let threshold = ctx.config.extension_threshold;
        (total.value() >= threshold && doc.extension().is_none()).then(|| {
            RuleError::new(
                ErrorCode::ExtensionRequired,
                [total.to_string(), threshold.to_string()],
            )
        })
    }
}

/// Summary totals agree with each other and with the item lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTotalsStrategy;

impl<D> Strategy<D> for SummaryTotalsStrategy
where
    D: HasItems + HasSummary,
    D::Item: SaleCapability,
{
    fn name(&self) -> &'static str {
        "summary_totals"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let summary = doc.summary()?.base();
        let items = doc.items();
        let mut errors = Vec::new();
        let mut check = |field: &str, actual: Amount, expected: Result<Decimal, RuleError>| {
            match expected {
                Ok(expected) if actual.value() != expected => errors.push(RuleError::new(
                    ErrorCode::TotalMismatch,
                    [
                        format!("summary.{field}"),
                        actual.to_string(),
                        expected.to_string(),
                    ],
                )),
                Ok(_) => {}
                Err(err) => errors.push(err),
            }
        };

        let sales = |pick: fn(&D::Item) -> Amount| {
            checked_sum(items.iter().map(|line| pick(line).value())).map(|v| round_half_up(v, 2))
        };
        check("total_non_subject", summary.total_non_subject(), sales(|l| l.sale_amounts().non_subject));
        check("total_exempt", summary.total_exempt(), sales(|l| l.sale_amounts().exempt));
        check("total_taxed", summary.total_taxed(), sales(|l| l.sale_amounts().taxed));
        check("total_non_taxed", summary.total_non_taxed(), sales(|l| l.sale_amounts().non_taxed));

        check(
            "sub_total_sales",
            summary.sub_total_sales(),
            checked_sum([
                summary.total_non_subject().value(),
                summary.total_exempt().value(),
                summary.total_taxed().value(),
            ]),
        );
        check(
            "total_discount",
            summary.total_discount(),
            checked_sum([
                summary.non_subject_discount().value(),
                summary.exempt_discount().value(),
                summary.taxed_discount().value(),
            ]),
        );
        check(
            "sub_total",
            summary.sub_total(),
            Ok(summary.sub_total_sales().value() - summary.total_discount().value()),
        );
        RuleError::collect(errors)
    }
}
