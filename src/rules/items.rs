use std::collections::HashSet;

use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{HasItems, HasThirdPartySale, ItemCapability};
use crate::values::is_known_tax_code;

/// Item count, per-line bounds and unique line numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemStrategy;

impl<D> Strategy<D> for ItemStrategy
where
    D: HasItems,
{
    fn name(&self) -> &'static str {
        "item"
    }

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
        let items = doc.items();
        let max = ctx.config.max_items;
        if items.len() > max {
            return Some(RuleError::new(
                ErrorCode::ExceededLimit,
                ["items".to_string(), max.to_string(), items.len().to_string()],
            ));
        }

        let mut errors = Vec::new();
        let mut seen = HashSet::with_capacity(items.len());
        for (i, line) in items.iter().enumerate() {
            let number = line.base().number().value();
            if usize::from(number) > max {
                errors.push(RuleError::new(
                    ErrorCode::OutOfBounds,
                    [
                        format!("items[{i}].number"),
                        number.to_string(),
                        format!("1..={max}"),
                    ],
                ));
            }
            if !seen.insert(number) {
                errors.push(RuleError::new(ErrorCode::DuplicateItemNumber, [number]));
            }
        }
        RuleError::collect(errors)
    }
}

/// Every tax referenced by an item exists in the tax catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculationStrategy;

impl<D> Strategy<D> for TaxCalculationStrategy
where
    D: HasItems,
{
    fn name(&self) -> &'static str {
        "tax_calculation"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let mut errors = Vec::new();
        for (i, line) in doc.items().iter().enumerate() {
            let item = line.base();
            if let Some(code) = item.tax_code().filter(|c| !c.is_known()) {
                errors.push(RuleError::new(
                    ErrorCode::UnknownTaxCode,
                    [format!("items[{i}].tax_code"), code.to_string()],
                ));
            }
            for (j, tax) in item.taxes().iter().enumerate() {
                if !is_known_tax_code(tax.value()) {
                    errors.push(RuleError::new(
                        ErrorCode::UnknownTaxCode,
                        [format!("items[{i}].taxes[{j}]"), tax.to_string()],
                    ));
                }
            }
        }
        RuleError::collect(errors)
    }
}

/// A third-party sale covers every line and names the third party.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdPartySaleStrategy;

impl<D> Strategy<D> for ThirdPartySaleStrategy
where
    D: HasItems + HasThirdPartySale,
{
    fn name(&self) -> &'static str {
        "third_party_sale"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let sale = doc.third_party_sale()?;
        let mut errors = Vec::new();
        if sale.name().is_none() {
            errors.push(RuleError::new(ErrorCode::RequiredField, ["third_party_sale.name"]));
        }
        for line in doc.items() {
            let item = line.base();
            if item.related_document().is_none() {
                errors.push(RuleError::new(
                    ErrorCode::ThirdPartyMixedItems,
                    [item.number()],
                ));
            }
        }
        RuleError::collect(errors)
    }
}
