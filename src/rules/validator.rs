use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{
    AppendixStrategy, BasicFieldsStrategy, ContingencyStrategy, ControlNumberStrategy,
    CreditNoteStrategy, DocumentTypeStrategy, ExtensionStrategy, InvalidatedDocumentStrategy,
    InvalidationTypeStrategy, ItemStrategy, ModelTypeStrategy, OtherDocumentsStrategy,
    PaymentTotalStrategy, RelatedDocumentsStrategy, RetentionStrategy, RuleContext, Strategy,
    SummaryTotalsStrategy, TaxCalculationStrategy, TemporalStrategy, ThirdPartySaleStrategy,
};
use crate::core::{Clock, RuleConfig, RuleError, SystemClock};
use crate::document::{
    CcfDocument, CreditNoteDocument, DteDocument, Identifiable, InvalidationDocument,
    InvoiceDocument, RetentionDocument, SaleCapability, SummaryCapability,
};

/// Runs an ordered list of strategies against one document.
///
/// Acceptance is `Ok(())`. Rejection is always a single
/// [`RuleError::Composite`] whose children follow strategy order, whichever
/// way the strategies were executed.
pub struct DteValidator<D> {
    strategies: Vec<Box<dyn Strategy<D>>>,
    clock: Arc<dyn Clock>,
    config: RuleConfig,
}

impl<D> DteValidator<D>
where
    D: Identifiable + Sync,
{
    /// An empty validator using the system clock and default limits.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            clock: Arc::new(SystemClock::default()),
            config: RuleConfig::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl Strategy<D> + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Strategy names in evaluation order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn validate(&self, doc: &D) -> Result<(), RuleError> {
        let ctx = RuleContext::new(self.clock.now(), &self.config);
        let errors = self.run(doc, &ctx);

        let dte_type = doc.dte_type().map(|t| t.code()).unwrap_or("-");
        let generation_code = doc
            .generation_code()
            .map(|c| c.to_string())
            .unwrap_or_default();

        if errors.is_empty() {
            info!(dte_type, %generation_code, "document accepted");
            return Ok(());
        }

        let err = RuleError::composite(errors);
        warn!(
            dte_type,
            %generation_code,
            violations = err.violations().len(),
            code = err.code().key(),
            "document rejected"
        );
        Err(err)
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, doc: &D, ctx: &RuleContext<'_>) -> Vec<RuleError> {
        self.strategies
            .iter()
            .filter_map(|s| evaluate(s.as_ref(), doc, ctx))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run(&self, doc: &D, ctx: &RuleContext<'_>) -> Vec<RuleError> {
        use rayon::prelude::*;

        // Indexed collect keeps strategy order.
        let outcomes: Vec<Option<RuleError>> = self
            .strategies
            .par_iter()
            .map(|s| evaluate(s.as_ref(), doc, ctx))
            .collect();
        outcomes.into_iter().flatten().collect()
    }
}

impl<D> Default for DteValidator<D>
where
    D: Identifiable + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

fn evaluate<D>(strategy: &dyn Strategy<D>, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError> {
    let outcome = strategy.validate(doc, ctx);
    match &outcome {
        None => debug!(strategy = strategy.name(), "passed"),
        Some(err) => debug!(strategy = strategy.name(), code = err.code().key(), "failed"),
    }
    outcome
}

macro_rules! strategies {
    ($doc:ty; $($strategy:expr),+ $(,)?) => {
        vec![$(Box::new($strategy) as Box<dyn Strategy<$doc>>),+]
    };
}

/// Catalog shared by every document whose lines carry sale amounts.
fn sale_strategies<I, S>() -> Vec<Box<dyn Strategy<DteDocument<I, S>>>>
where
    I: SaleCapability + Sync + 'static,
    S: SummaryCapability + Sync + 'static,
{
    strategies![DteDocument<I, S>;
        BasicFieldsStrategy,
        ContingencyStrategy,
        DocumentTypeStrategy,
        ExtensionStrategy,
        ItemStrategy,
        ModelTypeStrategy,
        OtherDocumentsStrategy,
        PaymentTotalStrategy,
        RelatedDocumentsStrategy,
        TaxCalculationStrategy,
        TemporalStrategy,
        ThirdPartySaleStrategy,
        ControlNumberStrategy,
        SummaryTotalsStrategy,
        AppendixStrategy,
    ]
}

impl<D> DteValidator<D>
where
    D: Identifiable + Sync,
{
    fn with_strategies(strategies: Vec<Box<dyn Strategy<D>>>) -> Self {
        Self {
            strategies,
            ..Self::new()
        }
    }
}

impl DteValidator<InvoiceDocument> {
    pub fn invoice() -> Self {
        Self::with_strategies(sale_strategies())
    }
}

impl DteValidator<CcfDocument> {
    pub fn ccf() -> Self {
        Self::with_strategies(sale_strategies())
    }
}

impl DteValidator<CreditNoteDocument> {
    pub fn credit_note() -> Self {
        let mut strategies = sale_strategies();
        strategies.push(Box::new(CreditNoteStrategy));
        Self::with_strategies(strategies)
    }
}

impl DteValidator<RetentionDocument> {
    /// Retention receipts carry no sale categories or payments.
    pub fn retention() -> Self {
        Self::with_strategies(strategies![RetentionDocument;
            BasicFieldsStrategy,
            ContingencyStrategy,
            DocumentTypeStrategy,
            ItemStrategy,
            ModelTypeStrategy,
            OtherDocumentsStrategy,
            RelatedDocumentsStrategy,
            TaxCalculationStrategy,
            TemporalStrategy,
            ThirdPartySaleStrategy,
            ControlNumberStrategy,
            AppendixStrategy,
            RetentionStrategy,
        ])
    }
}

impl DteValidator<InvalidationDocument> {
    pub fn invalidation() -> Self {
        Self::with_strategies(strategies![InvalidationDocument;
            TemporalStrategy,
            InvalidationTypeStrategy,
            InvalidatedDocumentStrategy,
        ])
    }
}

/// Business-rule validation bound to the default strategy set of a
/// document type.
pub trait ValidateRules: Identifiable + Sync + Sized {
    fn default_validator() -> DteValidator<Self>;

    /// Run the default strategy set with the system clock.
    fn validate_dte_rules(&self) -> Result<(), RuleError> {
        Self::default_validator().validate(self)
    }
}

impl ValidateRules for InvoiceDocument {
    fn default_validator() -> DteValidator<Self> {
        DteValidator::invoice()
    }
}

impl ValidateRules for CcfDocument {
    fn default_validator() -> DteValidator<Self> {
        DteValidator::ccf()
    }
}

impl ValidateRules for CreditNoteDocument {
    fn default_validator() -> DteValidator<Self> {
        DteValidator::credit_note()
    }
}

impl ValidateRules for RetentionDocument {
    fn default_validator() -> DteValidator<Self> {
        DteValidator::retention()
    }
}

impl ValidateRules for InvalidationDocument {
    fn default_validator() -> DteValidator<Self> {
        DteValidator::invalidation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorCode, FixedClock};
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn credit_note_set_ends_with_its_own_rule() {
        let validator = DteValidator::credit_note().with_clock(clock());
        assert_eq!(validator.strategy_names().last(), Some(&"credit_note"));

        let err = validator.validate(&CreditNoteDocument::new()).unwrap_err();
        assert!(err.is_composite());
        assert!(err.contains(ErrorCode::RequiredField));
    }

    #[test]
    fn retention_set_skips_sale_rules() {
        let validator = DteValidator::retention().with_clock(clock());
        let names = validator.strategy_names();
        assert_eq!(names.last(), Some(&"retention"));
        assert!(!names.contains(&"payment_total"));
        assert!(!names.contains(&"summary_totals"));

        let err = validator.validate(&RetentionDocument::new()).unwrap_err();
        assert!(err.contains(ErrorCode::RequiredField));
    }

    #[test]
    fn invalidation_set_is_small() {
        let validator = DteValidator::invalidation();
        assert_eq!(
            validator.strategy_names(),
            ["temporal", "invalidation_type", "invalidated_document"]
        );
    }
}
