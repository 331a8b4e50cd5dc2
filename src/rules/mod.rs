//! Business-rule strategies and the orchestrator that runs them.
//!
//! A strategy is a stateless check over a document seen through its
//! capability contracts. It reports at most one [`RuleError`], which may be
//! a composite when several lines or entries fail the same rule.

use chrono::NaiveDateTime;

use crate::core::{RuleConfig, RuleError};

mod basic;
mod credit_note;
mod invalidation;
mod items;
mod payments;
mod references;
mod retention;
mod transmission;
mod validator;

pub use basic::{BasicFieldsStrategy, ControlNumberStrategy, DocumentTypeStrategy};
pub use credit_note::CreditNoteStrategy;
pub use invalidation::{InvalidatedDocumentStrategy, InvalidationTypeStrategy};
pub use items::{ItemStrategy, TaxCalculationStrategy, ThirdPartySaleStrategy};
pub use payments::{ExtensionStrategy, PaymentTotalStrategy, SummaryTotalsStrategy};
pub use references::{AppendixStrategy, OtherDocumentsStrategy, RelatedDocumentsStrategy};
pub use retention::RetentionStrategy;
pub use transmission::{ContingencyStrategy, ModelTypeStrategy, TemporalStrategy};
pub use validator::{DteValidator, ValidateRules};

/// Inputs shared by every strategy in one validation run.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Current local time, read once per run.
    pub now: NaiveDateTime,
    pub config: &'a RuleConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(now: NaiveDateTime, config: &'a RuleConfig) -> Self {
        Self { now, config }
    }
}

/// A single business rule over documents of type `D`.
pub trait Strategy<D>: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    fn validate(&self, doc: &D, ctx: &RuleContext<'_>) -> Option<RuleError>;
}
