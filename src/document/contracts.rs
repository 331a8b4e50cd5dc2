//! Capability contracts.
//!
//! Strategies never name a concrete document type. They bind to the
//! narrowest set of these traits that covers the data they read, which lets
//! one strategy serve every document variant that exposes that data.

use super::extras::{Appendix, Extension, OtherDocument, RelatedDocument, ThirdPartySale};
use super::identification::Identification;
use super::invalidation::{InvalidatedDocument, InvalidationReason};
use super::item::{Item, SaleAmounts};
use super::party::{Issuer, Receiver};
use super::summary::Summary;
use crate::values::{Amount, DteType, EmissionDate, EmissionTime, GenerationCode};

/// An item line, possibly decorated with document-specific fields.
pub trait ItemCapability {
    /// The shared item fields.
    fn base(&self) -> &Item;
    fn base_mut(&mut self) -> &mut Item;
}

/// Item lines that split their value into sale categories.
pub trait SaleCapability: ItemCapability {
    fn sale_amounts(&self) -> &SaleAmounts;
    fn suggested_price(&self) -> Amount;
}

/// A document summary, possibly decorated with document-specific totals.
pub trait SummaryCapability {
    fn base(&self) -> &Summary;
    fn base_mut(&mut self) -> &mut Summary;
}

/// Document type and generation code, used for reporting.
pub trait Identifiable {
    fn dte_type(&self) -> Option<DteType>;
    fn generation_code(&self) -> Option<GenerationCode>;
}

pub trait HasIdentification {
    fn identification(&self) -> Option<&Identification>;
    fn set_identification(&mut self, identification: Identification);
}

pub trait HasIssuer {
    fn issuer(&self) -> Option<&Issuer>;
    fn set_issuer(&mut self, issuer: Issuer);
}

pub trait HasReceiver {
    fn receiver(&self) -> Option<&Receiver>;
    fn set_receiver(&mut self, receiver: Receiver);
}

pub trait HasItems {
    type Item: ItemCapability;

    fn items(&self) -> &[Self::Item];
    fn set_items(&mut self, items: Vec<Self::Item>);
    fn add_item(&mut self, item: Self::Item);
}

pub trait HasSummary {
    type Summary: SummaryCapability;

    fn summary(&self) -> Option<&Self::Summary>;
    fn set_summary(&mut self, summary: Self::Summary);
}

pub trait HasExtension {
    fn extension(&self) -> Option<&Extension>;
    fn set_extension(&mut self, extension: Option<Extension>);
}

pub trait HasAppendix {
    fn appendix(&self) -> &[Appendix];
    fn set_appendix(&mut self, appendix: Vec<Appendix>);
}

pub trait HasRelatedDocuments {
    fn related_documents(&self) -> &[RelatedDocument];
    fn set_related_documents(&mut self, documents: Vec<RelatedDocument>);
}

pub trait HasOtherDocuments {
    fn other_documents(&self) -> &[OtherDocument];
    fn set_other_documents(&mut self, documents: Vec<OtherDocument>);
}

pub trait HasThirdPartySale {
    fn third_party_sale(&self) -> Option<&ThirdPartySale>;
    fn set_third_party_sale(&mut self, sale: Option<ThirdPartySale>);
}

/// Emission instant of the document itself.
///
/// Read-only: emission data lives in each aggregate's own identification
/// block and is set there.
pub trait HasEmission {
    fn emission_date(&self) -> Option<EmissionDate>;
    fn emission_time(&self) -> Option<EmissionTime>;
}

/// The invalidated-document and reason blocks of an invalidation request.
pub trait HasInvalidation {
    fn invalidated_document(&self) -> Option<&InvalidatedDocument>;
    fn set_invalidated_document(&mut self, document: InvalidatedDocument);
    fn invalidation_reason(&self) -> Option<&InvalidationReason>;
    fn set_invalidation_reason(&mut self, reason: InvalidationReason);
}
