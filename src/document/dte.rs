use serde::{Deserialize, Serialize};

use super::contracts::*;
use super::extras::{Appendix, Extension, OtherDocument, RelatedDocument, ThirdPartySale};
use super::identification::Identification;
use super::item::{CcfItem, CreditNoteItem, InvoiceItem, RetentionItem};
use super::party::{Issuer, Receiver};
use super::summary::{CcfSummary, CreditNoteSummary, InvoiceSummary, RetentionSummary};
use crate::core::StructuralError;
use crate::values::{DteType, EmissionDate, EmissionTime, GenerationCode};

/// A DTE aggregate, generic over its item and summary decorations.
///
/// Built empty and populated through the capability setters. [`validate`]
/// checks that every required sub-entity is present; business rules are
/// checked separately by a [`DteValidator`](crate::rules::DteValidator).
///
/// [`validate`]: DteDocument::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DteDocument<I, S> {
    identification: Option<Identification>,
    issuer: Option<Issuer>,
    receiver: Option<Receiver>,
    #[serde(default = "Vec::new")]
    items: Vec<I>,
    summary: Option<S>,
    extension: Option<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    appendix: Vec<Appendix>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    related_documents: Vec<RelatedDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    other_documents: Vec<OtherDocument>,
    third_party_sale: Option<ThirdPartySale>,
}

pub type InvoiceDocument = DteDocument<InvoiceItem, InvoiceSummary>;
pub type CcfDocument = DteDocument<CcfItem, CcfSummary>;
pub type CreditNoteDocument = DteDocument<CreditNoteItem, CreditNoteSummary>;
pub type RetentionDocument = DteDocument<RetentionItem, RetentionSummary>;

impl<I, S> Default for DteDocument<I, S> {
    fn default() -> Self {
        Self {
            identification: None,
            issuer: None,
            receiver: None,
            items: Vec::new(),
            summary: None,
            extension: None,
            appendix: Vec::new(),
            related_documents: Vec::new(),
            other_documents: Vec::new(),
            third_party_sale: None,
        }
    }
}

impl<I, S> DteDocument<I, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that identification, issuer, receiver, items and summary are
    /// present. Every missing entity is reported at once.
    pub fn validate(&self) -> Result<(), StructuralError> {
        let missing: Vec<&'static str> = [
            ("identification", self.identification.is_none()),
            ("issuer", self.issuer.is_none()),
            ("receiver", self.receiver.is_none()),
            ("items", self.items.is_empty()),
            ("summary", self.summary.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StructuralError { missing })
        }
    }
}

impl<I, S> Identifiable for DteDocument<I, S> {
    fn dte_type(&self) -> Option<DteType> {
        self.identification.as_ref().map(Identification::dte_type)
    }

    fn generation_code(&self) -> Option<GenerationCode> {
        self.identification.as_ref().map(Identification::generation_code)
    }
}

impl<I, S> HasIdentification for DteDocument<I, S> {
    fn identification(&self) -> Option<&Identification> {
        self.identification.as_ref()
    }

    fn set_identification(&mut self, identification: Identification) {
        self.identification = Some(identification);
    }
}

impl<I, S> HasEmission for DteDocument<I, S> {
    fn emission_date(&self) -> Option<EmissionDate> {
        self.identification.as_ref().map(Identification::emission_date)
    }

    fn emission_time(&self) -> Option<EmissionTime> {
        self.identification.as_ref().map(Identification::emission_time)
    }
}

impl<I, S> HasIssuer for DteDocument<I, S> {
    fn issuer(&self) -> Option<&Issuer> {
        self.issuer.as_ref()
    }

    fn set_issuer(&mut self, issuer: Issuer) {
        self.issuer = Some(issuer);
    }
}

impl<I, S> HasReceiver for DteDocument<I, S> {
    fn receiver(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    fn set_receiver(&mut self, receiver: Receiver) {
        self.receiver = Some(receiver);
    }
}

impl<I: ItemCapability, S> HasItems for DteDocument<I, S> {
    type Item = I;

    fn items(&self) -> &[I] {
        &self.items
    }

    fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
    }

    fn add_item(&mut self, item: I) {
        self.items.push(item);
    }
}

impl<I, S: SummaryCapability> HasSummary for DteDocument<I, S> {
    type Summary = S;

    fn summary(&self) -> Option<&S> {
        self.summary.as_ref()
    }

    fn set_summary(&mut self, summary: S) {
        self.summary = Some(summary);
    }
}

impl<I, S> HasExtension for DteDocument<I, S> {
    fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    fn set_extension(&mut self, extension: Option<Extension>) {
        self.extension = extension;
    }
}

impl<I, S> HasAppendix for DteDocument<I, S> {
    fn appendix(&self) -> &[Appendix] {
        &self.appendix
    }

    fn set_appendix(&mut self, appendix: Vec<Appendix>) {
        self.appendix = appendix;
    }
}

impl<I, S> HasRelatedDocuments for DteDocument<I, S> {
    fn related_documents(&self) -> &[RelatedDocument] {
        &self.related_documents
    }

    fn set_related_documents(&mut self, documents: Vec<RelatedDocument>) {
        self.related_documents = documents;
    }
}

impl<I, S> HasOtherDocuments for DteDocument<I, S> {
    fn other_documents(&self) -> &[OtherDocument] {
        &self.other_documents
    }

    fn set_other_documents(&mut self, documents: Vec<OtherDocument>) {
        self.other_documents = documents;
    }
}

impl<I, S> HasThirdPartySale for DteDocument<I, S> {
    fn third_party_sale(&self) -> Option<&ThirdPartySale> {
        self.third_party_sale.as_ref()
    }

    fn set_third_party_sale(&mut self, sale: Option<ThirdPartySale>) {
        self.third_party_sale = sale;
    }
}
