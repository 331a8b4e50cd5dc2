//! Invalidation requests.
//!
//! An invalidation does not carry items or totals. It names the document to
//! void, optionally the document replacing it, and who asked for it.

use serde::{Deserialize, Serialize};

use super::contracts::{HasEmission, HasInvalidation, HasIssuer, Identifiable};
use super::party::Issuer;
use crate::core::StructuralError;
use crate::values::{
    AmbientCode, ControlNumber, DocumentNumber, DteType, EmissionDate, EmissionTime,
    GenerationCode, InvalidationType, Name, Reason, ReceiverDocumentType, Version,
};

/// Identification block of the invalidation request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidationIdentification {
    version: Version,
    ambient: AmbientCode,
    generation_code: GenerationCode,
    emission_date: EmissionDate,
    emission_time: EmissionTime,
}

impl InvalidationIdentification {
    pub fn new(
        version: Version,
        ambient: AmbientCode,
        generation_code: GenerationCode,
        emission_date: EmissionDate,
        emission_time: EmissionTime,
    ) -> Self {
        Self {
            version,
            ambient,
            generation_code,
            emission_date,
            emission_time,
        }
    }

    required!(copy version: Version, set_version, set_version_raw(u8) = Version::new, "identification.version");
    required!(copy ambient: AmbientCode, set_ambient, set_ambient_raw(&str) = AmbientCode::new, "identification.ambient");
    required!(copy generation_code: GenerationCode, set_generation_code, set_generation_code_raw(&str) = GenerationCode::new, "identification.generation_code");
    required!(copy emission_date: EmissionDate, set_emission_date, set_emission_date_raw(&str) = EmissionDate::new, "identification.emission_date");
    required!(copy emission_time: EmissionTime, set_emission_time, set_emission_time_raw(&str) = EmissionTime::new, "identification.emission_time");
}

/// The document being voided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidatedDocument {
    dte_type: DteType,
    generation_code: GenerationCode,
    control_number: ControlNumber,
    emission_date: EmissionDate,
    replacement_code: Option<GenerationCode>,
}

impl InvalidatedDocument {
    pub fn new(
        dte_type: DteType,
        generation_code: GenerationCode,
        control_number: ControlNumber,
        emission_date: EmissionDate,
    ) -> Self {
        Self {
            dte_type,
            generation_code,
            control_number,
            emission_date,
            replacement_code: None,
        }
    }

    required!(copy dte_type: DteType, set_dte_type, set_dte_type_raw(&str) = DteType::new, "invalidated_document.dte_type");
    required!(copy generation_code: GenerationCode, set_generation_code, set_generation_code_raw(&str) = GenerationCode::new, "invalidated_document.generation_code");
    required!(ref control_number: ControlNumber, set_control_number, set_control_number_raw(&str) = ControlNumber::new, "invalidated_document.control_number");
    required!(copy emission_date: EmissionDate, set_emission_date, set_emission_date_raw(&str) = EmissionDate::new, "invalidated_document.emission_date");
    optional!(copy replacement_code: GenerationCode, set_replacement_code, set_replacement_code_raw(&str) = GenerationCode::new, "invalidated_document.replacement_code");
}

/// A person named on the invalidation (responsible or requester).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibleParty {
    name: Name,
    document_type: ReceiverDocumentType,
    document_number: DocumentNumber,
}

impl ResponsibleParty {
    pub fn new(name: Name, document_type: ReceiverDocumentType, document_number: DocumentNumber) -> Self {
        Self {
            name,
            document_type,
            document_number,
        }
    }

    required!(ref name: Name, set_name, set_name_raw(&str) = Name::new, "party.name");
    required!(copy document_type: ReceiverDocumentType, set_document_type, set_document_type_raw(&str) = ReceiverDocumentType::new, "party.document_type");
    required!(ref document_number: DocumentNumber, set_document_number, set_document_number_raw(&str) = DocumentNumber::new, "party.document_number");
}

/// Why the document is voided and who is accountable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidationReason {
    invalidation_type: InvalidationType,
    reason: Option<Reason>,
    responsible: ResponsibleParty,
    requester: ResponsibleParty,
}

impl InvalidationReason {
    pub fn new(
        invalidation_type: InvalidationType,
        responsible: ResponsibleParty,
        requester: ResponsibleParty,
    ) -> Self {
        Self {
            invalidation_type,
            reason: None,
            responsible,
            requester,
        }
    }

    required!(copy invalidation_type: InvalidationType, set_invalidation_type, set_invalidation_type_raw(u8) = InvalidationType::new, "invalidation_reason.invalidation_type");
    optional!(ref reason: Reason, set_reason, set_reason_raw(&str) = Reason::new, "invalidation_reason.reason");

    pub fn responsible(&self) -> &ResponsibleParty {
        &self.responsible
    }

    pub fn requester(&self) -> &ResponsibleParty {
        &self.requester
    }
}

/// Request to void a previously accepted DTE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvalidationDocument {
    identification: Option<InvalidationIdentification>,
    issuer: Option<Issuer>,
    document: Option<InvalidatedDocument>,
    reason: Option<InvalidationReason>,
}

impl InvalidationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identification(&self) -> Option<&InvalidationIdentification> {
        self.identification.as_ref()
    }

    pub fn set_identification(&mut self, identification: InvalidationIdentification) {
        self.identification = Some(identification);
    }

    /// Check that identification, issuer, invalidated document and reason
    /// are present.
    pub fn validate(&self) -> Result<(), StructuralError> {
        let missing: Vec<&'static str> = [
            ("identification", self.identification.is_none()),
            ("issuer", self.issuer.is_none()),
            ("invalidated_document", self.document.is_none()),
            ("invalidation_reason", self.reason.is_none()),
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

impl Identifiable for InvalidationDocument {
    /// Type of the voided document.
    fn dte_type(&self) -> Option<DteType> {
        self.document.as_ref().map(InvalidatedDocument::dte_type)
    }

    fn generation_code(&self) -> Option<GenerationCode> {
        self.identification
            .as_ref()
            .map(InvalidationIdentification::generation_code)
    }
}

impl HasEmission for InvalidationDocument {
    fn emission_date(&self) -> Option<EmissionDate> {
        self.identification
            .as_ref()
            .map(InvalidationIdentification::emission_date)
    }

    fn emission_time(&self) -> Option<EmissionTime> {
        self.identification
            .as_ref()
            .map(InvalidationIdentification::emission_time)
    }
}

impl HasIssuer for InvalidationDocument {
    fn issuer(&self) -> Option<&Issuer> {
        self.issuer.as_ref()
    }

    fn set_issuer(&mut self, issuer: Issuer) {
        self.issuer = Some(issuer);
    }
}

impl HasInvalidation for InvalidationDocument {
    fn invalidated_document(&self) -> Option<&InvalidatedDocument> {
        self.document.as_ref()
    }

    fn set_invalidated_document(&mut self, document: InvalidatedDocument) {
        self.document = Some(document);
    }

    fn invalidation_reason(&self) -> Option<&InvalidationReason> {
        self.reason.as_ref()
    }

    fn set_invalidation_reason(&mut self, reason: InvalidationReason) {
        self.reason = Some(reason);
    }
}
