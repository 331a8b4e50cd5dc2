use serde::{Deserialize, Serialize};

use crate::values::{
    AssociatedDocumentCode, BoundedText, Detail, DocumentNumber, DocumentReference, DteType,
    EmissionDate, Name, Nit, RelatedGenerationType, ServiceType, ShortText,
};

/// Free-text observation on the extension block.
pub type Observation = BoundedText<1, 3000>;
/// Vehicle plate for transported goods.
pub type VehiclePlate = BoundedText<2, 10>;
/// Appendix field key.
pub type AppendixField = BoundedText<2, 25>;
/// Appendix label.
pub type AppendixLabel = BoundedText<3, 50>;
/// Appendix value.
pub type AppendixValue = BoundedText<1, 150>;

/// Delivery and receipt details, mandatory for large operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    delivered_by: Name,
    deliverer_document: DocumentNumber,
    received_by: Name,
    receiver_document: DocumentNumber,
    observation: Option<Observation>,
    vehicle_plate: Option<VehiclePlate>,
}

impl Extension {
    pub fn new(
        delivered_by: Name,
        deliverer_document: DocumentNumber,
        received_by: Name,
        receiver_document: DocumentNumber,
    ) -> Self {
        Self {
            delivered_by,
            deliverer_document,
            received_by,
            receiver_document,
            observation: None,
            vehicle_plate: None,
        }
    }

    required!(ref delivered_by: Name, set_delivered_by, set_delivered_by_raw(&str) = Name::new, "extension.delivered_by");
    required!(ref deliverer_document: DocumentNumber, set_deliverer_document, set_deliverer_document_raw(&str) = DocumentNumber::new, "extension.deliverer_document");
    required!(ref received_by: Name, set_received_by, set_received_by_raw(&str) = Name::new, "extension.received_by");
    required!(ref receiver_document: DocumentNumber, set_receiver_document, set_receiver_document_raw(&str) = DocumentNumber::new, "extension.receiver_document");
    optional!(ref observation: Observation, set_observation, set_observation_raw(&str) = Observation::new, "extension.observation");
    optional!(ref vehicle_plate: VehiclePlate, set_vehicle_plate, set_vehicle_plate_raw(&str) = VehiclePlate::new, "extension.vehicle_plate");
}

/// Issuer-defined key/label/value annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appendix {
    field: AppendixField,
    label: AppendixLabel,
    value: AppendixValue,
}

impl Appendix {
    pub fn new(field: AppendixField, label: AppendixLabel, value: AppendixValue) -> Self {
        Self { field, label, value }
    }

    required!(ref field: AppendixField, set_field, set_field_raw(&str) = AppendixField::new, "appendix.field");
    required!(ref label: AppendixLabel, set_label, set_label_raw(&str) = AppendixLabel::new, "appendix.label");
    required!(ref value: AppendixValue, set_value, set_value_raw(&str) = AppendixValue::new, "appendix.value");
}

/// A document this one amends or builds on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedDocument {
    document_type: DteType,
    generation_type: RelatedGenerationType,
    document_number: DocumentReference,
    emission_date: EmissionDate,
}

impl RelatedDocument {
    pub fn new(
        document_type: DteType,
        generation_type: RelatedGenerationType,
        document_number: DocumentReference,
        emission_date: EmissionDate,
    ) -> Self {
        Self {
            document_type,
            generation_type,
            document_number,
            emission_date,
        }
    }

    required!(copy document_type: DteType, set_document_type, set_document_type_raw(&str) = DteType::new, "related_document.document_type");
    required!(copy generation_type: RelatedGenerationType, set_generation_type, set_generation_type_raw(u8) = RelatedGenerationType::new, "related_document.generation_type");
    required!(ref document_number: DocumentReference, set_document_number, set_document_number_raw(&str) = DocumentReference::new, "related_document.document_number");
    required!(copy emission_date: EmissionDate, set_emission_date, set_emission_date_raw(&str) = EmissionDate::new, "related_document.emission_date");
}

/// Physician attached to a medical other-document entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    name: ShortText,
    service_type: ServiceType,
    nit: Option<Nit>,
    identification: Option<DocumentNumber>,
}

impl Doctor {
    pub fn new(name: ShortText, service_type: ServiceType) -> Self {
        Self {
            name,
            service_type,
            nit: None,
            identification: None,
        }
    }

    required!(ref name: ShortText, set_name, set_name_raw(&str) = ShortText::new, "doctor.name");
    required!(copy service_type: ServiceType, set_service_type, set_service_type_raw(u8) = ServiceType::new, "doctor.service_type");
    optional!(ref nit: Nit, set_nit, set_nit_raw(&str) = Nit::new, "doctor.nit");
    optional!(ref identification: DocumentNumber, set_identification, set_identification_raw(&str) = DocumentNumber::new, "doctor.identification");
}

/// Supporting document associated with the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherDocument {
    associated_code: AssociatedDocumentCode,
    description: Option<ShortText>,
    detail: Option<Detail>,
    doctor: Option<Doctor>,
}

impl OtherDocument {
    pub fn new(associated_code: AssociatedDocumentCode) -> Self {
        Self {
            associated_code,
            description: None,
            detail: None,
            doctor: None,
        }
    }

    /// Medical entry backed by a doctor block.
    pub fn medical(doctor: Doctor) -> Self {
        Self {
            doctor: Some(doctor),
            ..Self::new(AssociatedDocumentCode::Medical)
        }
    }

    required!(copy associated_code: AssociatedDocumentCode, set_associated_code, set_associated_code_raw(u8) = AssociatedDocumentCode::new, "other_document.associated_code");
    optional!(ref description: ShortText, set_description, set_description_raw(&str) = ShortText::new, "other_document.description");
    optional!(ref detail: Detail, set_detail, set_detail_raw(&str) = Detail::new, "other_document.detail");

    pub fn doctor(&self) -> Option<&Doctor> {
        self.doctor.as_ref()
    }

    pub fn set_doctor(&mut self, doctor: Option<Doctor>) {
        self.doctor = doctor;
    }
}

/// Sale made on behalf of a third party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartySale {
    nit: Nit,
    name: Option<Name>,
}

impl ThirdPartySale {
    pub fn new(nit: Nit, name: Option<Name>) -> Self {
        Self { nit, name }
    }

    required!(ref nit: Nit, set_nit, set_nit_raw(&str) = Nit::new, "third_party_sale.nit");
    optional!(ref name: Name, set_name, set_name_raw(&str) = Name::new, "third_party_sale.name");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;

    #[test]
    fn appendix_bounds() {
        let mut appendix = Appendix::new(
            AppendixField::new("ruta").unwrap(),
            AppendixLabel::new("Ruta de entrega").unwrap(),
            AppendixValue::new("Zona norte").unwrap(),
        );
        let err = appendix.set_field_raw("r").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidLength);
        assert_eq!(err.field, "appendix.field");
        assert_eq!(appendix.field().value(), "ruta");
    }

    #[test]
    fn medical_entry() {
        let mut doctor = Doctor::new(ShortText::new("Dra. Ana López").unwrap(), ServiceType::Diagnostic);
        doctor.set_nit_raw(Some("0614-010190-101-1")).unwrap();
        let entry = OtherDocument::medical(doctor);
        assert_eq!(entry.associated_code(), AssociatedDocumentCode::Medical);
        assert!(entry.description().is_none());
        assert!(entry.doctor().and_then(Doctor::nit).is_some());
    }
}
