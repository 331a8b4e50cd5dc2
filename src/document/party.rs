use serde::{Deserialize, Serialize};

use crate::core::FieldError;
use crate::values::{
    ActivityCode, AddressLine, Department, DocumentNumber, Email, EstablishmentCode,
    EstablishmentType, Municipality, Name, Nit, Nrc, Phone, PointOfSaleCode, ReceiverDocumentType,
};

/// Postal address. The municipality is validated against the department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAddress")]
pub struct Address {
    department: Department,
    municipality: Municipality,
    complement: AddressLine,
}

#[derive(Deserialize)]
struct RawAddress {
    department: String,
    municipality: String,
    complement: String,
}

impl TryFrom<RawAddress> for Address {
    type Error = FieldError;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        Self::new(&raw.department, &raw.municipality, &raw.complement)
    }
}

impl Address {
    pub fn new(department: &str, municipality: &str, complement: &str) -> Result<Self, FieldError> {
        let department = Department::new(department).map_err(|e| e.at("address.department"))?;
        let municipality =
            Municipality::new(municipality, &department).map_err(|e| e.at("address.municipality"))?;
        let complement = AddressLine::new(complement).map_err(|e| e.at("address.complement"))?;
        Ok(Self {
            department,
            municipality,
            complement,
        })
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn municipality(&self) -> &Municipality {
        &self.municipality
    }

    /// Move the address to another department and municipality.
    ///
    /// Both codes are checked together; on error the address is unchanged.
    pub fn set_location_raw(&mut self, department: &str, municipality: &str) -> Result<(), FieldError> {
        let department = Department::new(department).map_err(|e| e.at("address.department"))?;
        let municipality =
            Municipality::new(municipality, &department).map_err(|e| e.at("address.municipality"))?;
        self.department = department;
        self.municipality = municipality;
        Ok(())
    }

    required!(ref complement: AddressLine, set_complement, set_complement_raw(&str) = AddressLine::new, "address.complement");
}

/// The issuing taxpayer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issuer {
    nit: Nit,
    nrc: Nrc,
    name: Name,
    activity_code: ActivityCode,
    activity_description: Name,
    commercial_name: Option<Name>,
    establishment_type: EstablishmentType,
    address: Address,
    phone: Phone,
    email: Email,
    establishment_code: Option<EstablishmentCode>,
    point_of_sale_code: Option<PointOfSaleCode>,
}

impl Issuer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nit: Nit,
        nrc: Nrc,
        name: Name,
        activity_code: ActivityCode,
        activity_description: Name,
        establishment_type: EstablishmentType,
        address: Address,
        phone: Phone,
        email: Email,
    ) -> Self {
        Self {
            nit,
            nrc,
            name,
            activity_code,
            activity_description,
            commercial_name: None,
            establishment_type,
            address,
            phone,
            email,
            establishment_code: None,
            point_of_sale_code: None,
        }
    }

    required!(ref nit: Nit, set_nit, set_nit_raw(&str) = Nit::new, "issuer.nit");
    required!(ref nrc: Nrc, set_nrc, set_nrc_raw(&str) = Nrc::new, "issuer.nrc");
    required!(ref name: Name, set_name, set_name_raw(&str) = Name::new, "issuer.name");
    required!(ref activity_code: ActivityCode, set_activity_code, set_activity_code_raw(&str) = ActivityCode::new, "issuer.activity_code");
    required!(ref activity_description: Name, set_activity_description, set_activity_description_raw(&str) = Name::new, "issuer.activity_description");
    optional!(ref commercial_name: Name, set_commercial_name, set_commercial_name_raw(&str) = Name::new, "issuer.commercial_name");
    required!(copy establishment_type: EstablishmentType, set_establishment_type, set_establishment_type_raw(&str) = EstablishmentType::new, "issuer.establishment_type");
    required!(ref phone: Phone, set_phone, set_phone_raw(&str) = Phone::new, "issuer.phone");
    required!(ref email: Email, set_email, set_email_raw(&str) = Email::new, "issuer.email");
    optional!(ref establishment_code: EstablishmentCode, set_establishment_code, set_establishment_code_raw(&str) = EstablishmentCode::new, "issuer.establishment_code");
    optional!(ref point_of_sale_code: PointOfSaleCode, set_point_of_sale_code, set_point_of_sale_code_raw(&str) = PointOfSaleCode::new, "issuer.point_of_sale_code");

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }
}

/// The receiving party. Which fields are mandatory depends on the document
/// type, so every field is optional here and checked by the rule strategies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    document_type: Option<ReceiverDocumentType>,
    document_number: Option<DocumentNumber>,
    nrc: Option<Nrc>,
    name: Option<Name>,
    activity_code: Option<ActivityCode>,
    activity_description: Option<Name>,
    address: Option<Address>,
    phone: Option<Phone>,
    email: Option<Email>,
}

impl Receiver {
    pub fn new() -> Self {
        Self::default()
    }

    optional!(copy document_type: ReceiverDocumentType, set_document_type, set_document_type_raw(&str) = ReceiverDocumentType::new, "receiver.document_type");
    optional!(ref document_number: DocumentNumber, set_document_number, set_document_number_raw(&str) = DocumentNumber::new, "receiver.document_number");
    optional!(ref nrc: Nrc, set_nrc, set_nrc_raw(&str) = Nrc::new, "receiver.nrc");
    optional!(ref name: Name, set_name, set_name_raw(&str) = Name::new, "receiver.name");
    optional!(ref activity_code: ActivityCode, set_activity_code, set_activity_code_raw(&str) = ActivityCode::new, "receiver.activity_code");
    optional!(ref activity_description: Name, set_activity_description, set_activity_description_raw(&str) = Name::new, "receiver.activity_description");
    optional!(ref phone: Phone, set_phone, set_phone_raw(&str) = Phone::new, "receiver.phone");
    optional!(ref email: Email, set_email, set_email_raw(&str) = Email::new, "receiver.email");

    /// Set the identity document type and number together.
    pub fn set_identity_raw(&mut self, document_type: &str, number: &str) -> Result<(), FieldError> {
        let document_type =
            ReceiverDocumentType::new(document_type).map_err(|e| e.at("receiver.document_type"))?;
        let number = DocumentNumber::new(number).map_err(|e| e.at("receiver.document_number"))?;
        self.document_type = Some(document_type);
        self.document_number = Some(number);
        Ok(())
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }
}
