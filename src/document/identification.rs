use serde::{Deserialize, Serialize};

use crate::values::{
    AmbientCode, ContingencyType, ControlNumber, Currency, DteType, EmissionDate, EmissionTime,
    GenerationCode, ModelType, OperationType, Reason, Version,
};

/// Identification block: what the document is and when it was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    version: Version,
    ambient: AmbientCode,
    dte_type: DteType,
    control_number: ControlNumber,
    generation_code: GenerationCode,
    model_type: ModelType,
    operation_type: OperationType,
    contingency_type: Option<ContingencyType>,
    contingency_reason: Option<Reason>,
    emission_date: EmissionDate,
    emission_time: EmissionTime,
    currency: Currency,
}

impl Identification {
    /// New identification for a normal, real-time transmission in USD.
    pub fn new(
        version: Version,
        ambient: AmbientCode,
        dte_type: DteType,
        control_number: ControlNumber,
        generation_code: GenerationCode,
        emission_date: EmissionDate,
        emission_time: EmissionTime,
    ) -> Self {
        Self {
            version,
            ambient,
            dte_type,
            control_number,
            generation_code,
            model_type: ModelType::Previous,
            operation_type: OperationType::Normal,
            contingency_type: None,
            contingency_reason: None,
            emission_date,
            emission_time,
            currency: Currency::Usd,
        }
    }

    required!(copy version: Version, set_version, set_version_raw(u8) = Version::new, "identification.version");
    required!(copy ambient: AmbientCode, set_ambient, set_ambient_raw(&str) = AmbientCode::new, "identification.ambient");
    required!(copy dte_type: DteType, set_dte_type, set_dte_type_raw(&str) = DteType::new, "identification.dte_type");
    required!(ref control_number: ControlNumber, set_control_number, set_control_number_raw(&str) = ControlNumber::new, "identification.control_number");
    required!(copy generation_code: GenerationCode, set_generation_code, set_generation_code_raw(&str) = GenerationCode::new, "identification.generation_code");
    required!(copy model_type: ModelType, set_model_type, set_model_type_raw(u8) = ModelType::new, "identification.model_type");
    required!(copy operation_type: OperationType, set_operation_type, set_operation_type_raw(u8) = OperationType::new, "identification.operation_type");
    optional!(copy contingency_type: ContingencyType, set_contingency_type, set_contingency_type_raw(u8) = ContingencyType::new, "identification.contingency_type");
    optional!(ref contingency_reason: Reason, set_contingency_reason, set_contingency_reason_raw(&str) = Reason::new, "identification.contingency_reason");
    required!(copy emission_date: EmissionDate, set_emission_date, set_emission_date_raw(&str) = EmissionDate::new, "identification.emission_date");
    required!(copy emission_time: EmissionTime, set_emission_time, set_emission_time_raw(&str) = EmissionTime::new, "identification.emission_time");
    required!(copy currency: Currency, set_currency, set_currency_raw(&str) = Currency::new, "identification.currency");

    /// Switch to contingency transmission, which implies deferred invoicing.
    pub fn set_contingency(&mut self, contingency_type: ContingencyType, reason: Option<Reason>) {
        self.operation_type = OperationType::Contingency;
        self.model_type = ModelType::Deferred;
        self.contingency_type = Some(contingency_type);
        self.contingency_reason = reason;
    }
}
