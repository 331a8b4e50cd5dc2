//! Closed code catalogs of the DTE schema.

string_code! {
    /// CAT-002: document type.
    DteType, field = "dte_type", error = InvalidCatalogCode {
        /// 01: Factura (consumer invoice).
        Invoice = "01",
        /// 03: Comprobante de Crédito Fiscal.
        Ccf = "03",
        /// 04: Nota de Remisión.
        ShippingNote = "04",
        /// 05: Nota de Crédito.
        CreditNote = "05",
        /// 06: Nota de Débito.
        DebitNote = "06",
        /// 07: Comprobante de Retención.
        Retention = "07",
        /// 08: Comprobante de Liquidación.
        Liquidation = "08",
        /// 09: Documento Contable de Liquidación.
        AccountingLiquidation = "09",
        /// 11: Factura de Exportación.
        ExportInvoice = "11",
        /// 14: Factura de Sujeto Excluido.
        ExcludedSubjectInvoice = "14",
        /// 15: Comprobante de Donación.
        Donation = "15",
    }
}

impl DteType {
    /// Schema version the authority currently accepts for this type.
    pub fn schema_version(&self) -> u8 {
        match self {
            Self::Invoice
            | Self::Retention
            | Self::Liquidation
            | Self::AccountingLiquidation
            | Self::ExportInvoice
            | Self::ExcludedSubjectInvoice
            | Self::Donation => 1,
            Self::Ccf | Self::ShippingNote | Self::CreditNote | Self::DebitNote => 3,
        }
    }
}

numeric_code! {
    /// Transmission model.
    ModelType, field = "model_type", error = InvalidCatalogCode {
        /// 1: previous invoicing (real-time transmission).
        Previous = 1,
        /// 2: deferred invoicing (contingency).
        Deferred = 2,
    }
}

numeric_code! {
    /// Operation (transmission) type.
    OperationType, field = "operation_type", error = InvalidCatalogCode {
        /// 1: normal transmission.
        Normal = 1,
        /// 2: transmission in contingency.
        Contingency = 2,
    }
}

numeric_code! {
    /// CAT-005: contingency reason.
    ContingencyType, field = "contingency_type", error = InvalidCatalogCode {
        /// 1: tax authority system unavailable.
        AuthorityUnavailable = 1,
        /// 2: issuer system unavailable.
        IssuerUnavailable = 2,
        /// 3: issuer internet outage.
        InternetOutage = 3,
        /// 4: issuer power outage.
        PowerOutage = 4,
        /// 5: other reason (requires a description).
        Other = 5,
    }
}

string_code! {
    /// CAT-009: establishment type.
    EstablishmentType, field = "establishment_type", error = InvalidCatalogCode {
        Branch = "01",
        HeadOffice = "02",
        Warehouse = "04",
        Yard = "07",
        Other = "20",
    }
}

string_code! {
    /// CAT-017: payment method.
    PaymentType, field = "payment_type", error = InvalidCatalogCode {
        /// 01: bills and coins.
        Cash = "01",
        DebitCard = "02",
        CreditCard = "03",
        Check = "04",
        Transfer = "05",
        ElectronicMoney = "08",
        ElectronicWallet = "09",
        Bitcoin = "11",
        OtherCrypto = "12",
        AccountsPayable = "13",
        BankDraft = "14",
        Other = "99",
    }
}

string_code! {
    /// CAT-018: payment term unit.
    PaymentTerm, field = "payment_term", error = InvalidCatalogCode {
        Days = "01",
        Months = "02",
        Years = "03",
    }
}

numeric_code! {
    /// CAT-016: operation condition.
    PaymentCondition, field = "operation_condition", error = InvalidCatalogCode {
        Cash = 1,
        Credit = 2,
        Other = 3,
    }
}

string_code! {
    /// CAT-022: receiver identity document type.
    ReceiverDocumentType, field = "receiver.document_type", error = InvalidCatalogCode {
        Nit = "36",
        Dui = "13",
        Other = "37",
        Passport = "03",
        ResidenceCard = "02",
    }
}

numeric_code! {
    /// CAT-011: item type.
    ItemType, field = "item_type", error = InvalidCatalogCode {
        Goods = 1,
        Services = 2,
        GoodsAndServices = 3,
        OtherTaxes = 4,
    }
}

string_code! {
    /// CAT-001: environment.
    AmbientCode, field = "ambient", error = InvalidCatalogCode {
        Test = "00",
        Production = "01",
    }
}

string_code! {
    /// Transaction currency. Only US dollars are accepted.
    Currency, field = "currency", error = InvalidCatalogCode {
        Usd = "USD",
    }
}

numeric_code! {
    /// CAT-007: how a related document was generated.
    RelatedGenerationType, field = "related_document.generation_type", error = InvalidCatalogCode {
        /// 1: pre-printed physical document.
        Physical = 1,
        /// 2: electronic DTE, referenced by its generation code.
        Electronic = 2,
    }
}

numeric_code! {
    /// CAT-021: associated-document code for other documents.
    AssociatedDocumentCode, field = "other_document.code", error = InvalidCatalogCode {
        Issuer = 1,
        Receiver = 2,
        Medical = 3,
        Transport = 4,
    }
}

numeric_code! {
    /// CAT-010: medical service type.
    ServiceType, field = "doctor.service_type", error = InvalidCatalogCode {
        Surgery = 1,
        Operation = 2,
        MedicalTreatment = 3,
        SocialSecurityInstitute = 4,
        Diagnostic = 5,
        Other = 6,
    }
}

numeric_code! {
    /// CAT-024: invalidation type.
    InvalidationType, field = "invalidation.type", error = InvalidCatalogCode {
        /// 1: error in the document data; a replacement is issued.
        DataError = 1,
        /// 2: the operation is rescinded; no replacement.
        Rescinded = 2,
        /// 3: other reason; a replacement is issued.
        Other = 3,
    }
}

impl InvalidationType {
    /// Whether a replacement document must be referenced.
    pub fn requires_replacement(&self) -> bool {
        matches!(self, Self::DataError | Self::Other)
    }
}

string_code! {
    /// CAT-006: IVA retention code.
    RetentionCode, field = "retention_code", error = InvalidCatalogCode {
        /// 22: 1% retention.
        OnePercent = "22",
        /// C4: 13% retention.
        ThirteenPercent = "C4",
        /// C9: other retention rates.
        Other = "C9",
    }
}

impl RetentionCode {
    /// Fixed retention rate in percent, if the code implies one.
    pub fn rate(&self) -> Option<rust_decimal::Decimal> {
        match self {
            Self::OnePercent => Some(rust_decimal_macros::dec!(1)),
            Self::ThirteenPercent => Some(rust_decimal_macros::dec!(13)),
            Self::Other => None,
        }
    }
}

bounded_integer! {
    /// DTE schema version.
    Version(u8), field = "version", range = 1..=3
}

bounded_integer! {
    /// Payment period count (in units of the payment term).
    PaymentPeriod(u16), field = "payment.period", range = 1..=999
}

bounded_integer! {
    /// CAT-014: unit of measure.
    UnitMeasure(u8), field = "unit_measure", range = 1..=99
}

bounded_integer! {
    /// Item line number.
    ItemNumber(u16), field = "item.number", range = 1..=2000
}
