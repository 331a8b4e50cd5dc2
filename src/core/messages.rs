//! Message catalogs.
//!
//! Errors carry only an [`ErrorCode`] and positional parameters. A catalog
//! maps each code to a template with `{0}`, `{1}`, ... placeholders.

use super::error::ErrorCode;

/// Lookup of message templates keyed by error code.
pub trait MessageCatalog: Send + Sync {
    /// Template for `code`, or `None` if the catalog has no entry.
    fn template(&self, code: ErrorCode) -> Option<&str>;
}

/// Render `code` with `params` through `catalog`.
///
/// Falls back to `key: p0, p1, ...` when the catalog lacks a template.
pub fn render<S: AsRef<str>>(catalog: &dyn MessageCatalog, code: ErrorCode, params: &[S]) -> String {
    let Some(template) = catalog.template(code) else {
        let joined: Vec<&str> = params.iter().map(AsRef::as_ref).collect();
        return format!("{}: {}", code.key(), joined.join(", "));
    };

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let slot = &after[..close];
                match slot.parse::<usize>().ok().and_then(|i| params.get(i)) {
                    Some(value) => out.push_str(value.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(slot);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Default English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn template(&self, code: ErrorCode) -> Option<&str> {
        use ErrorCode::*;
        let t = match code {
            InvalidFormat => "{0}: '{1}' has an invalid format (expected {2})",
            InvalidLength => "{0}: '{1}' has an invalid length (expected {2})",
            OutOfRange => "{0}: {1} is out of range (expected {2})",
            InvalidDecimalPrecision => "{0}: {1} does not resolve to whole cents (expected {2})",
            InvalidAmount => "{0}: invalid amount {1} (expected {2})",
            InvalidQuantity => "{0}: invalid quantity {1} (expected {2})",
            InvalidDiscount => "{0}: invalid discount {1} (expected {2})",
            InvalidNit => "{0}: invalid NIT '{1}' (expected {2})",
            InvalidNrc => "{0}: invalid NRC '{1}' (expected {2})",
            InvalidDui => "{0}: invalid DUI '{1}' (expected {2})",
            InvalidDocumentNumber => "{0}: invalid document number '{1}' (expected {2})",
            InvalidControlNumber => "{0}: invalid control number '{1}' (expected {2})",
            InvalidGenerationCode => "{0}: invalid generation code '{1}' (expected {2})",
            InvalidDepartment => "{0}: invalid department '{1}' (expected {2})",
            InvalidMunicipality => "{0}: invalid municipality '{1}' (expected {2})",
            InvalidCatalogCode => "{0}: '{1}' is not a valid code (expected {2})",
            InvalidDate => "{0}: invalid date '{1}' (expected {2})",
            InvalidTime => "{0}: invalid time '{1}' (expected {2})",
            InvalidEmail => "{0}: invalid email '{1}' (expected {2})",
            InvalidPhone => "{0}: invalid phone '{1}' (expected {2})",
            MissingEntity => "document is missing required entities: {0}",
            RequiredField => "{0} is required",
            FieldNotAllowed => "{0} is not allowed when {1}",
            MutuallyExclusiveFields => "{0} and {1} are mutually exclusive",
            ExceededLimit => "{0} exceeds the limit of {1} entries (got {2})",
            OutOfBounds => "{0}: {1} is out of bounds (expected {2})",
            ReceiverDocumentMismatch => {
                "receiver document number '{0}' does not match document type {1} (expected {2})"
            }
            ContingencyTypeRequired => "contingency transmission requires a contingency type (1-5)",
            ContingencyReasonRequired => "contingency type {0} requires a contingency reason",
            ContingencyNotAllowed => "normal transmission must not declare a contingency {0}",
            ReceiverNrcRequired => "document type {0} requires the receiver to carry an NRC",
            ExtensionRequired => {
                "total operation {0} reaches {1}; an extension block is required"
            }
            DuplicateItemNumber => "item number {0} appears more than once",
            ModelTypeMismatch => "operation type {0} requires model type {1}, got {2}",
            CashPaymentOnCredit => "payments[{0}] uses cash code {1} under credit condition",
            CreditTermRequired => "payments[{0}] on credit requires both term and period",
            PaymentTotalMismatch => "sum of payments {0} does not match total to pay {1}",
            MixedDocumentTypes => "related documents mix document types: {0}",
            FutureDate => "{0} {1} is in the future",
            FutureTime => "{0} {1} is in the future",
            InvalidRelatedDocumentNumber => "related_documents[{0}]: number '{1}' must be {2}",
            UnknownTaxCode => "{0}: tax code '{1}' is not in the tax catalog",
            ThirdPartyMixedItems => {
                "third-party sale requires every item to reference a related document; item {0} does not"
            }
            ControlNumberMismatch => "control number {0} does not belong to document type {1}",
            TotalMismatch => "{0} is {1} but expected {2}",
            MixedSaleCategories => "item {0} mixes sale categories: {1}",
            SaleCategoryRequired => "item {0} must populate exactly one sale category",
            NonTaxedItemInvalid => "item {0}: non-taxed items require unit price 0 and no taxes",
            UnknownRelatedDocument => {
                "item {0} references '{1}', which is not a listed related document"
            }
            RelatedDocumentTypeNotAllowed => {
                "related_documents[{0}]: type {1} is not allowed (expected {2})"
            }
            RetentionAmountMismatch => "item {0}: retained IVA {1} does not match expected {2}",
            ReplacementSameAsOriginal => {
                "replacement generation code {0} must differ from the invalidated document"
            }
            Internal => "internal error: {0}",
        };
        Some(t)
    }
}

/// Spanish messages, the tax authority's working language.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishCatalog;

impl MessageCatalog for SpanishCatalog {
    fn template(&self, code: ErrorCode) -> Option<&str> {
        use ErrorCode::*;
        let t = match code {
            InvalidFormat => "{0}: '{1}' tiene un formato inválido (se esperaba {2})",
            InvalidLength => "{0}: '{1}' tiene una longitud inválida (se esperaba {2})",
            OutOfRange => "{0}: {1} está fuera de rango (se esperaba {2})",
            InvalidDecimalPrecision => "{0}: {1} no se expresa en centavos exactos (se esperaba {2})",
            InvalidAmount => "{0}: monto inválido {1} (se esperaba {2})",
            InvalidQuantity => "{0}: cantidad inválida {1} (se esperaba {2})",
            InvalidDiscount => "{0}: descuento inválido {1} (se esperaba {2})",
            InvalidNit => "{0}: NIT inválido '{1}' (se esperaba {2})",
            InvalidNrc => "{0}: NRC inválido '{1}' (se esperaba {2})",
            InvalidDui => "{0}: DUI inválido '{1}' (se esperaba {2})",
            InvalidDocumentNumber => "{0}: número de documento inválido '{1}' (se esperaba {2})",
            InvalidControlNumber => "{0}: número de control inválido '{1}' (se esperaba {2})",
            InvalidGenerationCode => "{0}: código de generación inválido '{1}' (se esperaba {2})",
            InvalidDepartment => "{0}: departamento inválido '{1}' (se esperaba {2})",
            InvalidMunicipality => "{0}: municipio inválido '{1}' (se esperaba {2})",
            InvalidCatalogCode => "{0}: '{1}' no es un código válido (se esperaba {2})",
            InvalidDate => "{0}: fecha inválida '{1}' (se esperaba {2})",
            InvalidTime => "{0}: hora inválida '{1}' (se esperaba {2})",
            InvalidEmail => "{0}: correo inválido '{1}' (se esperaba {2})",
            InvalidPhone => "{0}: teléfono inválido '{1}' (se esperaba {2})",
            MissingEntity => "al documento le faltan entidades requeridas: {0}",
            RequiredField => "{0} es requerido",
            FieldNotAllowed => "{0} no se permite cuando {1}",
            MutuallyExclusiveFields => "{0} y {1} son mutuamente excluyentes",
            ExceededLimit => "{0} excede el límite de {1} registros (se recibieron {2})",
            OutOfBounds => "{0}: {1} está fuera de los límites (se esperaba {2})",
            ReceiverDocumentMismatch => {
                "el número de documento del receptor '{0}' no corresponde al tipo {1} (se esperaba {2})"
            }
            ContingencyTypeRequired => "la transmisión por contingencia requiere un tipo de contingencia (1-5)",
            ContingencyReasonRequired => "el tipo de contingencia {0} requiere un motivo",
            ContingencyNotAllowed => "la transmisión normal no debe declarar {0} de contingencia",
            ReceiverNrcRequired => "el tipo de documento {0} requiere el NRC del receptor",
            ExtensionRequired => "el total de la operación {0} alcanza {1}; se requiere el bloque de extensión",
            DuplicateItemNumber => "el número de ítem {0} se repite",
            ModelTypeMismatch => "el tipo de operación {0} requiere el modelo {1}, se recibió {2}",
            CashPaymentOnCredit => "pagos[{0}] usa el código de efectivo {1} en condición de crédito",
            CreditTermRequired => "pagos[{0}] a crédito requiere plazo y período",
            PaymentTotalMismatch => "la suma de pagos {0} no coincide con el total a pagar {1}",
            MixedDocumentTypes => "los documentos relacionados mezclan tipos: {0}",
            FutureDate => "{0} {1} está en el futuro",
            FutureTime => "{0} {1} está en el futuro",
            InvalidRelatedDocumentNumber => "documentos_relacionados[{0}]: el número '{1}' debe ser {2}",
            UnknownTaxCode => "{0}: el tributo '{1}' no existe en el catálogo",
            ThirdPartyMixedItems => {
                "la venta a cuenta de terceros requiere documento relacionado en cada ítem; el ítem {0} no lo tiene"
            }
            ControlNumberMismatch => "el número de control {0} no corresponde al tipo de documento {1}",
            TotalMismatch => "{0} es {1} pero se esperaba {2}",
            MixedSaleCategories => "el ítem {0} mezcla tipos de venta: {1}",
            SaleCategoryRequired => "el ítem {0} debe indicar exactamente un tipo de venta",
            NonTaxedItemInvalid => "ítem {0}: los ítems no gravados requieren precio 0 y sin tributos",
            UnknownRelatedDocument => "el ítem {0} referencia '{1}', que no es un documento relacionado",
            RelatedDocumentTypeNotAllowed => {
                "documentos_relacionados[{0}]: el tipo {1} no se permite (se esperaba {2})"
            }
            RetentionAmountMismatch => "ítem {0}: el IVA retenido {1} no coincide con {2}",
            ReplacementSameAsOriginal => {
                "el código de generación de reemplazo {0} debe ser distinto al del documento invalidado"
            }
            Internal => "error interno: {0}",
        };
        Some(t)
    }
}
