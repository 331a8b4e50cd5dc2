use super::{RuleContext, Strategy};
use crate::core::{ErrorCode, RuleError};
use crate::document::{HasIdentification, HasIssuer, HasItems, HasReceiver, Receiver};
use crate::values::{DteType, Dui, Nit, ReceiverDocumentType};

/// Required blocks are present and the receiver's identity document number
/// has the shape its declared type demands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFieldsStrategy;

impl<D> Strategy<D> for BasicFieldsStrategy
where
    D: HasIdentification + HasIssuer + HasReceiver + HasItems,
{
    fn name(&self) -> &'static str {
        "basic_fields"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let mut errors = Vec::new();
        let required = [
            ("identification", doc.identification().is_none()),
            ("issuer", doc.issuer().is_none()),
            ("items", doc.items().is_empty()),
            ("receiver", doc.receiver().is_none()),
        ];
        for (name, _) in required.iter().filter(|(_, absent)| *absent) {
            errors.push(RuleError::new(ErrorCode::RequiredField, [*name]));
        }
        if let Some(err) = doc.receiver().and_then(check_receiver_document) {
            errors.push(err);
        }
        RuleError::collect(errors)
    }
}

fn check_receiver_document(receiver: &Receiver) -> Option<RuleError> {
    match (receiver.document_type(), receiver.document_number()) {
        (None, None) => None,
        (Some(_), None) => Some(RuleError::new(
            ErrorCode::RequiredField,
            ["receiver.document_number"],
        )),
        (None, Some(_)) => Some(RuleError::new(
            ErrorCode::RequiredField,
            ["receiver.document_type"],
        )),
        (Some(kind), Some(number)) => {
            let (valid, expected) = match kind {
                ReceiverDocumentType::Nit => (Nit::new(number.value()).is_ok(), "14 or 9 digits"),
                ReceiverDocumentType::Dui => (Dui::matches(number.value()), "########-#"),
                _ => (true, ""),
            };
            (!valid).then(|| {
                RuleError::new(
                    ErrorCode::ReceiverDocumentMismatch,
                    [number.value(), kind.code(), expected],
                )
            })
        }
    }
}

/// Fiscal-credit vouchers need a receiver registered for IVA.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTypeStrategy;

impl<D> Strategy<D> for DocumentTypeStrategy
where
    D: HasIdentification + HasReceiver,
{
    fn name(&self) -> &'static str {
        "document_type"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let dte_type = doc.identification()?.dte_type();
        let receiver = doc.receiver()?;
        (dte_type == DteType::Ccf && receiver.nrc().is_none())
            .then(|| RuleError::new(ErrorCode::ReceiverNrcRequired, [dte_type.code()]))
    }
}

/// The control number encodes the same document type as the identification.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlNumberStrategy;

impl<D> Strategy<D> for ControlNumberStrategy
where
    D: HasIdentification,
{
    fn name(&self) -> &'static str {
        "control_number"
    }

    fn validate(&self, doc: &D, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        let id = doc.identification()?;
        let control_number = id.control_number();
        (control_number.type_segment() != id.dte_type().code()).then(|| {
            RuleError::new(
                ErrorCode::ControlNumberMismatch,
                [control_number.value(), id.dte_type().code()],
            )
        })
    }
}
