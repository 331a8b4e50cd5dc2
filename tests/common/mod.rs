//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use dte::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const GENERATION_CODE: &str = "5B1E7C2A-9F4D-4E3B-8A61-2C7D9E0F1A2B";
pub const OTHER_GENERATION_CODE: &str = "0D3C8F1B-2A4E-4B6D-9C7F-1E2A3B4C5D6E";
pub const RELATED_CODE: &str = "9A8B7C6D-5E4F-4A3B-8C2D-1E0F9A8B7C6D";

/// 2024-06-15 12:00:00, local time of the tax authority.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn clock() -> FixedClock {
    FixedClock(now())
}

// ── Parties ──────────────────────────────────────────────────────────────────

pub fn address() -> Address {
    Address::new("06", "14", "Colonia Escalón, Paseo General Escalón 3700").unwrap()
}

pub fn issuer() -> Issuer {
    let mut issuer = Issuer::new(
        Nit::new("0614-010190-101-1").unwrap(),
        Nrc::new("123456-7").unwrap(),
        Name::new("Distribuidora Cuscatlán, S.A. de C.V.").unwrap(),
        ActivityCode::new("46900").unwrap(),
        Name::new("Venta al por mayor de otros productos").unwrap(),
        EstablishmentType::HeadOffice,
        address(),
        Phone::new("2222-3333").unwrap(),
        Email::new("facturacion@cuscatlan.com.sv").unwrap(),
    );
    issuer.set_establishment_code_raw(Some("0001")).unwrap();
    issuer.set_point_of_sale_code_raw(Some("P001")).unwrap();
    issuer
}

/// Consumer identified by DUI, without NRC.
pub fn consumer() -> Receiver {
    let mut receiver = Receiver::new();
    receiver.set_identity_raw("13", "01234567-8").unwrap();
    receiver.set_name_raw(Some("María Hernández")).unwrap();
    receiver.set_email_raw(Some("maria@example.com")).unwrap();
    receiver
}

/// Taxpayer identified by NIT and NRC.
pub fn taxpayer() -> Receiver {
    let mut receiver = Receiver::new();
    receiver.set_identity_raw("36", "06142505901018").unwrap();
    receiver.set_nrc_raw(Some("765432")).unwrap();
    receiver.set_name_raw(Some("Ferretería La Palma, S.A. de C.V.")).unwrap();
    receiver.set_activity_code_raw(Some("47521")).unwrap();
    receiver.set_address(Some(address()));
    receiver
}

// ── Identification ───────────────────────────────────────────────────────────

pub fn identification(dte_type: DteType) -> Identification {
    Identification::new(
        Version::new(dte_type.schema_version()).unwrap(),
        AmbientCode::Test,
        dte_type,
        ControlNumber::new(&format!("DTE-{}-0001P001-000000000000001", dte_type.code())).unwrap(),
        GenerationCode::new(GENERATION_CODE).unwrap(),
        EmissionDate::new("2024-06-15").unwrap(),
        EmissionTime::new("10:30:00").unwrap(),
    )
}

// ── Items and summaries ──────────────────────────────────────────────────────

pub fn item(number: u16, price: Decimal) -> Item {
    let mut item = Item::new(
        ItemNumber::new(number).unwrap(),
        ItemType::Goods,
        Description::new(&format!("Café molido 250g, lote {number}")).unwrap(),
        Quantity::new(dec!(1)).unwrap(),
        UnitMeasure::new(59).unwrap(),
        Amount::new(price).unwrap(),
    );
    item.set_taxes_raw(&["20"]).unwrap();
    item
}

/// Totals for a document whose lines are all taxed sales of `total`, paid in
/// cash in one payment.
pub fn summary(total: Decimal) -> Summary {
    let mut summary = Summary::new(PaymentCondition::Cash);
    summary
        .set_sales_totals_raw(Decimal::ZERO, Decimal::ZERO, total, Decimal::ZERO)
        .unwrap();
    summary.set_sub_total_raw(total).unwrap();
    summary.set_total_operation_raw(total).unwrap();
    summary.set_total_to_pay_raw(total).unwrap();
    summary.add_payment(Payment::new(
        PaymentType::Cash,
        Amount::for_total(total).unwrap(),
    ));
    summary
}

/// Two taxed lines of 3.49, total 6.98, paid in cash.
pub fn invoice() -> InvoiceDocument {
    let mut doc = InvoiceDocument::new();
    doc.set_identification(identification(DteType::Invoice));
    doc.set_issuer(issuer());
    doc.set_receiver(consumer());
    for n in 1..=2 {
        let mut line = InvoiceItem::new(
            item(n, dec!(3.49)),
            SaleAmounts::taxed(Amount::new(dec!(3.49)).unwrap()),
        );
        line.set_iva_item_raw(dec!(0.40)).unwrap();
        doc.add_item(line);
    }
    doc.set_summary(InvoiceSummary::new(
        summary(dec!(6.98)),
        Amount::for_total(dec!(0.80)).unwrap(),
    ));
    doc
}

/// Same lines as [`invoice`], issued to a registered taxpayer.
pub fn ccf() -> CcfDocument {
    let mut doc = CcfDocument::new();
    doc.set_identification(identification(DteType::Ccf));
    doc.set_issuer(issuer());
    doc.set_receiver(taxpayer());
    for n in 1..=2 {
        doc.add_item(CcfItem::new(
            item(n, dec!(3.49)),
            SaleAmounts::taxed(Amount::new(dec!(3.49)).unwrap()),
        ));
    }
    doc.set_summary(CcfSummary::new(summary(dec!(6.98))));
    doc
}

pub fn related_ccf() -> RelatedDocument {
    RelatedDocument::new(
        DteType::Ccf,
        RelatedGenerationType::Electronic,
        DocumentReference::new(RELATED_CODE).unwrap(),
        EmissionDate::new("2024-06-01").unwrap(),
    )
}

/// Credit note adjusting one electronic CCF with a single taxed line.
pub fn credit_note() -> CreditNoteDocument {
    let mut doc = CreditNoteDocument::new();
    doc.set_identification(identification(DteType::CreditNote));
    doc.set_issuer(issuer());
    doc.set_receiver(taxpayer());
    doc.set_related_documents(vec![related_ccf()]);

    let mut base = item(1, dec!(3.49));
    base.set_related_document_raw(Some(RELATED_CODE)).unwrap();
    doc.add_item(CreditNoteItem::new(
        base,
        SaleAmounts::taxed(Amount::new(dec!(3.49)).unwrap()),
    ));
    doc.set_summary(CreditNoteSummary::new(summary(dec!(3.49))));
    doc
}

pub fn retention_item(number: u16, code: RetentionCode, taxed: Decimal, retained: Decimal) -> RetentionItem {
    let mut base = item(number, taxed);
    base.set_taxes(Vec::new());
    RetentionItem::new(
        base,
        code,
        Amount::for_total(taxed).unwrap(),
        Amount::for_total(retained).unwrap(),
        RelatedGenerationType::Electronic,
        DocumentReference::new(RELATED_CODE).unwrap(),
        EmissionDate::new("2024-06-10").unwrap(),
    )
}

/// Two 1% retentions: 1.00 on 100.00 and 2.50 on 250.00.
pub fn retention() -> RetentionDocument {
    let mut doc = RetentionDocument::new();
    doc.set_identification(identification(DteType::Retention));
    doc.set_issuer(issuer());
    doc.set_receiver(taxpayer());
    doc.set_items(vec![
        retention_item(1, RetentionCode::OnePercent, dec!(100.00), dec!(1.00)),
        retention_item(2, RetentionCode::OnePercent, dec!(250.00), dec!(2.50)),
    ]);
    doc.set_summary(RetentionSummary::new(
        Summary::new(PaymentCondition::Cash),
        Amount::for_total(dec!(350.00)).unwrap(),
        Amount::for_total(dec!(3.50)).unwrap(),
    ));
    doc
}

pub fn responsible() -> ResponsibleParty {
    ResponsibleParty::new(
        Name::new("Carlos Méndez").unwrap(),
        ReceiverDocumentType::Dui,
        DocumentNumber::new("04567891-2").unwrap(),
    )
}

/// Voids yesterday's invoice because of a data error, naming its replacement.
pub fn invalidation() -> InvalidationDocument {
    let mut doc = InvalidationDocument::new();
    doc.set_identification(InvalidationIdentification::new(
        Version::new(2).unwrap(),
        AmbientCode::Test,
        GenerationCode::new(OTHER_GENERATION_CODE).unwrap(),
        EmissionDate::new("2024-06-15").unwrap(),
        EmissionTime::new("11:00:00").unwrap(),
    ));
    doc.set_issuer(issuer());

    let mut voided = InvalidatedDocument::new(
        DteType::Invoice,
        GenerationCode::new(GENERATION_CODE).unwrap(),
        ControlNumber::new("DTE-01-0001P001-000000000000001").unwrap(),
        EmissionDate::new("2024-06-14").unwrap(),
    );
    voided.set_replacement_code_raw(Some(RELATED_CODE)).unwrap();
    doc.set_invalidated_document(voided);
    doc.set_invalidation_reason(InvalidationReason::new(
        InvalidationType::DataError,
        responsible(),
        responsible(),
    ));
    doc
}

// ── Validators ───────────────────────────────────────────────────────────────

pub fn invoice_validator() -> DteValidator<InvoiceDocument> {
    DteValidator::invoice().with_clock(clock())
}

pub fn ccf_validator() -> DteValidator<CcfDocument> {
    DteValidator::ccf().with_clock(clock())
}

pub fn credit_note_validator() -> DteValidator<CreditNoteDocument> {
    DteValidator::credit_note().with_clock(clock())
}

pub fn retention_validator() -> DteValidator<RetentionDocument> {
    DteValidator::retention().with_clock(clock())
}

pub fn invalidation_validator() -> DteValidator<InvalidationDocument> {
    DteValidator::invalidation().with_clock(clock())
}
