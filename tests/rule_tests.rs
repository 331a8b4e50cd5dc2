//! Business-rule strategies and the validation orchestrator.
//!
//! Run with: `cargo test --test rule_tests`

mod common;

use common::*;
use dte::*;
use rust_decimal_macros::dec;

fn context(config: &RuleConfig) -> RuleContext<'_> {
    RuleContext::new(now(), config)
}

fn codes(err: &RuleError) -> Vec<ErrorCode> {
    err.violations().iter().map(|v| v.code()).collect()
}

// ── Fixtures pass ────────────────────────────────────────────────────────────

#[test]
fn valid_documents_are_accepted() {
    invoice_validator().validate(&invoice()).unwrap();
    ccf_validator().validate(&ccf()).unwrap();
    credit_note_validator().validate(&credit_note()).unwrap();
    retention_validator().validate(&retention()).unwrap();
    invalidation_validator().validate(&invalidation()).unwrap();
}

#[test]
fn strategy_sets_follow_catalog_order() {
    assert_eq!(
        DteValidator::invoice().strategy_names(),
        [
            "basic_fields",
            "contingency",
            "document_type",
            "extension",
            "item",
            "model_type",
            "other_documents",
            "payment_total",
            "related_documents",
            "tax_calculation",
            "temporal",
            "third_party_sale",
            "control_number",
            "summary_totals",
            "appendix",
        ]
    );
    assert_eq!(DteValidator::credit_note().strategy_names().last(), Some(&"credit_note"));
    assert_eq!(DteValidator::retention().strategy_names().last(), Some(&"retention"));
    assert_eq!(
        DteValidator::invalidation().strategy_names(),
        ["temporal", "invalidation_type", "invalidated_document"]
    );
}

// ── Payments ─────────────────────────────────────────────────────────────────

#[test]
fn payment_total_must_match_exactly() {
    let config = RuleConfig::default();
    let doc = invoice();
    assert!(PaymentTotalStrategy.validate(&doc, &context(&config)).is_none());

    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_payments(vec![Payment::new(
        PaymentType::Cash,
        Amount::for_total(dec!(6.99)).unwrap(),
    )]);
    doc.set_summary(summary);

    let err = PaymentTotalStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::PaymentTotalMismatch);
    let message = err.to_string();
    assert!(message.contains("6.99"), "{message}");
    assert!(message.contains("6.98"), "{message}");
}

#[test]
fn split_payments_sum_exactly() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_payments(vec![
        Payment::new(PaymentType::Cash, Amount::for_total(dec!(3.49)).unwrap()),
        Payment::new(PaymentType::CreditCard, Amount::for_total(dec!(3.49)).unwrap()),
    ]);
    doc.set_summary(summary);
    assert!(PaymentTotalStrategy.validate(&doc, &context(&config)).is_none());
}

#[test]
fn credit_condition_rejects_cash_and_missing_terms() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_operation_condition(PaymentCondition::Credit);
    summary.base_mut().set_payments(vec![
        Payment::new(PaymentType::Cash, Amount::for_total(dec!(1.00)).unwrap()),
        Payment::on_credit(
            PaymentType::AccountsPayable,
            Amount::for_total(dec!(5.98)).unwrap(),
            PaymentTerm::Days,
            PaymentPeriod::new(30).unwrap(),
        ),
    ]);
    doc.set_summary(summary);

    let err = PaymentTotalStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(
        codes(&err),
        [ErrorCode::CashPaymentOnCredit, ErrorCode::CreditTermRequired]
    );
}

#[test]
fn cash_condition_forbids_terms() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_payments(vec![Payment::on_credit(
        PaymentType::Transfer,
        Amount::for_total(dec!(6.98)).unwrap(),
        PaymentTerm::Months,
        PaymentPeriod::new(1).unwrap(),
    )]);
    doc.set_summary(summary);

    let err = PaymentTotalStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::FieldNotAllowed);
}

#[test]
fn large_operations_need_an_extension() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_total_operation_raw(dec!(1095.00)).unwrap();
    doc.set_summary(summary);

    let err = ExtensionStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::ExtensionRequired);

    doc.set_extension(Some(Extension::new(
        Name::new("Pedro Ramírez").unwrap(),
        DocumentNumber::new("01234567-8").unwrap(),
        Name::new("María Hernández").unwrap(),
        DocumentNumber::new("04567891-2").unwrap(),
    )));
    assert!(ExtensionStrategy.validate(&doc, &context(&config)).is_none());
}

#[test]
fn summary_totals_follow_items() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut summary = doc.summary().unwrap().clone();
    summary.base_mut().set_total_taxed_raw(dec!(7.00)).unwrap();
    summary.base_mut().set_total_discount_raw(dec!(0.50)).unwrap();
    doc.set_summary(summary);

    let err = SummaryTotalsStrategy.validate(&doc, &context(&config)).unwrap();
    let rendered = err.to_string();
    assert!(rendered.contains("summary.total_taxed is 7.00 but expected 6.98"), "{rendered}");
    assert!(err.contains(ErrorCode::TotalMismatch));
    // total_taxed, sub_total_sales, total_discount and sub_total all disagree
    assert_eq!(err.violations().len(), 4);
}

// ── Receiver and identification ──────────────────────────────────────────────

#[test]
fn ccf_requires_receiver_nrc() {
    let mut doc = ccf();
    let mut receiver = taxpayer();
    receiver.set_nrc(None);
    doc.set_receiver(receiver);

    let err = ccf_validator().validate(&doc).unwrap_err();
    assert_eq!(codes(&err), [ErrorCode::ReceiverNrcRequired]);
    assert_eq!(err.to_string(), "document type 03 requires the receiver to carry an NRC");
}

#[test]
fn receiver_number_must_match_declared_type() {
    let mut doc = invoice();
    let mut receiver = consumer();
    receiver.set_identity_raw("13", "0614-010190").unwrap();
    doc.set_receiver(receiver);

    let err = invoice_validator().validate(&doc).unwrap_err();
    assert_eq!(codes(&err), [ErrorCode::ReceiverDocumentMismatch]);
}

#[test]
fn contingency_requires_type_and_model() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut id = identification(DteType::Invoice);
    id.set_contingency(ContingencyType::Other, None);
    doc.set_identification(id.clone());

    let err = ContingencyStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::ContingencyReasonRequired);
    assert!(ModelTypeStrategy.validate(&doc, &context(&config)).is_none());

    id.set_contingency(
        ContingencyType::Other,
        Some(Reason::new("Corte de energía en la sucursal").unwrap()),
    );
    id.set_model_type(ModelType::Previous);
    doc.set_identification(id);
    assert!(ContingencyStrategy.validate(&doc, &context(&config)).is_none());
    let err = ModelTypeStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.to_string(), "operation type 2 requires model type 2, got 1");
}

#[test]
fn normal_transmission_rejects_contingency_fields() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut id = identification(DteType::Invoice);
    id.set_contingency_type(Some(ContingencyType::PowerOutage));
    doc.set_identification(id);

    let err = ContingencyStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::ContingencyNotAllowed);
}

#[test]
fn control_number_must_encode_document_type() {
    let mut doc = invoice();
    let mut id = identification(DteType::Invoice);
    id.set_control_number_raw("DTE-03-0001P001-000000000000001").unwrap();
    doc.set_identification(id);

    let err = invoice_validator().validate(&doc).unwrap_err();
    assert_eq!(codes(&err), [ErrorCode::ControlNumberMismatch]);
}

#[test]
fn emission_must_not_be_in_the_future() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut id = identification(DteType::Invoice);
    id.set_emission_time_raw("12:00:01").unwrap();
    doc.set_identification(id.clone());
    let err = TemporalStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::FutureTime);

    id.set_emission_date_raw("2024-06-16").unwrap();
    id.set_emission_time_raw("00:00:00").unwrap();
    doc.set_identification(id.clone());
    let err = TemporalStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::FutureDate);

    // a later time on an earlier day is fine
    id.set_emission_date_raw("2024-06-14").unwrap();
    id.set_emission_time_raw("23:59:59").unwrap();
    doc.set_identification(id);
    assert!(TemporalStrategy.validate(&doc, &context(&config)).is_none());
}

// ── Items ────────────────────────────────────────────────────────────────────

#[test]
fn item_numbers_are_unique() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let duplicate = doc.items()[0].clone();
    doc.add_item(duplicate);

    let err = ItemStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.code(), ErrorCode::DuplicateItemNumber);
    assert_eq!(err.to_string(), "item number 1 appears more than once");
}

#[test]
fn unknown_tax_codes_are_rejected() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut items = doc.items().to_vec();
    items[1].base_mut().set_taxes_raw(&["20", "ZZ"]).unwrap();
    items[1].base_mut().set_tax_code_raw(Some("Q1")).unwrap();
    doc.set_items(items);

    let err = TaxCalculationStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.violations().len(), 2);
    assert!(err.to_string().contains("items[1].taxes[1]: tax code 'ZZ'"));
}

#[test]
fn third_party_sale_covers_every_item() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    doc.set_third_party_sale(Some(ThirdPartySale::new(
        Nit::new("06142505901018").unwrap(),
        None,
    )));
    let mut items = doc.items().to_vec();
    items[0].base_mut().set_related_document_raw(Some("FAC-001")).unwrap();
    doc.set_items(items);

    let err = ThirdPartySaleStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(
        codes(&err),
        [ErrorCode::RequiredField, ErrorCode::ThirdPartyMixedItems]
    );
}

// ── Related and other documents ──────────────────────────────────────────────

fn related(kind: DteType, number: &str) -> RelatedDocument {
    RelatedDocument::new(
        kind,
        RelatedGenerationType::Physical,
        DocumentReference::new(number).unwrap(),
        EmissionDate::new("2024-06-01").unwrap(),
    )
}

#[test]
fn related_documents_share_one_type() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut entries: Vec<_> = (0..30).map(|i| related(DteType::Invoice, &format!("F-{i}"))).collect();
    entries.push(related(DteType::Ccf, "C-1"));
    doc.set_related_documents(entries);

    let err = RelatedDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert!(!err.is_composite());
    assert_eq!(err.code(), ErrorCode::MixedDocumentTypes);
    assert_eq!(err.to_string(), "related documents mix document types: 01, 03");
}

#[test]
fn related_documents_beyond_limit_only_report_the_limit() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut entries: Vec<_> = (0..50).map(|i| related(DteType::Invoice, &format!("F-{i}"))).collect();
    entries.push(related(DteType::Ccf, "C-1"));
    doc.set_related_documents(entries);

    let err = RelatedDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(codes(&err), [ErrorCode::ExceededLimit]);
    assert_eq!(err.category().http_status(), 413);
}

#[test]
fn related_document_numbers_follow_generation_type() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut electronic = related(DteType::Invoice, "F-1");
    electronic.set_generation_type(RelatedGenerationType::Electronic);
    let long_physical = related(DteType::Invoice, "FACTURA-2024-000000001");
    let mut future = related(DteType::Invoice, "F-2");
    future.set_emission_date_raw("2024-07-01").unwrap();
    doc.set_related_documents(vec![electronic, long_physical, future]);

    let err = RelatedDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(
        codes(&err),
        [
            ErrorCode::InvalidRelatedDocumentNumber,
            ErrorCode::InvalidRelatedDocumentNumber,
            ErrorCode::FutureDate,
        ]
    );
}

fn doctor() -> Doctor {
    Doctor::new(ShortText::new("Dra. Ana Lucía Flores").unwrap(), ServiceType::Diagnostic)
}

#[test]
fn medical_document_needs_exactly_one_doctor_identifier() {
    let config = RuleConfig::default();
    let mut doc = invoice();

    let mut with_nit = doctor();
    with_nit.set_nit_raw(Some("0614-010190-101-1")).unwrap();
    doc.set_other_documents(vec![OtherDocument::medical(with_nit.clone())]);
    assert!(OtherDocumentsStrategy.validate(&doc, &context(&config)).is_none());

    let mut both = with_nit;
    both.set_identification_raw(Some("01234567-8")).unwrap();
    doc.set_other_documents(vec![OtherDocument::medical(both)]);
    let err = OtherDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(codes(&err), [ErrorCode::MutuallyExclusiveFields]);

    doc.set_other_documents(vec![OtherDocument::medical(doctor())]);
    let err = OtherDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(codes(&err), [ErrorCode::RequiredField]);
}

#[test]
fn medical_document_forbids_description() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut doctor = doctor();
    doctor.set_identification_raw(Some("01234567-8")).unwrap();
    let mut entry = OtherDocument::medical(doctor);
    entry.set_description_raw(Some("Consulta general")).unwrap();
    doc.set_other_documents(vec![entry]);

    let err = OtherDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(codes(&err), [ErrorCode::FieldNotAllowed]);
}

#[test]
fn non_medical_document_needs_description_and_no_doctor() {
    let config = RuleConfig::default();
    let mut doc = invoice();
    let mut entry = OtherDocument::new(AssociatedDocumentCode::Transport);
    entry.set_doctor(Some(doctor()));
    doc.set_other_documents(vec![entry]);

    let err = OtherDocumentsStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(
        codes(&err),
        [
            ErrorCode::RequiredField,
            ErrorCode::RequiredField,
            ErrorCode::FieldNotAllowed,
        ]
    );
}

// ── Orchestrator ─────────────────────────────────────────────────────────────

#[test]
fn composite_error_keeps_catalog_order() {
    let mut doc = invoice();
    let mut id = identification(DteType::Invoice);
    id.set_emission_date_raw("2024-06-20").unwrap();
    doc.set_identification(id);

    let config = RuleConfig {
        max_items: 1,
        ..RuleConfig::default()
    };
    let validator = invoice_validator().with_config(config);
    let err = validator.validate(&doc).unwrap_err();

    assert!(err.is_composite());
    assert_eq!(codes(&err), [ErrorCode::ExceededLimit, ErrorCode::FutureDate]);
    assert_eq!(err.code(), ErrorCode::ExceededLimit);
    assert_eq!(
        err.to_string(),
        "items exceeds the limit of 1 entries (got 2); emission_date 2024-06-20 is in the future"
    );
}

#[test]
fn full_catalog_item_limit_and_temporal() {
    let mut doc = invoice();
    let template = doc.items()[0].clone();
    let mut items = Vec::with_capacity(2001);
    for n in 0..2001u32 {
        let mut line = template.clone();
        // numbers beyond the catalog range cannot be built, so they repeat
        line.base_mut().set_number(ItemNumber::new((n % 2000 + 1) as u16).unwrap());
        items.push(line);
    }
    doc.set_items(items);
    let mut id = identification(DteType::Invoice);
    id.set_emission_date_raw("2024-06-20").unwrap();
    doc.set_identification(id);

    let err = invoice_validator().validate(&doc).unwrap_err();
    let item_pos = err
        .violations()
        .iter()
        .position(|v| v.code() == ErrorCode::ExceededLimit)
        .unwrap();
    let temporal_pos = err
        .violations()
        .iter()
        .position(|v| v.code() == ErrorCode::FutureDate)
        .unwrap();
    assert!(item_pos < temporal_pos);
}

#[test]
fn error_rendering_is_localizable() {
    let mut doc = ccf();
    let mut receiver = taxpayer();
    receiver.set_nrc(None);
    doc.set_receiver(receiver);

    let err = ccf_validator().validate(&doc).unwrap_err();
    let spanish = err.render_with(&SpanishCatalog);
    assert_ne!(spanish, err.to_string());
    assert!(spanish.contains("03"));
}

// ── Credit notes ─────────────────────────────────────────────────────────────

#[test]
fn credit_note_items_reference_listed_documents() {
    let mut doc = credit_note();
    let mut items = doc.items().to_vec();
    items[0].base_mut().set_related_document_raw(Some("NOT-LISTED")).unwrap();
    let mut second = items[0].clone();
    second.base_mut().set_number(ItemNumber::new(2).unwrap());
    second.base_mut().set_related_document(None);
    second.set_sales(SaleAmounts::default());
    items.push(second);
    doc.set_items(items);

    let err = credit_note_validator().validate(&doc).unwrap_err();
    assert!(err.contains(ErrorCode::UnknownRelatedDocument));
    assert!(err.contains(ErrorCode::SaleCategoryRequired));
    assert!(
        err.to_string().contains("items[1].related_document is required"),
        "{err}"
    );
}

#[test]
fn credit_note_items_use_one_sale_category() {
    let config = RuleConfig::default();
    let mut doc = credit_note();
    let mut items = doc.items().to_vec();
    items[0].set_sales(SaleAmounts {
        taxed: Amount::new(dec!(3.00)).unwrap(),
        exempt: Amount::new(dec!(0.49)).unwrap(),
        ..SaleAmounts::default()
    });
    doc.set_items(items);

    let err = CreditNoteStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(err.to_string(), "item 1 mixes sale categories: exempt, taxed");
}

#[test]
fn non_taxed_credit_note_items_are_free_of_price_and_taxes() {
    let config = RuleConfig::default();
    let mut doc = credit_note();
    let mut items = doc.items().to_vec();
    items[0].set_sales(SaleAmounts::non_taxed(Amount::new(dec!(3.49)).unwrap()));
    doc.set_items(items.clone());

    let err = CreditNoteStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(codes(&err), [ErrorCode::NonTaxedItemInvalid]);

    items[0].base_mut().set_unit_price(Amount::ZERO);
    items[0].base_mut().set_taxes(Vec::new());
    doc.set_items(items);
    assert!(CreditNoteStrategy.validate(&doc, &context(&config)).is_none());
}

#[test]
fn credit_note_adjusts_only_ccf_or_retention() {
    let config = RuleConfig::default();
    let mut doc = credit_note();
    let mut invoice_ref = related_ccf();
    invoice_ref.set_document_type(DteType::Invoice);
    doc.set_related_documents(vec![invoice_ref]);

    let err = CreditNoteStrategy.validate(&doc, &context(&config)).unwrap();
    assert_eq!(
        err.to_string(),
        "related_documents[0]: type 01 is not allowed (expected 03 or 07)"
    );

    doc.set_related_documents(Vec::new());
    let err = CreditNoteStrategy.validate(&doc, &context(&config)).unwrap();
    assert!(err.contains(ErrorCode::RequiredField));
}

// ── Retention ────────────────────────────────────────────────────────────────

#[test]
fn retained_iva_follows_rate() {
    let mut doc = retention();
    let mut items = doc.items().to_vec();
    items[1].set_iva_retained_raw(dec!(2.60)).unwrap();
    doc.set_items(items);

    let err = retention_validator().validate(&doc).unwrap_err();
    assert_eq!(
        codes(&err),
        [ErrorCode::RetentionAmountMismatch, ErrorCode::TotalMismatch]
    );
    assert!(err.to_string().starts_with("item 2: retained IVA 2.60 does not match expected 2.5"));
}

#[test]
fn thirteen_percent_rounds_half_up() {
    let config = RuleConfig::default();
    let mut doc = retention();
    doc.set_items(vec![retention_item(
        1,
        RetentionCode::ThirteenPercent,
        dec!(10.50),
        dec!(1.37),
    )]);
    let mut summary = doc.summary().unwrap().clone();
    summary.set_total_taxed_subject_raw(dec!(10.50)).unwrap();
    summary.set_total_iva_retained_raw(dec!(1.37)).unwrap();
    doc.set_summary(summary);

    // 10.50 × 13% = 1.365
    assert!(RetentionStrategy.validate(&doc, &context(&config)).is_none());
}

#[test]
fn retention_receiver_needs_nit_and_nrc() {
    let mut doc = retention();
    doc.set_receiver(consumer());
    let err = retention_validator().validate(&doc).unwrap_err();
    assert_eq!(codes(&err), [ErrorCode::RequiredField, ErrorCode::RequiredField]);
}

// ── Invalidation ─────────────────────────────────────────────────────────────

#[test]
fn invalidation_replacement_rules() {
    let mut doc = invalidation();
    let mut voided = doc.invalidated_document().unwrap().clone();
    voided.set_replacement_code(Some(voided.generation_code()));
    doc.set_invalidated_document(voided.clone());
    let err = invalidation_validator().validate(&doc).unwrap_err();
    assert_eq!(codes(&err), [ErrorCode::ReplacementSameAsOriginal]);

    voided.set_replacement_code(None);
    doc.set_invalidated_document(voided.clone());
    let err = invalidation_validator().validate(&doc).unwrap_err();
    assert_eq!(err.to_string(), "invalidated_document.replacement_code is required");

    let mut reason = doc.invalidation_reason().unwrap().clone();
    reason.set_invalidation_type(InvalidationType::Rescinded);
    doc.set_invalidation_reason(reason);
    invalidation_validator().validate(&doc).unwrap();
}

#[test]
fn invalidation_of_other_type_needs_reason() {
    let mut doc = invalidation();
    let mut reason = doc.invalidation_reason().unwrap().clone();
    reason.set_invalidation_type(InvalidationType::Other);
    doc.set_invalidation_reason(reason.clone());
    let err = invalidation_validator().validate(&doc).unwrap_err();
    assert_eq!(err.to_string(), "invalidation_reason.reason is required");

    reason.set_reason_raw(Some("Cliente solicitó anulación")).unwrap();
    doc.set_invalidation_reason(reason);
    invalidation_validator().validate(&doc).unwrap();
}

#[test]
fn invalidated_document_is_consistent() {
    let mut doc = invalidation();
    let mut voided = doc.invalidated_document().unwrap().clone();
    voided.set_dte_type(DteType::Ccf);
    voided.set_emission_date_raw("2024-06-16").unwrap();
    doc.set_invalidated_document(voided);

    let err = invalidation_validator().validate(&doc).unwrap_err();
    assert_eq!(
        codes(&err),
        [ErrorCode::FutureDate, ErrorCode::ControlNumberMismatch]
    );
}

// ── Custom validators ────────────────────────────────────────────────────────

struct NoGifts;

impl Strategy<InvoiceDocument> for NoGifts {
    fn name(&self) -> &'static str {
        "no_gifts"
    }

    fn validate(&self, doc: &InvoiceDocument, _ctx: &RuleContext<'_>) -> Option<RuleError> {
        doc.items()
            .iter()
            .any(|line| line.base().unit_price().is_zero())
            .then(|| RuleError::new(ErrorCode::FieldNotAllowed, ["unit_price 0", "invoicing"]))
    }
}

#[test]
fn custom_strategies_run_in_order() {
    let validator = DteValidator::<InvoiceDocument>::new()
        .with_clock(clock())
        .with_strategy(NoGifts)
        .with_strategy(TemporalStrategy);
    assert_eq!(validator.strategy_names(), ["no_gifts", "temporal"]);

    let mut doc = invoice();
    let mut items = doc.items().to_vec();
    items[0].base_mut().set_unit_price(Amount::ZERO);
    doc.set_items(items);
    let err = validator.validate(&doc).unwrap_err();
    assert_eq!(err.to_string(), "unit_price 0 is not allowed when invoicing");
}

#[test]
fn default_rule_set_is_bound_per_document_type() {
    let names = <CcfDocument as ValidateRules>::default_validator().strategy_names();
    assert!(names.contains(&"document_type"));
    let err = InvoiceDocument::new().validate_dte_rules().unwrap_err();
    assert_eq!(err.code(), ErrorCode::RequiredField);
}
