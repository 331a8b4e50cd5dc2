use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dte::*;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn issuer() -> Issuer {
    Issuer::new(
        Nit::new("0614-010190-101-1").unwrap(),
        Nrc::new("123456-7").unwrap(),
        Name::new("Distribuidora Cuscatlán, S.A. de C.V.").unwrap(),
        ActivityCode::new("46900").unwrap(),
        Name::new("Venta al por mayor de otros productos").unwrap(),
        EstablishmentType::HeadOffice,
        Address::new("06", "14", "Paseo General Escalón 3700").unwrap(),
        Phone::new("2222-3333").unwrap(),
        Email::new("facturacion@cuscatlan.com.sv").unwrap(),
    )
}

fn build_invoice(lines: u16) -> InvoiceDocument {
    let price = dec!(0.49);
    let mut doc = InvoiceDocument::new();
    doc.set_identification(Identification::new(
        Version::new(1).unwrap(),
        AmbientCode::Test,
        DteType::Invoice,
        ControlNumber::new("DTE-01-0001P001-000000000000001").unwrap(),
        GenerationCode::new("5B1E7C2A-9F4D-4E3B-8A61-2C7D9E0F1A2B").unwrap(),
        EmissionDate::new("2024-06-15").unwrap(),
        EmissionTime::new("10:30:00").unwrap(),
    ));
    doc.set_issuer(issuer());

    let mut receiver = Receiver::new();
    receiver.set_identity_raw("13", "01234567-8").unwrap();
    doc.set_receiver(receiver);

    for n in 1..=lines {
        let mut item = Item::new(
            ItemNumber::new(n).unwrap(),
            ItemType::Goods,
            Description::new(&format!("Item {n}")).unwrap(),
            Quantity::new(dec!(1)).unwrap(),
            UnitMeasure::new(59).unwrap(),
            Amount::new(price).unwrap(),
        );
        item.set_taxes_raw(&["20"]).unwrap();
        doc.add_item(InvoiceItem::new(
            item,
            SaleAmounts::taxed(Amount::new(price).unwrap()),
        ));
    }

    let total = price * Decimal::from(lines);
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
    doc.set_summary(InvoiceSummary::new(summary, Amount::ZERO));
    doc
}

fn bench_value_objects(c: &mut Criterion) {
    c.bench_function("control_number_parse", |b| {
        b.iter(|| black_box(ControlNumber::new(black_box("DTE-01-0001P001-000000000000001"))));
    });
    c.bench_function("amount_for_total", |b| {
        b.iter(|| black_box(Amount::for_total(black_box(dec!(1234.56)))));
    });
}

fn bench_structural(c: &mut Criterion) {
    let doc = build_invoice(10);
    c.bench_function("structural_validate", |b| {
        b.iter(|| black_box(black_box(&doc).validate()));
    });
}

fn bench_rules_10_lines(c: &mut Criterion) {
    let doc = build_invoice(10);
    let validator = DteValidator::invoice().with_clock(clock());
    c.bench_function("rules_invoice_10_lines", |b| {
        b.iter(|| black_box(validator.validate(black_box(&doc))));
    });
}

fn bench_rules_2000_lines(c: &mut Criterion) {
    let doc = build_invoice(2000);
    let validator = DteValidator::invoice().with_clock(clock());
    c.bench_function("rules_invoice_2000_lines", |b| {
        b.iter(|| black_box(validator.validate(black_box(&doc))));
    });
}

fn bench_rejection(c: &mut Criterion) {
    let mut doc = build_invoice(10);
    doc.set_receiver(Receiver::new());
    let validator = DteValidator::invoice()
        .with_clock(clock())
        .with_config(RuleConfig {
            max_items: 5,
            ..RuleConfig::default()
        });
    c.bench_function("rules_rejection_render", |b| {
        b.iter(|| {
            let err = validator.validate(black_box(&doc)).unwrap_err();
            black_box(err.render_with(&SpanishCatalog))
        });
    });
}

criterion_group!(
    benches,
    bench_value_objects,
    bench_structural,
    bench_rules_10_lines,
    bench_rules_2000_lines,
    bench_rejection,
);
criterion_main!(benches);
