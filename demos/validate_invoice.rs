//! Assemble a consumer invoice, validate it, then break it and show the
//! violations in English and Spanish.
//!
//! Run with: `RUST_LOG=dte=debug cargo run --example validate_invoice`

use dte::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn build() -> Result<InvoiceDocument, DteError> {
    let mut doc = InvoiceDocument::new();

    let id = Identification::new(
        Version::new(DteType::Invoice.schema_version())?,
        AmbientCode::Test,
        DteType::Invoice,
        ControlNumber::compose(
            DteType::Invoice,
            &EstablishmentCode::new("0001")?,
            &PointOfSaleCode::new("P001")?,
            ControlSequence::new(1)?,
        ),
        GenerationCode::generate(),
        EmissionDate::new("2024-06-15")?,
        EmissionTime::new("10:30:00")?,
    );
    doc.set_identification(id);

    doc.set_issuer(Issuer::new(
        Nit::new("0614-010190-101-1")?,
        Nrc::new("123456-7")?,
        Name::new("Distribuidora Cuscatlán, S.A. de C.V.")?,
        ActivityCode::new("46900")?,
        Name::new("Venta al por mayor de otros productos")?,
        EstablishmentType::HeadOffice,
        Address::new("06", "14", "Paseo General Escalón 3700")?,
        Phone::new("2222-3333")?,
        Email::new("facturacion@cuscatlan.com.sv")?,
    ));

    let mut receiver = Receiver::new();
    receiver.set_identity_raw("13", "01234567-8")?;
    receiver.set_name_raw(Some("María Hernández"))?;
    doc.set_receiver(receiver);

    let prices = [dec!(3.49), dec!(12.00)];
    for (n, price) in (1u16..).zip(prices) {
        let mut item = Item::new(
            ItemNumber::new(n)?,
            ItemType::Goods,
            Description::new(&format!("Producto {n}"))?,
            Quantity::new(dec!(1))?,
            UnitMeasure::new(59)?,
            Amount::new(price)?,
        );
        item.set_taxes_raw(&["20"])?;
        doc.add_item(InvoiceItem::new(item, SaleAmounts::taxed(Amount::new(price)?)));
    }

    let total: Decimal = prices.iter().sum();
    let mut summary = Summary::new(PaymentCondition::Cash);
    summary.set_sales_totals_raw(Decimal::ZERO, Decimal::ZERO, total, Decimal::ZERO)?;
    summary.set_sub_total_raw(total)?;
    summary.set_total_operation_raw(total)?;
    summary.set_total_to_pay_raw(total)?;
    summary.add_payment(Payment::new(PaymentType::Cash, Amount::for_total(total)?));
    doc.set_summary(InvoiceSummary::new(summary, Amount::ZERO));

    doc.validate()?;
    Ok(doc)
}

fn main() -> Result<(), DteError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dte=info")))
        .init();

    println!("=== Value objects ===");
    match Amount::for_total(dec!(10.005)) {
        Ok(amount) => println!("  accepted {amount}"),
        Err(e) => println!("  {e} [{}]", e.category().http_status()),
    }

    println!("\n=== Valid invoice ===");
    let mut doc = build()?;
    let validator = DteValidator::invoice();
    validator.validate(&doc)?;
    println!("  accepted by {} rules", validator.strategy_names().len());

    println!("\n=== Broken invoice ===");
    let mut summary = doc.summary().cloned().ok_or(StructuralError {
        missing: vec!["summary"],
    })?;
    summary.base_mut().set_total_to_pay_raw(dec!(20.00))?;
    doc.set_summary(summary);
    doc.set_receiver(Receiver::new());

    if let Err(err) = validator.validate(&doc) {
        println!("  status {}", err.category().http_status());
        for violation in err.violations() {
            println!("  [{}] {}", violation.code().key(), violation);
            println!("      {}", violation.render_with(&SpanishCatalog));
        }
    }
    Ok(())
}
