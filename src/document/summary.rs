use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contracts::SummaryCapability;
use crate::core::FieldError;
use crate::values::{
    Amount, BoundedText, Discount, PaymentCondition, PaymentPeriod, PaymentTerm, PaymentType,
    ShortText, TaxType, deserialize_total,
};

/// Amount in words as printed on the document.
pub type AmountInWords = BoundedText<1, 200>;
/// Payment reference (check number, transfer id).
pub type PaymentReference = BoundedText<1, 50>;

/// One payment towards the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    code: PaymentType,
    #[serde(deserialize_with = "deserialize_total")]
    amount: Amount,
    reference: Option<PaymentReference>,
    term: Option<PaymentTerm>,
    period: Option<PaymentPeriod>,
}

impl Payment {
    pub fn new(code: PaymentType, amount: Amount) -> Self {
        Self {
            code,
            amount,
            reference: None,
            term: None,
            period: None,
        }
    }

    /// Payment on credit over `period` units of `term`.
    pub fn on_credit(code: PaymentType, amount: Amount, term: PaymentTerm, period: PaymentPeriod) -> Self {
        Self {
            term: Some(term),
            period: Some(period),
            ..Self::new(code, amount)
        }
    }

    required!(copy code: PaymentType, set_code, set_code_raw(&str) = PaymentType::new, "payment.code");
    required!(copy amount: Amount, set_amount, set_amount_raw(Decimal) = Amount::for_total, "payment.amount");
    optional!(ref reference: PaymentReference, set_reference, set_reference_raw(&str) = PaymentReference::new, "payment.reference");
    optional!(copy term: PaymentTerm, set_term, set_term_raw(&str) = PaymentTerm::new, "payment.term");
    optional!(copy period: PaymentPeriod, set_period, set_period_raw(u16) = PaymentPeriod::new, "payment.period");
}

/// Summary line for one tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    code: TaxType,
    description: ShortText,
    #[serde(deserialize_with = "deserialize_total")]
    value: Amount,
}

impl TaxSummary {
    pub fn new(code: TaxType, description: ShortText, value: Amount) -> Self {
        Self {
            code,
            description,
            value,
        }
    }

    required!(ref code: TaxType, set_code, set_code_raw(&str) = TaxType::new, "summary.taxes.code");
    required!(ref description: ShortText, set_description, set_description_raw(&str) = ShortText::new, "summary.taxes.description");
    required!(copy value: Amount, set_value, set_value_raw(Decimal) = Amount::for_total, "summary.taxes.value");
}

/// Document totals shared by every variant. All amounts are whole cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(deserialize_with = "deserialize_total")]
    total_non_subject: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_exempt: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_taxed: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    sub_total_sales: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    non_subject_discount: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    exempt_discount: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    taxed_discount: Amount,
    discount_percentage: Discount,
    #[serde(deserialize_with = "deserialize_total")]
    total_discount: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    sub_total: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    iva_retention: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    income_retention: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_operation: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_non_taxed: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_to_pay: Amount,
    total_in_words: Option<AmountInWords>,
    operation_condition: PaymentCondition,
    #[serde(default)]
    payments: Vec<Payment>,
    #[serde(default)]
    taxes: Vec<TaxSummary>,
}

impl Summary {
    /// All totals zero, no payments.
    pub fn new(operation_condition: PaymentCondition) -> Self {
        Self {
            total_non_subject: Amount::ZERO,
            total_exempt: Amount::ZERO,
            total_taxed: Amount::ZERO,
            sub_total_sales: Amount::ZERO,
            non_subject_discount: Amount::ZERO,
            exempt_discount: Amount::ZERO,
            taxed_discount: Amount::ZERO,
            discount_percentage: Discount::NONE,
            total_discount: Amount::ZERO,
            sub_total: Amount::ZERO,
            iva_retention: Amount::ZERO,
            income_retention: Amount::ZERO,
            total_operation: Amount::ZERO,
            total_non_taxed: Amount::ZERO,
            total_to_pay: Amount::ZERO,
            total_in_words: None,
            operation_condition,
            payments: Vec::new(),
            taxes: Vec::new(),
        }
    }

    required!(copy total_non_subject: Amount, set_total_non_subject, set_total_non_subject_raw(Decimal) = Amount::for_total, "summary.total_non_subject");
    required!(copy total_exempt: Amount, set_total_exempt, set_total_exempt_raw(Decimal) = Amount::for_total, "summary.total_exempt");
    required!(copy total_taxed: Amount, set_total_taxed, set_total_taxed_raw(Decimal) = Amount::for_total, "summary.total_taxed");
    required!(copy sub_total_sales: Amount, set_sub_total_sales, set_sub_total_sales_raw(Decimal) = Amount::for_total, "summary.sub_total_sales");
    required!(copy non_subject_discount: Amount, set_non_subject_discount, set_non_subject_discount_raw(Decimal) = Amount::for_total, "summary.non_subject_discount");
    required!(copy exempt_discount: Amount, set_exempt_discount, set_exempt_discount_raw(Decimal) = Amount::for_total, "summary.exempt_discount");
    required!(copy taxed_discount: Amount, set_taxed_discount, set_taxed_discount_raw(Decimal) = Amount::for_total, "summary.taxed_discount");
    required!(copy discount_percentage: Discount, set_discount_percentage, set_discount_percentage_raw(Decimal) = Discount::new, "summary.discount_percentage");
    required!(copy total_discount: Amount, set_total_discount, set_total_discount_raw(Decimal) = Amount::for_total, "summary.total_discount");
    required!(copy sub_total: Amount, set_sub_total, set_sub_total_raw(Decimal) = Amount::for_total, "summary.sub_total");
    required!(copy iva_retention: Amount, set_iva_retention, set_iva_retention_raw(Decimal) = Amount::for_total, "summary.iva_retention");
    required!(copy income_retention: Amount, set_income_retention, set_income_retention_raw(Decimal) = Amount::for_total, "summary.income_retention");
    required!(copy total_operation: Amount, set_total_operation, set_total_operation_raw(Decimal) = Amount::for_total, "summary.total_operation");
    required!(copy total_non_taxed: Amount, set_total_non_taxed, set_total_non_taxed_raw(Decimal) = Amount::for_total, "summary.total_non_taxed");
    required!(copy total_to_pay: Amount, set_total_to_pay, set_total_to_pay_raw(Decimal) = Amount::for_total, "summary.total_to_pay");
    optional!(ref total_in_words: AmountInWords, set_total_in_words, set_total_in_words_raw(&str) = AmountInWords::new, "summary.total_in_words");
    required!(copy operation_condition: PaymentCondition, set_operation_condition, set_operation_condition_raw(u8) = PaymentCondition::new, "summary.operation_condition");

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn set_payments(&mut self, payments: Vec<Payment>) {
        self.payments = payments;
    }

    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    pub fn taxes(&self) -> &[TaxSummary] {
        &self.taxes
    }

    pub fn set_taxes(&mut self, taxes: Vec<TaxSummary>) {
        self.taxes = taxes;
    }

    /// Set the four sale-category totals and derive `sub_total_sales`.
    pub fn set_sales_totals_raw(
        &mut self,
        non_subject: Decimal,
        exempt: Decimal,
        taxed: Decimal,
        non_taxed: Decimal,
    ) -> Result<(), FieldError> {
        let non_subject = Amount::for_total(non_subject).map_err(|e| e.at("summary.total_non_subject"))?;
        let exempt = Amount::for_total(exempt).map_err(|e| e.at("summary.total_exempt"))?;
        let taxed = Amount::for_total(taxed).map_err(|e| e.at("summary.total_taxed"))?;
        let non_taxed = Amount::for_total(non_taxed).map_err(|e| e.at("summary.total_non_taxed"))?;
        let sub_total_sales =
            Amount::for_total(non_subject.value() + exempt.value() + taxed.value())
                .map_err(|e| e.at("summary.sub_total_sales"))?;
        self.total_non_subject = non_subject;
        self.total_exempt = exempt;
        self.total_taxed = taxed;
        self.total_non_taxed = non_taxed;
        self.sub_total_sales = sub_total_sales;
        Ok(())
    }
}

impl SummaryCapability for Summary {
    fn base(&self) -> &Summary {
        self
    }

    fn base_mut(&mut self) -> &mut Summary {
        self
    }
}

macro_rules! summary_capability {
    ($($name:ident),+) => {$(
        impl SummaryCapability for $name {
            fn base(&self) -> &Summary {
                &self.summary
            }

            fn base_mut(&mut self) -> &mut Summary {
                &mut self.summary
            }
        }
    )+};
}

/// Consumer invoice totals. IVA is included in the prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    summary: Summary,
    #[serde(deserialize_with = "deserialize_total")]
    total_iva: Amount,
}

impl InvoiceSummary {
    pub fn new(summary: Summary, total_iva: Amount) -> Self {
        Self { summary, total_iva }
    }

    required!(copy total_iva: Amount, set_total_iva, set_total_iva_raw(Decimal) = Amount::for_total, "summary.total_iva");
}

/// Fiscal-credit voucher totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcfSummary {
    summary: Summary,
    #[serde(deserialize_with = "deserialize_total")]
    iva_perception: Amount,
}

impl CcfSummary {
    pub fn new(summary: Summary) -> Self {
        Self {
            summary,
            iva_perception: Amount::ZERO,
        }
    }

    required!(copy iva_perception: Amount, set_iva_perception, set_iva_perception_raw(Decimal) = Amount::for_total, "summary.iva_perception");
}

/// Credit note totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteSummary {
    summary: Summary,
    #[serde(deserialize_with = "deserialize_total")]
    iva_perception: Amount,
}

impl CreditNoteSummary {
    pub fn new(summary: Summary) -> Self {
        Self {
            summary,
            iva_perception: Amount::ZERO,
        }
    }

    required!(copy iva_perception: Amount, set_iva_perception, set_iva_perception_raw(Decimal) = Amount::for_total, "summary.iva_perception");
}

/// Retention receipt totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionSummary {
    summary: Summary,
    #[serde(deserialize_with = "deserialize_total")]
    total_taxed_subject: Amount,
    #[serde(deserialize_with = "deserialize_total")]
    total_iva_retained: Amount,
}

impl RetentionSummary {
    pub fn new(summary: Summary, total_taxed_subject: Amount, total_iva_retained: Amount) -> Self {
        Self {
            summary,
            total_taxed_subject,
            total_iva_retained,
        }
    }

    required!(copy total_taxed_subject: Amount, set_total_taxed_subject, set_total_taxed_subject_raw(Decimal) = Amount::for_total, "summary.total_taxed_subject");
    required!(copy total_iva_retained: Amount, set_total_iva_retained, set_total_iva_retained_raw(Decimal) = Amount::for_total, "summary.total_iva_retained");
}

summary_capability!(InvoiceSummary, CcfSummary, CreditNoteSummary, RetentionSummary);
