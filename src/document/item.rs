use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contracts::{ItemCapability, SaleCapability};
use crate::values::{
    Amount, Description, DocumentReference, EmissionDate, ItemCode, ItemNumber, ItemType, Quantity,
    RelatedGenerationType, RetentionCode, TaxType, UnitMeasure,
};

/// Fields shared by every item line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    number: ItemNumber,
    item_type: ItemType,
    related_document: Option<DocumentReference>,
    code: Option<ItemCode>,
    tax_code: Option<TaxType>,
    description: Description,
    quantity: Quantity,
    unit_measure: UnitMeasure,
    unit_price: Amount,
    discount: Amount,
    #[serde(default)]
    taxes: Vec<TaxType>,
}

impl Item {
    pub fn new(
        number: ItemNumber,
        item_type: ItemType,
        description: Description,
        quantity: Quantity,
        unit_measure: UnitMeasure,
        unit_price: Amount,
    ) -> Self {
        Self {
            number,
            item_type,
            related_document: None,
            code: None,
            tax_code: None,
            description,
            quantity,
            unit_measure,
            unit_price,
            discount: Amount::ZERO,
            taxes: Vec::new(),
        }
    }

    required!(copy number: ItemNumber, set_number, set_number_raw(u16) = ItemNumber::new, "item.number");
    required!(copy item_type: ItemType, set_item_type, set_item_type_raw(u8) = ItemType::new, "item.item_type");
    optional!(ref related_document: DocumentReference, set_related_document, set_related_document_raw(&str) = DocumentReference::new, "item.related_document");
    optional!(ref code: ItemCode, set_code, set_code_raw(&str) = ItemCode::new, "item.code");
    optional!(ref tax_code: TaxType, set_tax_code, set_tax_code_raw(&str) = TaxType::new, "item.tax_code");
    required!(ref description: Description, set_description, set_description_raw(&str) = Description::new, "item.description");
    required!(copy quantity: Quantity, set_quantity, set_quantity_raw(Decimal) = Quantity::new, "item.quantity");
    required!(copy unit_measure: UnitMeasure, set_unit_measure, set_unit_measure_raw(u8) = UnitMeasure::new, "item.unit_measure");
    required!(copy unit_price: Amount, set_unit_price, set_unit_price_raw(Decimal) = Amount::new, "item.unit_price");
    required!(copy discount: Amount, set_discount, set_discount_raw(Decimal) = Amount::new, "item.discount");

    pub fn taxes(&self) -> &[TaxType] {
        &self.taxes
    }

    pub fn set_taxes(&mut self, taxes: Vec<TaxType>) {
        self.taxes = taxes;
    }

    /// Replace the tax list; on any invalid code the list is unchanged.
    pub fn set_taxes_raw(&mut self, codes: &[&str]) -> Result<(), crate::core::FieldError> {
        let taxes = codes
            .iter()
            .enumerate()
            .map(|(i, c)| TaxType::new(c).map_err(|e| e.at(format!("item.taxes[{i}]"))))
            .collect::<Result<Vec<_>, _>>()?;
        self.taxes = taxes;
        Ok(())
    }
}

impl ItemCapability for Item {
    fn base(&self) -> &Item {
        self
    }

    fn base_mut(&mut self) -> &mut Item {
        self
    }
}

/// How an item's value splits across the sale categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleAmounts {
    pub non_subject: Amount,
    pub exempt: Amount,
    pub taxed: Amount,
    pub non_taxed: Amount,
}

impl SaleAmounts {
    pub fn taxed(amount: Amount) -> Self {
        Self {
            taxed: amount,
            ..Self::default()
        }
    }

    pub fn exempt(amount: Amount) -> Self {
        Self {
            exempt: amount,
            ..Self::default()
        }
    }

    pub fn non_subject(amount: Amount) -> Self {
        Self {
            non_subject: amount,
            ..Self::default()
        }
    }

    pub fn non_taxed(amount: Amount) -> Self {
        Self {
            non_taxed: amount,
            ..Self::default()
        }
    }

    /// Names of the categories holding a non-zero amount, in schema order.
    pub fn populated(&self) -> Vec<&'static str> {
        [
            ("non_subject", self.non_subject),
            ("exempt", self.exempt),
            ("taxed", self.taxed),
            ("non_taxed", self.non_taxed),
        ]
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Consumer invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    item: Item,
    sales: SaleAmounts,
    suggested_price: Amount,
    iva_item: Amount,
}

impl InvoiceItem {
    pub fn new(item: Item, sales: SaleAmounts) -> Self {
        Self {
            item,
            sales,
            suggested_price: Amount::ZERO,
            iva_item: Amount::ZERO,
        }
    }

    pub fn sales(&self) -> &SaleAmounts {
        &self.sales
    }

    pub fn set_sales(&mut self, sales: SaleAmounts) {
        self.sales = sales;
    }

    required!(copy suggested_price: Amount, set_suggested_price, set_suggested_price_raw(Decimal) = Amount::new, "item.suggested_price");
    required!(copy iva_item: Amount, set_iva_item, set_iva_item_raw(Decimal) = Amount::new, "item.iva_item");
}

/// Fiscal-credit voucher line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcfItem {
    item: Item,
    sales: SaleAmounts,
    suggested_price: Amount,
}

impl CcfItem {
    pub fn new(item: Item, sales: SaleAmounts) -> Self {
        Self {
            item,
            sales,
            suggested_price: Amount::ZERO,
        }
    }

    pub fn sales(&self) -> &SaleAmounts {
        &self.sales
    }

    pub fn set_sales(&mut self, sales: SaleAmounts) {
        self.sales = sales;
    }

    required!(copy suggested_price: Amount, set_suggested_price, set_suggested_price_raw(Decimal) = Amount::new, "item.suggested_price");
}

/// Credit note line. Every line must reference a related document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteItem {
    item: Item,
    sales: SaleAmounts,
    suggested_price: Amount,
}

impl CreditNoteItem {
    pub fn new(item: Item, sales: SaleAmounts) -> Self {
        Self {
            item,
            sales,
            suggested_price: Amount::ZERO,
        }
    }

    pub fn sales(&self) -> &SaleAmounts {
        &self.sales
    }

    pub fn set_sales(&mut self, sales: SaleAmounts) {
        self.sales = sales;
    }

    required!(copy suggested_price: Amount, set_suggested_price, set_suggested_price_raw(Decimal) = Amount::new, "item.suggested_price");
}

macro_rules! sale_capability {
    ($($name:ident),+) => {$(
        impl ItemCapability for $name {
            fn base(&self) -> &Item {
                &self.item
            }

            fn base_mut(&mut self) -> &mut Item {
                &mut self.item
            }
        }

        impl SaleCapability for $name {
            fn sale_amounts(&self) -> &SaleAmounts {
                &self.sales
            }

            fn suggested_price(&self) -> Amount {
                self.suggested_price
            }
        }
    )+};
}

sale_capability!(InvoiceItem, CcfItem, CreditNoteItem);

/// Retention receipt line: IVA withheld on one related document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionItem {
    item: Item,
    retention_code: RetentionCode,
    taxed_amount: Amount,
    iva_retained: Amount,
    generation_type: RelatedGenerationType,
    document_number: DocumentReference,
    emission_date: EmissionDate,
}

impl RetentionItem {
    pub fn new(
        item: Item,
        retention_code: RetentionCode,
        taxed_amount: Amount,
        iva_retained: Amount,
        generation_type: RelatedGenerationType,
        document_number: DocumentReference,
        emission_date: EmissionDate,
    ) -> Self {
        Self {
            item,
            retention_code,
            taxed_amount,
            iva_retained,
            generation_type,
            document_number,
            emission_date,
        }
    }

    required!(copy retention_code: RetentionCode, set_retention_code, set_retention_code_raw(&str) = RetentionCode::new, "item.retention_code");
    required!(copy taxed_amount: Amount, set_taxed_amount, set_taxed_amount_raw(Decimal) = Amount::for_total, "item.taxed_amount");
    required!(copy iva_retained: Amount, set_iva_retained, set_iva_retained_raw(Decimal) = Amount::for_total, "item.iva_retained");
    required!(copy generation_type: RelatedGenerationType, set_generation_type, set_generation_type_raw(u8) = RelatedGenerationType::new, "item.generation_type");
    required!(ref document_number: DocumentReference, set_document_number, set_document_number_raw(&str) = DocumentReference::new, "item.document_number");
    required!(copy emission_date: EmissionDate, set_emission_date, set_emission_date_raw(&str) = EmissionDate::new, "item.emission_date");
}

impl ItemCapability for RetentionItem {
    fn base(&self) -> &Item {
        &self.item
    }

    fn base_mut(&mut self) -> &mut Item {
        &mut self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorCode;
    use rust_decimal_macros::dec;

    fn item() -> Item {
        Item::new(
            ItemNumber::new(1).unwrap(),
            ItemType::Goods,
            Description::new("Café molido 400g").unwrap(),
            Quantity::new(dec!(2)).unwrap(),
            UnitMeasure::new(59).unwrap(),
            Amount::new(dec!(3.49)).unwrap(),
        )
    }

    #[test]
    fn raw_setters_tag_the_field() {
        let mut item = item();
        let err = item.set_quantity_raw(dec!(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(err.field, "item.quantity");
        assert_eq!(item.quantity().value(), dec!(2));
    }

    #[test]
    fn tax_list_is_all_or_nothing() {
        let mut item = item();
        item.set_taxes_raw(&["20"]).unwrap();
        let err = item.set_taxes_raw(&["20", "x"]).unwrap_err();
        assert_eq!(err.field, "item.taxes[1]");
        assert_eq!(item.taxes(), &[TaxType::iva()]);
    }

    #[test]
    fn decorated_item_exposes_base() {
        let mut line = CreditNoteItem::new(item(), SaleAmounts::taxed(Amount::new(dec!(6.98)).unwrap()));
        line.base_mut().set_number_raw(7).unwrap();
        assert_eq!(line.base().number().value(), 7);
        assert_eq!(line.sale_amounts().populated(), vec!["taxed"]);
    }

    #[test]
    fn populated_categories_in_schema_order() {
        let sales = SaleAmounts {
            exempt: Amount::new(dec!(1)).unwrap(),
            non_subject: Amount::new(dec!(2)).unwrap(),
            ..SaleAmounts::default()
        };
        assert_eq!(sales.populated(), vec!["non_subject", "exempt"]);
    }
}
