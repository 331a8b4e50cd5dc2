//! CAT-015 tax catalog.
//!
//! [`TaxType`] only checks the shape of a code; whether the authority
//! actually defines it is a business rule (see [`is_known_tax_code`]).

use serde::{Deserialize, Serialize};

use crate::core::{ErrorCode, FieldError};

/// IVA 13%, the only tax that applies to most lines.
pub const IVA_TAX_CODE: &str = "20";

/// Two-character tax code as referenced from items and summaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxType(String);

impl TaxType {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(FieldError::new(
                ErrorCode::InvalidCatalogCode,
                "tax_code",
                "two characters A-Z or 0-9",
                value,
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn iva() -> Self {
        Self(IVA_TAX_CODE.to_string())
    }

    /// Whether the tax catalog defines this code.
    pub fn is_known(&self) -> bool {
        is_known_tax_code(&self.0)
    }
}

text_value_object!(TaxType);

/// Check whether `code` is defined in the tax catalog.
pub fn is_known_tax_code(code: &str) -> bool {
    TAX_CODES.binary_search_by_key(&code, |&(c, _)| c).is_ok()
}

/// Catalog description of a tax code.
pub fn tax_description(code: &str) -> Option<&'static str> {
    TAX_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| TAX_CODES[i].1)
}

/// Sorted for binary search.
static TAX_CODES: &[(&str, &str)] = &[
    ("19", "Fabricante de bebidas gaseosas, isotónicas, deportivas, fortificantes, energizantes o estimulantes"),
    ("20", "Impuesto al Valor Agregado 13%"),
    ("28", "Importador de bebidas gaseosas, isotónicas, deportivas, fortificantes, energizantes o estimulantes"),
    ("31", "Detallistas o expendedores de bebidas alcohólicas"),
    ("32", "Fabricante de cerveza"),
    ("33", "Importador de cerveza"),
    ("34", "Fabricante de productos de tabaco"),
    ("35", "Importador de productos de tabaco"),
    ("36", "Fabricante de armas de fuego, municiones y artículos similares"),
    ("37", "Importador de armas de fuego, munición y artículos similares"),
    ("38", "Fabricante de explosivos"),
    ("39", "Importador de explosivos"),
    ("42", "Fabricante de productos pirotécnicos"),
    ("43", "Importador de productos pirotécnicos"),
    ("44", "Productor de tabaco"),
    ("50", "Distribuidor de bebidas gaseosas, isotónicas, deportivas, fortificantes, energizantes o estimulantes"),
    ("51", "Bebidas alcohólicas"),
    ("52", "Cerveza"),
    ("53", "Productos del tabaco"),
    ("54", "Bebidas carbonatadas o gaseosas simples o endulzadas"),
    ("55", "Otros específicos"),
    ("58", "Alcohol"),
    ("59", "Turismo: por alojamiento (5%)"),
    ("71", "Turismo: salida del país por vía aérea $7.00"),
    ("77", "Importador de jugos, néctares, bebidas con jugo y refrescos"),
    ("78", "Distribuidor de jugos, néctares, bebidas con jugo y refrescos"),
    ("79", "Sobre llamadas telefónicas provenientes del exterior"),
    ("85", "Detallista de jugos, néctares, bebidas con jugo y refrescos"),
    ("86", "Fabricante de preparaciones concentradas o en polvo para la elaboración de bebidas"),
    ("91", "Fabricante de jugos, néctares, bebidas con jugo y refrescos"),
    ("92", "Importador de preparaciones concentradas o en polvo para la elaboración de bebidas"),
    ("A1", "Específicos y ad-valorem"),
    ("A5", "Bebidas gaseosas, isotónicas, deportivas, fortificantes, energizantes o estimulantes"),
    ("A7", "Alcohol etílico"),
    ("A9", "Sacos sintéticos"),
    ("C3", "Impuesto ad-valorem sobre armas de fuego, municiones explosivas y artículos similares"),
    ("C5", "Impuesto ad-valorem por diferencial de precios de bebidas alcohólicas (8%)"),
    ("C6", "Impuesto ad-valorem por diferencial de precios al tabaco cigarrillos (39%)"),
    ("C7", "Impuesto ad-valorem por diferencial de precios al tabaco cigarros (100%)"),
    ("C8", "COTRANS ($0.10 por galón de combustible)"),
    ("D1", "FOVIAL ($0.20 por galón de combustible)"),
    ("D4", "Otras tasas casos especiales"),
    ("D5", "Otros impuestos casos especiales"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tax_codes() {
        assert!(is_known_tax_code("20"));
        assert!(is_known_tax_code("C8"));
        assert!(is_known_tax_code("D5"));
        assert!(TaxType::iva().is_known());
    }

    #[test]
    fn unknown_tax_codes() {
        assert!(!is_known_tax_code("21"));
        assert!(!is_known_tax_code(""));
        assert!(!TaxType::new("ZZ").unwrap().is_known());
    }

    #[test]
    fn tax_type_shape() {
        assert!(TaxType::new("c8").is_err());
        assert!(TaxType::new("200").is_err());
        assert_eq!(TaxType::new(" A1 ").unwrap().value(), "A1");
    }

    #[test]
    fn descriptions() {
        assert_eq!(tax_description("20"), Some("Impuesto al Valor Agregado 13%"));
        assert_eq!(tax_description("99"), None);
    }

    #[test]
    fn list_is_sorted() {
        for window in TAX_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "tax codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
