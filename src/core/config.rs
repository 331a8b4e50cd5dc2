use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Catalog limits applied by the business-rule strategies.
///
/// Defaults follow the tax authority's published schema. Every field is
/// optional when deserializing; absent fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Maximum item lines per document.
    pub max_items: usize,
    /// Maximum related-document entries.
    pub max_related_documents: usize,
    /// Maximum other-document entries.
    pub max_other_documents: usize,
    /// Maximum appendix entries.
    pub max_appendix_entries: usize,
    /// Total operation amount from which the extension block is mandatory.
    pub extension_threshold: Decimal,
    /// Maximum length of a related-document number when not a UUID.
    pub related_document_number_max_len: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_items: 2000,
            max_related_documents: 50,
            max_other_documents: 10,
            max_appendix_entries: 10,
            extension_threshold: dec!(1095.00),
            related_document_number_max_len: 20,
        }
    }
}
